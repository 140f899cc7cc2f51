//! Sorting and searching over keyed records.
//!
//! All operations are pure: they read records through
//! [`Keyed`](shelf_primitives::Keyed), never mutate their input, and return
//! new vectors or indices into the caller's slice.
//!
//! - [`merge_sort`]: stable top-down merge sort by a [`Field`](shelf_primitives::Field).
//! - [`find_first`]: binary search over a slice already sorted by the same field.
//! - [`find_all`]: linear scan returning every match with its index.
//!
//! The `_observed` variants report each split, comparison and probe to an
//! observer (see [`observe`]); passing `&mut ()` observes nothing.

/// Step observers and the step recorder.
pub mod observe;
/// Binary and linear search.
pub mod search;
/// Merge sort and sortedness checks.
pub mod sort;

// Only the benchmark target uses criterion.
#[cfg(test)]
use criterion as _;

pub use observe::{Recorder, SearchObserver, SearchStep, SortObserver, SortStep};
pub use search::{find_all, find_first, find_first_observed};
pub use sort::{is_sorted_by, merge_sort, merge_sort_observed};
