use std::cmp::Ordering;

use shelf_primitives::{Field, Keyed, Result};

use crate::observe::SortObserver;


/// Returns a copy of `records` sorted ascending by `field`.
///
/// The sort is stable: records with equal keys keep their input order. The
/// input slice is left untouched.
///
/// # Errors
///
/// Returns [`KeyError::MissingField`](shelf_primitives::KeyError::MissingField)
/// if a compared record lacks `field`, or
/// [`KeyError::Comparison`](shelf_primitives::KeyError::Comparison) if two
/// keys are not mutually orderable. Slices of length 0 or 1 are never
/// inspected and cannot fail.
pub fn merge_sort<R: Keyed + Clone>(records: &[R], field: Field) -> Result<Vec<R>> {
	merge_sort_observed(records, field, &mut ())
}

/// Like [`merge_sort`], reporting every split, comparison and merge to `observer`.
pub fn merge_sort_observed<R, O>(records: &[R], field: Field, observer: &mut O) -> Result<Vec<R>>
where
	R: Keyed + Clone,
	O: SortObserver<R> + ?Sized,
{
	let sorted = sort_slice(records, field, 0, observer)?;
	tracing::debug!(%field, len = records.len(), "merge sort finished");
	Ok(sorted)
}

fn sort_slice<R, O>(records: &[R], field: Field, depth: usize, observer: &mut O) -> Result<Vec<R>>
where
	R: Keyed + Clone,
	O: SortObserver<R> + ?Sized,
{
	if records.len() <= 1 {
		return Ok(records.to_vec());
	}

	let (left, right) = records.split_at(records.len() / 2);
	observer.split(depth, left, right);

	let left = sort_slice(left, field, depth + 1, observer)?;
	let right = sort_slice(right, field, depth + 1, observer)?;
	merge(left, right, field, depth, observer)
}

fn merge<R, O>(left: Vec<R>, right: Vec<R>, field: Field, depth: usize, observer: &mut O) -> Result<Vec<R>>
where
	R: Keyed,
	O: SortObserver<R> + ?Sized,
{
	let mut merged = Vec::with_capacity(left.len() + right.len());
	let mut left = left.into_iter().peekable();
	let mut right = right.into_iter().peekable();

	while let (Some(l), Some(r)) = (left.peek(), right.peek()) {
		// Ties go left, which is what keeps the sort stable.
		let took_left = l.key(field)?.compare(&r.key(field)?, field)? != Ordering::Greater;
		observer.compare(depth, l, r, took_left);

		let next = if took_left { left.next() } else { right.next() };
		merged.extend(next);
	}

	merged.extend(left);
	merged.extend(right);
	observer.merged(depth, &merged);
	Ok(merged)
}

/// Returns true if every adjacent pair of `records` is non-decreasing under `field`.
///
/// Binary search does not call this; it is for callers that want to check
/// the precondition themselves.
pub fn is_sorted_by<R: Keyed>(records: &[R], field: Field) -> Result<bool> {
	for pair in records.windows(2) {
		if pair[0].key(field)?.compare(&pair[1].key(field)?, field)? == Ordering::Greater {
			return Ok(false);
		}
	}
	Ok(true)
}
