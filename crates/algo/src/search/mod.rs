use std::cmp::Ordering;

use shelf_primitives::{Field, Keyed, Result, Value};

use crate::observe::SearchObserver;


/// Binary search for `target` under `field`.
///
/// `records` must already be sorted ascending by `field` (for example by
/// [`merge_sort`](crate::merge_sort)); this is not checked, and an unsorted
/// slice gives unspecified but non-panicking results.
///
/// When several records share the target key, the index returned is
/// whichever one the bisection probes first, not necessarily the lowest.
/// Absence is `Ok(None)`.
///
/// # Errors
///
/// Fails with a [`KeyError`](shelf_primitives::KeyError) when a probed
/// record lacks `field` or its key cannot be ordered against `target`.
pub fn find_first<R: Keyed>(records: &[R], field: Field, target: &Value) -> Result<Option<usize>> {
	find_first_observed(records, field, target, &mut ())
}

/// Like [`find_first`], reporting every probe to `observer`.
pub fn find_first_observed<R, O>(records: &[R], field: Field, target: &Value, observer: &mut O) -> Result<Option<usize>>
where
	R: Keyed,
	O: SearchObserver<R> + ?Sized,
{
	let target = target.as_key();
	let mut low = 0;
	// One past the inclusive high bound, so an empty range never underflows.
	let mut end = records.len();

	while low < end {
		let high = end - 1;
		let mid = low + (high - low) / 2;
		let record = &records[mid];
		observer.probe(low, high, mid, record);

		match target.compare(&record.key(field)?, field)? {
			Ordering::Equal => {
				tracing::trace!(%field, %target, index = mid, "binary search hit");
				observer.found(mid);
				return Ok(Some(mid));
			}
			Ordering::Less => end = mid,
			Ordering::Greater => low = mid + 1,
		}
	}

	tracing::trace!(%field, %target, insert_at = low, "binary search miss");
	observer.exhausted(low);
	Ok(None)
}

/// Returns every record whose key under `field` equals `target`, with its index.
///
/// Scans the whole slice in order, so the result is in ascending index order
/// and no sortedness is required. No matches is an empty vector.
///
/// # Errors
///
/// Fails with a [`KeyError`](shelf_primitives::KeyError) when any record
/// lacks `field` or its key cannot be compared with `target`.
pub fn find_all<'a, R: Keyed>(records: &'a [R], field: Field, target: &Value) -> Result<Vec<(usize, &'a R)>> {
	let target = target.as_key();
	let mut matches = Vec::new();

	for (index, record) in records.iter().enumerate() {
		if record.key(field)?.compare(&target, field)? == Ordering::Equal {
			matches.push((index, record));
		}
	}

	tracing::trace!(%field, %target, hits = matches.len(), "linear search finished");
	Ok(matches)
}
