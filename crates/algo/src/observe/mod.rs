
/// Receives the steps of a merge sort as they happen.
///
/// `depth` is the recursion depth of the call that made the step; the
/// outermost call has depth 0.
pub trait SortObserver<R> {
	/// A slice was split at its midpoint.
	fn split(&mut self, _depth: usize, _left: &[R], _right: &[R]) {}

	/// The heads of two sorted halves were compared.
	///
	/// `took_left` is true when the left head was emitted, which includes ties.
	fn compare(&mut self, _depth: usize, _left: &R, _right: &R, _took_left: bool) {}

	/// Two sorted halves were merged.
	fn merged(&mut self, _depth: usize, _merged: &[R]) {}
}

impl<R> SortObserver<R> for () {}

/// Receives the probes of a binary search as they happen.
pub trait SearchObserver<R> {
	/// `record` at `mid` was compared with the target while the closed
	/// range `[low, high]` was still live.
	fn probe(&mut self, _low: usize, _high: usize, _mid: usize, _record: &R) {}

	/// The target matched the record at `index`.
	fn found(&mut self, _index: usize) {}

	/// The range emptied without a match; `insert_at` is where the target
	/// would keep the slice sorted.
	fn exhausted(&mut self, _insert_at: usize) {}
}

impl<R> SearchObserver<R> for () {}

/// One recorded merge sort step.
#[derive(Debug, Clone, PartialEq)]
pub enum SortStep<R> {
	/// A slice was split into two halves.
	Split {
		/// Recursion depth.
		depth: usize,
		/// Records of the left half.
		left: Vec<R>,
		/// Records of the right half.
		right: Vec<R>,
	},
	/// Two half heads were compared.
	Compare {
		/// Recursion depth.
		depth: usize,
		/// Head of the left half.
		left: R,
		/// Head of the right half.
		right: R,
		/// Whether the left head was taken.
		took_left: bool,
	},
	/// Two halves were merged.
	Merged {
		/// Recursion depth.
		depth: usize,
		/// The merged, sorted records.
		merged: Vec<R>,
	},
}

/// One recorded binary search step.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchStep<R> {
	/// The record at `mid` was compared with the target.
	Probe {
		/// Low end of the live range (inclusive).
		low: usize,
		/// High end of the live range (inclusive).
		high: usize,
		/// Probed index.
		mid: usize,
		/// Probed record.
		record: R,
	},
	/// The target was found.
	Found {
		/// Index of the match.
		index: usize,
	},
	/// The target is absent.
	Exhausted {
		/// Insertion point that keeps the slice sorted.
		insert_at: usize,
	},
}

/// Records sort and search steps as owned snapshots.
///
/// A single recorder can observe several operations; steps accumulate until
/// taken with [`Recorder::take_sort_steps`] or [`Recorder::take_search_steps`].
#[derive(Debug, Clone)]
pub struct Recorder<R> {
	sort_steps: Vec<SortStep<R>>,
	search_steps: Vec<SearchStep<R>>,
}

impl<R> Default for Recorder<R> {
	fn default() -> Self {
		Self {
			sort_steps: Vec::new(),
			search_steps: Vec::new(),
		}
	}
}

impl<R> Recorder<R> {
	/// Creates an empty recorder.
	pub fn new() -> Self {
		Self::default()
	}

	/// Recorded sort steps, oldest first.
	pub fn sort_steps(&self) -> &[SortStep<R>] {
		&self.sort_steps
	}

	/// Recorded search steps, oldest first.
	pub fn search_steps(&self) -> &[SearchStep<R>] {
		&self.search_steps
	}

	/// Number of key comparisons made by observed sorts.
	pub fn comparisons(&self) -> usize {
		self.sort_steps.iter().filter(|step| matches!(step, SortStep::Compare { .. })).count()
	}

	/// Number of probes made by observed searches.
	pub fn probes(&self) -> usize {
		self.search_steps.iter().filter(|step| matches!(step, SearchStep::Probe { .. })).count()
	}

	/// Removes and returns the recorded sort steps.
	pub fn take_sort_steps(&mut self) -> Vec<SortStep<R>> {
		std::mem::take(&mut self.sort_steps)
	}

	/// Removes and returns the recorded search steps.
	pub fn take_search_steps(&mut self) -> Vec<SearchStep<R>> {
		std::mem::take(&mut self.search_steps)
	}
}

impl<R: Clone> SortObserver<R> for Recorder<R> {
	fn split(&mut self, depth: usize, left: &[R], right: &[R]) {
		self.sort_steps.push(SortStep::Split {
			depth,
			left: left.to_vec(),
			right: right.to_vec(),
		});
	}

	fn compare(&mut self, depth: usize, left: &R, right: &R, took_left: bool) {
		self.sort_steps.push(SortStep::Compare {
			depth,
			left: left.clone(),
			right: right.clone(),
			took_left,
		});
	}

	fn merged(&mut self, depth: usize, merged: &[R]) {
		self.sort_steps.push(SortStep::Merged {
			depth,
			merged: merged.to_vec(),
		});
	}
}

impl<R: Clone> SearchObserver<R> for Recorder<R> {
	fn probe(&mut self, low: usize, high: usize, mid: usize, record: &R) {
		self.search_steps.push(SearchStep::Probe {
			low,
			high,
			mid,
			record: record.clone(),
		});
	}

	fn found(&mut self, index: usize) {
		self.search_steps.push(SearchStep::Found { index });
	}

	fn exhausted(&mut self, insert_at: usize) {
		self.search_steps.push(SearchStep::Exhausted { insert_at });
	}
}
