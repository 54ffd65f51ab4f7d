//! Adaptive hybrid sort over `Copy` slices.
//!
//! The engine picks a strategy per range: plain or mixed insertion sort for
//! small parts, natural-run merging for structured data, dual-pivot
//! quicksort for ranges whose five samples are distinct, a single-pivot
//! three-way partition when the samples carry duplicates and heap sort as
//! the escape hatch when partitioning degenerates. With `parallelism > 1`
//! large inputs are additionally split over a fork-join merge tree on the
//! rayon pool.
//!
//! ```
//! let mut data = vec![5, 3, 3, 1, 4, 1];
//! dpsort::sort(&mut data, 1);
//! assert_eq!(data, [1, 1, 3, 3, 4, 5]);
//! ```

use std::cmp::Ordering;

mod engine;
mod heap;
mod insertion;
mod kernel;
mod merge;
mod parallel;
mod params;
mod partition;
mod runs;
mod stats;

pub use stats::SortStats;

use engine::{Engine, Recursion};
use params::{MAX_INSERTION_SORT_SIZE, MIN_PARALLEL_SORT_SIZE};

/// The strategies the engine chooses between, mostly useful for labeling
/// [`SortStats`] counters.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Strategy {
    Insertion,
    MixedInsertion,
    SortedRun,
    RunMerge,
    DualPivot,
    SinglePivot,
    Heap,
}

impl Strategy {
    pub const ALL: [Strategy; 7] = [
        Strategy::Insertion,
        Strategy::MixedInsertion,
        Strategy::SortedRun,
        Strategy::RunMerge,
        Strategy::DualPivot,
        Strategy::SinglePivot,
        Strategy::Heap,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Insertion => "insertion",
            Strategy::MixedInsertion => "mixed insertion",
            Strategy::SortedRun => "sorted run",
            Strategy::RunMerge => "run merge",
            Strategy::DualPivot => "dual pivot",
            Strategy::SinglePivot => "single pivot",
            Strategy::Heap => "heap",
        }
    }
}

impl SortStats {
    /// Counter value for one strategy.
    pub fn count(&self, strategy: Strategy) -> u64 {
        match strategy {
            Strategy::Insertion => self.insertion_sorts(),
            Strategy::MixedInsertion => self.mixed_insertion_sorts(),
            Strategy::SortedRun => self.sorted_run_detections(),
            Strategy::RunMerge => self.run_merges(),
            Strategy::DualPivot => self.dual_pivot_partitions(),
            Strategy::SinglePivot => self.single_pivot_partitions(),
            Strategy::Heap => self.heap_sorts(),
        }
    }
}

/// Sorts `data` in natural order. `parallelism` caps the fork-join width;
/// `1` keeps the sort on the calling thread.
pub fn sort<T>(data: &mut [T], parallelism: usize)
where
    T: Copy + Ord + Send + Sync,
{
    run(data, parallelism, &T::cmp, None);
}

/// Sorts `data` by a comparator.
///
/// The comparator must describe a total order that stays consistent for the
/// whole call. The sort is not stable: elements that compare equal may end
/// up in any mutual order.
pub fn sort_by<T, C>(data: &mut [T], parallelism: usize, cmp: C)
where
    T: Copy + Send + Sync,
    C: Fn(&T, &T) -> Ordering + Sync,
{
    run(data, parallelism, &cmp, None);
}

/// Like [`sort_by`], recording which strategies ran into `stats`.
pub fn sort_by_with_stats<T, C>(data: &mut [T], parallelism: usize, cmp: C, stats: &SortStats)
where
    T: Copy + Send + Sync,
    C: Fn(&T, &T) -> Ordering + Sync,
{
    run(data, parallelism, &cmp, Some(stats));
}

/// Copies `src` into `dst` and sorts it there, leaving `src` untouched.
pub fn sort_into<T>(src: &[T], dst: &mut Vec<T>, parallelism: usize)
where
    T: Copy + Ord + Send + Sync,
{
    dst.clear();
    dst.extend_from_slice(src);
    sort(dst, parallelism);
}

/// Comparator form of [`sort_into`].
pub fn sort_into_by<T, C>(src: &[T], dst: &mut Vec<T>, parallelism: usize, cmp: C)
where
    T: Copy + Send + Sync,
    C: Fn(&T, &T) -> Ordering + Sync,
{
    dst.clear();
    dst.extend_from_slice(src);
    sort_by(dst, parallelism, cmp);
}

fn run<T, C>(data: &mut [T], parallelism: usize, cmp: &C, stats: Option<&SortStats>)
where
    T: Copy + Send + Sync,
    C: Fn(&T, &T) -> Ordering + Sync,
{
    let n = data.len();
    if n < 2 {
        return;
    }

    if parallelism > 1 && n > MIN_PARALLEL_SORT_SIZE {
        let eng = Engine::new(cmp, true, stats);
        let mut scratch = vec![data[0]; n];
        let depth = parallel::split_depth(parallelism, n);
        parallel::depth_sort(data, &mut scratch, depth, eng);
    } else if n >= MAX_INSERTION_SORT_SIZE {
        // The kernel may take the run-merging path, which needs a full
        // length scratch buffer.
        let eng = Engine::new(cmp, false, stats);
        let mut scratch = vec![data[0]; n];
        kernel::sort(data, &mut scratch, Recursion::root(), eng);
    } else {
        let eng = Engine::new(cmp, false, stats);
        kernel::sort(data, &mut [], Recursion::root(), eng);
    }
}
