//! Tuning thresholds of the adaptive engine.
//!
//! The values are load-bearing: algorithm selection, the heap-sort escape
//! hatch and the run-detection bail heuristics all key off them, and the
//! tests pin behavior against them.

/// Recursion cost added per partitioning level.
pub(crate) const DELTA: usize = 6;

/// Once the scaled depth counter exceeds this, the kernel switches to heap
/// sort to bound worst-case blow-up.
pub(crate) const MAX_RECURSION_DEPTH: usize = 64 * DELTA;

/// Upper size bound (plus the depth counter) for the mixed simple/pin/pair
/// insertion sort on non-leftmost parts.
pub(crate) const MAX_MIXED_INSERTION_SORT_SIZE: usize = 65;

/// Upper size bound for plain insertion sort.
pub(crate) const MAX_INSERTION_SORT_SIZE: usize = 44;

/// Non-leftmost parts larger than this probe for natural runs before
/// partitioning.
pub(crate) const MIN_TRY_MERGE_SIZE: usize = 4 << 10;

/// Run detection gives up when the first run is shorter than this.
pub(crate) const MIN_FIRST_RUN_SIZE: usize = 16;

/// Run detection gives up when more than `scanned >> MIN_FIRST_RUNS_FACTOR`
/// runs have been found, i.e. the data is not structured enough.
pub(crate) const MIN_FIRST_RUNS_FACTOR: usize = 7;

/// Hard cap on the number of recorded runs.
pub(crate) const MAX_RUN_CAPACITY: usize = 5 << 10;

/// The run merger forks its right half only while more than this many runs
/// remain.
pub(crate) const MIN_RUN_COUNT: usize = 4;

/// The parallel merger splits only while the larger part is at least this
/// big.
pub(crate) const MIN_PARALLEL_MERGE_PARTS_SIZE: usize = 4 << 10;

/// Ranges at most this big are never forked.
pub(crate) const MIN_PARALLEL_SORT_SIZE: usize = 4 << 10;
