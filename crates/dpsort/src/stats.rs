use std::sync::atomic::{AtomicU64, Ordering};

/// Counters describing which paths a sort invocation took.
///
/// The counters are relaxed atomics so parallel tasks can share one handle;
/// pass a fresh instance to [`crate::sort_by_with_stats`] and read it after
/// the call returns. Counting costs one atomic add per selected path, not
/// per element.
#[derive(Debug, Default)]
pub struct SortStats {
    insertion_sorts: AtomicU64,
    mixed_insertion_sorts: AtomicU64,
    sorted_run_detections: AtomicU64,
    run_merges: AtomicU64,
    dual_pivot_partitions: AtomicU64,
    single_pivot_partitions: AtomicU64,
    heap_sorts: AtomicU64,
}

macro_rules! counter {
    ($get:ident, $record:ident) => {
        pub fn $get(&self) -> u64 {
            self.$get.load(Ordering::Relaxed)
        }

        pub(crate) fn $record(&self) {
            self.$get.fetch_add(1, Ordering::Relaxed);
        }
    };
}

impl SortStats {
    pub fn new() -> Self {
        Self::default()
    }

    counter!(insertion_sorts, record_insertion);
    counter!(mixed_insertion_sorts, record_mixed_insertion);
    counter!(sorted_run_detections, record_sorted_run);
    counter!(run_merges, record_run_merge);
    counter!(dual_pivot_partitions, record_dual_pivot);
    counter!(single_pivot_partitions, record_single_pivot);
    counter!(heap_sorts, record_heap);
}
