use std::cmp::Ordering;

use crate::engine::{Engine, Recursion};
use crate::heap;
use crate::insertion;
use crate::params::{
    MAX_INSERTION_SORT_SIZE, MAX_MIXED_INSERTION_SORT_SIZE, MAX_RECURSION_DEPTH,
    MIN_PARALLEL_SORT_SIZE, MIN_TRY_MERGE_SIZE,
};
use crate::partition;
use crate::runs;

/// Adaptive sort kernel. Picks insertion, run-merging, dual or single pivot
/// partitioning or heap sort per range, iterating on the leftmost part and
/// recursing on the others.
///
/// `scratch` must be as long as `a` whenever the range can reach the
/// run-merging path; the public drivers guarantee that.
pub(crate) fn sort<T, C>(
    mut a: &mut [T],
    mut scratch: &mut [T],
    mut rec: Recursion,
    eng: Engine<'_, C>,
) where
    T: Copy + Send + Sync,
    C: Fn(&T, &T) -> Ordering + Sync,
{
    loop {
        let size = a.len();

        // Non-leftmost parts get the mixed variant; their left neighbor
        // bounds them from below, which the pin window exploits. The
        // depth-dependent slack steers deep narrow ranges here too.
        if !rec.leftmost && size < MAX_MIXED_INSERTION_SORT_SIZE + rec.bits() {
            if let Some(stats) = eng.stats {
                stats.record_mixed_insertion();
            }
            let end = size - 3 * ((size >> 5) << 3);
            insertion::mixed_insertion_sort(a, end, eng);
            return;
        }

        if size < MAX_INSERTION_SORT_SIZE {
            if let Some(stats) = eng.stats {
                stats.record_insertion();
            }
            insertion::insertion_sort(a, eng);
            return;
        }

        // Probe for natural runs at the top level and on large non-leftmost
        // parts.
        if (rec.bits() == 0 || (size > MIN_TRY_MERGE_SIZE && !rec.leftmost))
            && runs::try_merge_runs(a, scratch, eng)
        {
            return;
        }

        rec.descend();
        if rec.bits() > MAX_RECURSION_DEPTH {
            if let Some(stats) = eng.stats {
                stats.record_heap();
            }
            heap::heap_sort(a, eng);
            return;
        }

        // Five samples at golden-ratio-ish spacing. The four-element sorting
        // network leaves a[e3] aside and inserts it afterwards.
        let end = size - 1;
        let step = (size >> 3) * 3 + 3;
        let e1 = step;
        let e5 = end - step;
        let e3 = (e1 + e5) >> 1;
        let e2 = (e1 + e3) >> 1;
        let e4 = (e3 + e5) >> 1;
        let a3 = a[e3];

        if eng.less(&a[e5], &a[e2]) {
            a.swap(e5, e2);
        }
        if eng.less(&a[e4], &a[e1]) {
            a.swap(e4, e1);
        }
        if eng.less(&a[e5], &a[e4]) {
            a.swap(e5, e4);
        }
        if eng.less(&a[e2], &a[e1]) {
            a.swap(e2, e1);
        }
        if eng.less(&a[e4], &a[e2]) {
            a.swap(e4, e2);
        }

        if eng.less(&a3, &a[e2]) {
            if eng.less(&a3, &a[e1]) {
                a[e3] = a[e2];
                a[e2] = a[e1];
                a[e1] = a3;
            } else {
                a[e3] = a[e2];
                a[e2] = a3;
            }
        } else if eng.greater(&a3, &a[e4]) {
            if eng.greater(&a3, &a[e5]) {
                a[e3] = a[e4];
                a[e4] = a[e5];
                a[e5] = a3;
            } else {
                a[e3] = a[e4];
                a[e4] = a3;
            }
        } else {
            a[e3] = a3;
        }

        let strictly_increasing = eng.less(&a[e1], &a[e2])
            && eng.less(&a[e2], &a[e3])
            && eng.less(&a[e3], &a[e4])
            && eng.less(&a[e4], &a[e5]);

        // Either way three disjoint sub-ranges remain: the part left of the
        // (first) pivot, a middle part and the part right of the last pivot
        // slot. For the single pivot the middle is the equal interval and
        // stays untouched.
        let (left_end, mid_start, right_start) = if strictly_increasing {
            // All five samples are distinct, use them as two pivots.
            if let Some(stats) = eng.stats {
                stats.record_dual_pivot();
            }
            let (lower, upper) = partition::dual_pivot(a, e1, e5, eng);
            (lower, lower + 1, upper)
        } else {
            // Duplicates among the samples hint at many equal elements, so
            // partition around the median into less/equal/greater.
            if let Some(stats) = eng.stats {
                stats.record_single_pivot();
            }
            let (lower, upper) = partition::single_pivot(a, e3, eng);
            (lower, upper, upper)
        };
        let right_skip = usize::from(strictly_increasing);

        let child = rec.child();
        let (a_left, a_tail) = a.split_at_mut(left_end);
        let (a_mid_full, a_tail) = a_tail.split_at_mut(right_start - left_end);
        let a_mid = &mut a_mid_full[mid_start - left_end..];
        let a_right = &mut a_tail[right_skip..];

        let (s_left, s_tail) = scratch.split_at_mut(left_end);
        let (s_mid_full, s_tail) = s_tail.split_at_mut(right_start - left_end);
        let s_mid = &mut s_mid_full[mid_start - left_end..];
        let s_right = &mut s_tail[right_skip..];

        if eng.parallel && size > MIN_PARALLEL_SORT_SIZE {
            rayon::join(
                || {
                    rayon::join(
                        || {
                            if !a_mid.is_empty() {
                                sort(a_mid, s_mid, child, eng);
                            }
                        },
                        || sort(a_right, s_right, child, eng),
                    )
                },
                || sort(a_left, s_left, rec, eng),
            );
            return;
        }

        if !a_mid.is_empty() {
            sort(a_mid, s_mid, child, eng);
        }
        sort(a_right, s_right, child, eng);
        a = a_left;
        scratch = s_left;
    }
}
