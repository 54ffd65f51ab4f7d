use std::cmp::Ordering;

use crate::engine::Engine;
use crate::merge;
use crate::params::{
    MAX_RUN_CAPACITY, MIN_FIRST_RUNS_FACTOR, MIN_FIRST_RUN_SIZE, MIN_RUN_COUNT,
};

/// Which buffer a merge level left its result in.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Target {
    Data,
    Scratch,
}

/// Probes `a` for natural runs and, if the range looks structured enough,
/// sorts it by merging them. Returns `true` when the range is sorted on
/// return and `false` when the caller should partition instead.
///
/// Bails when the first run is too short, when runs come in faster than
/// one per `1 << MIN_FIRST_RUNS_FACTOR` scanned elements, or when the run
/// table would overflow. A bail leaves a valid permutation, not the input
/// order: descending runs seen before it stay reversed.
pub(crate) fn try_merge_runs<T, C>(a: &mut [T], scratch: &mut [T], eng: Engine<'_, C>) -> bool
where
    T: Copy + Send + Sync,
    C: Fn(&T, &T) -> Ordering + Sync,
{
    let high = a.len();
    let mut runs: Vec<usize> = Vec::new();
    let mut last = 0;

    let mut k = 1;
    while k < high {
        if eng.less(&a[k - 1], &a[k]) {
            // Ascending run.
            k += 1;
            while k < high && !eng.greater(&a[k - 1], &a[k]) {
                k += 1;
            }
        } else if eng.greater(&a[k - 1], &a[k]) {
            // Descending run, reversed in place.
            k += 1;
            while k < high && !eng.less(&a[k - 1], &a[k]) {
                k += 1;
            }
            a[last..k].reverse();
        } else {
            // Constant sequence; fold it into the neighboring runs.
            let ak = a[k];
            k += 1;
            while k < high && eng.equal(&ak, &a[k]) {
                k += 1;
            }
            if k < high {
                continue;
            }
        }

        if runs.is_empty() {
            if k == high {
                if let Some(stats) = eng.stats {
                    stats.record_sorted_run();
                }
                return true;
            }
            if k < MIN_FIRST_RUN_SIZE {
                return false;
            }
            runs = Vec::with_capacity(((high >> 10) | 0x7F) & 0x3FF);
            runs.push(0);
            runs.push(k);
        } else if eng.greater(&a[last - 1], &a[last]) {
            let count = runs.len() - 1;
            if count > (k >> MIN_FIRST_RUNS_FACTOR) {
                // The range is not highly structured, partition instead.
                return false;
            }
            if count + 1 == MAX_RUN_CAPACITY {
                return false;
            }
            runs.push(k);
        } else if let Some(end) = runs.last_mut() {
            // The previous run continues across the reversal boundary.
            *end = k;
        }

        last = k;
    }

    if runs.len() > 2 {
        if let Some(stats) = eng.stats {
            stats.record_run_merge();
        }
        let target = merge_runs(a, scratch, &runs, 0, 1, eng.parallel, eng);
        debug_assert_eq!(target, Target::Data);
    } else if let Some(stats) = eng.stats {
        stats.record_sorted_run();
    }
    true
}

/// Merges `runs[..]` pairwise bottom-up and reports which buffer holds the
/// result. `aim > 0` forces the result into `data`, `aim < 0` into
/// `scratch`, `aim == 0` lets the cheaper side win.
fn merge_runs<T, C>(
    data: &mut [T],
    scratch: &mut [T],
    runs: &[usize],
    base: usize,
    aim: i32,
    parallel: bool,
    eng: Engine<'_, C>,
) -> Target
where
    T: Copy + Send + Sync,
    C: Fn(&T, &T) -> Ordering + Sync,
{
    let count = runs.len() - 1;
    if count == 1 {
        if aim >= 0 {
            return Target::Data;
        }
        scratch.copy_from_slice(data);
        return Target::Scratch;
    }

    // Split the run table near the midpoint of the covered range.
    let rmi = (runs[0] + runs[count]) >> 1;
    let mut mi = 1;
    while runs[mi + 1] <= rmi {
        mi += 1;
    }
    let split = runs[mi] - base;

    let (t1, t2) = {
        let (data_lo, data_hi) = data.split_at_mut(split);
        let (scratch_lo, scratch_hi) = scratch.split_at_mut(split);
        let left_runs = &runs[..=mi];
        let right_runs = &runs[mi..];

        if parallel && count > MIN_RUN_COUNT {
            rayon::join(
                || merge_runs(data_lo, scratch_lo, left_runs, base, -aim, true, eng),
                || merge_runs(data_hi, scratch_hi, right_runs, runs[mi], 0, true, eng),
            )
        } else {
            (
                merge_runs(data_lo, scratch_lo, left_runs, base, -aim, false, eng),
                merge_runs(data_hi, scratch_hi, right_runs, runs[mi], 0, false, eng),
            )
        }
    };

    match (t1, t2) {
        (Target::Data, Target::Data) => {
            let (data_lo, data_hi) = data.split_at(split);
            if parallel {
                merge::par_merge_into(scratch, data_lo, data_hi, eng);
            } else {
                merge::merge_into(scratch, data_lo, data_hi, eng);
            }
            Target::Scratch
        }
        (Target::Scratch, Target::Scratch) => {
            let (scratch_lo, scratch_hi) = scratch.split_at(split);
            if parallel {
                merge::par_merge_into(data, scratch_lo, scratch_hi, eng);
            } else {
                merge::merge_into(data, scratch_lo, scratch_hi, eng);
            }
            Target::Data
        }
        (Target::Data, Target::Scratch) => {
            // The right half already sits in the scratch tail.
            merge::merge_left_into(scratch, &data[..split], eng);
            Target::Scratch
        }
        (Target::Scratch, Target::Data) => {
            merge::merge_left_into(data, &scratch[..split], eng);
            Target::Data
        }
    }
}
