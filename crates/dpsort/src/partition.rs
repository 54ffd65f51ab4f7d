use std::cmp::Ordering;

use crate::engine::Engine;

/// Partitions `a` around the pivots at `e1` and `e5` into three intervals
/// and returns `(lower, upper)`, the final pivot positions.
///
/// Afterwards `a[..lower]` holds elements less than pivot1, `a[lower]` the
/// first pivot, `a[lower + 1..upper]` the middle interval, `a[upper]` the
/// second pivot and `a[upper + 1..]` elements greater than pivot2. Callers
/// must ensure `a[e1] < a[e5]`.
pub(crate) fn dual_pivot<T, C>(a: &mut [T], e1: usize, e5: usize, eng: Engine<'_, C>) -> (usize, usize)
where
    T: Copy,
    C: Fn(&T, &T) -> Ordering,
{
    let end = a.len() - 1;
    let pivot1 = a[e1];
    let pivot2 = a[e5];

    // The first and last elements move to the pivot slots and are sorted
    // back as part of the left and right intervals.
    a[e1] = a[0];
    a[e5] = a[end];

    // Skip elements already in place. Slots 0 and end are vacated by the
    // stash above, so the scans probe 1..=e2 and e4..=end-1; the samples at
    // e2 and e4 stop them at the latest.
    let mut lower = 0;
    loop {
        lower += 1;
        if !eng.less(&a[lower], &pivot1) {
            break;
        }
    }
    lower -= 1;

    let mut upper = end;
    loop {
        upper -= 1;
        if !eng.greater(&a[upper], &pivot2) {
            break;
        }
    }
    upper += 1;

    // Backward scan over the unknown interval.
    let mut k = upper;
    while k > lower + 1 {
        k -= 1;
        let ak = a[k];

        if eng.less(&ak, &pivot1) {
            // Find the first element from the left that belongs elsewhere
            // and trade places with it.
            while lower < k {
                lower += 1;
                if !eng.less(&a[lower], &pivot1) {
                    if eng.greater(&a[lower], &pivot2) {
                        upper -= 1;
                        a[k] = a[upper];
                        a[upper] = a[lower];
                    } else {
                        a[k] = a[lower];
                    }
                    a[lower] = ak;
                    break;
                }
            }
        } else if eng.greater(&ak, &pivot2) {
            upper -= 1;
            a[k] = a[upper];
            a[upper] = ak;
        }
    }

    a[0] = a[lower];
    a[lower] = pivot1;
    a[end] = a[upper];
    a[upper] = pivot2;

    (lower, upper)
}

/// Dutch-flag partition around the single pivot at `e3`, used when the five
/// samples carry duplicates. Returns `(lower, upper)`: `a[..lower]` is less
/// than the pivot, `a[lower..upper]` equal to it and `a[upper..]` greater.
pub(crate) fn single_pivot<T, C>(a: &mut [T], e3: usize, eng: Engine<'_, C>) -> (usize, usize)
where
    T: Copy,
    C: Fn(&T, &T) -> Ordering,
{
    let end = a.len() - 1;
    let pivot = a[e3];
    a[e3] = a[0];

    let mut lower = 0;
    let mut upper = end + 1;

    let mut k = upper;
    while k > lower + 1 {
        k -= 1;
        if eng.equal(&a[k], &pivot) {
            continue;
        }
        let ak = a[k];

        if eng.less(&ak, &pivot) {
            // Trade with the first element from the left that belongs
            // elsewhere; when everything up to k is smaller, ak is already
            // in place and lower catches up to it.
            while lower < k {
                lower += 1;
                if !eng.less(&a[lower], &pivot) {
                    if eng.greater(&a[lower], &pivot) {
                        upper -= 1;
                        a[k] = a[upper];
                        a[upper] = a[lower];
                    } else {
                        a[k] = a[lower];
                    }
                    a[lower] = ak;
                    break;
                }
            }
        } else {
            upper -= 1;
            a[k] = a[upper];
            a[upper] = ak;
        }
    }

    a[0] = a[lower];
    a[lower] = pivot;

    (lower, upper)
}
