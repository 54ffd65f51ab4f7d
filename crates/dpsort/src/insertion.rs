use std::cmp::Ordering;

use crate::engine::Engine;

/// Plain insertion sort for the smallest ranges.
pub(crate) fn insertion_sort<T, C>(a: &mut [T], eng: Engine<'_, C>)
where
    T: Copy,
    C: Fn(&T, &T) -> Ordering,
{
    let len = a.len();
    if len < 2 {
        return;
    }

    for i in 1..len {
        let key = a[i];
        let mut j = i;
        while j > 0 && eng.less(&key, &a[j - 1]) {
            a[j] = a[j - 1];
            j -= 1;
        }
        a[j] = key;
    }
}

/// Mixed insertion sort for small non-leftmost parts.
///
/// The window `[end, len)` is cleared first: elements greater than the pin
/// `a[end]` are parked behind it while the prefix is insertion sorted, then
/// the remainder is inserted two elements at a time. With `end == len` the
/// window is empty and this degrades to plain insertion sort.
pub(crate) fn mixed_insertion_sort<T, C>(a: &mut [T], end: usize, eng: Engine<'_, C>)
where
    T: Copy,
    C: Fn(&T, &T) -> Ordering,
{
    let high = a.len();
    if end == high {
        insertion_sort(a, eng);
        return;
    }

    let pin = a[end];
    let mut p = high;

    let mut i = 1;
    while i < end {
        let ai = a[i];

        if eng.less(&ai, &a[i - 1]) {
            // Small element, sift it down the sorted prefix.
            a[i] = a[i - 1];
            let mut j = i - 1;
            while j > 0 && eng.less(&ai, &a[j - 1]) {
                a[j] = a[j - 1];
                j -= 1;
            }
            a[j] = ai;
        } else if p > i && eng.greater(&ai, &pin) {
            // Large element, park it behind the pin and adopt whatever was
            // displaced.
            p -= 1;
            while p > i && eng.greater(&a[p], &pin) {
                p -= 1;
            }

            let mut v = ai;
            if p > i {
                v = a[p];
                a[p] = ai;
            }

            let mut j = i;
            while j > 0 && eng.less(&v, &a[j - 1]) {
                a[j] = a[j - 1];
                j -= 1;
            }
            a[j] = v;
        }

        i += 1;
    }

    // Pair insertion of the remaining window; its length is a multiple of
    // two by construction of `end`.
    let mut i = end;
    while i < high {
        let a1 = a[i];
        let a2 = a[i + 1];

        if eng.greater(&a1, &a2) {
            let mut j = i;
            while j > 0 && eng.less(&a1, &a[j - 1]) {
                a[j + 1] = a[j - 1];
                j -= 1;
            }
            a[j + 1] = a1;
            while j > 0 && eng.less(&a2, &a[j - 1]) {
                a[j] = a[j - 1];
                j -= 1;
            }
            a[j] = a2;
        } else if i > 0 && eng.less(&a1, &a[i - 1]) {
            let mut j = i;
            while j > 0 && eng.less(&a2, &a[j - 1]) {
                a[j + 1] = a[j - 1];
                j -= 1;
            }
            a[j + 1] = a2;
            while j > 0 && eng.less(&a1, &a[j - 1]) {
                a[j] = a[j - 1];
                j -= 1;
            }
            a[j] = a1;
        }

        i += 2;
    }
}
