use std::cmp::Ordering;

use crate::engine::Engine;

/// Escape hatch for ranges whose partitioning depth ran out. O(n log n)
/// regardless of input shape.
pub(crate) fn heap_sort<T, C>(a: &mut [T], eng: Engine<'_, C>)
where
    T: Copy,
    C: Fn(&T, &T) -> Ordering,
{
    let len = a.len();
    if len < 2 {
        return;
    }

    let mut start = (len - 2) / 2;
    loop {
        sift_down(a, start, len, eng);
        if start == 0 {
            break;
        }
        start -= 1;
    }

    let mut end = len - 1;
    while end > 0 {
        a.swap(0, end);
        sift_down(a, 0, end, eng);
        end -= 1;
    }
}

#[inline]
fn sift_down<T, C>(a: &mut [T], mut root: usize, end: usize, eng: Engine<'_, C>)
where
    T: Copy,
    C: Fn(&T, &T) -> Ordering,
{
    loop {
        let child = root * 2 + 1;
        if child >= end {
            break;
        }

        let mut swap_idx = child;
        if child + 1 < end && eng.less(&a[child], &a[child + 1]) {
            swap_idx = child + 1;
        }

        if !eng.less(&a[root], &a[swap_idx]) {
            break;
        }

        a.swap(root, swap_idx);
        root = swap_idx;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn natural(x: &u64, y: &u64) -> Ordering {
        x.cmp(y)
    }

    fn check(mut data: Vec<u64>) {
        let mut expected = data.clone();
        expected.sort_unstable();
        heap_sort(&mut data, Engine::new(&natural, false, None));
        assert_eq!(data, expected);
    }

    #[test]
    fn heap_sort_edge_cases() {
        check(vec![]);
        check(vec![1]);
        check(vec![2, 1]);
        check(vec![7; 64]);
        check((0..257).rev().collect());
    }

    #[test]
    fn heap_sort_pseudorandom() {
        check((0..1000).map(|i: u64| i.wrapping_mul(0x9E37_79B9).rotate_left(11)).collect());
    }
}
