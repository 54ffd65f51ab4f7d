use std::cmp::Ordering;

use crate::engine::Engine;
use crate::params::MIN_PARALLEL_MERGE_PARTS_SIZE;

/// Merges two sorted slices into `dst`. Ties take from `left`, which keeps
/// the merge order deterministic for any consistent comparator.
pub(crate) fn merge_into<T, C>(dst: &mut [T], left: &[T], right: &[T], eng: Engine<'_, C>)
where
    T: Copy,
    C: Fn(&T, &T) -> Ordering,
{
    debug_assert_eq!(dst.len(), left.len() + right.len());

    let mut i = 0;
    let mut j = 0;
    let mut k = 0;
    while i < left.len() && j < right.len() {
        if eng.less(&right[j], &left[i]) {
            dst[k] = right[j];
            j += 1;
        } else {
            dst[k] = left[i];
            i += 1;
        }
        k += 1;
    }
    if i < left.len() {
        dst[k..].copy_from_slice(&left[i..]);
    } else if j < right.len() {
        dst[k..].copy_from_slice(&right[j..]);
    }
}

/// Merges `left` with the sorted tail `dst[left.len()..]`, writing the
/// result over all of `dst`.
///
/// Safe despite the overlap: the write cursor `k` never passes the read
/// cursor `j` into the tail, so no tail element is clobbered before it is
/// consumed.
pub(crate) fn merge_left_into<T, C>(dst: &mut [T], left: &[T], eng: Engine<'_, C>)
where
    T: Copy,
    C: Fn(&T, &T) -> Ordering,
{
    let mut i = 0;
    let mut j = left.len();
    let mut k = 0;
    while i < left.len() && j < dst.len() {
        if eng.less(&dst[j], &left[i]) {
            dst[k] = dst[j];
            j += 1;
        } else {
            dst[k] = left[i];
            i += 1;
        }
        k += 1;
    }
    while i < left.len() {
        dst[k] = left[i];
        k += 1;
        i += 1;
    }
    // Any remaining tail elements are already in their final slots.
}

/// Parallel merge: splits the larger part at its midpoint, binary searches
/// the split key in the smaller part and merges the two halves in forked
/// tasks. Falls back to the sequential merge below the size threshold.
pub(crate) fn par_merge_into<T, C>(dst: &mut [T], left: &[T], right: &[T], eng: Engine<'_, C>)
where
    T: Copy + Send + Sync,
    C: Fn(&T, &T) -> Ordering + Sync,
{
    let (big, small, big_is_left) = if left.len() >= right.len() {
        (left, right, true)
    } else {
        (right, left, false)
    };

    if big.len() < MIN_PARALLEL_MERGE_PARTS_SIZE {
        merge_into(dst, left, right, eng);
        return;
    }

    let mi1 = big.len() >> 1;
    let key = &big[mi1];
    let mi2 = small.partition_point(|x| eng.less(x, key));

    let (big_lo, big_hi) = big.split_at(mi1);
    let (small_lo, small_hi) = small.split_at(mi2);
    let (dst_lo, dst_hi) = dst.split_at_mut(mi1 + mi2);

    let (left_lo, right_lo, left_hi, right_hi) = if big_is_left {
        (big_lo, small_lo, big_hi, small_hi)
    } else {
        (small_lo, big_lo, small_hi, big_hi)
    };

    rayon::join(
        || par_merge_into(dst_lo, left_lo, right_lo, eng),
        || par_merge_into(dst_hi, left_hi, right_hi, eng),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn natural(x: &u64, y: &u64) -> Ordering {
        x.cmp(y)
    }

    fn eng() -> Engine<'static, fn(&u64, &u64) -> Ordering> {
        static CMP: fn(&u64, &u64) -> Ordering = natural;
        Engine::new(&CMP, false, None)
    }

    #[test]
    fn merge_into_interleaved() {
        let left = [1, 4, 4, 9];
        let right = [2, 4, 8, 10, 11];
        let mut dst = [0; 9];
        merge_into(&mut dst, &left, &right, eng());
        assert_eq!(dst, [1, 2, 4, 4, 4, 8, 9, 10, 11]);
    }

    #[test]
    fn merge_into_disjoint() {
        let left = [6, 7, 8];
        let right = [1, 2, 3];
        let mut dst = [0; 6];
        merge_into(&mut dst, &left, &right, eng());
        assert_eq!(dst, [1, 2, 3, 6, 7, 8]);
    }

    #[test]
    fn merge_left_into_overlapping_tail() {
        let left = [2, 5, 9];
        let mut dst = [0, 0, 0, 1, 3, 5, 7];
        merge_left_into(&mut dst, &left, eng());
        assert_eq!(dst, [1, 2, 3, 5, 5, 7, 9]);
    }

    #[test]
    fn merge_left_into_tail_already_placed() {
        let left = [1, 2];
        let mut dst = [0, 0, 3, 4];
        merge_left_into(&mut dst, &left, eng());
        assert_eq!(dst, [1, 2, 3, 4]);
    }

    #[test]
    fn par_merge_matches_sequential() {
        let left: Vec<u64> = (0..9000).map(|i| i * 2).collect();
        let right: Vec<u64> = (0..7000).map(|i| i * 3).collect();
        let mut seq = vec![0; left.len() + right.len()];
        let mut par = vec![0; left.len() + right.len()];
        merge_into(&mut seq, &left, &right, eng());
        par_merge_into(&mut par, &left, &right, eng());
        assert_eq!(seq, par);
    }
}
