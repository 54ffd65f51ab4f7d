use std::cmp::Ordering;

use crate::engine::{Engine, Recursion};
use crate::kernel;
use crate::merge;

/// Number of halving levels for the fork-join tree, as a negative even
/// counter. Each level costs two so the buffer parity below stays fixed.
pub(crate) fn split_depth(mut parallelism: usize, mut size: usize) -> i32 {
    let mut depth = 0;
    loop {
        parallelism >>= 1;
        if parallelism == 0 {
            break;
        }
        size >>= 1;
        if size == 0 {
            break;
        }
        depth -= 2;
    }
    depth
}

/// Fork-join merge sort over the two buffers.
///
/// Levels alternate the roles of `a` and `b`; since `depth` rises by one per
/// level and leaves fire at `depth == 0` after an even climb, every leaf
/// sorts a piece of the caller's data buffer in place and every merge lands
/// its parent's result back where the parent expects it.
pub(crate) fn depth_sort<T, C>(a: &mut [T], b: &mut [T], depth: i32, eng: Engine<'_, C>)
where
    T: Copy + Send + Sync,
    C: Fn(&T, &T) -> Ordering + Sync,
{
    if depth >= 0 {
        kernel::sort(a, b, Recursion::root(), eng);
        return;
    }

    let half = a.len() >> 1;
    {
        let (a_lo, a_hi) = a.split_at_mut(half);
        let (b_lo, b_hi) = b.split_at_mut(half);
        rayon::join(
            || depth_sort(b_lo, a_lo, depth + 1, eng),
            || depth_sort(b_hi, a_hi, depth + 1, eng),
        );
    }
    let (b_lo, b_hi) = b.split_at(half);
    merge::par_merge_into(a, b_lo, b_hi, eng);
}
