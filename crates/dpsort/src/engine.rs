use std::cmp::Ordering;

use crate::params::DELTA;
use crate::stats::SortStats;

/// Per-invocation context threaded through every phase of the sort: the
/// comparator, whether forking is allowed, and the optional stats handle.
pub(crate) struct Engine<'a, C> {
    pub cmp: &'a C,
    pub parallel: bool,
    pub stats: Option<&'a SortStats>,
}

// Manual impls: `C` itself is only held by reference.
impl<C> Clone for Engine<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for Engine<'_, C> {}

impl<'a, C> Engine<'a, C> {
    pub(crate) fn new(cmp: &'a C, parallel: bool, stats: Option<&'a SortStats>) -> Self {
        Self {
            cmp,
            parallel,
            stats,
        }
    }

    #[inline]
    pub(crate) fn less<T>(&self, x: &T, y: &T) -> bool
    where
        C: Fn(&T, &T) -> Ordering,
    {
        (self.cmp)(x, y) == Ordering::Less
    }

    #[inline]
    pub(crate) fn greater<T>(&self, x: &T, y: &T) -> bool
    where
        C: Fn(&T, &T) -> Ordering,
    {
        (self.cmp)(x, y) == Ordering::Greater
    }

    #[inline]
    pub(crate) fn equal<T>(&self, x: &T, y: &T) -> bool
    where
        C: Fn(&T, &T) -> Ordering,
    {
        (self.cmp)(x, y) == Ordering::Equal
    }
}

/// Recursion state of the adaptive kernel: the `DELTA`-scaled depth counter
/// plus whether the current range is the leftmost part of its parent chain.
///
/// `bits()` reproduces the packed counter the thresholds were tuned against
/// (depth in the high bits, non-leftmost parity in the low bit).
#[derive(Clone, Copy, Debug)]
pub(crate) struct Recursion {
    pub depth: usize,
    pub leftmost: bool,
}

impl Recursion {
    pub(crate) fn root() -> Self {
        Self {
            depth: 0,
            leftmost: true,
        }
    }

    #[inline]
    pub(crate) fn bits(self) -> usize {
        self.depth + usize::from(!self.leftmost)
    }

    /// One partitioning level down.
    #[inline]
    pub(crate) fn descend(&mut self) {
        self.depth += DELTA;
    }

    /// State for a non-leftmost sub-range at the current depth.
    #[inline]
    pub(crate) fn child(self) -> Self {
        Self {
            depth: self.depth,
            leftmost: false,
        }
    }
}
