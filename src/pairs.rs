//! Reassembling key/value pairs from a flat, alternating sequence

use core::iter::{Fuse, FusedIterator};

/// Pairs up consecutive items of `items`: `[k1, v1, k2, v2, ...]` becomes `[(k1, v1), (k2, v2), ...]`.
///
/// The input is consumed lazily, two items per pair. If the input has an odd length, the
/// trailing item is dropped.
pub fn by_two<I: IntoIterator>(items: I) -> ByTwo<I::IntoIter> {
    ByTwo {
        inner: items.into_iter().fuse(),
    }
}

/// Iterator returned by [`by_two`].
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct ByTwo<I> {
    inner: Fuse<I>,
}

impl<I: Iterator> Iterator for ByTwo<I> {
    type Item = (I::Item, I::Item);

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.inner.next()?;
        let value = self.inner.next()?;
        Some((key, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.inner.size_hint();
        (lower / 2, upper.map(|n| n / 2))
    }
}

impl<I: Iterator> FusedIterator for ByTwo<I> {}
