//! Erasure over array-like storage.
//!
//! Calling `remove(i)` once per match would shift the tail of the container each time. Instead, a single forward
//! pass swaps every kept element down to the end of the kept prefix (a stable partition) and the container is then
//! truncated, so the whole sweep is linear no matter how many elements match.

use super::*;
use alloc::collections::VecDeque;

/// Array-like storage whose elements can be addressed, swapped and dropped by position.
///
/// Implement this (along with [`Erasable`] with `Category = Contiguous`) to make your own contiguous container
/// usable with [`erase`] and friends.
pub trait Positional {
    /// The type of element stored.
    type Item;

    /// The number of elements stored.
    fn len(&self) -> usize;

    /// Borrow the element at `index`. The index is always less than [`Positional::len`].
    fn at(&self, index: usize) -> &Self::Item;

    /// Swap the elements at two positions.
    fn swap(&mut self, a: usize, b: usize);

    /// Drop every element from position `len` onwards.
    fn truncate(&mut self, len: usize);

    /// Drop the elements within `span`, shifting later elements down to close the gap.
    fn remove_span(&mut self, span: Range<usize>);
}

impl<T> Positional for Vec<T> {
    type Item = T;

    #[inline(always)]
    fn len(&self) -> usize {
        Vec::len(self)
    }
    #[inline(always)]
    fn at(&self, index: usize) -> &T {
        &self[index]
    }
    #[inline(always)]
    fn swap(&mut self, a: usize, b: usize) {
        self.as_mut_slice().swap(a, b)
    }
    #[inline(always)]
    fn truncate(&mut self, len: usize) {
        Vec::truncate(self, len)
    }
    fn remove_span(&mut self, span: Range<usize>) {
        self.drain(span);
    }
}

impl<T> Positional for VecDeque<T> {
    type Item = T;

    #[inline(always)]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }
    #[inline(always)]
    fn at(&self, index: usize) -> &T {
        &self[index]
    }
    #[inline(always)]
    fn swap(&mut self, a: usize, b: usize) {
        VecDeque::swap(self, a, b)
    }
    #[inline(always)]
    fn truncate(&mut self, len: usize) {
        VecDeque::truncate(self, len)
    }
    fn remove_span(&mut self, span: Range<usize>) {
        self.drain(span);
    }
}

impl<T> Erasable for Vec<T> {
    type Category = Contiguous;
}

impl<T> Erasable for VecDeque<T> {
    type Category = Contiguous;
}

/// The state of a partition in progress.
///
/// Everything in `..kept` is kept, everything in `kept..visited` matched and everything from `visited` onwards has
/// not been tested yet. Dropping the partition removes the matches, so a predicate that panics part-way through
/// leaves the container holding the kept elements followed by the untested ones, both in their original order.
struct Partition<'a, S: Positional + ?Sized> {
    seq: &'a mut S,
    kept: usize,
    visited: usize,
}

impl<S: Positional + ?Sized> Drop for Partition<'_, S> {
    fn drop(&mut self) {
        if self.kept == self.visited {
            return;
        }
        if self.visited == self.seq.len() {
            self.seq.truncate(self.kept);
        } else {
            self.seq.remove_span(self.kept..self.visited);
        }
    }
}

/// Stable-partition the sequence around `test`, then truncate the matches away.
///
/// If `test` fails at position `i`, the matches found so far are dropped and everything from `i` onwards is kept.
/// A panic in `test` is treated the same way before it continues to unwind.
pub(crate) fn erase_where<S, E>(
    seq: &mut S,
    mut test: impl FnMut(&S::Item) -> Result<bool, E>,
) -> Result<usize, Interrupted<E>>
where
    S: Positional + ?Sized,
{
    let len = seq.len();
    let mut part = Partition {
        seq,
        kept: 0,
        visited: 0,
    };
    while part.visited < len {
        let i = part.visited;
        match test(part.seq.at(i)) {
            Ok(true) => {}
            Ok(false) => {
                if part.kept != i {
                    part.seq.swap(part.kept, i);
                }
                part.kept += 1;
            }
            Err(err) => return Err(Interrupted::new(i - part.kept, err)),
        }
        part.visited += 1;
    }
    Ok(len - part.kept)
}

impl<S> EraseValue<S> for Contiguous
where
    S: Positional + ?Sized,
    S::Item: PartialEq,
{
    type Value = S::Item;

    fn erase_value(seq: &mut S, value: &S::Item) -> usize {
        unwrap_infallible(erase_where(seq, |item| Ok::<_, Infallible>(item == value)))
    }
}

impl<S, F, R> EraseWhere<S, F> for Contiguous
where
    S: Positional + ?Sized,
    F: FnMut(&S::Item) -> R,
    R: Verdict,
{
    type Error = R::Error;

    fn erase_where(seq: &mut S, mut pred: F) -> Result<usize, Interrupted<R::Error>> {
        erase_where(seq, |item| pred(item).into_result())
    }
}
