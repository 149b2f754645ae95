//! Erasure over doubly-linked sequences.
//!
//! The strategy walks a cursor from the front. A matching node is unlinked in O(1), which leaves the cursor on its
//! successor; any other node is stepped over. No node is ever reallocated.

use super::*;
use alloc::collections::LinkedList;

/// A position within a doubly-linked sequence that can unlink the node it points at.
pub trait UnlinkCursor {
    /// The type of element stored in each node.
    type Item;

    /// The element under the cursor, or `None` once the cursor has run off the end.
    fn current(&self) -> Option<&Self::Item>;

    /// Step over the current node.
    fn advance(&mut self);

    /// Unlink the current node, leaving the cursor on its successor.
    fn unlink(&mut self) -> Option<Self::Item>;
}

/// A doubly-linked sequence that hands out [`UnlinkCursor`]s.
pub trait Unlink {
    /// The type of element stored in each node.
    type Item;

    /// The cursor type.
    type Cursor<'a>: UnlinkCursor<Item = Self::Item>
    where
        Self: 'a;

    /// Create a cursor pointing at the first node.
    fn cursor_front(&mut self) -> Self::Cursor<'_>;
}

/// A cursor over a [`LinkedList`] built out of stable list operations.
///
/// Nodes before the cursor live in the original list; the current node and everything after it are detached into a
/// remainder. Stepping over a node splices it from the front of the remainder onto the back of the list, which
/// relinks it without reallocating. The remainder is spliced back when the cursor is dropped, so abandoning the
/// cursor early (or unwinding through it) never loses elements.
#[cfg(not(feature = "nightly"))]
pub struct SpliceCursor<'a, T> {
    visited: &'a mut LinkedList<T>,
    rest: LinkedList<T>,
}

#[cfg(not(feature = "nightly"))]
impl<'a, T> SpliceCursor<'a, T> {
    fn new(list: &'a mut LinkedList<T>) -> Self {
        let rest = core::mem::take(list);
        Self {
            visited: list,
            rest,
        }
    }
}

#[cfg(not(feature = "nightly"))]
impl<T> UnlinkCursor for SpliceCursor<'_, T> {
    type Item = T;

    #[inline(always)]
    fn current(&self) -> Option<&T> {
        self.rest.front()
    }

    fn advance(&mut self) {
        if self.rest.is_empty() {
            return;
        }
        // `split_off(1)` walks no nodes, `append` is O(1)
        let tail = self.rest.split_off(1);
        self.visited.append(&mut self.rest);
        self.rest = tail;
    }

    #[inline(always)]
    fn unlink(&mut self) -> Option<T> {
        self.rest.pop_front()
    }
}

#[cfg(not(feature = "nightly"))]
impl<T> Drop for SpliceCursor<'_, T> {
    fn drop(&mut self) {
        self.visited.append(&mut self.rest);
    }
}

#[cfg(not(feature = "nightly"))]
impl<T> Unlink for LinkedList<T> {
    type Item = T;

    type Cursor<'a>
        = SpliceCursor<'a, T>
    where
        Self: 'a;

    fn cursor_front(&mut self) -> Self::Cursor<'_> {
        SpliceCursor::new(self)
    }
}

#[cfg(feature = "nightly")]
impl<T> UnlinkCursor for alloc::collections::linked_list::CursorMut<'_, T> {
    type Item = T;

    #[inline(always)]
    fn current(&self) -> Option<&T> {
        self.as_cursor().current()
    }

    #[inline(always)]
    fn advance(&mut self) {
        self.move_next()
    }

    #[inline(always)]
    fn unlink(&mut self) -> Option<T> {
        self.remove_current()
    }
}

#[cfg(feature = "nightly")]
impl<T> Unlink for LinkedList<T> {
    type Item = T;

    type Cursor<'a>
        = alloc::collections::linked_list::CursorMut<'a, T>
    where
        Self: 'a;

    fn cursor_front(&mut self) -> Self::Cursor<'_> {
        LinkedList::cursor_front_mut(self)
    }
}

impl<T> Erasable for LinkedList<T> {
    type Category = DoublyLinked;
}

pub(crate) fn erase_where<L, E>(
    list: &mut L,
    mut test: impl FnMut(&L::Item) -> Result<bool, E>,
) -> Result<usize, Interrupted<E>>
where
    L: Unlink + ?Sized,
{
    let mut cursor = list.cursor_front();
    let mut removed = 0;
    while let Some(item) = cursor.current() {
        match test(item) {
            Ok(true) => {
                cursor.unlink();
                removed += 1;
            }
            Ok(false) => cursor.advance(),
            Err(err) => return Err(Interrupted::new(removed, err)),
        }
    }
    Ok(removed)
}

impl<L> EraseValue<L> for DoublyLinked
where
    L: Unlink + ?Sized,
    L::Item: PartialEq,
{
    type Value = L::Item;

    fn erase_value(list: &mut L, value: &L::Item) -> usize {
        unwrap_infallible(erase_where(list, |item| Ok::<_, Infallible>(item == value)))
    }
}

impl<L, F, R> EraseWhere<L, F> for DoublyLinked
where
    L: Unlink + ?Sized,
    F: FnMut(&L::Item) -> R,
    R: Verdict,
{
    type Error = R::Error;

    fn erase_where(list: &mut L, mut pred: F) -> Result<usize, Interrupted<R::Error>> {
        erase_where(list, |item| pred(item).into_result())
    }
}
