//! Container categories and the traits that dispatch an erase call to the right strategy.
//!
//! Every supported container names its category through [`Erasable::Category`](crate::Erasable::Category). The
//! category marker implements [`EraseValue`] and [`EraseWhere`] for every container of that shape, so picking a
//! removal strategy is entirely a matter of trait resolution: there is no runtime probing, and a container without a
//! category simply fails to type-check.
//!
//! You should only need to interact with this module when implementing [`Erasable`](crate::Erasable) for your own
//! container type.

use super::*;

/// Array-like storage that supports positional swaps and truncation. See [`Positional`](crate::Positional).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Contiguous;

/// Character storage such as [`String`]. See [`CharStorage`](crate::CharStorage).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Text;

/// Node-based sequences with O(1) unlinking in both directions. See [`Unlink`](crate::Unlink).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct DoublyLinked;

/// Node-based sequences that can only be walked forwards. See [`ForwardList`](crate::ForwardList).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SinglyLinked;

/// Ordered or unordered containers of key-value entries. See [`MapEntries`](crate::MapEntries).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct KeyedMap;

/// Ordered or unordered containers of bare keys. See [`SetEntries`](crate::SetEntries).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct KeyedSet;

/// The outcome of testing a single element against a predicate.
///
/// Implemented for `bool` (a predicate that cannot fail) and `Result<bool, E>` (a predicate that can).
pub trait Verdict {
    /// The error a failing predicate produces.
    type Error;

    /// Whether the element should be removed, or why that could not be decided.
    fn into_result(self) -> Result<bool, Self::Error>;
}

impl Verdict for bool {
    type Error = Infallible;

    #[inline(always)]
    fn into_result(self) -> Result<bool, Infallible> {
        Ok(self)
    }
}

impl<E> Verdict for Result<bool, E> {
    type Error = E;

    #[inline(always)]
    fn into_result(self) -> Result<bool, E> {
        self
    }
}

/// Erase by value for containers of category `Self`.
pub trait EraseValue<C: ?Sized> {
    /// The type erased elements are compared against.
    ///
    /// This is the element type for sequences and sets, `char` for text and the *mapped* type for maps.
    type Value: ?Sized;

    /// Remove every element equal to `value`, returning how many were removed.
    fn erase_value(container: &mut C, value: &Self::Value) -> usize;
}

/// Erase by predicate for containers of category `Self`.
pub trait EraseWhere<C: ?Sized, F> {
    /// The error produced by the predicate, [`Infallible`] for predicates returning `bool`.
    type Error;

    /// Remove every element matching `pred`, stopping at the first error the predicate produces.
    fn erase_where(container: &mut C, pred: F) -> Result<usize, Interrupted<Self::Error>>;
}
