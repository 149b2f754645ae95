#![cfg_attr(not(any(doc, feature = "std", test)), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(feature = "nightly", feature(linked_list_cursors))]
#![doc = include_str!("../README.md")]
#![deny(missing_docs)]
#![allow(clippy::len_without_is_empty)]

extern crate alloc;

pub mod category;
pub mod contiguous;
pub mod error;
pub mod forward;
pub mod keyed;
pub mod linked;
pub mod text;
mod util;

/// Commonly used functions, traits and types.
pub mod prelude {
    pub use super::{erase, erase_if, try_erase_if, Erasable, Interrupted};
}

pub use crate::{
    contiguous::Positional,
    error::Interrupted,
    forward::{ForwardList, ForwardNode},
    keyed::{MapEntries, SetEntries},
    linked::{Unlink, UnlinkCursor},
    text::CharStorage,
};

use crate::{
    category::{
        Contiguous, DoublyLinked, EraseValue, EraseWhere, KeyedMap, KeyedSet, SinglyLinked, Text,
        Verdict,
    },
    util::{unwrap_infallible, Sweep},
};

use alloc::{boxed::Box, string::String, vec::Vec};
use core::{convert::Infallible, fmt, ops::Range};

/// A container that [`erase`], [`erase_if`] and [`try_erase_if`] know how to sweep.
///
/// The [`Category`](Erasable::Category) names the storage shape of the container, which in turn decides which
/// removal strategy runs. Implementations are provided for the standard collections and for `hashbrown`'s; to
/// support your own container, implement the capability trait for its shape and name the matching category:
///
/// | Category                       | Capability          | Predicate sees   |
/// |--------------------------------|---------------------|------------------|
/// | [`category::Contiguous`]       | [`Positional`]      | `&T`             |
/// | [`category::Text`]             | [`CharStorage`]     | `char`           |
/// | [`category::DoublyLinked`]     | [`Unlink`]          | `&T`             |
/// | [`category::SinglyLinked`]     | [`ForwardList`]     | `&T`             |
/// | [`category::KeyedMap`]         | [`MapEntries`]      | `(&K, &V)`       |
/// | [`category::KeyedSet`]         | [`SetEntries`]      | `&T`             |
pub trait Erasable {
    /// The category marker of this container. See the [`category`] module.
    type Category;
}

/// Remove every element equal to `value`, returning how many were removed.
///
/// Elements are compared with the container's notion of an element: the element itself for sequences and sets,
/// the character for text, and the **mapped value** (not the key) for maps. Surviving elements keep their relative
/// order wherever the container has one. If nothing matches, the container is left untouched.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
///
/// let mut xs = vec![1, 0, 2, 1, -3];
/// assert_eq!(erasure::erase(&mut xs, &1), 2);
/// assert_eq!(xs, [0, 2, -3]);
///
/// let mut s = String::from("Hello");
/// assert_eq!(erasure::erase(&mut s, &'l'), 2);
/// assert_eq!(s, "Heo");
///
/// let mut map = BTreeMap::from([(1, "one"), (2, "two"), (3, "one")]);
/// assert_eq!(erasure::erase(&mut map, &"one"), 2);
/// assert_eq!(map, BTreeMap::from([(2, "two")]));
/// ```
pub fn erase<C>(container: &mut C, value: &<C::Category as EraseValue<C>>::Value) -> usize
where
    C: Erasable + ?Sized,
    C::Category: EraseValue<C>,
{
    <C::Category as EraseValue<C>>::erase_value(container, value)
}

/// Remove every element for which `pred` returns `true`, returning how many were removed.
///
/// The predicate is called exactly once per element, front to back for ordered containers. What it receives
/// depends on the container's [category](Erasable): `&T` for most containers, `char` for text and a `(&K, &V)`
/// entry for maps.
///
/// # Examples
///
/// ```
/// use std::collections::{BTreeSet, HashMap};
///
/// let mut xs = vec![1, 0, 2, 1, -3];
/// assert_eq!(erasure::erase_if(&mut xs, |x: &i32| *x == 2), 1);
/// assert_eq!(xs, [1, 0, 1, -3]);
///
/// let mut map = HashMap::from([(1, "one"), (2, "two")]);
/// assert_eq!(erasure::erase_if(&mut map, |(k, v): (&i32, &&str)| *k == 2 && *v == "two"), 1);
/// assert_eq!(map, HashMap::from([(1, "one")]));
///
/// let mut set = BTreeSet::from([-10, 2, 4, 5]);
/// assert_eq!(erasure::erase_if(&mut set, |x: &i32| x % 2 == 0), 3);
/// ```
pub fn erase_if<C, F>(container: &mut C, pred: F) -> usize
where
    C: Erasable + ?Sized,
    C::Category: EraseWhere<C, F, Error = Infallible>,
{
    unwrap_infallible(<C::Category as EraseWhere<C, F>>::erase_where(container, pred))
}

/// Like [`erase_if`], but with a predicate that may fail.
///
/// The sweep stops at the first `Err`. Elements removed before that point stay removed; the element the predicate
/// failed on, and everything after it, are kept. The returned [`Interrupted`] carries both the error and the number
/// of elements that were removed.
///
/// # Examples
///
/// ```
/// let mut lines = vec!["1", "x", "2", "oops", "x"];
/// let res = erasure::try_erase_if(&mut lines, |line: &&str| match *line {
///     "oops" => Err("unparseable line"),
///     line => Ok(line == "x"),
/// });
/// let err = res.unwrap_err();
/// assert_eq!(err.removed(), 1);
/// assert_eq!(*err.error(), "unparseable line");
/// assert_eq!(lines, ["1", "2", "oops", "x"]);
/// ```
pub fn try_erase_if<C, F, E>(container: &mut C, pred: F) -> Result<usize, Interrupted<E>>
where
    C: Erasable + ?Sized,
    C::Category: EraseWhere<C, F, Error = E>,
{
    <C::Category as EraseWhere<C, F>>::erase_where(container, pred)
}
