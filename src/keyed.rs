//! Erasure over ordered and unordered keyed containers.
//!
//! Every entry is visited exactly once and tested on its own, so containers that allow the same key more than once
//! (such as [`hashbrown::HashTable`], or a `BTreeSet<(K, V)>` standing in for an ordered multimap) lose only the
//! entries that match, never every entry sharing a key. The containers' own `retain` provides the "remove the
//! current entry and carry on from its successor" primitive.
//!
//! By-value erasure on maps compares the *mapped value*, not the key. Removing a key is what `remove` is for.

use super::*;
use alloc::collections::{BTreeMap, BTreeSet};

/// A keyed container whose entries are key-value pairs.
pub trait MapEntries {
    /// The key type.
    type Key;
    /// The mapped value type.
    type Mapped;

    /// The number of entries stored, counting every entry under a repeated key.
    fn entry_count(&self) -> usize;

    /// Keep only the entries for which `keep` returns `true`, calling it exactly once per entry.
    fn retain_entries(&mut self, keep: impl FnMut(&Self::Key, &Self::Mapped) -> bool);
}

/// A keyed container whose entries are bare keys.
pub trait SetEntries {
    /// The entry type.
    type Item;

    /// The number of entries stored, counting repeats.
    fn entry_count(&self) -> usize;

    /// Keep only the entries for which `keep` returns `true`, calling it exactly once per entry.
    fn retain_items(&mut self, keep: impl FnMut(&Self::Item) -> bool);
}

impl<K: Ord, V> MapEntries for BTreeMap<K, V> {
    type Key = K;
    type Mapped = V;

    fn entry_count(&self) -> usize {
        self.len()
    }

    fn retain_entries(&mut self, mut keep: impl FnMut(&K, &V) -> bool) {
        self.retain(|k, v| keep(k, v))
    }
}

impl<T: Ord> SetEntries for BTreeSet<T> {
    type Item = T;

    fn entry_count(&self) -> usize {
        self.len()
    }

    fn retain_items(&mut self, keep: impl FnMut(&T) -> bool) {
        self.retain(keep)
    }
}

impl<K, V, S> MapEntries for hashbrown::HashMap<K, V, S> {
    type Key = K;
    type Mapped = V;

    fn entry_count(&self) -> usize {
        self.len()
    }

    fn retain_entries(&mut self, mut keep: impl FnMut(&K, &V) -> bool) {
        self.retain(|k, v| keep(k, v))
    }
}

impl<T, S> SetEntries for hashbrown::HashSet<T, S> {
    type Item = T;

    fn entry_count(&self) -> usize {
        self.len()
    }

    fn retain_items(&mut self, keep: impl FnMut(&T) -> bool) {
        self.retain(keep)
    }
}

impl<T> SetEntries for hashbrown::HashTable<T> {
    type Item = T;

    fn entry_count(&self) -> usize {
        self.len()
    }

    fn retain_items(&mut self, mut keep: impl FnMut(&T) -> bool) {
        self.retain(|item| keep(item))
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl<K, V, S> MapEntries for std::collections::HashMap<K, V, S> {
    type Key = K;
    type Mapped = V;

    fn entry_count(&self) -> usize {
        self.len()
    }

    fn retain_entries(&mut self, mut keep: impl FnMut(&K, &V) -> bool) {
        self.retain(|k, v| keep(k, v))
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl<T, S> SetEntries for std::collections::HashSet<T, S> {
    type Item = T;

    fn entry_count(&self) -> usize {
        self.len()
    }

    fn retain_items(&mut self, keep: impl FnMut(&T) -> bool) {
        self.retain(keep)
    }
}

impl<K: Ord, V> Erasable for BTreeMap<K, V> {
    type Category = KeyedMap;
}

impl<T: Ord> Erasable for BTreeSet<T> {
    type Category = KeyedSet;
}

impl<K, V, S> Erasable for hashbrown::HashMap<K, V, S> {
    type Category = KeyedMap;
}

impl<T, S> Erasable for hashbrown::HashSet<T, S> {
    type Category = KeyedSet;
}

impl<T> Erasable for hashbrown::HashTable<T> {
    type Category = KeyedSet;
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl<K, V, S> Erasable for std::collections::HashMap<K, V, S> {
    type Category = KeyedMap;
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl<T, S> Erasable for std::collections::HashSet<T, S> {
    type Category = KeyedSet;
}

pub(crate) fn erase_entries_where<C, E>(
    map: &mut C,
    mut test: impl FnMut(&C::Key, &C::Mapped) -> Result<bool, E>,
) -> Result<usize, Interrupted<E>>
where
    C: MapEntries + ?Sized,
{
    if map.entry_count() == 0 {
        return Ok(0);
    }
    let mut sweep = Sweep::new();
    map.retain_entries(|k, v| sweep.keep(|| test(k, v)));
    sweep.finish()
}

pub(crate) fn erase_items_where<C, E>(
    set: &mut C,
    mut test: impl FnMut(&C::Item) -> Result<bool, E>,
) -> Result<usize, Interrupted<E>>
where
    C: SetEntries + ?Sized,
{
    if set.entry_count() == 0 {
        return Ok(0);
    }
    let mut sweep = Sweep::new();
    set.retain_items(|item| sweep.keep(|| test(item)));
    sweep.finish()
}

impl<C> EraseValue<C> for KeyedMap
where
    C: MapEntries + ?Sized,
    C::Mapped: PartialEq,
{
    type Value = C::Mapped;

    fn erase_value(map: &mut C, value: &C::Mapped) -> usize {
        unwrap_infallible(erase_entries_where(map, |_, v| Ok::<_, Infallible>(v == value)))
    }
}

impl<C, F, R> EraseWhere<C, F> for KeyedMap
where
    C: MapEntries + ?Sized,
    F: FnMut((&C::Key, &C::Mapped)) -> R,
    R: Verdict,
{
    type Error = R::Error;

    fn erase_where(map: &mut C, mut pred: F) -> Result<usize, Interrupted<R::Error>> {
        erase_entries_where(map, |k, v| pred((k, v)).into_result())
    }
}

impl<C> EraseValue<C> for KeyedSet
where
    C: SetEntries + ?Sized,
    C::Item: PartialEq,
{
    type Value = C::Item;

    fn erase_value(set: &mut C, value: &C::Item) -> usize {
        unwrap_infallible(erase_items_where(set, |item| Ok::<_, Infallible>(item == value)))
    }
}

impl<C, F, R> EraseWhere<C, F> for KeyedSet
where
    C: SetEntries + ?Sized,
    F: FnMut(&C::Item) -> R,
    R: Verdict,
{
    type Error = R::Error;

    fn erase_where(set: &mut C, mut pred: F) -> Result<usize, Interrupted<R::Error>> {
        erase_items_where(set, |item| pred(item).into_result())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn by_value_compares_mapped_value() {
        let mut map = BTreeMap::from([(1, 2), (2, 1), (3, 1)]);
        assert_eq!(<KeyedMap as EraseValue<_>>::erase_value(&mut map, &1), 2);
        assert_eq!(map, BTreeMap::from([(1, 2)]));
    }

    #[test]
    fn failure_stops_testing() {
        let mut set = BTreeSet::from([1, 2, 3, 4, 5, 6]);
        let mut tested = Vec::new();
        let res = erase_items_where(&mut set, |x| {
            tested.push(*x);
            if *x == 4 {
                Err("four")
            } else {
                Ok(x % 2 == 1)
            }
        });
        assert_eq!(res, Err(Interrupted::new(2, "four")));
        assert_eq!(tested, [1, 2, 3, 4]);
        assert_eq!(set, BTreeSet::from([2, 4, 5, 6]));
    }

    #[test]
    fn table_keeps_other_duplicates() {
        let hasher = |x: &(u8, char)| u64::from(x.0);
        let mut table = hashbrown::HashTable::new();
        for entry in [(1, 'a'), (2, 'b'), (2, 'c'), (2, 'b')] {
            table.insert_unique(hasher(&entry), entry, hasher);
        }
        assert_eq!(table.entry_count(), 4);
        assert_eq!(erase_items_where(&mut table, |e| Ok::<_, ()>(*e == (2, 'b'))), Ok(2));
        assert_eq!(table.entry_count(), 2);
        let mut rest = table.into_iter().collect::<Vec<_>>();
        rest.sort();
        assert_eq!(rest, [(1, 'a'), (2, 'c')]);
    }

    #[test]
    fn empty_map_is_never_tested() {
        let mut map = BTreeMap::<u8, u8>::new();
        assert_eq!(erase_entries_where(&mut map, |_, _| Err::<bool, _>("tested")), Ok(0));
    }
}
