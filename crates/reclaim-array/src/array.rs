//! The pooled array handle.
//!
//! [`PooledArray`] presents vector-like operations over a [`BackingStore`]
//! whose vector came from a [`StoreFactory`]. Element access goes through
//! `RefCell` guards because several handles may alias one store.

use std::cell::{Ref, RefMut};
use std::fmt;
use std::ops::RangeBounds;
use std::rc::Rc;

use reclaim_core::{AccessError, FromCoords};

use crate::factory::StoreFactory;
use crate::iter::{Iter, IterMut};
use crate::registry;
use crate::store::{BackingStore, SharedStore};

/// A growable array whose storage comes from a pluggable factory.
///
/// # Ownership
///
/// Every handle holds one reference to a backing store. Handles made by
/// [`new`](Self::new), [`with_len`](Self::with_len), [`clone`](Clone::clone)
/// or collection own a store of their own. [`share`](Self::share) makes a
/// second handle to the *same* store: mutation through either handle is
/// visible through the other, and the store lives until the last handle
/// is dropped.
///
/// # Access
///
/// Element accessors return `Ref`/`RefMut` guards. A guard (or an
/// iterator) pins the store: a mutation through any aliasing handle while
/// it is alive panics with a borrow error instead of invalidating it.
///
/// Accessors follow three tiers:
/// - [`at`](Self::at), [`back`](Self::back): panic on a violated precondition.
/// - [`get`](Self::get), [`try_at`](Self::try_at), [`last`](Self::last),
///   [`try_back`](Self::try_back): checked, report through `Option`/`Result`.
/// - `at_unchecked`, `at_unchecked_mut`, `back_unchecked` (`unsafe`): no
///   check at all. These are the accessors for hot loops where the caller
///   has already established the index or non-emptiness.
///
/// # Example
///
/// ```rust
/// use reclaim_array::PooledArray;
///
/// let mut a = PooledArray::from([1, 2, 3]);
/// let mut alias = a.share();
/// alias.push_back(4);
/// assert_eq!(a.len(), 4);
///
/// let copy = a.clone();
/// a.clear();
/// assert_eq!(copy.len(), 4);
/// assert_eq!(alias.len(), 0);
/// ```
pub struct PooledArray<T> {
    pub(crate) store: SharedStore<T>,
}

impl<T: 'static> PooledArray<T> {
    /// Create an empty array from this thread's default factory for `T`.
    ///
    /// See [`registry`] for how the default is chosen.
    pub fn new() -> Self {
        Self::with_factory(&registry::current_factory::<T>())
    }

    /// Create an array of `len` default elements.
    pub fn with_len(len: usize) -> Self
    where
        T: Default,
    {
        let mut array = Self::new();
        array.resize(len);
        array
    }

    /// Create an array holding a copy of each element of `items`, in order.
    pub fn from_slice(items: &[T]) -> Self
    where
        T: Clone,
    {
        let array = Self::new();
        array.store.borrow_mut().extend_from_slice(items);
        array
    }
}

impl<T> PooledArray<T> {
    /// Create an empty array whose store is drawn from `factory`.
    pub fn with_factory(factory: &Rc<dyn StoreFactory<T>>) -> Self {
        Self {
            store: BackingStore::allocate(factory),
        }
    }

    /// Make another handle to this array's store.
    ///
    /// This does not copy elements and does not empty `self`. Both handles
    /// stay live aliases of one store.
    pub fn share(&self) -> Self {
        Self {
            store: Rc::clone(&self.store),
        }
    }

    /// Whether `self` and `other` alias the same store.
    pub fn shares_store_with(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.store, &other.store)
    }

    /// Number of handles (including `self`) referencing this store.
    pub fn handle_count(&self) -> usize {
        Rc::strong_count(&self.store)
    }

    /// The factory this array's store was drawn from.
    pub fn factory(&self) -> Rc<dyn StoreFactory<T>> {
        Rc::clone(self.store.factory())
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.store.borrow().len()
    }

    /// Whether the array holds no elements.
    pub fn is_empty(&self) -> bool {
        self.store.borrow().is_empty()
    }

    /// Number of elements the store can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.store.borrow().capacity()
    }

    /// Element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn at(&self, index: usize) -> Ref<'_, T> {
        Ref::map(self.store.borrow(), |items| &items[index])
    }

    /// Mutable element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn at_mut(&mut self, index: usize) -> RefMut<'_, T> {
        RefMut::map(self.store.borrow_mut(), |items| &mut items[index])
    }

    /// Element at `index`, or `None` if out of range.
    pub fn get(&self, index: usize) -> Option<Ref<'_, T>> {
        Ref::filter_map(self.store.borrow(), |items| items.get(index)).ok()
    }

    /// Mutable element at `index`, or `None` if out of range.
    pub fn get_mut(&mut self, index: usize) -> Option<RefMut<'_, T>> {
        RefMut::filter_map(self.store.borrow_mut(), |items| items.get_mut(index)).ok()
    }

    /// Element at `index`, or [`AccessError::OutOfBounds`].
    pub fn try_at(&self, index: usize) -> Result<Ref<'_, T>, AccessError> {
        let len = self.len();
        self.get(index).ok_or(AccessError::OutOfBounds { index, len })
    }

    /// Last element.
    ///
    /// # Panics
    ///
    /// Panics if the array is empty.
    pub fn back(&self) -> Ref<'_, T> {
        Ref::map(self.store.borrow(), |items| {
            assert!(!items.is_empty(), "back() on an empty PooledArray");
            &items[items.len() - 1]
        })
    }

    /// Mutable last element.
    ///
    /// # Panics
    ///
    /// Panics if the array is empty.
    pub fn back_mut(&mut self) -> RefMut<'_, T> {
        RefMut::map(self.store.borrow_mut(), |items| {
            assert!(!items.is_empty(), "back_mut() on an empty PooledArray");
            let last = items.len() - 1;
            &mut items[last]
        })
    }

    /// Last element, or `None` if empty.
    pub fn last(&self) -> Option<Ref<'_, T>> {
        Ref::filter_map(self.store.borrow(), |items| items.last()).ok()
    }

    /// Last element, or [`AccessError::Empty`].
    pub fn try_back(&self) -> Result<Ref<'_, T>, AccessError> {
        self.last().ok_or(AccessError::Empty)
    }

    /// Remove and return the last element, or `None` if empty.
    pub fn pop_back(&mut self) -> Option<T> {
        self.store.borrow_mut().pop()
    }

    /// Append `value`. Amortised O(1).
    pub fn push_back(&mut self, value: T) {
        self.store.borrow_mut().push(value);
    }

    /// Append an element built in place from a coordinate pair.
    pub fn emplace(&mut self, x: T::Coord, y: T::Coord)
    where
        T: FromCoords,
    {
        self.store.borrow_mut().push(T::from_coords(x, y));
    }

    /// Grow with default elements or truncate to `len`.
    pub fn resize(&mut self, len: usize)
    where
        T: Default,
    {
        self.store.borrow_mut().resize_with(len, T::default);
    }

    /// Reserve room for at least `additional` more elements.
    pub fn reserve(&mut self, additional: usize) {
        self.store.borrow_mut().reserve(additional);
    }

    /// Remove every element. Capacity is kept.
    pub fn clear(&mut self) {
        self.store.borrow_mut().clear();
    }

    /// Remove the contiguous run of elements in `range`, shifting the rest down.
    ///
    /// # Panics
    ///
    /// Panics if the range is out of bounds or decreasing.
    pub fn erase<R>(&mut self, range: R)
    where
        R: RangeBounds<usize>,
    {
        self.store.borrow_mut().drain(range).for_each(drop);
    }

    /// Replace this array's contents with a copy of `source`'s.
    ///
    /// Which store each handle references is unchanged, so aliases of
    /// `self` see the new contents. Assigning from an alias of the same
    /// store is a no-op.
    pub fn assign(&mut self, source: &Self)
    where
        T: Clone,
    {
        if self.shares_store_with(source) {
            return;
        }
        self.store.borrow_mut().clone_from(&source.store.borrow());
    }

    /// Shared view of all elements.
    pub fn as_slice(&self) -> Ref<'_, [T]> {
        Ref::map(self.store.borrow(), Vec::as_slice)
    }

    /// Mutable view of all elements.
    pub fn as_mut_slice(&mut self) -> RefMut<'_, [T]> {
        RefMut::map(self.store.borrow_mut(), Vec::as_mut_slice)
    }

    /// Iterate over the live elements.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.as_slice())
    }

    /// Iterate mutably over the live elements.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self.as_mut_slice())
    }

    /// Copy the current elements into a plain vector.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.store.borrow().clone()
    }
}

impl<T: 'static> Default for PooledArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + 'static> Clone for PooledArray<T> {
    /// Deep copy into a fresh store drawn from this thread's current
    /// default factory for `T`, like any other newly constructed array.
    fn clone(&self) -> Self {
        let copy = Self::new();
        copy.store
            .borrow_mut()
            .extend_from_slice(&self.store.borrow());
        copy
    }

    fn clone_from(&mut self, source: &Self) {
        self.assign(source);
    }
}

impl<T: PartialEq> PartialEq for PooledArray<T> {
    fn eq(&self, other: &Self) -> bool {
        *self.store.borrow() == *other.store.borrow()
    }
}

impl<T: Eq> Eq for PooledArray<T> {}

impl<T: PartialEq> PartialEq<[T]> for PooledArray<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.store.borrow().as_slice() == other
    }
}

impl<T: fmt::Debug> fmt::Debug for PooledArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.store.borrow().iter()).finish()
    }
}

impl<T> Extend<T> for PooledArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.store.borrow_mut().extend(iter);
    }
}

impl<T: 'static> FromIterator<T> for PooledArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut array = Self::new();
        array.extend(iter);
        array
    }
}

impl<T: 'static, const N: usize> From<[T; N]> for PooledArray<T> {
    fn from(items: [T; N]) -> Self {
        items.into_iter().collect()
    }
}

impl<'a, T> IntoIterator for &'a PooledArray<T> {
    type Item = Ref<'a, T>;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut PooledArray<T> {
    type Item = RefMut<'a, T>;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::{HeapFactory, VecPoolFactory};

    #[test]
    fn new_is_empty() {
        let a = PooledArray::<u32>::new();
        assert!(a.is_empty());
        assert_eq!(a.len(), 0);
        assert_eq!(a.handle_count(), 1);
    }

    #[test]
    fn with_len_default_constructs() {
        let a = PooledArray::<i32>::with_len(4);
        assert_eq!(a.to_vec(), vec![0, 0, 0, 0]);
    }

    #[test]
    fn from_array_keeps_order() {
        let a = PooledArray::from([3, 1, 2]);
        assert_eq!(a.to_vec(), vec![3, 1, 2]);
        assert_eq!(*a.at(0), 3);
        assert_eq!(*a.back(), 2);
    }

    #[test]
    fn from_slice_copies() {
        let src = vec![String::from("a"), String::from("b")];
        let a = PooledArray::from_slice(&src);
        assert_eq!(a.to_vec(), src);
    }

    #[test]
    fn push_pop_back() {
        let mut a = PooledArray::new();
        a.push_back(1);
        a.push_back(2);
        assert_eq!(a.pop_back(), Some(2));
        assert_eq!(a.pop_back(), Some(1));
        assert_eq!(a.pop_back(), None);
    }

    #[test]
    fn at_mut_writes_through() {
        let mut a = PooledArray::from([1, 2, 3]);
        *a.at_mut(1) = 20;
        *a.back_mut() = 30;
        assert_eq!(a.to_vec(), vec![1, 20, 30]);
    }

    #[test]
    #[should_panic]
    fn at_out_of_range_panics() {
        let a = PooledArray::from([1]);
        let _ = a.at(1);
    }

    #[test]
    #[should_panic(expected = "empty PooledArray")]
    fn back_on_empty_panics() {
        let a = PooledArray::<u8>::new();
        let _ = a.back();
    }

    #[test]
    fn checked_accessors_report_misses() {
        let mut a = PooledArray::from([5u8]);
        assert_eq!(a.get(0).map(|v| *v), Some(5));
        assert!(a.get(1).is_none());
        assert!(a.get_mut(1).is_none());
        assert_eq!(
            a.try_at(3).err(),
            Some(AccessError::OutOfBounds { index: 3, len: 1 })
        );
        a.clear();
        assert!(a.last().is_none());
        assert_eq!(a.try_back().err(), Some(AccessError::Empty));
    }

    #[test]
    fn emplace_builds_from_coords() {
        let mut a = PooledArray::<(i64, i64)>::new();
        a.emplace(1, 2);
        a.emplace(3, 4);
        assert_eq!(a.to_vec(), vec![(1, 2), (3, 4)]);
    }

    #[test]
    fn resize_grows_and_truncates() {
        let mut a = PooledArray::from([1, 2]);
        a.resize(4);
        assert_eq!(a.to_vec(), vec![1, 2, 0, 0]);
        a.resize(1);
        assert_eq!(a.to_vec(), vec![1]);
    }

    #[test]
    fn reserve_does_not_change_contents() {
        let mut a = PooledArray::from([1, 2]);
        a.reserve(100);
        assert!(a.capacity() >= 102);
        assert_eq!(a.to_vec(), vec![1, 2]);
    }

    #[test]
    fn erase_removes_contiguous_run() {
        let mut a = PooledArray::from([0, 1, 2, 3, 4]);
        a.erase(1..3);
        assert_eq!(a.to_vec(), vec![0, 3, 4]);
        a.erase(..);
        assert!(a.is_empty());
    }

    #[test]
    fn clone_is_storage_disjoint() {
        let mut a = PooledArray::from([1, 2, 3]);
        let mut b = a.clone();
        assert_eq!(a, b);
        assert!(!a.shares_store_with(&b));
        *b.at_mut(0) = 100;
        a.push_back(4);
        assert_eq!(a.to_vec(), vec![1, 2, 3, 4]);
        assert_eq!(b.to_vec(), vec![100, 2, 3]);
    }

    #[test]
    fn share_aliases_both_ways() {
        let mut a = PooledArray::from([1, 2]);
        let mut b = a.share();
        assert!(a.shares_store_with(&b));
        assert_eq!(a.handle_count(), 2);
        b.push_back(3);
        assert_eq!(a.to_vec(), vec![1, 2, 3]);
        *a.at_mut(0) = 9;
        assert_eq!(*b.at(0), 9);
    }

    #[test]
    fn assign_replaces_contents_in_place() {
        let mut a = PooledArray::from([1, 2, 3]);
        let alias = a.share();
        let src = PooledArray::from([7, 8]);
        a.assign(&src);
        assert_eq!(alias.to_vec(), vec![7, 8]);
        assert!(a.shares_store_with(&alias));
        assert!(!a.shares_store_with(&src));
    }

    #[test]
    fn clone_from_alias_is_noop() {
        let mut a = PooledArray::from([1, 2]);
        let alias = a.share();
        a.clone_from(&alias);
        assert_eq!(a.to_vec(), vec![1, 2]);
    }

    #[test]
    fn clone_draws_from_current_default_factory() {
        #[derive(Clone, Debug, PartialEq)]
        struct Sample(u64);

        let first: Rc<dyn StoreFactory<Sample>> = Rc::new(VecPoolFactory::new());
        registry::install_factory(Rc::clone(&first));
        let a = PooledArray::from([Sample(1), Sample(2), Sample(3)]);
        assert!(Rc::ptr_eq(&a.factory(), &first));

        registry::reset_factory::<Sample>();
        let b = a.clone();
        assert!(!Rc::ptr_eq(&b.factory(), &first));
        assert_eq!(a, b);
        assert!(!a.shares_store_with(&b));

        let second: Rc<dyn StoreFactory<Sample>> = Rc::new(VecPoolFactory::new());
        registry::install_factory(Rc::clone(&second));
        let c = a.clone();
        assert!(Rc::ptr_eq(&c.factory(), &second));
        assert!(Rc::ptr_eq(&a.factory(), &first));
        registry::reset_factory::<Sample>();
    }

    #[test]
    fn clone_of_injected_array_follows_installed_default() {
        let injected: Rc<dyn StoreFactory<u8>> = Rc::new(VecPoolFactory::new());
        let a = PooledArray::with_factory(&injected);
        let b = a.clone();
        assert!(!Rc::ptr_eq(&b.factory(), &injected));
    }

    #[test]
    fn iter_yields_in_order() {
        let a = PooledArray::from([1, 2, 3]);
        let seen: Vec<i32> = a.iter().map(|v| *v).collect();
        assert_eq!(seen, vec![1, 2, 3]);
        assert_eq!(a.iter().len(), 3);
    }

    #[test]
    fn iter_mut_updates_every_element() {
        let mut a = PooledArray::from([1, 2, 3]);
        for mut v in &mut a {
            *v *= 10;
        }
        assert_eq!(a.to_vec(), vec![10, 20, 30]);
    }

    #[test]
    #[should_panic]
    fn mutation_through_alias_during_iteration_panics() {
        let a = PooledArray::from([1, 2, 3]);
        let mut alias = a.share();
        let mut it = a.iter();
        let _first = it.next();
        alias.push_back(4);
    }

    #[test]
    fn debug_lists_elements() {
        let a = PooledArray::from([1, 2]);
        assert_eq!(format!("{a:?}"), "[1, 2]");
    }

    #[test]
    fn eq_against_slice() {
        let a = PooledArray::from([1, 2]);
        assert!(a == *[1, 2].as_slice());
    }

    #[test]
    fn heap_factory_store_is_independent_per_array() {
        let factory: Rc<dyn StoreFactory<u8>> = Rc::new(HeapFactory);
        let a = PooledArray::with_factory(&factory);
        let b = PooledArray::with_factory(&factory);
        assert!(!a.shares_store_with(&b));
    }
}
