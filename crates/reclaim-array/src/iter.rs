//! Live iterators over a pooled array.
//!
//! Each item is a guard split off the array's borrow, so the store stays
//! pinned until both the iterator and every yielded item are dropped.

use std::cell::{Ref, RefMut};
use std::iter::FusedIterator;

/// Shared iterator returned by [`PooledArray::iter`](crate::PooledArray::iter).
pub struct Iter<'a, T> {
    rest: Option<Ref<'a, [T]>>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(items: Ref<'a, [T]>) -> Self {
        Self { rest: Some(items) }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = Ref<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.rest.take()?;
        if rest.is_empty() {
            return None;
        }
        let (head, tail) = Ref::map_split(rest, |items| (&items[0], &items[1..]));
        self.rest = Some(tail);
        Some(head)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.rest.as_ref().map_or(0, |rest| rest.len());
        (len, Some(len))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Mutable iterator returned by [`PooledArray::iter_mut`](crate::PooledArray::iter_mut).
pub struct IterMut<'a, T> {
    rest: Option<RefMut<'a, [T]>>,
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(items: RefMut<'a, [T]>) -> Self {
        Self { rest: Some(items) }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = RefMut<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.rest.take()?;
        if rest.is_empty() {
            return None;
        }
        let (head, tail) = RefMut::map_split(rest, |items| {
            let (head, tail) = items.split_at_mut(1);
            (&mut head[0], tail)
        });
        self.rest = Some(tail);
        Some(head)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.rest.as_ref().map_or(0, |rest| rest.len());
        (len, Some(len))
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}
