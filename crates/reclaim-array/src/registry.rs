//! Per-thread default store factories.
//!
//! [`PooledArray::new`](crate::PooledArray::new) and the constructors built
//! on it draw their backing store from the default factory registered for
//! the element type. Until a factory is installed that default is
//! [`HeapFactory`].
//!
//! The registry is thread-local: `PooledArray` is built on `Rc` and never
//! crosses threads, so each thread configures its own allocation policy.
//! Installing or resetting a factory only affects arrays constructed
//! afterwards. Existing stores keep the factory they were drawn from.

use std::any::{Any, TypeId};
use std::cell::RefCell;
use std::rc::Rc;

use indexmap::IndexMap;
use tracing::debug;

use crate::factory::{HeapFactory, StoreFactory};

thread_local! {
    /// Maps an element `TypeId` to a boxed `Rc<dyn StoreFactory<T>>`.
    static DEFAULT_FACTORIES: RefCell<IndexMap<TypeId, Box<dyn Any>>> =
        RefCell::new(IndexMap::new());
}

/// The default factory for `T` on this thread.
///
/// Returns [`HeapFactory`] when nothing is installed, including while the
/// thread's registry is being torn down.
pub fn current_factory<T: 'static>() -> Rc<dyn StoreFactory<T>> {
    DEFAULT_FACTORIES
        .try_with(|map| {
            map.borrow()
                .get(&TypeId::of::<T>())
                .and_then(|entry| entry.downcast_ref::<Rc<dyn StoreFactory<T>>>())
                .cloned()
        })
        .ok()
        .flatten()
        .unwrap_or_else(heap_factory::<T>)
}

/// Make `factory` the default for `T` on this thread.
///
/// Returns the previously installed factory, if any. The previous factory
/// stays alive for as long as stores drawn from it exist. Arrays built
/// afterwards, copies made with `clone` included, draw from `factory`.
///
/// # Thread scope
///
/// The default is per thread, not per process. Installing a factory on
/// one thread leaves every other thread on its own default (initially
/// [`HeapFactory`]), so a worker thread that should pool its arrays must
/// install a factory itself.
pub fn install_factory<T: 'static>(
    factory: Rc<dyn StoreFactory<T>>,
) -> Option<Rc<dyn StoreFactory<T>>> {
    debug!(element = std::any::type_name::<T>(), "installing default store factory");
    let previous =
        DEFAULT_FACTORIES.with(|map| map.borrow_mut().insert(TypeId::of::<T>(), Box::new(factory)));
    previous.and_then(unbox::<T>)
}

/// Restore [`HeapFactory`] as the default for `T` on this thread.
///
/// Returns the factory that was installed, if any.
pub fn reset_factory<T: 'static>() -> Option<Rc<dyn StoreFactory<T>>> {
    let previous = DEFAULT_FACTORIES.with(|map| map.borrow_mut().shift_remove(&TypeId::of::<T>()));
    if previous.is_some() {
        debug!(element = std::any::type_name::<T>(), "reset default store factory");
    }
    previous.and_then(unbox::<T>)
}

fn heap_factory<T>() -> Rc<dyn StoreFactory<T>> {
    Rc::new(HeapFactory)
}

fn unbox<T: 'static>(entry: Box<dyn Any>) -> Option<Rc<dyn StoreFactory<T>>> {
    entry
        .downcast::<Rc<dyn StoreFactory<T>>>()
        .ok()
        .map(|factory| *factory)
}
