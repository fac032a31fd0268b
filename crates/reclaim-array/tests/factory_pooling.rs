//! Integration test: swapping the default store factory.
//!
//! A `VecPoolFactory` installed as the default for an element type turns
//! plain `PooledArray::new()` calls into reuse of released vectors.
//! Existing arrays keep the factory they were built with.

use std::rc::Rc;

use reclaim_array::{
    current_factory, install_factory, reset_factory, FactoryConfig, PooledArray, StoreFactory,
    VecPoolFactory,
};
use reclaim_test_utils::{Node, Point2D};

#[test]
fn loop_reuses_released_store() {
    let pool = Rc::new(VecPoolFactory::<Point2D>::new());
    install_factory::<Point2D>(pool.clone());

    let mut first_ptr = None;
    for round in 0..10i64 {
        let mut ring = PooledArray::<Point2D>::new();
        for i in 0..64 {
            ring.emplace(i, round);
        }
        let ptr = ring.as_slice().as_ptr();
        match first_ptr {
            None => first_ptr = Some(ptr),
            Some(expected) => assert_eq!(ptr, expected, "round {round} reallocated"),
        }
    }
    assert_eq!(pool.pooled(), 1);

    reset_factory::<Point2D>();
}

#[test]
fn install_does_not_affect_existing_arrays() {
    let before = PooledArray::<Node>::new();
    let pool: Rc<dyn StoreFactory<Node>> = Rc::new(VecPoolFactory::new());
    install_factory(Rc::clone(&pool));

    let after = PooledArray::<Node>::new();
    assert!(Rc::ptr_eq(&after.factory(), &pool));
    assert!(!Rc::ptr_eq(&before.factory(), &pool));

    reset_factory::<Node>();
    let reset = PooledArray::<Node>::new();
    assert!(!Rc::ptr_eq(&reset.factory(), &pool));
    assert!(Rc::ptr_eq(&after.factory(), &pool), "old array keeps its factory");
}

#[test]
fn explicit_factory_bypasses_registry() {
    let pool = Rc::new(VecPoolFactory::<u16>::with_config(FactoryConfig::new(4)));
    let factory: Rc<dyn StoreFactory<u16>> = pool.clone();

    let stores: Vec<_> = (0..6)
        .map(|i| {
            let mut a = PooledArray::with_factory(&factory);
            a.push_back(i);
            a
        })
        .collect();
    assert!(!Rc::ptr_eq(&current_factory::<u16>(), &factory));

    drop(stores);
    assert_eq!(pool.pooled(), 4, "pool keeps at most max_pooled_stores");
}

#[test]
fn reused_store_comes_back_empty() {
    let pool = Rc::new(VecPoolFactory::<String>::new());
    let factory: Rc<dyn StoreFactory<String>> = pool.clone();

    let mut a = PooledArray::with_factory(&factory);
    a.push_back(String::from("stale"));
    drop(a);

    let b = PooledArray::with_factory(&factory);
    assert!(b.is_empty());
    assert!(b.capacity() >= 1);
}
