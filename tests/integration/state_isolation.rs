//! Integration tests for private-state isolation
//!
//! Every construction must produce a fresh descriptor and a fresh private
//! state set; nothing is shared between instances unless it was explicitly
//! placed in factory-local state.

use super::test_utils::{counter_factory, point_factory};
use ingot::factory::Factory;
use ingot::value::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[test]
fn test_instances_have_independent_private_state() {
    let factory = counter_factory();

    let a = factory.construct(&[]).unwrap();
    let b = factory.construct(&[]).unwrap();

    a.call("next", &[]).unwrap();
    a.call("next", &[]).unwrap();
    a.call("next", &[]).unwrap();

    // B's counter is untouched by A's mutations.
    assert_eq!(b.call("next", &[]).unwrap(), Value::Int(1));
    assert_eq!(a.call("next", &[]).unwrap(), Value::Int(4));
}

#[test]
fn test_compound_instances_have_independent_private_state() {
    let factory = point_factory();

    let a = factory.construct(&[Value::Int(1), Value::Int(1)]).unwrap();
    let b = factory.construct(&[Value::Int(9), Value::Int(9)]).unwrap();

    a.call("shift", &[Value::Int(100), Value::Int(100)]).unwrap();

    assert_eq!(a.call("x", &[]).unwrap(), Value::Int(101));
    assert_eq!(b.call("x", &[]).unwrap(), Value::Int(9));
}

#[test]
fn test_factory_body_runs_once_per_construction() {
    let bodies = Arc::new(AtomicUsize::new(0));
    let factory = {
        let bodies = Arc::clone(&bodies);
        Factory::new("counted-body", move |_| {
            bodies.fetch_add(1, Ordering::SeqCst);
            Value::map([("x", Value::Int(1))])
        })
    };

    factory.construct(&[]).unwrap();
    factory.construct(&[]).unwrap();
    factory.construct(&[]).unwrap();

    assert_eq!(bodies.load(Ordering::SeqCst), 3);
}

#[test]
fn test_descriptors_are_not_cached_across_constructions() {
    let factory = counter_factory();

    // If descriptors were reused, the second instance would share the first
    // instance's closures and continue its count.
    let a = factory.construct(&[]).unwrap();
    assert_eq!(a.call("next", &[]).unwrap(), Value::Int(1));

    let b = factory.construct(&[]).unwrap();
    assert_eq!(b.call("next", &[]).unwrap(), Value::Int(1));

    let a_proc = a.get("next").unwrap();
    let b_proc = b.get("next").unwrap();
    assert_ne!(a_proc, b_proc);
}

#[test]
fn test_clone_of_instance_shares_private_state() {
    let factory = counter_factory();
    let original = factory.construct(&[]).unwrap();
    let alias = original.clone();

    original.call("next", &[]).unwrap();
    // The clone's procedures close over the same private cell.
    assert_eq!(alias.call("next", &[]).unwrap(), Value::Int(2));
}
