//! Property-based tests for construction guarantees

use ingot::factory::Factory;
use ingot::state::Private;
use ingot::value::Value;
use proptest::prelude::*;
use std::collections::BTreeMap;

/// Test that the constructor receives exactly the supplied arguments in order
#[test]
fn test_ctor_receives_args_verbatim_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&prop::collection::vec(any::<i64>(), 0..8), |raw_args| {
            let seen = Private::new(Vec::<i64>::new());
            let factory = {
                let seen = seen.clone();
                Factory::new("recorder", move |_| {
                    let seen = seen.clone();
                    let ctor = Value::procedure(move |args| {
                        let ints: Vec<i64> =
                            args.iter().filter_map(Value::as_int).collect();
                        seen.set(ints);
                        Ok(Value::Null)
                    });
                    Value::map([
                        ("ctor", ctor),
                        ("header", Value::map([("ok", Value::Bool(true))])),
                    ])
                })
            };

            let args: Vec<Value> = raw_args.iter().copied().map(Value::Int).collect();
            factory.construct(&args).unwrap();

            assert_eq!(seen.get(), raw_args);
            Ok(())
        })
        .unwrap();
}

/// Test that instance entry names always equal the header's entry names
#[test]
fn test_instance_names_match_header_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &prop::collection::btree_map("[a-z]{1,12}", any::<i64>(), 1..10),
            |entries| {
                // A data entry named `ctor` would switch the mapping to the
                // compound shape and fail classification.
                prop_assume!(!entries.contains_key("ctor"));

                let descriptor_entries = entries.clone();
                let factory = Factory::new("data", move |_| {
                    Value::Map(
                        descriptor_entries
                            .iter()
                            .map(|(name, value)| (name.clone(), Value::Int(*value)))
                            .collect::<BTreeMap<String, Value>>(),
                    )
                });

                let instance = factory.construct(&[]).unwrap();

                let expected: Vec<&str> = entries.keys().map(String::as_str).collect();
                assert_eq!(instance.names(), expected);
                for (name, value) in &entries {
                    assert_eq!(instance.get(name), Some(&Value::Int(*value)));
                }
                assert!(instance.is_instance_of(&factory));
                Ok(())
            },
        )
        .unwrap();
}

/// Test that repeated constructions never leak private state between instances
#[test]
fn test_constructions_are_independent_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&(1usize..20, 1usize..20), |(a_calls, b_calls)| {
            let factory = counter();

            let a = factory.construct(&[]).unwrap();
            let b = factory.construct(&[]).unwrap();

            let mut last_a = 0;
            for _ in 0..a_calls {
                last_a = a.call("next", &[]).unwrap().as_int().unwrap();
            }
            let mut last_b = 0;
            for _ in 0..b_calls {
                last_b = b.call("next", &[]).unwrap().as_int().unwrap();
            }

            assert_eq!(last_a, a_calls as i64);
            assert_eq!(last_b, b_calls as i64);
            Ok(())
        })
        .unwrap();
}

fn counter() -> Factory {
    Factory::new("counter", |_| {
        let count = Private::new(0i64);
        let next = {
            let count = count.clone();
            Value::procedure(move |_| Ok(Value::Int(count.with(|n| {
                *n += 1;
                *n
            }))))
        };
        Value::map([("next", next)])
    })
}
