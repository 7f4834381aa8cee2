//! Descriptor Shape Classification
//!
//! A factory body returns a raw [`Value`]; classification turns it into one of
//! the two legal descriptor shapes or rejects it. Validation is exhaustive
//! pattern matching with one error path per malformed variant, so a shape
//! either classifies cleanly or names exactly what was wrong with it.

use crate::error::ConstructError;
use crate::value::{Procedure, Value};
use std::collections::BTreeMap;

/// Key that marks a compound descriptor's constructor entry.
pub const KEY_CTOR: &str = "ctor";

/// Key that carries a compound descriptor's public interface.
pub const KEY_HEADER: &str = "header";

/// A validated descriptor.
#[derive(Debug, Clone)]
pub enum Descriptor {
    /// The mapping itself is the public interface; no constructor.
    PublicOnly { header: BTreeMap<String, Value> },

    /// A one-time constructor plus the public interface it initializes.
    WithConstructor {
        ctor: Procedure,
        header: BTreeMap<String, Value>,
    },
}

impl Descriptor {
    /// Classify the raw value a factory body returned.
    ///
    /// Legal shapes:
    /// - a non-empty mapping with no `ctor` entry (the mapping is the public
    ///   interface), or
    /// - a mapping of exactly `{ctor, header}`, where `ctor` is callable and
    ///   `header` is itself a non-empty mapping with no nested `ctor` entry.
    pub fn classify(raw: Value) -> Result<Descriptor, ConstructError> {
        let mut entries = match raw {
            Value::Map(entries) => entries,
            Value::Null => return Err(ConstructError::invalid("factory returned null")),
            Value::List(_) => return Err(ConstructError::invalid("factory returned a list")),
            Value::Procedure(_) => {
                return Err(ConstructError::invalid("factory returned a callable"))
            }
            other => {
                return Err(ConstructError::invalid(format!(
                    "factory returned {}, expected a mapping",
                    other.type_name()
                )))
            }
        };

        if entries.is_empty() {
            return Err(ConstructError::invalid("factory returned an empty mapping"));
        }

        match entries.remove(KEY_CTOR) {
            // Simple shape: the mapping is the public interface. Non-empty and
            // ctor-free by the checks above.
            None => Ok(Descriptor::PublicOnly { header: entries }),

            Some(ctor_value) => {
                let ctor = match ctor_value {
                    Value::Procedure(p) => p,
                    other => {
                        return Err(ConstructError::invalid(format!(
                            "`{}` entry must be callable, got {}",
                            KEY_CTOR,
                            other.type_name()
                        )))
                    }
                };

                if entries.len() != 1 {
                    return Err(ConstructError::invalid(format!(
                        "compound descriptor must contain exactly `{}` and `{}` entries",
                        KEY_CTOR, KEY_HEADER
                    )));
                }

                let header = match entries.remove(KEY_HEADER) {
                    Some(Value::Map(header)) => header,
                    Some(other) => {
                        return Err(ConstructError::invalid(format!(
                            "`{}` entry must be a mapping, got {}",
                            KEY_HEADER,
                            other.type_name()
                        )))
                    }
                    None => {
                        return Err(ConstructError::invalid(format!(
                            "compound descriptor is missing a `{}` entry",
                            KEY_HEADER
                        )))
                    }
                };

                validate_header(&header)?;

                Ok(Descriptor::WithConstructor { ctor, header })
            }
        }
    }

    /// The public-interface mapping.
    pub fn header(&self) -> &BTreeMap<String, Value> {
        match self {
            Descriptor::PublicOnly { header } => header,
            Descriptor::WithConstructor { header, .. } => header,
        }
    }

    /// The constructor, when the shape declares one.
    pub fn ctor(&self) -> Option<&Procedure> {
        match self {
            Descriptor::PublicOnly { .. } => None,
            Descriptor::WithConstructor { ctor, .. } => Some(ctor),
        }
    }

    /// Shape label for diagnostics.
    pub fn shape_name(&self) -> &'static str {
        match self {
            Descriptor::PublicOnly { .. } => "simple",
            Descriptor::WithConstructor { .. } => "compound",
        }
    }
}

fn validate_header(header: &BTreeMap<String, Value>) -> Result<(), ConstructError> {
    if header.is_empty() {
        return Err(ConstructError::invalid(format!(
            "`{}` mapping is empty",
            KEY_HEADER
        )));
    }
    if header.contains_key(KEY_CTOR) {
        return Err(ConstructError::invalid(format!(
            "`{}` mapping must not contain a nested `{}` entry",
            KEY_HEADER, KEY_CTOR
        )));
    }
    Ok(())
}
