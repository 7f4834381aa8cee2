//! Constructed Instances
//!
//! An instance is the public-interface mapping of a descriptor, tagged with
//! the identity of the factory that produced it. Private state never appears
//! here; the mapping's procedure entries close over it.

use crate::factory::Factory;
use crate::types::FactoryId;
use crate::value::Value;
use anyhow::{anyhow, Result};
use std::collections::BTreeMap;

/// The tagged public-interface mapping returned by `construct`.
///
/// Visible entries are exactly those the descriptor's public-interface
/// mapping declared.
#[derive(Debug, Clone)]
pub struct Instance {
    factory_id: FactoryId,
    entries: BTreeMap<String, Value>,
}

impl Instance {
    /// Assemble an instance already bound to its factory identity.
    pub(crate) fn tagged(factory_id: FactoryId, entries: BTreeMap<String, Value>) -> Self {
        Self {
            factory_id,
            entries,
        }
    }

    /// Identity of the originating factory.
    pub fn factory_id(&self) -> FactoryId {
        self.factory_id
    }

    /// Identity check against a factory.
    pub fn is_instance_of(&self, factory: &Factory) -> bool {
        self.factory_id == factory.id()
    }

    /// Look up a public entry.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries.get(name)
    }

    /// Invoke a public procedure entry with positional arguments.
    pub fn call(&self, name: &str, args: &[Value]) -> Result<Value> {
        let entry = self
            .get(name)
            .ok_or_else(|| anyhow!("no public entry named `{}`", name))?;
        entry.call(args)
    }

    /// The public entries.
    pub fn entries(&self) -> &BTreeMap<String, Value> {
        &self.entries
    }

    /// Public entry names, sorted.
    pub fn names(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
