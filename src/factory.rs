//! Factories and Factory-Local State
//!
//! A factory pairs a producer closure with a process-unique identity and an
//! attached store of factory-local state shared by every instance it
//! produces. The producer runs once per construction and must build fresh
//! private state on each run.

use crate::construct;
use crate::error::ConstructError;
use crate::instance::Instance;
use crate::types::FactoryId;
use crate::value::Value;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Signature of a producer: builds one raw descriptor per call.
///
/// The handle is how the producer, and the closures it builds, reach the
/// factory-local state of the factory that invoked it.
pub type ProducerFn = dyn Fn(&FactoryLocals) -> Value + Send + Sync;

/// Factory-local (quasi-static) state attached to a factory.
///
/// Visible to every instance the factory produces; lives as long as the
/// factory or until explicitly cleared. Locking is per access only:
/// read-modify-write sequences spanning several calls need external
/// coordination.
#[derive(Clone, Default)]
pub struct FactoryLocals {
    entries: Arc<RwLock<BTreeMap<String, Value>>>,
}

impl FactoryLocals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<Value> {
        self.entries.read().get(key).cloned()
    }

    /// Store `value` under `key`, replacing any previous value.
    pub fn set(&self, key: impl Into<String>, value: Value) {
        self.entries.write().insert(key.into(), value);
    }

    /// Compute a new value for `key` from the current one, under a single
    /// write lock, and return the stored result.
    pub fn update(&self, key: &str, f: impl FnOnce(Option<&Value>) -> Value) -> Value {
        let mut entries = self.entries.write();
        let next = f(entries.get(key));
        entries.insert(key.to_string(), next.clone());
        next
    }

    /// Remove and return the value stored under `key`.
    pub fn remove(&self, key: &str) -> Option<Value> {
        self.entries.write().remove(key)
    }

    /// Drop all factory-local state.
    pub fn clear(&self) {
        self.entries.write().clear();
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl fmt::Debug for FactoryLocals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FactoryLocals")
            .field("entries", &*self.entries.read())
            .finish()
    }
}

/// A factory: the unit the construction protocol operates on.
pub struct Factory {
    id: FactoryId,
    name: String,
    producer: Box<ProducerFn>,
    locals: FactoryLocals,
}

impl Factory {
    /// Create a factory from a producer closure.
    ///
    /// The factory's identity and factory-local store are allocated here,
    /// once, and shared by every instance the factory will produce.
    pub fn new(
        name: impl Into<String>,
        producer: impl Fn(&FactoryLocals) -> Value + Send + Sync + 'static,
    ) -> Self {
        Self {
            id: FactoryId::next(),
            name: name.into(),
            producer: Box::new(producer),
            locals: FactoryLocals::new(),
        }
    }

    pub fn id(&self) -> FactoryId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The factory-local state store.
    pub fn locals(&self) -> &FactoryLocals {
        &self.locals
    }

    /// Invoke the producer once, yielding a fresh raw descriptor.
    pub(crate) fn produce(&self) -> Value {
        (self.producer)(&self.locals)
    }

    /// Construct one instance, running the full construction protocol.
    pub fn construct(&self, args: &[Value]) -> Result<Instance, ConstructError> {
        construct::construct(self, args)
    }
}

impl fmt::Debug for Factory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Factory")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("locals", &self.locals)
            .finish_non_exhaustive()
    }
}

/// In-memory registry of named factories.
///
/// Convenience for hosts that manage a set of factories; the core protocol
/// never requires it.
pub struct FactoryRegistry {
    factories: BTreeMap<String, Arc<Factory>>,
}

impl FactoryRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            factories: BTreeMap::new(),
        }
    }

    /// Register a factory under its name, returning a shared handle.
    ///
    /// A factory registered under an already-used name replaces the previous
    /// one.
    pub fn register(&mut self, factory: Factory) -> Arc<Factory> {
        let factory = Arc::new(factory);
        self.factories
            .insert(factory.name().to_string(), Arc::clone(&factory));
        factory
    }

    /// Get a factory by name.
    pub fn get(&self, name: &str) -> Option<Arc<Factory>> {
        self.factories.get(name).cloned()
    }

    /// Get a factory by name or return an error.
    pub fn get_or_error(&self, name: &str) -> Result<Arc<Factory>, ConstructError> {
        self.get(name)
            .ok_or_else(|| ConstructError::UnknownFactory(name.to_string()))
    }

    /// Construct an instance from the named factory.
    pub fn construct(&self, name: &str, args: &[Value]) -> Result<Instance, ConstructError> {
        self.get_or_error(name)?.construct(args)
    }

    /// All registered factories.
    pub fn list_all(&self) -> Vec<Arc<Factory>> {
        self.factories.values().cloned().collect()
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        self.factories.keys().map(String::as_str).collect()
    }

    /// Remove a factory from the registry.
    pub fn remove(&mut self, name: &str) -> Option<Arc<Factory>> {
        self.factories.remove(name)
    }
}

impl Default for FactoryRegistry {
    fn default() -> Self {
        Self::new()
    }
}
