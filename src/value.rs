//! Dynamic Value Model
//!
//! The value universe that factory bodies, constructors, and instance
//! procedures exchange. Data variants are plain structural values; the
//! `Procedure` variant wraps a shared callable and is the only way behavior
//! enters a descriptor.

use anyhow::{anyhow, Result};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Signature of a callable value: positional arguments in, one value out.
///
/// Failures are ordinary user errors and are never classified by the
/// construction protocol.
pub type ProcedureFn = dyn Fn(&[Value]) -> Result<Value> + Send + Sync;

/// A callable value.
///
/// Clones share the same underlying closure; equality is identity of that
/// allocation, never structural.
#[derive(Clone)]
pub struct Procedure(Arc<ProcedureFn>);

impl Procedure {
    /// Wrap a closure as a callable value.
    pub fn new(f: impl Fn(&[Value]) -> Result<Value> + Send + Sync + 'static) -> Self {
        Procedure(Arc::new(f))
    }

    /// Invoke the closure with positional arguments.
    pub fn invoke(&self, args: &[Value]) -> Result<Value> {
        (self.0)(args)
    }

    /// Whether two procedures share the same underlying closure.
    pub fn ptr_eq(&self, other: &Procedure) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Procedure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<procedure>")
    }
}

/// A dynamic value.
#[derive(Debug, Clone)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    List(Vec<Value>),
    /// Name-to-value mapping with deterministic iteration order.
    Map(BTreeMap<String, Value>),
    Procedure(Procedure),
}

impl Value {
    /// Build a map value from an entry iterator.
    pub fn map<K: Into<String>>(entries: impl IntoIterator<Item = (K, Value)>) -> Value {
        Value::Map(
            entries
                .into_iter()
                .map(|(name, value)| (name.into(), value))
                .collect(),
        )
    }

    /// Wrap a closure as a procedure value.
    pub fn procedure(f: impl Fn(&[Value]) -> Result<Value> + Send + Sync + 'static) -> Value {
        Value::Procedure(Procedure::new(f))
    }

    /// Build a text value.
    pub fn text(s: impl Into<String>) -> Value {
        Value::Text(s.into())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_callable(&self) -> bool {
        matches!(self, Value::Procedure(_))
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(x) => Some(*x),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Value::Map(entries) => Some(entries),
            _ => None,
        }
    }

    pub fn as_procedure(&self) -> Option<&Procedure> {
        match self {
            Value::Procedure(p) => Some(p),
            _ => None,
        }
    }

    /// Name of the variant, for diagnostics and error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Text(_) => "text",
            Value::List(_) => "list",
            Value::Map(_) => "map",
            Value::Procedure(_) => "procedure",
        }
    }

    /// Invoke this value as a procedure.
    pub fn call(&self, args: &[Value]) -> Result<Value> {
        match self {
            Value::Procedure(p) => p.invoke(args),
            other => Err(anyhow!("value of type {} is not callable", other.type_name())),
        }
    }

    /// Convert a data value to JSON.
    ///
    /// Fails on any value containing a procedure; behavior is not
    /// serializable.
    pub fn to_json(&self) -> Result<serde_json::Value> {
        match self {
            Value::Null => Ok(serde_json::Value::Null),
            Value::Bool(b) => Ok(serde_json::Value::Bool(*b)),
            Value::Int(n) => Ok(serde_json::Value::from(*n)),
            Value::Float(x) => serde_json::Number::from_f64(*x)
                .map(serde_json::Value::Number)
                .ok_or_else(|| anyhow!("float {} has no JSON representation", x)),
            Value::Text(s) => Ok(serde_json::Value::String(s.clone())),
            Value::List(items) => items
                .iter()
                .map(Value::to_json)
                .collect::<Result<Vec<_>>>()
                .map(serde_json::Value::Array),
            Value::Map(entries) => entries
                .iter()
                .map(|(name, value)| Ok((name.clone(), value.to_json()?)))
                .collect::<Result<serde_json::Map<_, _>>>()
                .map(serde_json::Value::Object),
            Value::Procedure(_) => Err(anyhow!("procedure values are not serializable")),
        }
    }

    /// Convert JSON into a data value. Total; never produces a procedure.
    pub fn from_json(json: &serde_json::Value) -> Value {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(*b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else {
                    Value::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => Value::Text(s.clone()),
            serde_json::Value::Array(items) => {
                Value::List(items.iter().map(Value::from_json).collect())
            }
            serde_json::Value::Object(entries) => Value::Map(
                entries
                    .iter()
                    .map(|(name, value)| (name.clone(), Value::from_json(value)))
                    .collect(),
            ),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Text(a), Value::Text(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            (Value::Procedure(a), Value::Procedure(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Value {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Value {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Value {
        Value::Float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Value {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Value {
        Value::Text(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Value {
        Value::List(items)
    }
}
