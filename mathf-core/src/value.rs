//! Scalar values crossing the script VM boundary
//!
//! The host calls registered functions with 32-bit floats, 32-bit signed
//! integers, or booleans, and receives one of the same back. Nothing here
//! allocates.

use serde::{Deserialize, Serialize};

/// A scalar argument or return value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Value {
    Float(f32),
    Int(i32),
    Bool(bool),
}

/// Scalar type tag, used in signatures and error messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueType {
    Float,
    Int,
    Bool,
}

impl ValueType {
    pub fn name(&self) -> &'static str {
        match self {
            ValueType::Float => "Float",
            ValueType::Int => "Int",
            ValueType::Bool => "Bool",
        }
    }
}

impl Value {
    // ========== Safe Accessors (never panic) ==========

    /// Read as a float. Ints promote, matching the host VM's numeric
    /// conversion rules.
    pub fn as_float(&self) -> Option<f32> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Int(i) => Some(*i as f32),
            Value::Bool(_) => None,
        }
    }

    pub fn as_int(&self) -> Option<i32> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Float(_) => ValueType::Float,
            Value::Int(_) => ValueType::Int,
            Value::Bool(_) => ValueType::Bool,
        }
    }

    /// Type name for error messages
    pub fn type_name(&self) -> &'static str {
        self.value_type().name()
    }
}

impl From<f32> for Value {
    fn from(f: f32) -> Self {
        Value::Float(f)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}
