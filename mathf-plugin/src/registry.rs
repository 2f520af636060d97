//! Function binding table
//!
//! An explicit ordered list of (name, native function) pairs, built once at
//! initialization and handed to the host. A `Vec` rather than a map: the
//! table is small, registration order is part of the contract, and lookup
//! is a cold path used only by tests and host tooling.

use crate::{NativeFn, ScriptVm};
use mathf_core::{CallError, Value};

/// One named binding
#[derive(Debug, Clone, Copy)]
pub struct Binding {
    pub name: &'static str,
    pub func: NativeFn,
}

/// Ordered name-to-function binding table
#[derive(Debug, Default)]
pub struct FunctionTable {
    bindings: Vec<Binding>,
}

impl FunctionTable {
    pub fn new() -> Self {
        Self {
            bindings: Vec::new(),
        }
    }

    pub fn with(mut self, name: &'static str, func: NativeFn) -> Self {
        self.bindings.push(Binding { name, func });
        self
    }

    /// Look up a binding by name. Case-insensitive, like the host VM.
    pub fn get(&self, name: &str) -> Option<&Binding> {
        self.bindings
            .iter()
            .find(|b| b.name.eq_ignore_ascii_case(name))
    }

    /// Call a bound function by name
    pub fn call(&self, name: &str, args: &[Value]) -> Result<Value, CallError> {
        match self.get(name) {
            Some(binding) => binding.func.call(binding.name, args),
            None => Err(CallError::Unknown(name.to_string())),
        }
    }

    /// Push every binding into the host VM, in table order
    pub fn register_into(&self, vm: &mut dyn ScriptVm, namespace: &str) {
        for binding in &self.bindings {
            vm.register_function(namespace, binding.name, binding.func);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Binding> {
        self.bindings.iter()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
