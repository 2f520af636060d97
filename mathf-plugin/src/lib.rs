//! Mathf Plugin System
//!
//! The machinery that sits between the pure function catalogue and the
//! scripting host:
//! - `NativeFn`: adapts typed native functions to host argument lists
//! - `FunctionTable`: the explicit ordered name-to-function binding table
//! - `ScriptVm`: the externally supplied registration target
//! - Host query types (`RuntimeVersion`, `PluginInfo`)

mod host;
mod native;
mod registry;
mod vm;

pub use host::{HostQuery, PluginInfo, RuntimeVersion, MIN_RUNTIME};
pub use native::NativeFn;
pub use registry::{Binding, FunctionTable};
pub use vm::ScriptVm;

/// Re-export core types for plugin consumers
pub mod prelude {
    pub use crate::{Binding, FunctionTable, HostQuery, NativeFn, PluginInfo, RuntimeVersion, ScriptVm};
    pub use mathf_core::prelude::*;
}
