//! The script VM registration boundary

use crate::NativeFn;

/// Registration target supplied by the scripting host.
///
/// The host implements this; the plugin only ever pushes bindings through
/// it, once, during load. Individual registrations have no failure mode.
pub trait ScriptVm {
    fn register_function(&mut self, namespace: &str, name: &str, func: NativeFn);
}
