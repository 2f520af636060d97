//! Mathf plugin entry points
//!
//! The host drives the plugin through two calls: a query that reports
//! metadata and rejects incompatible environments, and a load that
//! registers the function catalogue into the script VM. Both contain
//! panics at the boundary; nothing unwinds into the host process.

use std::panic::{catch_unwind, AssertUnwindSafe};

use tracing::{error, info};

pub use mathf_core::{epsilon, CallError, Value, ValueType};
pub use mathf_plugin::{
    Binding, FunctionTable, HostQuery, NativeFn, PluginInfo, RuntimeVersion, ScriptVm, MIN_RUNTIME,
};
pub use mathf_std::{register_funcs, standard_table, NAMESPACE};

pub const PLUGIN_NAME: &str = "Mathf";
pub const PLUGIN_VERSION: &str = env!("CARGO_PKG_VERSION");

fn init_logging() {
    // try_init: the host (or a test harness) may already own a subscriber
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .try_init();
}

fn query_impl(host: &dyn HostQuery) -> Option<PluginInfo> {
    init_logging();
    info!("{} v{}", PLUGIN_NAME, PLUGIN_VERSION);

    if host.is_editor() {
        error!("loaded in editor, marking as incompatible");
        return None;
    }

    let ver = host.runtime_version();
    if ver < MIN_RUNTIME {
        error!("unsupported runtime version {}", ver);
        return None;
    }

    Some(PluginInfo {
        name: PLUGIN_NAME,
        version: PLUGIN_VERSION,
    })
}

/// Query phase: report metadata, reject incompatible hosts.
///
/// `None` marks the plugin incompatible; the host skips loading it.
pub fn plugin_query(host: &dyn HostQuery) -> Option<PluginInfo> {
    match catch_unwind(AssertUnwindSafe(|| query_impl(host))) {
        Ok(info) => info,
        Err(_) => {
            error!("caught panic during plugin query");
            None
        }
    }
}

/// Load phase: register the catalogue. Failure is fatal to this plugin's
/// load but never to the host process.
pub fn plugin_load(vm: Option<&mut dyn ScriptVm>) -> bool {
    match catch_unwind(AssertUnwindSafe(|| mathf_std::register_funcs(vm))) {
        Ok(true) => {
            info!("{} loaded", PLUGIN_NAME);
            true
        }
        Ok(false) => false,
        Err(_) => {
            error!("caught panic during plugin load");
            false
        }
    }
}
