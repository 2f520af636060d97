//! Host process query types
//!
//! Before loading the plugin the host asks for metadata and gives the
//! plugin a chance to reject incompatible environments (editor contexts,
//! runtimes older than the minimum this plugin was built against).

use serde::Serialize;
use std::fmt;

/// Host runtime version, ordered lexicographically
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct RuntimeVersion {
    pub major: u16,
    pub minor: u16,
    pub patch: u16,
}

impl RuntimeVersion {
    pub const fn new(major: u16, minor: u16, patch: u16) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl fmt::Display for RuntimeVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Oldest host runtime the plugin supports
pub const MIN_RUNTIME: RuntimeVersion = RuntimeVersion::new(1, 5, 39);

/// Interface the host exposes during the query phase
pub trait HostQuery {
    fn runtime_version(&self) -> RuntimeVersion;

    /// True when loaded inside an editor rather than the game runtime
    fn is_editor(&self) -> bool;
}

/// Plugin metadata reported back to the host
#[derive(Debug, Clone, Serialize)]
pub struct PluginInfo {
    pub name: &'static str,
    pub version: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_ordering() {
        assert!(RuntimeVersion::new(1, 5, 38) < MIN_RUNTIME);
        assert!(RuntimeVersion::new(1, 5, 39) >= MIN_RUNTIME);
        assert!(RuntimeVersion::new(1, 6, 0) > MIN_RUNTIME);
        assert!(RuntimeVersion::new(2, 0, 0) > RuntimeVersion::new(1, 99, 99));
    }

    #[test]
    fn test_version_display() {
        assert_eq!(MIN_RUNTIME.to_string(), "1.5.39");
    }
}
