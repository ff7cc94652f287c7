//! Host system summary
//!
//! Folds the resolved distribution into a wider description of the
//! running system for embedding in structured reports.

use serde::{Deserialize, Serialize};

use crate::platform::DistroVersion;

/// Summary of the host system.
///
/// `name` and `version` come from distribution detection and default to
/// `"UNKNOWN"`; `kernel` is empty when `/proc/version` is unreadable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemInfo {
    pub os: String,
    pub arch: String,
    pub kernel: String,
    pub name: String,
    pub version: String,
}

impl SystemInfo {
    /// Collect system information from the current host.
    pub fn collect() -> Self {
        let distro = DistroVersion::detect();
        Self {
            os: std::env::consts::OS.to_string(),
            arch: std::env::consts::ARCH.to_string(),
            kernel: read_kernel_version(),
            name: distro.name,
            version: distro.version,
        }
    }
}

fn read_kernel_version() -> String {
    std::fs::read_to_string("/proc/version")
        .ok()
        .and_then(|v| v.split_whitespace().nth(2).map(String::from))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_populates_distro_fields() {
        let info = SystemInfo::collect();
        assert!(!info.name.is_empty());
        assert!(!info.version.is_empty());
    }

    #[test]
    #[cfg(target_os = "linux")]
    fn test_collect_reports_linux() {
        let info = SystemInfo::collect();
        assert_eq!(info.os, "linux");
        assert!(!info.arch.is_empty());
    }
}
