//! Integration tests for the public lnxinfo API
//!
//! These run against the real host, so they only assert properties that
//! hold regardless of which distribution (if any) is detected.

use lnxinfo::{DistroVersion, SystemInfo, UNKNOWN};

#[test]
fn detect_always_populates_both_fields() {
    let distro = DistroVersion::detect();
    assert!(!distro.name.is_empty());
    assert!(!distro.version.is_empty());
}

#[test]
fn default_descriptor_uses_sentinels() {
    let distro = DistroVersion::default();
    assert_eq!(distro.name, UNKNOWN);
    assert_eq!(distro.version, UNKNOWN);
}

#[test]
fn system_info_round_trips_through_json() {
    let info = SystemInfo::collect();
    let json = serde_json::to_string(&info).unwrap();
    let deserialized: SystemInfo = serde_json::from_str(&json).unwrap();
    assert_eq!(deserialized.os, info.os);
    assert_eq!(deserialized.name, info.name);
    assert_eq!(deserialized.version, info.version);
}
