//! Linux distribution detection
//!
//! Resolves the distribution name and version through an ordered chain
//! of strategies: the Alpine release marker file first, then the
//! `lsb_release` utility. Each strategy returns `Option`; the first hit
//! short-circuits the chain and a full miss yields the `"UNKNOWN"`
//! defaults. No failure ever reaches the caller.

use std::path::Path;
use std::process::Command;

use serde::{Deserialize, Serialize};

/// Sentinel for any field that could not be detected.
pub const UNKNOWN: &str = "UNKNOWN";

/// Marker file whose presence identifies an Alpine system.
const ALPINE_RELEASE_PATH: &str = "/etc/alpine-release";

/// Best-effort description of the running distribution.
///
/// Both fields are always populated; a partial result (one field
/// detected, the other still `"UNKNOWN"`) is valid and returned as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistroVersion {
    pub name: String,
    pub version: String,
}

impl Default for DistroVersion {
    fn default() -> Self {
        Self {
            name: UNKNOWN.to_string(),
            version: UNKNOWN.to_string(),
        }
    }
}

impl DistroVersion {
    /// Detect the running distribution.
    ///
    /// One filesystem read attempt and at most one external process
    /// invocation; blocking, no timeout. Never fails: errors in either
    /// probe are discarded and detection degrades to the defaults.
    pub fn detect() -> Self {
        resolve(Path::new(ALPINE_RELEASE_PATH), "lsb_release")
    }
}

fn resolve(marker_path: &Path, lsb_program: &str) -> DistroVersion {
    from_alpine_release(marker_path)
        .or_else(|| from_lsb_release(lsb_program))
        .unwrap_or_default()
}

/// Read the Alpine marker file; its trimmed content is the version.
///
/// Missing file, permission denied, and I/O errors are all treated the
/// same: the strategy reports a miss and the chain moves on.
fn from_alpine_release(path: &Path) -> Option<DistroVersion> {
    let content = std::fs::read_to_string(path).ok()?;
    Some(DistroVersion {
        name: "Alpine".to_string(),
        version: content.trim().to_string(),
    })
}

/// Invoke `lsb_release -a` and parse its stdout.
///
/// Execution failure or a non-zero exit status is a total miss for this
/// strategy; stderr is not captured.
fn from_lsb_release(program: &str) -> Option<DistroVersion> {
    let output = match Command::new(program).arg("-a").output() {
        Ok(output) => output,
        Err(e) => {
            tracing::debug!(error = %e, "failed to execute lsb_release");
            return None;
        }
    };
    if !output.status.success() {
        tracing::debug!(status = %output.status, "lsb_release exited with failure");
        return None;
    }
    Some(parse_lsb_output(&String::from_utf8_lossy(&output.stdout)))
}

/// Parse the line-oriented `Key: Value` output of `lsb_release -a`.
///
/// Each line is split on every colon and only fields 0 and 1 are read,
/// so a value that itself contains a colon is truncated at the second
/// colon. Lines without a colon are skipped; if a key repeats, the last
/// occurrence wins. Keys match case-sensitively.
fn parse_lsb_output(out: &str) -> DistroVersion {
    let mut resolved = DistroVersion::default();
    for line in out.split('\n') {
        let fields: Vec<&str> = line.split(':').collect();
        if fields.len() < 2 {
            continue;
        }
        let key = fields[0].trim();
        let value = fields[1].trim();
        match key {
            "Distributor ID" => resolved.name = value.to_string(),
            "Release" => resolved.version = value.to_string(),
            _ => {}
        }
    }
    resolved
}
