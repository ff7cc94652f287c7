//! LNXInfo - Host platform detection for Linux
//!
//! Provides:
//! - `DistroVersion`: best-effort distribution name/version resolver
//! - `SystemInfo`: host summary embedding the resolved distribution
//!
//! Detection never fails: every probe that errors out degrades to the
//! `"UNKNOWN"` sentinel instead of surfacing an error to the caller.

pub mod platform;
pub mod system;

pub use platform::{DistroVersion, UNKNOWN};
pub use system::SystemInfo;
