//! pixedit-test - Regression test framework for pixedit
//!
//! This crate provides a small regression harness shared by the
//! integration tests of every pixedit crate, supporting two modes:
//!
//! - **Compare**: Check computed values and buffers (default)
//! - **Display**: Additionally write intermediate buffers as PNG files
//!   under `tests/regout` for visual inspection
//!
//! # Usage
//!
//! ```ignore
//! use pixedit_test::{RegParams, fixtures};
//!
//! let mut rp = RegParams::new("rotate");
//! let buf = fixtures::numbered(4, 3);
//! rp.compare_values(3.0, buf.height() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "compare" or "display"

mod error;
pub mod fixtures;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // pixedit-test is at crates/pixedit-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}
