//! Regression test parameters and operations

use crate::error::{TestError, TestResult};
use crate::regout_dir;
use pixedit_core::PixelBuffer;
use std::fs;

/// Regression test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Compare values and buffers (default)
    #[default]
    Compare,
    /// Compare, and also dump buffers to `tests/regout`
    Display,
}

impl RegTestMode {
    /// Parse mode from the `REGTEST_MODE` environment variable
    pub fn from_env() -> Self {
        match std::env::var("REGTEST_MODE")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "display" => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// Regression test parameters
///
/// This structure tracks the state of a regression test, including
/// the test name, current index, mode, and success status. Checks do not
/// panic; failures are collected and reported by [`RegParams::cleanup`].
pub struct RegParams {
    /// Name of the test (e.g., "rotate")
    pub test_name: String,
    /// Current test index (incremented before each check)
    index: usize,
    /// Test mode
    pub mode: RegTestMode,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    ///
    /// The mode is taken from the `REGTEST_MODE` environment variable.
    pub fn new(test_name: &str) -> Self {
        let mode = RegTestMode::from_env();

        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");
        eprintln!("Mode: {:?}", mode);

        Self {
            test_name: test_name.to_string(),
            index: 0,
            mode,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current test index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Check if in display mode
    pub fn display(&self) -> bool {
        self.mode == RegTestMode::Display
    }

    fn fail(&mut self, msg: String) {
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
    }

    /// Compare two floating-point values
    ///
    /// Returns `true` if `|expected - actual| <= delta`.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff > delta {
            let msg = format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            );
            self.fail(msg);
            false
        } else {
            true
        }
    }

    /// Record a boolean condition
    pub fn check(&mut self, condition: bool, what: &str) -> bool {
        self.index += 1;
        if !condition {
            let msg = format!(
                "Failure in {}_reg: check for index {} - {}",
                self.test_name, self.index, what
            );
            self.fail(msg);
        }
        condition
    }

    /// Compare two buffers for exact equality
    ///
    /// Returns `true` if the buffers have the same dimensions and every
    /// pixel matches.
    pub fn compare_buffers(&mut self, expected: &PixelBuffer, actual: &PixelBuffer) -> bool {
        self.index += 1;

        let diff = match expected.count_pixel_diffs(actual) {
            Ok(diff) => diff,
            Err(e) => {
                let msg = format!(
                    "Failure in {}_reg: buffer comparison for index {} - {}",
                    self.test_name, self.index, e
                );
                self.fail(msg);
                return false;
            }
        };

        match diff.first_diff {
            None => true,
            Some((x, y)) => {
                let msg = format!(
                    "Failure in {}_reg: buffer comparison for index {} - \
                     {} pixels differ, first at ({}, {})",
                    self.test_name, self.index, diff.n_diff, x, y
                );
                self.fail(msg);
                false
            }
        }
    }

    /// Compare two binary data arrays
    pub fn compare_strings(&mut self, data1: &[u8], data2: &[u8]) -> bool {
        self.index += 1;

        if data1 != data2 {
            let msg = format!(
                "Failure in {}_reg: string comparison for index {}\n\
                 sizes: {} vs {}",
                self.test_name,
                self.index,
                data1.len(),
                data2.len()
            );
            self.fail(msg);
            false
        } else {
            true
        }
    }

    /// Write a buffer as PNG for visual inspection
    ///
    /// Only writes in display mode; otherwise does nothing. Empty buffers
    /// are skipped since PNG cannot represent them.
    pub fn write_buffer(&mut self, buf: &PixelBuffer, label: &str) -> TestResult<()> {
        if !self.display() || buf.is_empty() {
            return Ok(());
        }

        let dir = regout_dir();
        fs::create_dir_all(&dir).map_err(|e| TestError::DirectoryCreate {
            path: dir.clone(),
            message: e.to_string(),
        })?;

        let path = format!("{}/{}.{:02}.{}.png", dir, self.test_name, self.index, label);
        pixedit_io::write_image(buf, &path).map_err(|e| TestError::ImageWrite {
            path: path.clone(),
            message: e.to_string(),
        })?;
        eprintln!("Wrote: {}", path);
        Ok(())
    }

    /// Clean up and report results
    ///
    /// Returns `true` if all checks passed, `false` if any failed.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.success
    }

    /// Check if all checks have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}
