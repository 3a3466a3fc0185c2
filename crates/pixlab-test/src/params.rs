//! Regression test parameters and operations

use pixlab_core::Grid;

/// Regression test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Report failures only (default)
    #[default]
    Quiet,
    /// Also report every passing comparison
    Verbose,
}

impl RegTestMode {
    /// Parse mode from the `REGTEST_MODE` environment variable
    pub fn from_env() -> Self {
        match std::env::var("REGTEST_MODE")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "verbose" => Self::Verbose,
            _ => Self::Quiet,
        }
    }
}

/// Regression test parameters
///
/// This structure tracks the state of a regression test, including
/// the test name, current index, and success status. Comparisons never
/// panic; failures are collected and reported by [`RegParams::cleanup`].
pub struct RegParams {
    /// Name of the test (e.g., "border")
    pub test_name: String,
    /// Current test index (incremented before each comparison)
    index: usize,
    /// Reporting mode
    pub mode: RegTestMode,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    ///
    /// # Arguments
    ///
    /// * `test_name` - Name of the test (e.g., "border")
    pub fn new(test_name: &str) -> Self {
        let mode = RegTestMode::from_env();

        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");

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

    fn record(&mut self, ok: bool, what: &str, detail: impl FnOnce() -> String) -> bool {
        if ok {
            if self.mode == RegTestMode::Verbose {
                eprintln!("  ok {}_reg[{}]: {}", self.test_name, self.index, what);
            }
        } else {
            let msg = format!(
                "Failure in {}_reg: {} for index {}\n{}",
                self.test_name,
                what,
                self.index,
                detail()
            );
            eprintln!("{}", msg);
            self.failures.push(msg);
            self.success = false;
        }
        ok
    }

    /// Compare two floating-point values
    ///
    /// # Arguments
    ///
    /// * `expected` - Expected value
    /// * `actual` - Actual computed value
    /// * `delta` - Maximum allowed difference
    ///
    /// # Returns
    ///
    /// `true` if values match within delta, `false` otherwise.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();
        self.record(diff <= delta, "value comparison", || {
            format!(
                "difference = {} but allowed delta = {}\nexpected = {}, actual = {}",
                diff, delta, expected, actual
            )
        })
    }

    /// Compare two grids for exact equality
    ///
    /// Reports a dimension mismatch or the first differing pixel.
    pub fn compare_grids(&mut self, expected: &Grid, actual: &Grid) -> bool {
        self.index += 1;

        if !expected.sizes_equal(actual) {
            let (ew, eh, aw, ah) = (
                expected.width(),
                expected.height(),
                actual.width(),
                actual.height(),
            );
            return self.record(false, "grid comparison", || {
                format!("dimension mismatch: expected {ew}x{eh}, got {aw}x{ah}")
            });
        }

        let first_diff = expected
            .data()
            .iter()
            .zip(actual.data())
            .position(|(a, b)| a != b);
        let width = expected.width() as usize;
        self.record(first_diff.is_none(), "grid comparison", || match first_diff {
            Some(i) => format!(
                "pixel mismatch at ({}, {}): expected {}, got {}",
                i % width,
                i / width,
                expected.data()[i],
                actual.data()[i]
            ),
            None => String::new(),
        })
    }

    /// Compare two sample arrays
    ///
    /// # Returns
    ///
    /// `true` if the arrays are identical, `false` otherwise.
    pub fn compare_samples(&mut self, expected: &[u8], actual: &[u8]) -> bool {
        self.index += 1;
        let same = expected == actual;
        self.record(same, "sample comparison", || {
            format!("sizes: {} vs {}", expected.len(), actual.len())
        })
    }

    /// Record a boolean condition
    pub fn check(&mut self, condition: bool, what: &str) -> bool {
        self.index += 1;
        self.record(condition, what, String::new)
    }

    /// Clean up and report results
    ///
    /// # Returns
    ///
    /// `true` if all comparisons passed, `false` if any failed.
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

    /// Check if all comparisons have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}
