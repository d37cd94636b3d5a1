//! Regression test parameters and operations

use blobcam_core::{Box, Plane};

/// Regression test parameters
///
/// This structure tracks the state of a regression test: the test name,
/// the index of the current check and every recorded failure. Checks never
/// panic; call [`RegParams::cleanup`] at the end and assert on its result.
pub struct RegParams {
    /// Name of the test (e.g., "otsu")
    pub test_name: String,
    /// Current check index (incremented before each check)
    index: usize,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    ///
    /// Also installs the test logger so pipeline log records show up with
    /// `RUST_LOG` set.
    pub fn new(test_name: &str) -> Self {
        crate::init_logging();

        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");

        Self {
            test_name: test_name.to_string(),
            index: 0,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current check index
    pub fn index(&self) -> usize {
        self.index
    }

    fn fail(&mut self, msg: String) {
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
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

    /// Record a boolean condition as a check
    pub fn check(&mut self, condition: bool, what: &str) -> bool {
        self.index += 1;
        if !condition {
            let msg = format!(
                "Failure in {}_reg: check {} failed: {}",
                self.test_name, self.index, what
            );
            self.fail(msg);
        }
        condition
    }

    /// Compare two planes for exact equality
    ///
    /// Reports the first differing sample.
    pub fn compare_planes(&mut self, plane1: &Plane, plane2: &Plane) -> bool {
        self.index += 1;

        if plane1.dimensions() != plane2.dimensions() {
            let msg = format!(
                "Failure in {}_reg: plane comparison for index {} - dimension mismatch {:?} vs {:?}",
                self.test_name,
                self.index,
                plane1.dimensions(),
                plane2.dimensions()
            );
            self.fail(msg);
            return false;
        }

        for row in 0..plane1.height() {
            for col in 0..plane1.width() {
                let p1 = plane1.get_unchecked(row, col);
                let p2 = plane2.get_unchecked(row, col);
                if p1 != p2 {
                    let msg = format!(
                        "Failure in {}_reg: plane comparison for index {} - sample mismatch at row {} col {}: {} vs {}",
                        self.test_name, self.index, row, col, p1, p2
                    );
                    self.fail(msg);
                    return false;
                }
            }
        }

        true
    }

    /// Compare two box lists for exact equality
    pub fn compare_boxes(&mut self, expected: &[Box], actual: &[Box]) -> bool {
        self.index += 1;
        if expected != actual {
            let msg = format!(
                "Failure in {}_reg: box comparison for index {}\n\
                 expected = {:?}\n\
                 actual = {:?}",
                self.test_name, self.index, expected, actual
            );
            self.fail(msg);
            return false;
        }
        true
    }

    /// Clean up and return overall success status
    ///
    /// Prints a summary and the recorded failures.
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
