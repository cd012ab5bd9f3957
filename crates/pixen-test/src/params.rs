//! Regression test parameters and operations

use pixen_core::{Grid, Image};

/// Regression test parameters
///
/// Tracks the state of a regression test: the test name, the index of the
/// current comparison, and the recorded failures. Comparisons never panic
/// on mismatch; the test asserts on [`RegParams::cleanup`] at the end so
/// that one run reports every divergence.
pub struct RegParams {
    /// Name of the test (e.g., "window")
    pub test_name: String,
    /// Current comparison index (incremented before each comparison)
    index: usize,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters.
    pub fn new(test_name: &str) -> Self {
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

    /// Get the current comparison index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Compare two floating-point values.
    ///
    /// Returns `true` if the values match within `delta`.
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
            eprintln!("{}", msg);
            self.failures.push(msg);
            self.success = false;
            false
        } else {
            true
        }
    }

    /// Compare two grids for exact equality.
    pub fn compare_grid(&mut self, grid1: &Grid, grid2: &Grid) -> bool {
        self.index += 1;

        if !grid1.sizes_equal(grid2) {
            let msg = format!(
                "Failure in {}_reg: grid comparison for index {} - dimension mismatch \
                 ({}x{} vs {}x{})",
                self.test_name,
                self.index,
                grid1.width(),
                grid1.height(),
                grid2.width(),
                grid2.height()
            );
            eprintln!("{}", msg);
            self.failures.push(msg);
            self.success = false;
            return false;
        }

        if let Some(pos) = grid1
            .data()
            .iter()
            .zip(grid2.data())
            .position(|(a, b)| a != b)
        {
            let w = grid1.width() as usize;
            let msg = format!(
                "Failure in {}_reg: grid comparison for index {} - sample mismatch at ({}, {})",
                self.test_name,
                self.index,
                pos % w,
                pos / w
            );
            eprintln!("{}", msg);
            self.failures.push(msg);
            self.success = false;
            return false;
        }

        true
    }

    /// Compare two images plane by plane for exact equality.
    pub fn compare_image(&mut self, img1: &Image, img2: &Image) -> bool {
        self.index += 1;

        if img1.channels() != img2.channels() {
            let msg = format!(
                "Failure in {}_reg: image comparison for index {} - channel count \
                 mismatch ({} vs {})",
                self.test_name,
                self.index,
                img1.channels(),
                img2.channels()
            );
            eprintln!("{}", msg);
            self.failures.push(msg);
            self.success = false;
            return false;
        }

        let mut same = true;
        for (p1, p2) in img1.planes().iter().zip(img2.planes()) {
            same &= self.compare_grid(p1, p2);
        }
        same
    }

    /// Clean up and report results.
    ///
    /// Returns `true` if all comparisons passed, `false` if any failed.
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

    /// Check if all comparisons have passed so far.
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get the list of failures.
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}
