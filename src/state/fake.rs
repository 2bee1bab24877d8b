#[cfg(test)]
#[path = "fake_test.rs"]
mod fake_test;

use crate::net::types::FakeReport;
use crate::state::analysis::AnalysisLifecycle;

/// State for the fake-content detection page.
#[derive(Clone, Debug, Default)]
pub struct FakeState {
    pub text: String,
    pub lifecycle: AnalysisLifecycle,
    pub report: Option<FakeReport>,
}

impl FakeState {
    /// Start a scan of the current text, clearing any previous verdict.
    pub fn begin_scan(&mut self) -> u64 {
        self.report = None;
        self.lifecycle.begin()
    }

    /// Apply a finished verdict if `token` is still the latest submission.
    pub fn apply_report(&mut self, token: u64, report: FakeReport) -> bool {
        if self.lifecycle.complete(token) {
            self.report = Some(report);
            true
        } else {
            false
        }
    }

    /// Record a failed scan. Returns whether the failure was current.
    pub fn fail_scan(&mut self, token: u64) -> bool {
        self.lifecycle.fail(token)
    }
}
