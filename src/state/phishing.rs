#[cfg(test)]
#[path = "phishing_test.rs"]
mod phishing_test;

use crate::net::types::PhishingReport;
use crate::state::analysis::AnalysisLifecycle;

/// State for the phishing-detection page.
#[derive(Clone, Debug, Default)]
pub struct PhishingState {
    pub url: String,
    pub lifecycle: AnalysisLifecycle,
    pub report: Option<PhishingReport>,
}

impl PhishingState {
    /// Start a check for the current URL, clearing any previous report.
    pub fn begin_check(&mut self) -> u64 {
        self.report = None;
        self.lifecycle.begin()
    }

    /// Apply a finished report if `token` is still the latest submission.
    pub fn apply_report(&mut self, token: u64, report: PhishingReport) -> bool {
        if self.lifecycle.complete(token) {
            self.report = Some(report);
            true
        } else {
            false
        }
    }

    /// Record a failed check. Returns whether the failure was current.
    pub fn fail_check(&mut self, token: u64) -> bool {
        self.lifecycle.fail(token)
    }
}
