#[cfg(test)]
#[path = "document_test.rs"]
mod document_test;

use crate::net::types::DocumentReport;
use crate::state::analysis::AnalysisLifecycle;

/// A file picked in the upload control. Only metadata is held client-side;
/// the bytes stay in the browser until a real upload contract exists.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectedFile {
    pub name: String,
    pub size_bytes: f64,
}

impl SelectedFile {
    /// Size label shown next to the file name.
    #[must_use]
    pub fn size_label(&self) -> String {
        format!("{:.1} KB", self.size_bytes / 1024.0)
    }
}

/// State for the legal-document analysis page.
#[derive(Clone, Debug, Default)]
pub struct DocumentState {
    pub file: Option<SelectedFile>,
    pub lifecycle: AnalysisLifecycle,
    pub report: Option<DocumentReport>,
}

impl DocumentState {
    /// Select a new file, discarding any previous report.
    pub fn select_file(&mut self, file: SelectedFile) {
        self.file = Some(file);
        self.report = None;
        self.lifecycle.reset();
    }

    /// Remove the selected file and its report.
    pub fn clear_file(&mut self) {
        self.file = None;
        self.report = None;
        self.lifecycle.reset();
    }

    /// Start an analysis run. Any previous report is cleared so a stale
    /// result is never shown alongside the spinner.
    pub fn begin_analysis(&mut self) -> u64 {
        self.report = None;
        self.lifecycle.begin()
    }

    /// Apply a finished report if `token` is still the latest submission.
    pub fn apply_report(&mut self, token: u64, report: DocumentReport) -> bool {
        if self.lifecycle.complete(token) {
            self.report = Some(report);
            true
        } else {
            false
        }
    }

    /// Record a failed analysis. Returns whether the failure was current
    /// (a stale failure should not surface a notification).
    pub fn fail_analysis(&mut self, token: u64) -> bool {
        self.lifecycle.fail(token)
    }
}
