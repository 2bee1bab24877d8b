use super::*;
use crate::net::mock;
use crate::state::analysis::AnalysisPhase;

fn some_file() -> SelectedFile {
    SelectedFile {
        name: "contract.pdf".to_owned(),
        size_bytes: 2048.0,
    }
}

// =============================================================
// DocumentState defaults
// =============================================================

#[test]
fn document_state_default_is_empty_and_idle() {
    let state = DocumentState::default();
    assert!(state.file.is_none());
    assert!(state.report.is_none());
    assert_eq!(state.lifecycle.phase, AnalysisPhase::Idle);
}

// =============================================================
// File selection
// =============================================================

#[test]
fn select_file_discards_previous_report() {
    let mut state = DocumentState::default();
    let token = state.begin_analysis();
    assert!(state.apply_report(token, mock::document_report()));
    state.select_file(some_file());
    assert!(state.report.is_none());
    assert_eq!(state.lifecycle.phase, AnalysisPhase::Idle);
}

#[test]
fn clear_file_resets_everything() {
    let mut state = DocumentState::default();
    state.select_file(some_file());
    let token = state.begin_analysis();
    assert!(state.apply_report(token, mock::document_report()));
    state.clear_file();
    assert!(state.file.is_none());
    assert!(state.report.is_none());
    assert_eq!(state.lifecycle.phase, AnalysisPhase::Idle);
}

#[test]
fn size_label_formats_kilobytes() {
    assert_eq!(some_file().size_label(), "2.0 KB");
}

// =============================================================
// Analysis lifecycle
// =============================================================

#[test]
fn begin_analysis_clears_report_and_spins() {
    let mut state = DocumentState::default();
    state.select_file(some_file());
    let token = state.begin_analysis();
    assert!(state.report.is_none());
    assert_eq!(state.lifecycle.phase, AnalysisPhase::InFlight);
    assert!(state.apply_report(token, mock::document_report()));
    assert!(state.report.is_some());
    assert_eq!(state.lifecycle.phase, AnalysisPhase::Complete);
}

#[test]
fn superseded_report_is_dropped() {
    let mut state = DocumentState::default();
    state.select_file(some_file());
    let first = state.begin_analysis();
    let second = state.begin_analysis();
    // The older response resolves last but must not land.
    assert!(state.apply_report(second, mock::document_report()));
    assert!(!state.apply_report(first, mock::document_report()));
    assert_eq!(state.lifecycle.phase, AnalysisPhase::Complete);
}

#[test]
fn failure_returns_to_idle_without_stale_result() {
    let mut state = DocumentState::default();
    state.select_file(some_file());
    let token = state.begin_analysis();
    assert!(state.fail_analysis(token));
    assert!(state.report.is_none());
    assert_eq!(state.lifecycle.phase, AnalysisPhase::Idle);
}

#[test]
fn stale_failure_is_not_current() {
    let mut state = DocumentState::default();
    state.select_file(some_file());
    let first = state.begin_analysis();
    let _second = state.begin_analysis();
    assert!(!state.fail_analysis(first));
    assert_eq!(state.lifecycle.phase, AnalysisPhase::InFlight);
}
