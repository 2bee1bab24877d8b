use super::*;
use crate::net::mock;
use crate::state::analysis::AnalysisPhase;

// =============================================================
// FakeState defaults
// =============================================================

#[test]
fn fake_state_default_is_empty_and_idle() {
    let state = FakeState::default();
    assert!(state.text.is_empty());
    assert!(state.report.is_none());
    assert_eq!(state.lifecycle.phase, AnalysisPhase::Idle);
}

// =============================================================
// Scan lifecycle
// =============================================================

#[test]
fn apply_report_stores_verdict() {
    let mut state = FakeState::default();
    let token = state.begin_scan();
    assert!(state.apply_report(token, mock::fake_report("some ordinary text")));
    assert!(state.report.is_some());
    assert_eq!(state.lifecycle.phase, AnalysisPhase::Complete);
}

#[test]
fn superseded_verdict_is_dropped() {
    let mut state = FakeState::default();
    let first = state.begin_scan();
    let second = state.begin_scan();
    assert!(state.apply_report(second, mock::fake_report("text")));
    assert!(!state.apply_report(first, mock::fake_report("text")));
}

#[test]
fn failed_scan_returns_to_idle() {
    let mut state = FakeState::default();
    let token = state.begin_scan();
    assert!(state.fail_scan(token));
    assert!(state.report.is_none());
    assert_eq!(state.lifecycle.phase, AnalysisPhase::Idle);
}
