use super::*;

// =============================================================
// AnalysisLifecycle defaults
// =============================================================

#[test]
fn lifecycle_default_is_idle() {
    let lc = AnalysisLifecycle::default();
    assert_eq!(lc.phase, AnalysisPhase::Idle);
}

// =============================================================
// Happy path
// =============================================================

#[test]
fn begin_moves_to_in_flight() {
    let mut lc = AnalysisLifecycle::default();
    let token = lc.begin();
    assert_eq!(lc.phase, AnalysisPhase::InFlight);
    assert!(lc.is_current(token));
}

#[test]
fn complete_with_current_token_succeeds() {
    let mut lc = AnalysisLifecycle::default();
    let token = lc.begin();
    assert!(lc.complete(token));
    assert_eq!(lc.phase, AnalysisPhase::Complete);
}

#[test]
fn fail_with_current_token_returns_to_idle() {
    let mut lc = AnalysisLifecycle::default();
    let token = lc.begin();
    assert!(lc.fail(token));
    assert_eq!(lc.phase, AnalysisPhase::Idle);
}

// =============================================================
// Stale tokens
// =============================================================

#[test]
fn stale_complete_is_dropped() {
    let mut lc = AnalysisLifecycle::default();
    let first = lc.begin();
    let _second = lc.begin();
    assert!(!lc.complete(first));
    assert_eq!(lc.phase, AnalysisPhase::InFlight);
}

#[test]
fn stale_fail_is_dropped() {
    let mut lc = AnalysisLifecycle::default();
    let first = lc.begin();
    let second = lc.begin();
    assert!(!lc.fail(first));
    assert_eq!(lc.phase, AnalysisPhase::InFlight);
    assert!(lc.complete(second));
}

#[test]
fn complete_after_complete_is_dropped() {
    let mut lc = AnalysisLifecycle::default();
    let token = lc.begin();
    assert!(lc.complete(token));
    assert!(!lc.complete(token));
    assert!(!lc.fail(token));
    assert_eq!(lc.phase, AnalysisPhase::Complete);
}

#[test]
fn tokens_increase_across_submissions() {
    let mut lc = AnalysisLifecycle::default();
    let first = lc.begin();
    let second = lc.begin();
    assert!(second > first);
}

// =============================================================
// Reset
// =============================================================

#[test]
fn reset_returns_to_idle() {
    let mut lc = AnalysisLifecycle::default();
    let token = lc.begin();
    lc.complete(token);
    lc.reset();
    assert_eq!(lc.phase, AnalysisPhase::Idle);
}
