use super::*;
use crate::net::types::{ConnectionDatum, MetricPoint, PhishingReport, SiteStatus};
use crate::state::analysis::AnalysisPhase;

fn some_report() -> PhishingReport {
    PhishingReport {
        is_phishing: true,
        score: 87,
        connected_sites: 3,
        phishing_sites: 2,
        legitimate_sites: 1,
        details: "Multiple suspicious redirects detected.".to_owned(),
        connection_data: vec![ConnectionDatum {
            id: 1,
            url: "login-verify.example".to_owned(),
            status: SiteStatus::Phishing,
            score: 92,
        }],
        chart_data: vec![MetricPoint {
            name: "Domain Age".to_owned(),
            value: 12,
            description: "Registered 9 days ago".to_owned(),
        }],
    }
}

// =============================================================
// PhishingState defaults
// =============================================================

#[test]
fn phishing_state_default_is_empty_and_idle() {
    let state = PhishingState::default();
    assert!(state.url.is_empty());
    assert!(state.report.is_none());
    assert_eq!(state.lifecycle.phase, AnalysisPhase::Idle);
}

// =============================================================
// Check lifecycle
// =============================================================

#[test]
fn begin_check_clears_previous_report() {
    let mut state = PhishingState::default();
    let token = state.begin_check();
    assert!(state.apply_report(token, some_report()));
    let _token = state.begin_check();
    assert!(state.report.is_none());
    assert_eq!(state.lifecycle.phase, AnalysisPhase::InFlight);
}

#[test]
fn apply_report_stores_result() {
    let mut state = PhishingState::default();
    let token = state.begin_check();
    assert!(state.apply_report(token, some_report()));
    assert_eq!(state.lifecycle.phase, AnalysisPhase::Complete);
    assert!(state.report.as_ref().is_some_and(|r| r.is_phishing));
}

#[test]
fn superseded_report_is_dropped() {
    let mut state = PhishingState::default();
    let first = state.begin_check();
    let second = state.begin_check();
    assert!(state.apply_report(second, some_report()));
    assert!(!state.apply_report(first, some_report()));
}

#[test]
fn failed_check_returns_to_idle() {
    let mut state = PhishingState::default();
    let token = state.begin_check();
    assert!(state.fail_check(token));
    assert!(state.report.is_none());
    assert_eq!(state.lifecycle.phase, AnalysisPhase::Idle);
}
