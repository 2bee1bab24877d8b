use super::*;

// =============================================================
// AnalysisRequest
// =============================================================

#[test]
fn empty_payloads_are_rejected() {
    assert!(AnalysisRequest::Url(String::new()).is_empty());
    assert!(AnalysisRequest::Url("   ".to_owned()).is_empty());
    assert!(AnalysisRequest::Question("\t".to_owned()).is_empty());
    assert!(AnalysisRequest::Text(String::new()).is_empty());
    assert!(
        AnalysisRequest::Document {
            name: String::new(),
            size_bytes: 0.0,
        }
        .is_empty()
    );
}

#[test]
fn non_empty_payloads_pass() {
    assert!(!AnalysisRequest::Url("example.com".to_owned()).is_empty());
    assert!(!AnalysisRequest::Question("termination?".to_owned()).is_empty());
    assert!(
        !AnalysisRequest::Document {
            name: "contract.pdf".to_owned(),
            size_bytes: 1024.0,
        }
        .is_empty()
    );
}

// =============================================================
// Wire shapes
// =============================================================

#[test]
fn document_report_uses_camel_case_keys() {
    let report = DocumentReport {
        summary: "s".to_owned(),
        key_points: vec!["k".to_owned()],
        recommendations: vec!["r".to_owned()],
        risk_areas: vec!["x".to_owned()],
    };
    let json = serde_json::to_value(&report).unwrap();
    assert!(json.get("keyPoints").is_some());
    assert!(json.get("riskAreas").is_some());
    assert!(json.get("key_points").is_none());
}

#[test]
fn phishing_report_round_trips_from_wire_json() {
    let json = serde_json::json!({
        "isPhishing": false,
        "score": 12,
        "connectedSites": 8,
        "phishingSites": 0,
        "legitimateSites": 8,
        "details": "No suspicious connections found.",
        "connectionData": [
            { "id": 1, "url": "cdn.example.com", "status": "legitimate", "score": 5 }
        ],
        "chartData": [
            { "name": "SSL", "value": 95, "description": "Valid certificate chain" }
        ]
    });
    let report: PhishingReport = serde_json::from_value(json).unwrap();
    assert!(!report.is_phishing);
    assert_eq!(report.connection_data[0].status, SiteStatus::Legitimate);
    assert_eq!(report.chart_data[0].value, 95);
}

#[test]
fn site_status_serializes_lowercase() {
    assert_eq!(
        serde_json::to_string(&SiteStatus::Suspicious).unwrap(),
        "\"suspicious\""
    );
}

// =============================================================
// AnswerResponse fallback
// =============================================================

#[test]
fn answer_present_is_returned() {
    let resp = AnswerResponse {
        answer: Some("Fourteen days written notice.".to_owned()),
    };
    assert_eq!(resp.into_answer(), "Fourteen days written notice.");
}

#[test]
fn missing_answer_falls_back() {
    let resp: AnswerResponse = serde_json::from_str("{}").unwrap();
    assert_eq!(resp.into_answer(), FALLBACK_ANSWER);
}

#[test]
fn blank_answer_falls_back() {
    let resp = AnswerResponse {
        answer: Some("   ".to_owned()),
    };
    assert_eq!(resp.into_answer(), FALLBACK_ANSWER);
}

// =============================================================
// FakeVerdict
// =============================================================

#[test]
fn fake_verdict_serializes_kebab_case() {
    assert_eq!(
        serde_json::to_string(&FakeVerdict::LikelyFake).unwrap(),
        "\"likely-fake\""
    );
}

// =============================================================
// FakeReport signals section
// =============================================================

#[test]
fn authentic_report_has_no_signal_lines() {
    let report = FakeReport {
        verdict: FakeVerdict::LikelyAuthentic,
        confidence: 88,
        signals: vec![],
    };
    assert_eq!(report.signal_lines(), None);
}

#[test]
fn flagged_report_exposes_its_signals() {
    let report = FakeReport {
        verdict: FakeVerdict::LikelyFake,
        confidence: 72,
        signals: vec!["Repeated exclamation marks".to_owned()],
    };
    assert_eq!(
        report.signal_lines(),
        Some(&["Repeated exclamation marks".to_owned()][..])
    );
}
