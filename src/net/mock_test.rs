use super::*;

// =============================================================
// Document report fixture
// =============================================================

#[test]
fn document_report_has_all_sections() {
    let report = document_report();
    assert!(!report.summary.is_empty());
    assert_eq!(report.key_points.len(), 5);
    assert_eq!(report.recommendations.len(), 4);
    assert_eq!(report.risk_areas.len(), 4);
}

// =============================================================
// Q&A keyword matching
// =============================================================

#[test]
fn termination_questions_get_the_termination_answer() {
    let answer = answer_for("What does it say about Termination?").into_answer();
    assert!(answer.contains("14 days written notice"));
}

#[test]
fn liability_and_damages_share_an_answer() {
    let a = answer_for("what about liability?").into_answer();
    let b = answer_for("Can I claim damages?").into_answer();
    assert_eq!(a, b);
    assert!(a.contains("12 months"));
}

#[test]
fn privacy_questions_get_the_privacy_answer() {
    let answer = answer_for("how is my DATA handled").into_answer();
    assert!(answer.contains("Privacy Policy"));
}

#[test]
fn unmatched_questions_get_the_generic_answer() {
    let answer = answer_for("what color is the sky").into_answer();
    assert!(answer.contains("terms and conditions"));
}

// =============================================================
// Fake-content heuristics
// =============================================================

#[test]
fn plain_text_is_likely_authentic() {
    let report = fake_report("The quarterly report was published on schedule.");
    assert_eq!(report.verdict, crate::net::types::FakeVerdict::LikelyAuthentic);
    assert!(report.signals.is_empty());
}

#[test]
fn clickbait_markers_flag_text_as_fake() {
    let report = fake_report("You won't believe this miracle cure!!");
    assert_eq!(report.verdict, crate::net::types::FakeVerdict::LikelyFake);
    assert!(report.signals.len() >= 2);
}

#[test]
fn shouting_is_a_signal() {
    let report = fake_report("BREAKING NEWS EVERYONE MUST READ THIS NOW");
    assert_eq!(report.verdict, crate::net::types::FakeVerdict::LikelyFake);
}

#[test]
fn confidence_is_a_percentage() {
    for text in ["calm text", "shocking miracle act now!!"] {
        let report = fake_report(text);
        assert!(report.confidence <= 100);
    }
}
