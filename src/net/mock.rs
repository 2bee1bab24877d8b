//! Canned responses standing in for backends that do not exist yet.
//!
//! The document-analysis, Q&A, fake-detection, and sign-up services have no
//! reachable endpoint, so their client calls resolve against the fixtures
//! below after an artificial delay. The constructors are pure; `delay` is the
//! only piece that needs a browser.

#[cfg(test)]
#[path = "mock_test.rs"]
mod mock_test;

use crate::net::types::{AnswerResponse, DocumentReport, FakeReport, FakeVerdict};

/// Simulated latency of a full document analysis.
pub const ANALYSIS_DELAY_MS: u64 = 3000;
/// Simulated latency of a Q&A round trip.
pub const ANSWER_DELAY_MS: u64 = 1500;
/// Simulated latency of the auth endpoints.
pub const AUTH_DELAY_MS: u64 = 1500;

/// Sleep for `ms` in the browser; immediate elsewhere.
pub async fn delay(ms: u64) {
    #[cfg(feature = "hydrate")]
    gloo_timers::future::sleep(std::time::Duration::from_millis(ms)).await;
    #[cfg(not(feature = "hydrate"))]
    let _ = ms;
}

/// The canned analysis report for any uploaded document.
#[must_use]
pub fn document_report() -> DocumentReport {
    DocumentReport {
        summary: "This legal document outlines terms and conditions for a software service \
                  agreement between the provider and client. It covers usage rights, privacy \
                  policies, termination conditions, and liability limitations. The agreement is \
                  governed by state law and includes provisions for dispute resolution through \
                  arbitration."
            .to_owned(),
        key_points: vec![
            "The agreement establishes a non-exclusive, non-transferable license to use the \
             software."
                .to_owned(),
            "Users must be at least 18 years old to accept the terms.".to_owned(),
            "The service provider reserves the right to modify the terms with 30 days notice."
                .to_owned(),
            "Termination can occur with 14 days written notice from either party.".to_owned(),
            "Data privacy is governed by the accompanying Privacy Policy document.".to_owned(),
        ],
        recommendations: vec![
            "Review the liability limitations as they significantly limit potential compensation."
                .to_owned(),
            "Note the automatic renewal clause that requires 30-day cancellation notice."
                .to_owned(),
            "Consider the jurisdiction limitations for any potential disputes.".to_owned(),
            "Be aware of the data usage terms that allow anonymized data collection.".to_owned(),
        ],
        risk_areas: vec![
            "Broad indemnification requirements for the client".to_owned(),
            "Limited warranty coverage".to_owned(),
            "Mandatory arbitration clause restricts legal options".to_owned(),
            "Unilateral amendment provisions favor the provider".to_owned(),
        ],
    }
}

/// Keyword-matched canned answer for a document question.
#[must_use]
pub fn answer_for(question: &str) -> AnswerResponse {
    let q = question.to_lowercase();
    let answer = if q.contains("termination") {
        "The agreement allows termination with 14 days written notice from either party. \
         However, the client must pay any outstanding fees upon termination. The service \
         provider can terminate immediately if the client breaches any terms."
    } else if q.contains("liability") || q.contains("damages") {
        "The agreement limits liability to the amount paid by the client in the 12 months \
         preceding the claim. It explicitly excludes indirect, incidental, and consequential \
         damages. Neither party will be liable for force majeure events."
    } else if q.contains("privacy") || q.contains("data") {
        "Data privacy is governed by the Privacy Policy document. The service provider collects \
         user data for service improvement and may share anonymized data with third parties. \
         Users can request their data under applicable privacy laws."
    } else {
        "Based on the analyzed document, this appears to be related to the terms and conditions \
         of the software service agreement. The specific clause might not be directly addressed \
         in the summary, but generally, the agreement covers usage rights, limitations, and \
         obligations between the provider and client."
    };
    AnswerResponse {
        answer: Some(answer.to_owned()),
    }
}

/// Phrases the mock treats as manipulation markers.
const FAKE_MARKERS: [&str; 6] = [
    "you won't believe",
    "shocking",
    "doctors hate",
    "miracle",
    "act now",
    "100% guaranteed",
];

/// Toy verdict for the fake-content scan: flags text containing known
/// clickbait markers or shouting, otherwise calls it authentic.
#[must_use]
pub fn fake_report(text: &str) -> FakeReport {
    let lower = text.to_lowercase();
    let mut signals: Vec<String> = FAKE_MARKERS
        .iter()
        .filter(|m| lower.contains(*m))
        .map(|m| format!("Contains manipulation phrase \"{m}\""))
        .collect();

    let words: Vec<&str> = text.split_whitespace().collect();
    let shouted = words
        .iter()
        .filter(|w| w.len() > 3 && w.chars().all(|c| !c.is_lowercase()))
        .count();
    if !words.is_empty() && shouted * 4 >= words.len() {
        signals.push("Unusually high proportion of all-caps words".to_owned());
    }
    if text.contains("!!") {
        signals.push("Repeated exclamation marks".to_owned());
    }

    let verdict = if signals.is_empty() {
        FakeVerdict::LikelyAuthentic
    } else {
        FakeVerdict::LikelyFake
    };
    let confidence = match signals.len() {
        0 => 88,
        1 => 72,
        2 => 84,
        _ => 93,
    };
    FakeReport {
        verdict,
        confidence,
        signals,
    }
}
