#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

/// An authenticated user.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
}

/// Sign-in form payload for `POST /signin`.
#[derive(Clone, Debug, serde::Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// One analysis submission. Exactly one payload kind per call.
#[derive(Clone, Debug, PartialEq)]
pub enum AnalysisRequest {
    /// A document picked in the upload control.
    Document { name: String, size_bytes: f64 },
    /// A website URL to check for phishing.
    Url(String),
    /// A follow-up question about the analyzed document.
    Question(String),
    /// Free-form text to scan for fake-content markers.
    Text(String),
}

impl AnalysisRequest {
    /// Whether the payload is empty. Empty requests are rejected
    /// synchronously and never reach the network.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Document { name, .. } => name.trim().is_empty(),
            Self::Url(s) | Self::Question(s) | Self::Text(s) => s.trim().is_empty(),
        }
    }
}

/// Structured report returned by document analysis.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentReport {
    pub summary: String,
    pub key_points: Vec<String>,
    pub recommendations: Vec<String>,
    pub risk_areas: Vec<String>,
}

/// Answer payload from the Q&A endpoint.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct AnswerResponse {
    #[serde(default)]
    pub answer: Option<String>,
}

/// Shown when the endpoint returns no usable answer field.
pub const FALLBACK_ANSWER: &str =
    "Sorry, I could not find an answer to that in the analyzed document.";

impl AnswerResponse {
    /// The answer text, or the fallback string when the field is absent
    /// or blank.
    #[must_use]
    pub fn into_answer(self) -> String {
        match self.answer {
            Some(text) if !text.trim().is_empty() => text,
            _ => FALLBACK_ANSWER.to_owned(),
        }
    }
}

/// Structured result of a phishing check, including chart-ready series.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhishingReport {
    pub is_phishing: bool,
    /// Overall risk score, 0-100.
    pub score: u32,
    pub connected_sites: u32,
    pub phishing_sites: u32,
    pub legitimate_sites: u32,
    pub details: String,
    pub connection_data: Vec<ConnectionDatum>,
    pub chart_data: Vec<MetricPoint>,
}

/// One site connected to the checked URL, for the connection bar chart.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ConnectionDatum {
    pub id: u32,
    pub url: String,
    pub status: SiteStatus,
    /// Risk score, 0-100.
    pub score: u32,
}

/// Classification of a connected site.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SiteStatus {
    Legitimate,
    Suspicious,
    Phishing,
}

impl SiteStatus {
    /// CSS modifier for chart coloring.
    #[must_use]
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Legitimate => "legitimate",
            Self::Suspicious => "suspicious",
            Self::Phishing => "phishing",
        }
    }
}

/// One named security metric, for the metrics chart.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MetricPoint {
    pub name: String,
    /// Score, 0-100.
    pub value: u32,
    pub description: String,
}

/// Verdict from the fake-content scan.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FakeReport {
    pub verdict: FakeVerdict,
    /// Confidence in the verdict, 0-100.
    pub confidence: u32,
    pub signals: Vec<String>,
}

impl FakeReport {
    /// Lines for the signals section, `None` when the scan found nothing
    /// so the card can say so instead of rendering an empty list.
    #[must_use]
    pub fn signal_lines(&self) -> Option<&[String]> {
        if self.signals.is_empty() {
            None
        } else {
            Some(&self.signals)
        }
    }
}

/// Two-way fake-content classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FakeVerdict {
    LikelyAuthentic,
    LikelyFake,
}

impl FakeVerdict {
    /// Heading shown on the verdict card.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::LikelyAuthentic => "Content Appears Authentic",
            Self::LikelyFake => "Potentially Fake Content",
        }
    }
}
