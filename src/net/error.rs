/// Failure modes of the remote analysis client.
///
/// Pages collapse every variant into one generic notification; the split
/// exists so logs stay diagnosable, not so the UI can branch on it.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Rejected synchronously before any network call.
    #[error("empty request payload")]
    EmptyInput,
    /// The URL input failed client-side validation; no call was made.
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The endpoint answered with a non-2xx status.
    #[error("request failed with status {0}")]
    Status(u16),
    /// The response body did not match the expected shape.
    #[error("malformed response: {0}")]
    Decode(String),
}
