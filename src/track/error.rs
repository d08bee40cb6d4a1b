#[derive(Debug)]
pub enum SourceError {
    /// Transport-level failure: connect, TLS, timeout.
    Http(reqwest::Error),
    /// Non-success HTTP status from the tracking endpoint.
    Status(u16),
    /// The body did not decode into a tracking status.
    Decode(String),
}

impl From<reqwest::Error> for SourceError {
    fn from(value: reqwest::Error) -> Self {
        SourceError::Http(value)
    }
}
