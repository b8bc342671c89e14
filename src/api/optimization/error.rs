use thiserror::Error;

/// Failures of the optimization workflow. All of them are terminal for
/// the current job; only the processing-status poll loop repeats, and
/// that is expected latency rather than error recovery.
#[derive(Debug, Error)]
pub enum OptimizeError {
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("optimization backend rejected submission: status {status:?}")]
    BackendRejected { status: String },

    #[error("malformed backend response: {0}")]
    MalformedResponse(String),

    #[error("job {id} still processing after {attempts} status checks")]
    PollDeadline { id: String, attempts: u32 },

    #[error("router reported failure: {}", .reasons.join("; "))]
    Downstream { reasons: Vec<String> },

    #[error("route request canceled by router")]
    Canceled,

    #[error("no stops to optimize")]
    NoStops,
}

impl From<reqwest::Error> for OptimizeError {
    fn from(err: reqwest::Error) -> Self {
        OptimizeError::Transport(err)
    }
}
