use thiserror::Error;

/// Errors raised while constructing or driving a language selector.
#[derive(Debug, Error)]
pub enum SelectorError {
    #[error("missing required attribute '{0}'")]
    MissingAttribute(&'static str),

    #[error("invalid languages attribute: {0}")]
    InvalidLanguages(#[from] serde_json::Error),

    #[error("languages attribute must be a JSON list, got null")]
    NullLanguages,

    #[error("no language link at position {index} (selector has {len} links)")]
    NoSuchLink { index: usize, len: usize },
}

/// Transport-level failures of the preference notification.
///
/// Any HTTP response counts as a completed request; only failures to get a
/// response at all end up here.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("failed to send preference request to {endpoint}: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("invalid endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    #[error("failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),
}
