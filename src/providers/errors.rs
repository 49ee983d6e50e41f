use crate::fetcher::FetchError;
use thiserror::Error;

/// Failures from an outbound provider call. Either branch aborts the whole
/// resolution; an empty result set is not represented here.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// The upstream could not be reached or answered with a failure status.
    #[error("upstream unavailable: {0}")]
    Upstream(#[from] FetchError),

    /// The upstream answered, but the body did not match its documented shape.
    #[error("malformed {endpoint} response: {source}")]
    Malformed {
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl ProviderError {
    pub(crate) fn malformed(endpoint: &'static str) -> impl FnOnce(serde_json::Error) -> Self {
        move |source| Self::Malformed { endpoint, source }
    }
}
