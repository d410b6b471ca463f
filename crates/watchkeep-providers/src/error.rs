use thiserror::Error;

/// Failure of a single provider call. These never cross the resolver
/// boundary: the resolver logs them and reports "no result" instead.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{provider} returned HTTP {status}")]
    Status {
        provider: &'static str,
        status: reqwest::StatusCode,
    },
}
