//! Extraction pipeline error taxonomy
//!
//! None of these are fatal to callers: the pipeline absorbs every variant
//! into an empty result set and logs it. The variants exist so the logs can
//! tell a stalled origin apart from a rejected token or a bot challenge.

use thiserror::Error;

/// Errors raised inside the extraction pipeline.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Listing page was fetched but carried no anti-forgery token.
    #[error("anti-forgery token not found in listing page")]
    TokenMissing,

    /// Timeout, connection failure, DNS failure or a broken body read.
    #[error("transport error: {0}")]
    Transport(String),

    /// The origin answered with a non-2xx status.
    #[error("unexpected response status {0}")]
    Status(u16),

    /// The origin served an anti-bot interstitial instead of data.
    #[error("origin served a challenge or block page")]
    Blocked,

    /// Response body was not the expected JSON shape.
    #[error("unparseable response body: {0}")]
    Parse(String),
}

impl From<wreq::Error> for ExtractError {
    fn from(err: wreq::Error) -> Self {
        ExtractError::Transport(err.to_string())
    }
}
