//! Slot extraction pipeline for the PINTAR Kas Keliling portal
//!
//! Token acquisition, the authenticated slot-listing fetch and the
//! normalization of raw records live here. The public surface is
//! [`SlotExtractor::process`]; every expected failure (transport, rejected
//! token, challenge page, malformed payload) degrades to an empty result
//! set and a log line, never a panic or an error to the caller.

mod normalize;
mod portal;
mod session;

use std::sync::Arc;

use serde_json::Value;

use crate::core::{ExtractError, LocationEntry};

pub use normalize::normalize;
pub use portal::{PintarPortal, Portal};
pub use session::TokenSession;

/// Body keywords that mark an anti-bot interstitial rather than a plain
/// parse failure. Purely diagnostic; both degrade the same way.
const CHALLENGE_MARKERS: [&str; 4] = [
    "captcha",
    "cloudflare",
    "just a moment",
    "access denied",
];

/// Stateful extractor for one region's slot listing.
///
/// Caches the anti-forgery token between calls and invalidates it when a
/// data response stops parsing - the origin never says "unauthorized", it
/// just serves a non-JSON body. One extractor must not be shared across
/// concurrent callers; a token refresh is idempotent but redundant.
pub struct SlotExtractor<P: Portal> {
    portal: Arc<P>,
    session: TokenSession<P>,
    token: Option<String>,
}

impl SlotExtractor<PintarPortal> {
    /// Extractor backed by the live portal.
    pub fn new() -> Result<Self, ExtractError> {
        Ok(Self::with_portal(PintarPortal::new()?))
    }
}

impl<P: Portal> SlotExtractor<P> {
    pub fn with_portal(portal: P) -> Self {
        let portal = Arc::new(portal);
        Self {
            session: TokenSession::new(Arc::clone(&portal)),
            portal,
            token: None,
        }
    }

    /// Fetch and normalize the current slot listing for a region.
    ///
    /// The sole entry point for callers. Empty output means "no slots or
    /// extraction failed"; the distinction is only visible in the logs.
    pub async fn process(&mut self, region_id: u32) -> Vec<LocationEntry> {
        normalize(&self.fetch_raw(region_id).await)
    }

    /// Fetch the raw slot records, refreshing the token at most once.
    pub async fn fetch_raw(&mut self, region_id: u32) -> Vec<Value> {
        let Some(token) = self.ensure_token(region_id).await else {
            return Vec::new();
        };

        match self.request_records(region_id, &token).await {
            Ok(records) => records,
            Err(err) => {
                tracing::warn!("slot listing rejected, treating token as stale: {}", err);
                self.token = None;

                let Some(token) = self.ensure_token(region_id).await else {
                    return Vec::new();
                };
                match self.request_records(region_id, &token).await {
                    Ok(records) => records,
                    Err(err) => {
                        tracing::warn!("slot listing failed after token refresh: {}", err);
                        Vec::new()
                    }
                }
            }
        }
    }

    /// Return the cached token, refreshing it if absent.
    async fn ensure_token(&mut self, region_id: u32) -> Option<String> {
        if self.token.is_none() {
            match self.session.refresh_token(region_id).await {
                Ok(token) => {
                    tracing::debug!("acquired anti-forgery token for region {}", region_id);
                    self.token = Some(token);
                }
                Err(err) => {
                    tracing::warn!("token refresh failed for region {}: {}", region_id, err);
                    return None;
                }
            }
        }
        self.token.clone()
    }

    async fn request_records(
        &self,
        region_id: u32,
        token: &str,
    ) -> Result<Vec<Value>, ExtractError> {
        let body = self.portal.slot_listing(region_id, token).await?;
        parse_listing_body(&body)
    }
}

/// Validate a slot-listing response body: a JSON object whose `data` field
/// holds the record array. Anything else is a stale-token proxy signal.
fn parse_listing_body(body: &str) -> Result<Vec<Value>, ExtractError> {
    let value: Value = serde_json::from_str(body).map_err(|err| {
        if looks_blocked(body) {
            ExtractError::Blocked
        } else {
            ExtractError::Parse(err.to_string())
        }
    })?;

    value
        .get("data")
        .and_then(Value::as_array)
        .cloned()
        .ok_or_else(|| ExtractError::Parse("response has no data array".to_string()))
}

/// Heuristic check for an anti-bot interstitial body.
fn looks_blocked(body: &str) -> bool {
    let lower = body.to_lowercase();
    CHALLENGE_MARKERS.iter().any(|marker| lower.contains(marker))
}
