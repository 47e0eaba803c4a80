//! Anti-forgery token acquisition
//!
//! The portal embeds a `__RequestVerificationToken` in every listing page
//! and rejects data requests without it. The token is scraped from the HTML
//! by pattern; there is no documented API for it.

use std::sync::{Arc, OnceLock};

use regex_lite::Regex;

use crate::core::ExtractError;

use super::portal::Portal;

/// Fetches listing pages and pulls the embedded token out of them.
///
/// Stateless on purpose: token storage and invalidation belong to the
/// extractor, which is the only party that can observe a rejection.
pub struct TokenSession<P> {
    portal: Arc<P>,
}

impl<P: Portal> TokenSession<P> {
    pub fn new(portal: Arc<P>) -> Self {
        Self { portal }
    }

    /// Fetch the region's listing page and extract a fresh token.
    ///
    /// Expected to fail when the origin is rate-limiting or serving a
    /// challenge page; callers treat that as "no data right now".
    pub async fn refresh_token(&self, region_id: u32) -> Result<String, ExtractError> {
        let html = self.portal.listing_page(region_id).await?;
        extract_token(&html).ok_or(ExtractError::TokenMissing)
    }
}

/// Scan HTML for the anti-forgery token value.
pub(crate) fn extract_token(html: &str) -> Option<String> {
    static TOKEN_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = TOKEN_REGEX.get_or_init(|| {
        Regex::new(r#"__RequestVerificationToken.*?value="([^"]+)""#).unwrap()
    });

    regex
        .captures(html)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_token_from_hidden_input() {
        let html = r#"<form action="/Order">
            <input name="__RequestVerificationToken" type="hidden" value="CfDJ8abc123" />
        </form>"#;
        assert_eq!(extract_token(html), Some("CfDJ8abc123".to_string()));
    }

    #[test]
    fn missing_token_yields_none() {
        assert_eq!(extract_token("<html><body>Mohon tunggu...</body></html>"), None);
    }

    #[test]
    fn first_token_wins_when_page_has_several_forms() {
        let html = concat!(
            r#"<input name="__RequestVerificationToken" value="first" />"#,
            r#"<input name="__RequestVerificationToken" value="second" />"#,
        );
        assert_eq!(extract_token(html), Some("first".to_string()));
    }
}
