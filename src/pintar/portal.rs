//! HTTP boundary to the PINTAR portal
//!
//! The origin distinguishes automated clients by TLS/HTTP2 fingerprint, not
//! just headers, so the concrete client emulates a current Chrome build via
//! wreq. Cookies must persist across the token GET and the data POST - the
//! anti-forgery scheme pairs the form token with a session cookie.

use std::time::Duration;

use async_trait::async_trait;
use wreq_util::Emulation;

use crate::core::ExtractError;

const BASE_URL: &str = "https://pintar.bi.go.id";

/// One page is enough: the portal never lists anywhere near this many
/// locations per region.
const PAGE_LENGTH: u32 = 100;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// The two upstream endpoints the pipeline talks to.
///
/// A trait so the extractor's token state machine can be driven by a test
/// double without a network.
#[async_trait]
pub trait Portal: Send + Sync {
    /// GET the region's listing page (HTML with the embedded token).
    async fn listing_page(&self, region_id: u32) -> Result<String, ExtractError>;

    /// POST the slot listing request, returning the raw body.
    async fn slot_listing(&self, region_id: u32, token: &str) -> Result<String, ExtractError>;
}

/// Live portal client with a browser-emulating TLS stack.
pub struct PintarPortal {
    client: wreq::Client,
}

impl PintarPortal {
    pub fn new() -> Result<Self, ExtractError> {
        let client = wreq::Client::builder()
            .emulation(Emulation::Chrome136)
            .cookie_store(true)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ExtractError::Transport(e.to_string()))?;

        Ok(Self { client })
    }

    fn listing_url(region_id: u32) -> String {
        format!("{}/Order/ListKasKeliling?provinceId={}", BASE_URL, region_id)
    }
}

#[async_trait]
impl Portal for PintarPortal {
    async fn listing_page(&self, region_id: u32) -> Result<String, ExtractError> {
        let response = self
            .client
            .get(Self::listing_url(region_id))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ExtractError::Status(status.as_u16()));
        }

        Ok(response.text().await?)
    }

    async fn slot_listing(&self, region_id: u32, token: &str) -> Result<String, ExtractError> {
        let params = [
            ("draw", "1".to_string()),
            ("start", "0".to_string()),
            ("length", PAGE_LENGTH.to_string()),
            ("provId", region_id.to_string()),
            ("__RequestVerificationToken", token.to_string()),
        ];

        let response = self
            .client
            .post(format!("{}/Order/GetKasKelByProvinceNew", BASE_URL))
            .header("x-requested-with", "XMLHttpRequest")
            .header("Referer", Self::listing_url(region_id))
            .form(&params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ExtractError::Status(status.as_u16()));
        }

        Ok(response.text().await?)
    }
}
