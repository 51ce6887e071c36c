//! REST client for the publishing API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` with a bearer token
//! from `localStorage`.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! DESIGN
//! ======
//! Pages talk to the API through the [`PaymentsApi`] and [`ManuscriptsApi`]
//! traits so the action workflows in `crate::actions` can run against an
//! in-memory fake in tests.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
#[cfg(feature = "hydrate")]
use super::types::{ErrorBody, ItemPayload, ListPayload};
use super::types::{Manuscript, Package, Payment};
#[cfg(any(test, feature = "hydrate"))]
use super::types::PaymentStatus;

/// API host used when the page carries no override.
pub const DEFAULT_API_BASE_URL: &str = "https://orange-press-be.vercel.app";

/// `<meta name=...>` the host renders with the configured API base URL.
pub const API_BASE_META_NAME: &str = "press-api-base";

// =============================================================================
// CONFIG
// =============================================================================

/// Where the REST API lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_API_BASE_URL.to_owned() }
    }
}

impl ApiConfig {
    /// Build a config from a base URL. Blank input falls back to the default
    /// host; a trailing slash is dropped.
    pub fn new(base_url: &str) -> Self {
        let trimmed = base_url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Self::default();
        }
        Self { base_url: trimmed.to_owned() }
    }

    /// Read the base URL the host injected into the page head.
    pub fn from_document() -> Self {
        #[cfg(feature = "hydrate")]
        {
            let selector = format!("meta[name=\"{API_BASE_META_NAME}\"]");
            web_sys::window()
                .and_then(|w| w.document())
                .and_then(|doc| doc.query_selector(&selector).ok().flatten())
                .and_then(|meta| meta.get_attribute("content"))
                .map(|content| Self::new(&content))
                .unwrap_or_default()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::default()
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API path.
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

// =============================================================================
// ENDPOINTS
// =============================================================================

#[cfg(any(test, feature = "hydrate"))]
pub(crate) const PACKAGES_PATH: &str = "/api/packages";
#[cfg(any(test, feature = "hydrate"))]
pub(crate) const PAYMENTS_PATH: &str = "/api/admin/payments";
#[cfg(any(test, feature = "hydrate"))]
pub(crate) const MY_MANUSCRIPTS_PATH: &str = "/api/author/manuscripts/my";

/// Detail lives under the singular `payment` collection.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn payment_detail_path(payment_id: &str) -> String {
    format!("/api/admin/payment/{payment_id}")
}

/// The API models approve and reject as separate actions, so the target
/// status picks the endpoint.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn status_update_path(payment_id: &str, target: PaymentStatus) -> String {
    match target {
        PaymentStatus::Approved => format!("/api/admin/payments/{payment_id}/verify"),
        PaymentStatus::Pending => format!("/api/admin/payments/{payment_id}/reject"),
    }
}

#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn manuscript_detail_path(manuscript_id: &str) -> String {
    format!("/api/author/manuscripts/{manuscript_id}")
}

#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn reupload_path(manuscript_id: &str) -> String {
    format!("/api/author/manuscripts/{manuscript_id}/reupload")
}

// =============================================================================
// API SEAMS
// =============================================================================

/// Calls used by the admin transactions page.
#[allow(async_fn_in_trait)]
pub trait PaymentsApi {
    async fn list_packages(&self) -> Result<Vec<Package>, ApiError>;
    async fn list_payments(&self) -> Result<Vec<Payment>, ApiError>;
    async fn fetch_payment(&self, payment_id: &str) -> Result<Payment, ApiError>;
    async fn verify_payment(&self, payment_id: &str) -> Result<(), ApiError>;
    async fn reject_payment(&self, payment_id: &str) -> Result<(), ApiError>;
}

/// Calls used by the author manuscripts page.
#[allow(async_fn_in_trait)]
pub trait ManuscriptsApi {
    /// Handle to a user-selected file.
    type File;

    async fn list_my_manuscripts(&self) -> Result<Vec<Manuscript>, ApiError>;
    async fn fetch_manuscript(&self, manuscript_id: &str) -> Result<Manuscript, ApiError>;
    async fn reupload_manuscript(&self, manuscript_id: &str, file: Self::File) -> Result<(), ApiError>;
}

// =============================================================================
// HTTP CLIENT
// =============================================================================

/// File handle accepted by [`HttpApi`] uploads (`web_sys::File` in the browser).
pub type UploadFile = <HttpApi as ManuscriptsApi>::File;

/// Authenticated client for the publishing API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpApi {
    config: ApiConfig,
    token: String,
}

impl HttpApi {
    pub fn new(config: ApiConfig, token: impl Into<String>) -> Self {
        Self { config, token: token.into() }
    }

    /// Build a client from the token in `localStorage`.
    /// Returns `None` when no token is stored (or outside the browser).
    pub fn from_local_storage(config: ApiConfig) -> Option<Self> {
        crate::util::auth::load_token().map(|token| Self::new(config, token))
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    #[cfg(any(test, feature = "hydrate"))]
    fn authorization(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

#[cfg(feature = "hydrate")]
impl HttpApi {
    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let resp = gloo_net::http::Request::get(&self.config.url(path))
            .header("Authorization", &self.authorization())
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let resp = ensure_success(resp).await?;
        resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn post_empty(&self, path: &str) -> Result<(), ApiError> {
        let resp = gloo_net::http::Request::post(&self.config.url(path))
            .header("Authorization", &self.authorization())
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        ensure_success(resp).await.map(|_| ())
    }

    async fn post_form(&self, path: &str, form: web_sys::FormData) -> Result<(), ApiError> {
        let resp = gloo_net::http::Request::post(&self.config.url(path))
            .header("Authorization", &self.authorization())
            .body(form)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        ensure_success(resp).await.map(|_| ())
    }
}

/// Map a non-success status to [`ApiError::Status`], keeping the body's
/// `message` when it parses.
#[cfg(feature = "hydrate")]
async fn ensure_success(resp: gloo_net::http::Response) -> Result<gloo_net::http::Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let message = resp.json::<ErrorBody>().await.ok().and_then(|body| body.message);
    Err(ApiError::Status { status, message })
}

impl PaymentsApi for HttpApi {
    async fn list_packages(&self) -> Result<Vec<Package>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            self.get_json::<ListPayload<Package>>(PACKAGES_PATH)
                .await
                .map(ListPayload::into_items)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    async fn list_payments(&self) -> Result<Vec<Payment>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            self.get_json::<ListPayload<Payment>>(PAYMENTS_PATH)
                .await
                .map(ListPayload::into_items)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    async fn fetch_payment(&self, payment_id: &str) -> Result<Payment, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            self.get_json::<ItemPayload<Payment>>(&payment_detail_path(payment_id))
                .await
                .map(ItemPayload::into_item)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = payment_id;
            Err(ApiError::Unavailable)
        }
    }

    async fn verify_payment(&self, payment_id: &str) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            self.post_empty(&status_update_path(payment_id, PaymentStatus::Approved))
                .await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = payment_id;
            Err(ApiError::Unavailable)
        }
    }

    async fn reject_payment(&self, payment_id: &str) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            self.post_empty(&status_update_path(payment_id, PaymentStatus::Pending))
                .await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = payment_id;
            Err(ApiError::Unavailable)
        }
    }
}

impl ManuscriptsApi for HttpApi {
    #[cfg(feature = "hydrate")]
    type File = web_sys::File;
    #[cfg(not(feature = "hydrate"))]
    type File = ();

    async fn list_my_manuscripts(&self) -> Result<Vec<Manuscript>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            self.get_json::<ListPayload<Manuscript>>(MY_MANUSCRIPTS_PATH)
                .await
                .map(ListPayload::into_items)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    async fn fetch_manuscript(&self, manuscript_id: &str) -> Result<Manuscript, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            self.get_json::<ItemPayload<Manuscript>>(&manuscript_detail_path(manuscript_id))
                .await
                .map(ItemPayload::into_item)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = manuscript_id;
            Err(ApiError::Unavailable)
        }
    }

    async fn reupload_manuscript(&self, manuscript_id: &str, file: Self::File) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let form = web_sys::FormData::new().map_err(|_| ApiError::Transport("form data unavailable".to_owned()))?;
            form.append_with_blob("file", &file)
                .map_err(|_| ApiError::Transport("could not attach file".to_owned()))?;
            self.post_form(&reupload_path(manuscript_id), form).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (manuscript_id, file);
            Err(ApiError::Unavailable)
        }
    }
}
