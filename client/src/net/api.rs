//! REST calls against the remote storefront API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, issued straight from
//! the browser to the configured API host.
//! Server-side (SSR): every call returns [`ApiError::Unavailable`]; pages render
//! their loading state and the browser fetches after hydration.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses are classified by [`classify_failure`] so callers only
//! ever match on [`ApiError`], never on raw status codes.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
#[cfg(feature = "hydrate")]
use super::error::classify_failure;
use super::types::{AuthResponse, Category, LoginRequest, RegisterRequest};
#[cfg(feature = "hydrate")]
use super::types::CategoriesResponse;
use crate::config::AppConfig;

pub const LOGIN_PATH: &str = "/api/auth/login";
pub const REGISTER_PATH: &str = "/api/auth/register";
pub const CATEGORIES_PATH: &str = "/api/categories";

fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}{path}", base_url.trim_end_matches('/'))
}

// =============================================================================
// AUTH
// =============================================================================

/// Credential exchange with the remote auth service. Enables mocking in tests.
#[async_trait::async_trait(?Send)]
pub trait AuthApi {
    /// Exchange email + password for a session.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] on a 422 and another variant for any
    /// other failure.
    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError>;

    /// Create an account and receive a session for it.
    ///
    /// # Errors
    ///
    /// Same classification as [`AuthApi::login`].
    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError>;
}

/// [`AuthApi`] backed by the browser `fetch` API.
#[derive(Clone, Debug)]
pub struct HttpAuthApi {
    base_url: String,
}

impl HttpAuthApi {
    pub fn new(config: &AppConfig) -> Self {
        Self { base_url: config.api_base_url.clone() }
    }

    pub fn login_url(&self) -> String {
        endpoint(&self.base_url, LOGIN_PATH)
    }

    pub fn register_url(&self) -> String {
        endpoint(&self.base_url, REGISTER_PATH)
    }
}

#[async_trait::async_trait(?Send)]
impl AuthApi for HttpAuthApi {
    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            post_json(&self.login_url(), request).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Unavailable)
        }
    }

    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            post_json(&self.register_url(), request).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Unavailable)
        }
    }
}

#[cfg(feature = "hydrate")]
async fn post_json<B, T>(url: &str, body: &B) -> Result<T, ApiError>
where
    B: serde::Serialize,
    T: serde::de::DeserializeOwned,
{
    let resp = gloo_net::http::Request::post(url)
        .header("Accept", "application/json")
        .json(body)
        .map_err(|e| ApiError::Encode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_json(resp).await
}

#[cfg(feature = "hydrate")]
async fn read_json<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    if !resp.ok() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        return Err(classify_failure(status, &body));
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

// =============================================================================
// CATEGORIES
// =============================================================================

/// Alternate category set served for themed demo pages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DemoVariant {
    Ancient,
}

impl DemoVariant {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ancient => "ancient",
        }
    }

    /// Parse a `?variant=` query value; unknown values mean the default set.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "ancient" => Some(Self::Ancient),
            _ => None,
        }
    }
}

/// Parameters of a category list request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CategoryQuery {
    pub limit: u32,
    pub variant: Option<DemoVariant>,
}

#[cfg(any(test, feature = "hydrate"))]
fn categories_url(base_url: &str, query: CategoryQuery) -> String {
    let mut url = format!("{}?limit={}", endpoint(base_url, CATEGORIES_PATH), query.limit);
    if let Some(variant) = query.variant {
        url.push_str("&variant=");
        url.push_str(variant.as_str());
    }
    url
}

/// Fetch one page of categories from `GET /api/categories`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails, the server answers non-2xx,
/// or the body does not match the categories envelope.
pub async fn fetch_categories(config: &AppConfig, query: CategoryQuery) -> Result<Vec<Category>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = categories_url(&config.api_base_url, query);
        let resp = gloo_net::http::Request::get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let body: CategoriesResponse = read_json(resp).await?;
        Ok(body.categories.data)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, query);
        Err(ApiError::Unavailable)
    }
}
