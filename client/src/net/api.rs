//! REST API helpers for communicating with the subscription backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! The backend reports refusals with a non-2xx status *and* a JSON `message`,
//! so bodies are decoded regardless of status. Only transport and decode
//! failures surface as `Err`; refusals become [`AuthOutcome::Rejected`].

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::config::ApiConfig;
#[cfg(any(test, feature = "hydrate"))]
use super::types::MessageResponse;
use super::types::{ApiError, AuthOutcome, SubscriptionStatus};

pub const REGISTER_PATH: &str = "/api/register";
pub const LOGIN_PATH: &str = "/api/login";
pub const SUBSCRIBE_PATH: &str = "/api/subscribe";
pub const VERIFY_PATH: &str = "/api/verify";

/// Backend wording that confirms a registration.
pub const REGISTER_ACCEPTED_MESSAGE: &str = "User registered successfully";
/// Backend wording that confirms a login.
pub const LOGIN_ACCEPTED_MESSAGE: &str = "Login successful";

#[cfg(any(test, feature = "hydrate"))]
fn classify_auth(resp: MessageResponse, accepted: &str) -> AuthOutcome {
    match resp.message {
        Some(message) if message == accepted => AuthOutcome::Accepted,
        message => AuthOutcome::Rejected { message },
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn classify_register(resp: MessageResponse) -> AuthOutcome {
    classify_auth(resp, REGISTER_ACCEPTED_MESSAGE)
}

#[cfg(any(test, feature = "hydrate"))]
fn classify_login(resp: MessageResponse) -> AuthOutcome {
    classify_auth(resp, LOGIN_ACCEPTED_MESSAGE)
}

#[cfg(feature = "hydrate")]
async fn post_json<B, T>(url: &str, body: &B) -> Result<T, ApiError>
where
    B: serde::Serialize,
    T: serde::de::DeserializeOwned,
{
    let resp = gloo_net::http::Request::post(url)
        .json(body)
        .map_err(|e| ApiError::Request(e.to_string()))?
        .send()
        .await
        .map_err(|e| {
            log::warn!("POST {url} failed: {e}");
            ApiError::Request(e.to_string())
        })?;
    decode_body(url, resp).await
}

#[cfg(feature = "hydrate")]
async fn decode_body<T>(url: &str, resp: gloo_net::http::Response) -> Result<T, ApiError>
where
    T: serde::de::DeserializeOwned,
{
    if !resp.ok() {
        log::debug!("{url} answered {}", resp.status());
    }
    resp.json::<T>().await.map_err(|e| {
        log::warn!("{url} returned an unreadable body: {e}");
        ApiError::Decode(e.to_string())
    })
}

/// Register a new account via `POST /api/register`.
///
/// # Errors
///
/// Returns an error if the request cannot be sent or the body is not JSON.
pub async fn register(config: &ApiConfig, email: &str, password: &str) -> Result<AuthOutcome, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = super::types::Credentials { email, password };
        let resp: MessageResponse = post_json(&config.endpoint(REGISTER_PATH), &body).await?;
        Ok(classify_register(resp))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, email, password);
        Err(ApiError::Unavailable)
    }
}

/// Log in via `POST /api/login`.
///
/// # Errors
///
/// Returns an error if the request cannot be sent or the body is not JSON.
pub async fn login(config: &ApiConfig, email: &str, password: &str) -> Result<AuthOutcome, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = super::types::Credentials { email, password };
        let resp: MessageResponse = post_json(&config.endpoint(LOGIN_PATH), &body).await?;
        Ok(classify_login(resp))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, email, password);
        Err(ApiError::Unavailable)
    }
}

/// Extend the subscription by `days` via `POST /api/subscribe`.
///
/// Returns the backend's `message`, if any.
///
/// # Errors
///
/// Returns an error if the request cannot be sent or the body is not JSON.
pub async fn subscribe(config: &ApiConfig, email: &str, days: u32) -> Result<Option<String>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = super::types::SubscribeRequest { email, days };
        let resp: MessageResponse = post_json(&config.endpoint(SUBSCRIBE_PATH), &body).await?;
        Ok(resp.message)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, email, days);
        Err(ApiError::Unavailable)
    }
}

/// Fetch the subscription status via `GET /api/verify?email=...`.
///
/// # Errors
///
/// Returns an error if the request cannot be sent or the body is not JSON.
pub async fn verify_subscription(config: &ApiConfig, email: &str) -> Result<SubscriptionStatus, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = config.endpoint(VERIFY_PATH);
        let resp = gloo_net::http::Request::get(&url)
            .query([("email", email)])
            .send()
            .await
            .map_err(|e| {
                log::warn!("GET {url} failed: {e}");
                ApiError::Request(e.to_string())
            })?;
        let body: super::types::VerifyResponse = decode_body(&url, resp).await?;
        Ok(body.subscription_status())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, email);
        Err(ApiError::Unavailable)
    }
}
