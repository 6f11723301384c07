//! Wire DTOs and typed outcomes for the subscription API.
//!
//! DESIGN
//! ======
//! Response bodies are deserialized leniently: the backend owns their shape,
//! so absent or oddly-typed fields become `None` rather than decode errors.
//! Panels never see raw wire strings; they receive `AuthOutcome` and
//! `SubscriptionStatus` values instead.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// JSON body for `/api/register` and `/api/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// JSON body for `/api/subscribe`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SubscribeRequest<'a> {
    pub email: &'a str,
    /// Number of days to add to the subscription.
    pub days: u32,
}

/// Response body carrying a human-readable `message`.
///
/// Used by register, login, and subscribe. Extra fields such as the login
/// `token` are ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct MessageResponse {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub message: Option<String>,
}

/// Response body of `/api/verify`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct VerifyResponse {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub status: Option<String>,
}

impl VerifyResponse {
    /// Map the raw `status` field onto the three displayable states.
    pub fn subscription_status(&self) -> SubscriptionStatus {
        SubscriptionStatus::from_wire(self.status.as_deref())
    }
}

/// Paid-access state of the logged-in user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubscriptionStatus {
    Active,
    Expired,
    Inactive,
}

impl SubscriptionStatus {
    /// `"active"` and `"expired"` map to themselves; anything else, including
    /// a missing field, is `Inactive`.
    pub fn from_wire(raw: Option<&str>) -> Self {
        match raw {
            Some("active") => Self::Active,
            Some("expired") => Self::Expired,
            _ => Self::Inactive,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Expired => "expired",
            Self::Inactive => "inactive",
        }
    }
}

impl fmt::Display for SubscriptionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classified result of a register or login attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthOutcome {
    /// The backend confirmed the operation.
    Accepted,
    /// The backend declined; `message` is its explanation, if it sent one.
    Rejected { message: Option<String> },
}

/// Errors produced by API client operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request could not be built or sent.
    #[error("request failed: {0}")]
    Request(String),

    /// The response body was not valid JSON for the expected shape.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// HTTP calls only run in the browser build.
    #[error("not available on server")]
    Unavailable,
}

/// Keep string values, drop everything else (numbers, objects, `null`).
fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => Some(s),
        _ => None,
    })
}
