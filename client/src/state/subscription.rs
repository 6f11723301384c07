//! Dashboard state: displayed subscription status plus verify sequencing.
//!
//! DESIGN
//! ======
//! Verify requests may overlap (mount, "Check", post-subscribe refresh) and
//! resolve out of order. Each request takes a sequence number when issued; a
//! response is considered only if it is newer than the last one that answered,
//! success or failure, so the panel tracks the most recently issued request
//! that answered.

#[cfg(test)]
#[path = "subscription_test.rs"]
mod subscription_test;

use crate::net::types::{ApiError, SubscriptionStatus};

/// Days added by the "Subscribe / Extend" action.
pub const SUBSCRIBE_DAYS: u32 = 30;
pub const SUBSCRIBE_FAILED_MESSAGE: &str = "Subscription request failed";
pub const VERIFY_FAILED_MESSAGE: &str = "Could not verify subscription";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubscriptionState {
    /// Status from the latest applied verify; `None` until one resolves.
    pub status: Option<SubscriptionStatus>,
    /// Message from the last subscribe attempt.
    pub notice: Option<String>,
    /// Set when the newest verify failed to reach the backend.
    pub error: Option<String>,
    issued_seq: u64,
    applied_seq: u64,
}

impl SubscriptionState {
    /// Allocate the sequence number for a verify about to be sent.
    pub fn begin_verify(&mut self) -> u64 {
        self.issued_seq += 1;
        self.issued_seq
    }

    /// Apply the verify response tagged `seq`.
    ///
    /// Returns `true` only when a status was applied. Stale responses are
    /// dropped; a fresh failure records `error`, keeps the old status, and
    /// still supersedes every older request.
    pub fn finish_verify(&mut self, seq: u64, result: Result<SubscriptionStatus, ApiError>) -> bool {
        if seq <= self.applied_seq {
            return false;
        }
        match result {
            Ok(status) => {
                self.applied_seq = seq;
                self.status = Some(status);
                self.error = None;
                true
            }
            Err(_) => {
                self.applied_seq = seq;
                self.error = Some(VERIFY_FAILED_MESSAGE.to_owned());
                false
            }
        }
    }

    /// Apply a subscribe result and decide what the panel does next.
    pub fn finish_subscribe(&mut self, result: Result<Option<String>, ApiError>) -> SubscribeFollowUp {
        let refresh = match result {
            Ok(message) => {
                self.notice = message;
                true
            }
            Err(_) => {
                self.notice = Some(SUBSCRIBE_FAILED_MESSAGE.to_owned());
                false
            }
        };
        SubscribeFollowUp { alert: self.notice.clone(), refresh }
    }
}

/// Actions owed after a subscribe answers: alert first, then refresh.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubscribeFollowUp {
    /// Text for the browser alert, if any.
    pub alert: Option<String>,
    /// Whether a verify must be issued once the alert is dismissed.
    pub refresh: bool,
}
