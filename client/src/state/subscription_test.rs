use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn subscription_state_default_has_no_status() {
    let state = SubscriptionState::default();
    assert_eq!(state.status, None);
    assert_eq!(state.notice, None);
    assert_eq!(state.error, None);
}

#[test]
fn subscribe_days_is_thirty() {
    assert_eq!(SUBSCRIBE_DAYS, 30);
}

// =============================================================
// Verify sequencing
// =============================================================

#[test]
fn begin_verify_issues_increasing_numbers() {
    let mut state = SubscriptionState::default();
    let first = state.begin_verify();
    let second = state.begin_verify();
    assert!(second > first);
}

#[test]
fn finish_verify_applies_status() {
    let mut state = SubscriptionState::default();
    let seq = state.begin_verify();
    assert!(state.finish_verify(seq, Ok(SubscriptionStatus::Expired)));
    assert_eq!(state.status, Some(SubscriptionStatus::Expired));
}

#[test]
fn finish_verify_in_order_applies_both() {
    let mut state = SubscriptionState::default();
    let first = state.begin_verify();
    let second = state.begin_verify();
    assert!(state.finish_verify(first, Ok(SubscriptionStatus::Inactive)));
    assert!(state.finish_verify(second, Ok(SubscriptionStatus::Active)));
    assert_eq!(state.status, Some(SubscriptionStatus::Active));
}

#[test]
fn finish_verify_discards_stale_response() {
    let mut state = SubscriptionState::default();
    let first = state.begin_verify();
    let second = state.begin_verify();
    assert!(state.finish_verify(second, Ok(SubscriptionStatus::Active)));
    assert!(!state.finish_verify(first, Ok(SubscriptionStatus::Inactive)));
    assert_eq!(state.status, Some(SubscriptionStatus::Active));
}

#[test]
fn finish_verify_discards_duplicate_sequence() {
    let mut state = SubscriptionState::default();
    let seq = state.begin_verify();
    assert!(state.finish_verify(seq, Ok(SubscriptionStatus::Active)));
    assert!(!state.finish_verify(seq, Ok(SubscriptionStatus::Expired)));
    assert_eq!(state.status, Some(SubscriptionStatus::Active));
}

#[test]
fn finish_verify_error_keeps_previous_status() {
    let mut state = SubscriptionState::default();
    let first = state.begin_verify();
    state.finish_verify(first, Ok(SubscriptionStatus::Active));
    let second = state.begin_verify();
    assert!(!state.finish_verify(second, Err(ApiError::Request("offline".to_owned()))));
    assert_eq!(state.status, Some(SubscriptionStatus::Active));
    assert_eq!(state.error.as_deref(), Some(VERIFY_FAILED_MESSAGE));
}

#[test]
fn finish_verify_success_clears_error() {
    let mut state = SubscriptionState::default();
    let first = state.begin_verify();
    state.finish_verify(first, Err(ApiError::Request("offline".to_owned())));
    let second = state.begin_verify();
    assert!(state.finish_verify(second, Ok(SubscriptionStatus::Expired)));
    assert_eq!(state.error, None);
}

#[test]
fn finish_verify_stale_success_after_newer_failure_is_discarded() {
    let mut state = SubscriptionState::default();
    let first = state.begin_verify();
    let second = state.begin_verify();
    assert!(!state.finish_verify(second, Err(ApiError::Request("offline".to_owned()))));
    assert!(!state.finish_verify(first, Ok(SubscriptionStatus::Active)));
    assert_eq!(state.status, None);
    assert_eq!(state.error.as_deref(), Some(VERIFY_FAILED_MESSAGE));
}

#[test]
fn finish_verify_stale_error_is_ignored() {
    let mut state = SubscriptionState::default();
    let first = state.begin_verify();
    let second = state.begin_verify();
    state.finish_verify(second, Ok(SubscriptionStatus::Active));
    state.finish_verify(first, Err(ApiError::Decode("eof".to_owned())));
    assert_eq!(state.error, None);
}

// =============================================================
// Subscribe
// =============================================================

#[test]
fn finish_subscribe_success_alerts_message_then_refreshes() {
    let mut state = SubscriptionState::default();
    let follow_up = state.finish_subscribe(Ok(Some("Subscribed for 30 days".to_owned())));
    assert_eq!(
        follow_up,
        SubscribeFollowUp { alert: Some("Subscribed for 30 days".to_owned()), refresh: true }
    );
    assert_eq!(state.notice.as_deref(), Some("Subscribed for 30 days"));
}

#[test]
fn finish_subscribe_without_message_refreshes_without_alert() {
    let mut state = SubscriptionState::default();
    state.notice = Some("old".to_owned());
    let follow_up = state.finish_subscribe(Ok(None));
    assert_eq!(follow_up, SubscribeFollowUp { alert: None, refresh: true });
    assert_eq!(state.notice, None);
}

#[test]
fn finish_subscribe_error_alerts_fallback_without_refresh() {
    let mut state = SubscriptionState::default();
    let follow_up = state.finish_subscribe(Err(ApiError::Request("offline".to_owned())));
    assert_eq!(
        follow_up,
        SubscribeFollowUp { alert: Some(SUBSCRIBE_FAILED_MESSAGE.to_owned()), refresh: false }
    );
    assert_eq!(state.notice.as_deref(), Some(SUBSCRIBE_FAILED_MESSAGE));
}

#[test]
fn subscribe_refresh_issues_newer_verify_that_wins() {
    let mut state = SubscriptionState::default();
    let mount = state.begin_verify();
    let follow_up = state.finish_subscribe(Ok(Some("Subscription extended by 30 days.".to_owned())));
    assert!(follow_up.refresh);
    let refresh = state.begin_verify();
    assert!(state.finish_verify(refresh, Ok(SubscriptionStatus::Active)));
    assert!(!state.finish_verify(mount, Ok(SubscriptionStatus::Inactive)));
    assert_eq!(state.status, Some(SubscriptionStatus::Active));
}

#[test]
fn finish_subscribe_does_not_touch_status() {
    let mut state = SubscriptionState::default();
    let seq = state.begin_verify();
    state.finish_verify(seq, Ok(SubscriptionStatus::Inactive));
    state.finish_subscribe(Ok(Some("Subscription extended by 30 days.".to_owned())));
    assert_eq!(state.status, Some(SubscriptionStatus::Inactive));
}
