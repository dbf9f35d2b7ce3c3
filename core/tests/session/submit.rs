// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::Utc;
use teamup_core::{
    EVENTS_ROUTE, EventFormSession, EventId, FormState, MutationDispatcher, SubmitOutcome,
};

use crate::common::{FakeApi, RecordingNavigator, RecordingNotifier, standup_event};

#[tokio::test]
async fn submit_before_any_write_is_blocked() {
    let api = FakeApi::with_event(standup_event());
    let nav = RecordingNavigator::default();
    let notifier = RecordingNotifier::default();
    let (mut session, _) =
        EventFormSession::mount(&api, &nav, &notifier, Utc, Some(EventId::from("65a1"))).await;

    assert_eq!(session.submit(), SubmitOutcome::Blocked);
    assert!(nav.routes().is_empty());
    assert!(api.sent().is_empty());
    assert!(!session.is_done());
}

#[tokio::test]
async fn submit_after_navigation_does_not_navigate_again() {
    let api = FakeApi::new();
    let nav = RecordingNavigator::default();
    let notifier = RecordingNotifier::default();
    let (mut session, _) = EventFormSession::mount(&api, &nav, &notifier, Utc, None).await;
    session.create().await.unwrap();

    assert_eq!(session.submit(), SubmitOutcome::Blocked);
    assert_eq!(nav.routes(), vec![EVENTS_ROUTE.to_string()]);
}

#[tokio::test]
async fn submit_after_failed_write_is_blocked() {
    let api = FakeApi::new().failing_send();
    let nav = RecordingNavigator::default();
    let notifier = RecordingNotifier::default();
    let (mut session, _) = EventFormSession::mount(&api, &nav, &notifier, Utc, None).await;
    assert!(session.create().await.is_err());

    assert_eq!(session.submit(), SubmitOutcome::Blocked);
    assert!(!session.form().api_status());
    assert!(nav.routes().is_empty());
    assert!(!session.is_done());
}

#[test]
fn dispatcher_submit_navigates_once_a_write_succeeded() {
    let api = FakeApi::new();
    let nav = RecordingNavigator::default();
    let notifier = RecordingNotifier::default();
    let dispatcher = MutationDispatcher::new(&api, &nav, &notifier);

    let mut form = FormState::new();
    assert_eq!(dispatcher.submit(&form), SubmitOutcome::Blocked);

    form.set_api_status(true);
    assert_eq!(dispatcher.submit(&form), SubmitOutcome::Navigated);
    assert_eq!(nav.routes(), vec![EVENTS_ROUTE.to_string()]);
    assert!(api.sent().is_empty());
}
