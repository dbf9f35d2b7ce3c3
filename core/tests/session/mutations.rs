// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::Utc;
use teamup_core::{
    EVENTS_ROUTE, EventFormSession, EventId, EventRequest, Field, FormAction, MutationError, Phase,
};

use crate::common::{FakeApi, RecordingNavigator, RecordingNotifier, filled_form, standup_event};

#[tokio::test]
async fn create_sends_one_post_and_navigates() {
    let api = FakeApi::new();
    let nav = RecordingNavigator::default();
    let notifier = RecordingNotifier::default();
    let (mut session, _) = EventFormSession::mount(&api, &nav, &notifier, Utc, None).await;
    session.replace_fields(filled_form("Lunch", "with team"));

    session.create().await.unwrap();

    let sent = api.sent();
    assert_eq!(sent.len(), 1);
    match &sent[0] {
        EventRequest::Create(body) => {
            assert_eq!(body.event_name, "Lunch");
            assert_eq!(body.from.as_deref(), Some("2024-03-10T14:30:00.000Z"));
            assert_eq!(body.to.as_deref(), Some("2024-03-10T15:00:00.000Z"));
            assert_eq!(body.location, "Cafe");
            assert_eq!(body.description, "with team");
        }
        other => panic!("Expected create, got {other:?}"),
    }
    assert!(session.form().api_status());
    assert_eq!(session.phase(), Phase::Done);
    assert_eq!(nav.routes(), vec![EVENTS_ROUTE.to_string()]);
    assert!(notifier.messages().is_empty());
}

#[tokio::test]
async fn create_with_empty_description_sends_empty_string() {
    let api = FakeApi::new();
    let nav = RecordingNavigator::default();
    let notifier = RecordingNotifier::default();
    let (mut session, _) = EventFormSession::mount(&api, &nav, &notifier, Utc, None).await;
    session.replace_fields(filled_form("Lunch", ""));

    session.create().await.unwrap();

    let body = api.sent()[0].body().cloned().unwrap();
    assert_eq!(body.description, "");
}

#[tokio::test]
async fn failed_create_notifies_once_and_keeps_form() {
    let api = FakeApi::new().failing_send();
    let nav = RecordingNavigator::default();
    let notifier = RecordingNotifier::default();
    let (mut session, _) = EventFormSession::mount(&api, &nav, &notifier, Utc, None).await;
    session.replace_fields(filled_form("Lunch", "with team"));
    let before = session.form().clone();

    let err = session.create().await.unwrap_err();

    assert!(matches!(err, MutationError::Rejected { action: FormAction::Create, .. }));
    assert_eq!(err.user_message(), "Please check your form again.");
    assert_eq!(session.form(), &before);
    assert!(!session.form().api_status());
    assert_eq!(session.phase(), Phase::Populated);
    assert_eq!(notifier.messages(), vec!["Please check your form again.".to_string()]);
    assert!(nav.routes().is_empty());
}

#[tokio::test]
async fn failed_create_can_be_corrected_and_retried_by_user() {
    let api = FakeApi::new().failing_send();
    let nav = RecordingNavigator::default();
    let notifier = RecordingNotifier::default();
    let (mut session, _) = EventFormSession::mount(&api, &nav, &notifier, Utc, None).await;
    session.replace_fields(filled_form("", "with team"));

    assert!(session.create().await.is_err());
    assert_eq!(api.sent().len(), 1, "no automatic retry");

    api.set_fail_send(false);
    assert!(session.set(Field::EventName, "Lunch"));
    session.create().await.unwrap();

    assert_eq!(api.sent().len(), 2);
    assert_eq!(nav.routes().len(), 1);
}

#[tokio::test]
async fn update_twice_sends_identical_bodies() {
    let api = FakeApi::with_event(standup_event()).failing_send();
    let nav = RecordingNavigator::default();
    let notifier = RecordingNotifier::default();
    let (mut session, _) =
        EventFormSession::mount(&api, &nav, &notifier, Utc, Some(EventId::from("65a1"))).await;

    // failures keep the form open, so the same form can be sent again
    assert!(session.update().await.is_err());
    assert!(session.update().await.is_err());

    let sent = api.sent();
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[0], sent[1]);
}

#[tokio::test]
async fn update_after_load_round_trips_values() {
    let api = FakeApi::with_event(standup_event());
    let nav = RecordingNavigator::default();
    let notifier = RecordingNotifier::default();
    let (mut session, _) =
        EventFormSession::mount(&api, &nav, &notifier, Utc, Some(EventId::from("65a1"))).await;

    session.update().await.unwrap();

    match &api.sent()[0] {
        EventRequest::Update(id, body) => {
            assert_eq!(id, &EventId::from("65a1"));
            assert_eq!(body.event_name, "Standup");
            assert_eq!(body.location, "Room A");
            assert_eq!(body.description, "daily");
            assert_eq!(body.from.as_deref(), Some("2024-01-01T09:00:00.000Z"));
            assert_eq!(body.to.as_deref(), Some("2024-01-01T09:15:00.000Z"));
        }
        other => panic!("Expected update, got {other:?}"),
    }
    assert_eq!(nav.routes(), vec![EVENTS_ROUTE.to_string()]);
}

#[tokio::test]
async fn failed_delete_uses_delete_message() {
    let api = FakeApi::with_event(standup_event()).failing_send();
    let nav = RecordingNavigator::default();
    let notifier = RecordingNotifier::default();
    let (mut session, _) =
        EventFormSession::mount(&api, &nav, &notifier, Utc, Some(EventId::from("65a1"))).await;

    let err = session.delete().await.unwrap_err();

    assert_eq!(err.user_message(), "Form Delete unsuccessful.");
    assert_eq!(notifier.messages(), vec!["Form Delete unsuccessful.".to_string()]);
    assert!(nav.routes().is_empty());
}

#[tokio::test]
async fn successful_delete_navigates_and_stops() {
    let api = FakeApi::with_event(standup_event());
    let nav = RecordingNavigator::default();
    let notifier = RecordingNotifier::default();
    let (mut session, _) =
        EventFormSession::mount(&api, &nav, &notifier, Utc, Some(EventId::from("65a1"))).await;

    session.delete().await.unwrap();

    assert_eq!(api.sent(), vec![EventRequest::Delete(EventId::from("65a1"))]);
    assert_eq!(nav.routes(), vec![EVENTS_ROUTE.to_string()]);
    assert!(session.is_done());
    assert!(session.actions().is_empty());

    let err = session.update().await.unwrap_err();
    assert!(matches!(err, MutationError::Unavailable(FormAction::Update)));
    assert!(!session.set(Field::EventName, "late edit"));
    assert_eq!(api.sent().len(), 1, "no request after navigating away");
    assert_eq!(nav.routes().len(), 1);
}

#[tokio::test]
async fn actions_not_offered_are_refused_without_request() {
    let api = FakeApi::with_event(standup_event());
    let nav = RecordingNavigator::default();
    let notifier = RecordingNotifier::default();

    let (mut create_form, _) = EventFormSession::mount(&api, &nav, &notifier, Utc, None).await;
    assert!(matches!(
        create_form.update().await,
        Err(MutationError::Unavailable(FormAction::Update))
    ));
    assert!(matches!(
        create_form.delete().await,
        Err(MutationError::Unavailable(FormAction::Delete))
    ));

    let (mut edit_form, _) =
        EventFormSession::mount(&api, &nav, &notifier, Utc, Some(EventId::from("65a1"))).await;
    assert!(matches!(
        edit_form.create().await,
        Err(MutationError::Unavailable(FormAction::Create))
    ));

    assert!(api.sent().is_empty());
    assert!(notifier.messages().is_empty());
}
