// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{FixedOffset, Utc};
use teamup_core::{EventFormSession, EventId, FormAction, LoadOutcome, Phase};

use crate::common::{FakeApi, RecordingNavigator, RecordingNotifier, standup_event};

#[tokio::test]
async fn mount_without_id_starts_empty_for_creation() {
    let api = FakeApi::new();
    let nav = RecordingNavigator::default();
    let notifier = RecordingNotifier::default();

    let (session, outcome) = EventFormSession::mount(&api, &nav, &notifier, Utc, None).await;

    assert!(matches!(outcome, LoadOutcome::NotRequested));
    assert!(api.loads().is_empty());
    assert_eq!(session.phase(), Phase::Populated);
    assert_eq!(session.form().event_name(), "");
    assert!(!session.form().api_status());
    assert_eq!(session.actions(), &[FormAction::Create]);
}

#[tokio::test]
async fn mount_with_id_loads_once_and_populates() {
    let api = FakeApi::with_event(standup_event());
    let nav = RecordingNavigator::default();
    let notifier = RecordingNotifier::default();

    let (session, outcome) =
        EventFormSession::mount(&api, &nav, &notifier, Utc, Some(EventId::from("65a1"))).await;

    assert!(matches!(outcome, LoadOutcome::Loaded));
    assert_eq!(api.loads(), vec![EventId::from("65a1")]);

    let form = session.form();
    assert_eq!(form.event_name(), "Standup");
    assert_eq!(form.from_date(), "2024-01-01T09:00");
    assert_eq!(form.to_date(), "2024-01-01T09:15");
    assert_eq!(form.location(), "Room A");
    assert_eq!(form.description(), "daily");
    assert!(!form.api_status());
    assert_eq!(session.actions(), &[FormAction::Update, FormAction::Delete]);
    assert!(nav.routes().is_empty());
    assert!(notifier.messages().is_empty());
}

#[tokio::test]
async fn mount_renders_times_in_session_timezone() {
    let api = FakeApi::with_event(standup_event());
    let nav = RecordingNavigator::default();
    let notifier = RecordingNotifier::default();
    let tz = FixedOffset::east_opt(5 * 3600 + 1800).unwrap();

    let (session, _) =
        EventFormSession::mount(&api, &nav, &notifier, tz, Some(EventId::from("65a1"))).await;

    assert_eq!(session.form().from_date(), "2024-01-01T14:30");
    assert_eq!(session.form().to_date(), "2024-01-01T14:45");
}

#[tokio::test]
async fn mount_load_failure_is_reported_and_form_stays_empty() {
    let api = FakeApi::with_event(standup_event()).failing_load();
    let nav = RecordingNavigator::default();
    let notifier = RecordingNotifier::default();

    let (session, outcome) =
        EventFormSession::mount(&api, &nav, &notifier, Utc, Some(EventId::from("65a1"))).await;

    match outcome {
        LoadOutcome::Failed(e) => assert_eq!(e.id, EventId::from("65a1")),
        other => panic!("Expected a failed load, got {other:?}"),
    }
    assert_eq!(session.form().event_name(), "");
    assert_eq!(session.phase(), Phase::Populated);
    assert!(!session.form().api_status());
    // still an edit form: the id came from navigation, not from the load
    assert_eq!(session.actions(), &[FormAction::Update, FormAction::Delete]);
    assert!(notifier.messages().is_empty(), "the session itself does not notify");
}
