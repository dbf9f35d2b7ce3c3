// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Full event form workflows through the HTTP client.

use std::sync::Arc;

use chrono::Utc;
use serde_json::json;
use teamup_core::{
    ApiConfig, Credentials, EVENTS_ROUTE, EventFormSession, EventId, EventsClient, Field,
    LoadOutcome, StaticCredentials,
};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common::{RecordingNavigator, RecordingNotifier, filled_form, standup_json};

fn client_for(server: &MockServer) -> EventsClient {
    let creds: Credentials = [("auth_token", "t0k3n")].into_iter().collect();
    EventsClient::new(
        ApiConfig::with_base_url(server.uri()),
        Arc::new(StaticCredentials::new(creds)),
    )
    .expect("Failed to create client")
}

#[tokio::test]
async fn workflow_edit_loads_and_updates_event() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/events/65a1"))
        .and(header("auth_token", "t0k3n"))
        .respond_with(ResponseTemplate::new(200).set_body_json(standup_json()))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("PATCH"))
        .and(path("/users/events/65a1/update"))
        .and(header("auth_token", "t0k3n"))
        .and(body_json(json!({
            "event_name": "Standup (moved)",
            "from": "2024-01-01T09:00:00.000Z",
            "to": "2024-01-01T09:15:00.000Z",
            "location": "Room A",
            "description": "daily"
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let nav = RecordingNavigator::default();
    let notifier = RecordingNotifier::default();
    let (mut session, outcome) =
        EventFormSession::mount(&client, &nav, &notifier, Utc, Some(EventId::from("65a1")))
            .await;
    assert!(matches!(outcome, LoadOutcome::Loaded));

    session.set(Field::EventName, "Standup (moved)");
    session.update().await.expect("Failed to update event");

    assert_eq!(nav.routes(), vec![EVENTS_ROUTE.to_string()]);
    assert!(notifier.messages().is_empty());
}

#[tokio::test]
async fn workflow_create_posts_form_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/users/events/create"))
        .and(body_json(json!({
            "event_name": "Lunch",
            "from": "2024-03-10T14:30:00.000Z",
            "to": "2024-03-10T15:00:00.000Z",
            "location": "Cafe",
            "description": "with team"
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let nav = RecordingNavigator::default();
    let notifier = RecordingNotifier::default();
    let (mut session, _) = EventFormSession::mount(&client, &nav, &notifier, Utc, None).await;
    session.replace_fields(filled_form("Lunch", "with team"));

    session.create().await.expect("Failed to create event");

    assert!(session.is_done());
    assert_eq!(nav.routes(), vec![EVENTS_ROUTE.to_string()]);
}

#[tokio::test]
async fn workflow_create_sends_null_for_blank_times() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/users/events/create"))
        .and(body_json(json!({
            "event_name": "Lunch",
            "from": null,
            "to": null,
            "location": "",
            "description": ""
        })))
        .respond_with(ResponseTemplate::new(422))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let nav = RecordingNavigator::default();
    let notifier = RecordingNotifier::default();
    let (mut session, _) = EventFormSession::mount(&client, &nav, &notifier, Utc, None).await;
    session.set(Field::EventName, "Lunch");

    let err = session.create().await.unwrap_err();

    assert_eq!(err.user_message(), "Please check your form again.");
    assert_eq!(
        notifier.messages(),
        vec!["Please check your form again.".to_string()]
    );
    assert!(nav.routes().is_empty());
    assert!(!session.is_done());
}

#[tokio::test]
async fn workflow_delete_failure_notifies() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/events/65a1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(standup_json()))
        .mount(&mock_server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/users/events/65a1/delete"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let nav = RecordingNavigator::default();
    let notifier = RecordingNotifier::default();
    let (mut session, _) =
        EventFormSession::mount(&client, &nav, &notifier, Utc, Some(EventId::from("65a1")))
            .await;

    assert!(session.delete().await.is_err());
    assert_eq!(
        notifier.messages(),
        vec!["Form Delete unsuccessful.".to_string()]
    );
    assert!(nav.routes().is_empty());
    assert_eq!(session.form().event_name(), "Standup");
}

#[tokio::test]
async fn workflow_unauthorized_load_leaves_form_empty() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/events/65a1"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid token"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let nav = RecordingNavigator::default();
    let notifier = RecordingNotifier::default();
    let (session, outcome) =
        EventFormSession::mount(&client, &nav, &notifier, Utc, Some(EventId::from("65a1")))
            .await;

    assert!(outcome.is_failed());
    assert_eq!(session.form().event_name(), "");
    assert_eq!(session.form().from_date(), "");
}
