//! PostgREST client against a mock HTTP server

use httpmock::prelude::*;
use music_library::domain::{Filter, Order, RowStore};
use music_library::infra::storage::PostgrestStore;
use music_library::{Config, LibraryError, MusicLibraryModule, NewWork, WorkPatch};
use serde_json::json;
use std::sync::Arc;

const KEY: &str = "anon-key";

fn store(server: &MockServer) -> PostgrestStore {
    PostgrestStore::new(&server.base_url(), KEY).expect("store")
}

fn bach_row() -> serde_json::Value {
    json!({
        "id": "c1",
        "name": "Bach",
        "period": "Baroque",
        "image": "bach.jpg",
        "sheet_music_count": 2,
        "recording_count": 0,
        "created_at": "2024-01-01T00:00:00+00:00"
    })
}

#[tokio::test]
async fn select_sends_filters_order_and_auth() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/rest/v1/works")
                .query_param("select", "*")
                .query_param("composer_id", "eq.c1")
                .query_param("order", "created_at.asc")
                .header("apikey", KEY)
                .header("authorization", format!("Bearer {KEY}"));
            then.status(200).json_body(json!([
                { "id": "w1", "composer_id": "c1", "title": "Partita" }
            ]));
        })
        .await;

    let rows = store(&server)
        .select(
            "works",
            &[Filter::eq("composer_id", "c1")],
            Some(&Order::asc("created_at")),
        )
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["title"], "Partita");
}

#[tokio::test]
async fn writes_ask_for_representation() {
    let server = MockServer::start_async().await;
    let insert = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/rest/v1/composers")
                .header("prefer", "return=representation")
                .json_body(json!({ "name": "Bach", "period": "Baroque", "image": "bach.jpg" }));
            then.status(201).json_body(json!([bach_row()]));
        })
        .await;
    let update = server
        .mock_async(|when, then| {
            when.method(PATCH)
                .path("/rest/v1/composers")
                .query_param("id", "eq.c1")
                .header("prefer", "return=representation")
                .json_body(json!({ "period": "Late Baroque" }));
            then.status(200).json_body(json!([]));
        })
        .await;

    let store = store(&server);
    let row = json!({ "name": "Bach", "period": "Baroque", "image": "bach.jpg" });
    let created = store
        .insert("composers", row.as_object().cloned().unwrap())
        .await
        .unwrap();
    assert_eq!(created[0]["id"], "c1");

    let changes = json!({ "period": "Late Baroque" });
    let updated = store
        .update(
            "composers",
            changes.as_object().cloned().unwrap(),
            &[Filter::eq("id", "c1")],
        )
        .await
        .unwrap();
    assert!(updated.is_empty());

    insert.assert_async().await;
    update.assert_async().await;
}

#[tokio::test]
async fn schema_profile_headers_follow_method() {
    let server = MockServer::start_async().await;
    let read = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/rest/v1/recordings")
                .header("accept-profile", "library");
            then.status(200).json_body(json!([]));
        })
        .await;
    let write = server
        .mock_async(|when, then| {
            when.method(DELETE)
                .path("/rest/v1/recordings")
                .header("content-profile", "library");
            then.status(200).json_body(json!([]));
        })
        .await;

    let store = store(&server).with_schema("library");
    store.select("recordings", &[], None).await.unwrap();
    store
        .delete("recordings", &[Filter::eq("id", "r1")])
        .await
        .unwrap();

    read.assert_async().await;
    write.assert_async().await;
}

#[tokio::test]
async fn error_body_is_surfaced() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/rest/v1/works");
            then.status(400).json_body(json!({
                "code": "PGRST204",
                "message": "Could not find the 'composerId' column of 'works' in the schema cache",
                "details": null,
                "hint": null
            }));
        })
        .await;

    let err = store(&server)
        .insert("works", json!({ "composerId": "c1" }).as_object().cloned().unwrap())
        .await
        .unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("PGRST204"), "{message}");
    assert!(message.contains("composerId"), "{message}");
}

#[tokio::test]
async fn services_map_store_results_to_contract_errors() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/rest/v1/composers")
                .query_param("id", "eq.missing");
            then.status(200).json_body(json!([]));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(PATCH)
                .path("/rest/v1/works")
                .query_param("id", "eq.w9")
                .json_body(json!({ "title": "Renamed" }));
            then.status(200).json_body(json!([]));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/rest/v1/works");
            then.status(503).body("upstream unavailable");
        })
        .await;

    let module = MusicLibraryModule::new(Config::default(), Arc::new(store(&server)));
    let client = module.client();

    assert!(matches!(
        client.get_composer("missing").await,
        Err(LibraryError::NotFound { .. })
    ));
    assert!(matches!(
        client
            .update_work(
                "w9",
                WorkPatch {
                    title: Some("Renamed".into()),
                    ..Default::default()
                },
            )
            .await,
        Err(LibraryError::NotFound { .. })
    ));

    let result = client
        .create_work(NewWork {
            composer_id: "c1".into(),
            title: "Toccata".into(),
            edition: None,
            year: None,
            file_url: None,
        })
        .await;
    match result {
        Err(LibraryError::Store { message }) => assert!(message.contains("503"), "{message}"),
        other => panic!("expected Store error, got {other:?}"),
    }
}

#[tokio::test]
async fn get_composer_issues_three_reads() {
    let server = MockServer::start_async().await;
    let composer = server
        .mock_async(|when, then| {
            when.method(GET).path("/rest/v1/composers").query_param("id", "eq.c1");
            then.status(200).json_body(json!([bach_row()]));
        })
        .await;
    let works = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/rest/v1/works")
                .query_param("composer_id", "eq.c1");
            then.status(200).json_body(json!([
                { "id": "w1", "composer_id": "c1", "title": "Partita", "edition": null,
                  "year": "1726", "file_url": null, "created_at": "2024-01-02T00:00:00+00:00" }
            ]));
        })
        .await;
    let recordings = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/rest/v1/recordings")
                .query_param("composer_id", "eq.c1");
            then.status(200).json_body(json!([]));
        })
        .await;

    let module = MusicLibraryModule::new(Config::default(), Arc::new(store(&server)));
    let fetched = module.client().get_composer("c1").await.unwrap();

    assert_eq!(fetched.sheet_music_count, 2);
    assert_eq!(fetched.works.len(), 1);
    assert_eq!(fetched.works[0].year.as_deref(), Some("1726"));
    assert!(fetched.recordings.is_empty());

    composer.assert_async().await;
    works.assert_async().await;
    recordings.assert_async().await;
}
