//! REST surface tests driven through the router with `oneshot`

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use music_library::infra::storage::MemoryStore;
use music_library::{Config, MusicLibraryModule};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::util::ServiceExt; // for `oneshot`

fn setup_app() -> Router {
    let module = MusicLibraryModule::new(Config::default(), Arc::new(MemoryStore::music_library()));
    module.router().expect("router")
}

fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Should read body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("Should parse JSON")
    };
    (status, body)
}

async fn create_composer(app: &Router) -> Value {
    let (status, body) = send(
        app,
        json_request(
            Method::POST,
            "/api/composers",
            json!({ "name": "Bach", "period": "Baroque", "image": "bach.jpg" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body
}

#[tokio::test]
async fn health_endpoint_reports_running() {
    let app = setup_app();
    let (status, body) = send(&app, empty_request(Method::GET, "/")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["message"].as_str().unwrap().contains("running"));
}

#[tokio::test]
async fn composer_round_trip_uses_camel_case() {
    let app = setup_app();
    let created = create_composer(&app).await;
    let id = created["id"].as_str().unwrap();

    let (status, body) = send(&app, empty_request(Method::GET, &format!("/api/composers/{id}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Bach");
    assert_eq!(body["sheetMusicCount"], 0);
    assert_eq!(body["recordingCount"], 0);
    assert!(body["createdAt"].is_string());
    assert_eq!(body["works"], json!([]));
    assert_eq!(body["recordings"], json!([]));
    assert!(body.get("sheet_music_count").is_none());
}

#[tokio::test]
async fn works_and_recordings_attach_to_composer() {
    let app = setup_app();
    let composer = create_composer(&app).await;
    let id = composer["id"].as_str().unwrap();

    let (status, work) = send(
        &app,
        json_request(
            Method::POST,
            "/api/works",
            json!({ "composerId": id, "title": "Goldberg Variations", "fileUrl": "bwv988.pdf" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(work["composerId"], id);
    assert_eq!(work["fileUrl"], "bwv988.pdf");
    assert_eq!(work["edition"], Value::Null);

    let (status, _) = send(
        &app,
        json_request(
            Method::POST,
            "/api/recordings",
            json!({ "composerId": id, "title": "Goldberg (1981)", "performer": "Glenn Gould" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, body) = send(&app, empty_request(Method::GET, &format!("/api/composers/{id}"))).await;
    assert_eq!(body["works"].as_array().unwrap().len(), 1);
    assert_eq!(body["works"][0]["title"], "Goldberg Variations");
    assert_eq!(body["recordings"][0]["performer"], "Glenn Gould");

    let (_, list) = send(&app, empty_request(Method::GET, "/api/composers")).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
    assert_eq!(list[0]["works"], json!([]));
}

#[tokio::test]
async fn update_work_ignores_immutable_fields() {
    let app = setup_app();
    let composer = create_composer(&app).await;
    let id = composer["id"].as_str().unwrap();
    let (_, work) = send(
        &app,
        json_request(Method::POST, "/api/works", json!({ "composerId": id, "title": "Partita" })),
    )
    .await;
    let work_id = work["id"].as_str().unwrap();

    let (status, updated) = send(
        &app,
        json_request(
            Method::PUT,
            &format!("/api/works/{work_id}"),
            json!({
                "id": "forged",
                "composerId": "someone-else",
                "createdAt": "1999-01-01T00:00:00Z",
                "title": "Partita No. 1",
                "year": "1726"
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], work_id);
    assert_eq!(updated["composerId"], id);
    assert_eq!(updated["createdAt"], work["createdAt"]);
    assert_eq!(updated["title"], "Partita No. 1");
    assert_eq!(updated["year"], "1726");
}

#[tokio::test]
async fn update_recording_ignores_immutable_fields() {
    let app = setup_app();
    let composer = create_composer(&app).await;
    let id = composer["id"].as_str().unwrap();
    let (status, recording) = send(
        &app,
        json_request(
            Method::POST,
            "/api/recordings",
            json!({ "composerId": id, "title": "Cello Suite No. 1", "duration": "17:54" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let recording_id = recording["id"].as_str().unwrap();

    let (status, updated) = send(
        &app,
        json_request(
            Method::PUT,
            &format!("/api/recordings/{recording_id}"),
            json!({
                "id": "forged",
                "composerId": "someone-else",
                "createdAt": "1999-01-01T00:00:00Z",
                "performer": "Pablo Casals"
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], recording_id);
    assert_eq!(updated["composerId"], id);
    assert_eq!(updated["createdAt"], recording["createdAt"]);
    assert_eq!(updated["performer"], "Pablo Casals");
    assert_eq!(updated["title"], "Cello Suite No. 1");
    assert_eq!(updated["duration"], "17:54");

    let (_, fetched) = send(&app, empty_request(Method::GET, &format!("/api/composers/{id}"))).await;
    let recordings = fetched["recordings"].as_array().unwrap();
    assert_eq!(recordings.len(), 1);
    assert_eq!(recordings[0]["id"], recording_id);
    assert_eq!(recordings[0]["createdAt"], recording["createdAt"]);
    assert_eq!(recordings[0]["performer"], "Pablo Casals");
}

#[tokio::test]
async fn partial_composer_update_over_http() {
    let app = setup_app();
    let composer = create_composer(&app).await;
    let id = composer["id"].as_str().unwrap();

    let (status, updated) = send(
        &app,
        json_request(Method::PUT, &format!("/api/composers/{id}"), json!({ "period": "Late Baroque" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["period"], "Late Baroque");
    assert_eq!(updated["name"], "Bach");
    assert_eq!(updated["image"], "bach.jpg");
}

#[tokio::test]
async fn missing_resources_return_problem_404() {
    let app = setup_app();

    for request in [
        empty_request(Method::GET, "/api/composers/nope"),
        empty_request(Method::DELETE, "/api/composers/nope"),
        empty_request(Method::DELETE, "/api/works/nope"),
        empty_request(Method::DELETE, "/api/recordings/nope"),
        json_request(Method::PUT, "/api/composers/nope", json!({ "name": "x" })),
        json_request(Method::PUT, "/api/works/nope", json!({ "title": "x" })),
        json_request(Method::PUT, "/api/recordings/nope", json!({ "title": "x" })),
    ] {
        let (status, body) = send(&app, request).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["status"], 404);
        assert!(body["detail"].as_str().unwrap().contains("nope"));
    }
}

#[tokio::test]
async fn invalid_bodies_are_rejected() {
    let app = setup_app();

    let (status, body) = send(
        &app,
        json_request(Method::POST, "/api/composers", json!({ "name": "Bach" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["title"], "Validation Error");

    let (status, _) = send(
        &app,
        json_request(
            Method::POST,
            "/api/composers",
            json!({ "name": "", "period": "Baroque", "image": "bach.jpg" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let malformed = Request::builder()
        .method(Method::POST)
        .uri("/api/works")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, body) = send(&app, malformed).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], 400);
}

#[tokio::test]
async fn delete_returns_confirmation_message() {
    let app = setup_app();
    let composer = create_composer(&app).await;
    let id = composer["id"].as_str().unwrap();

    let (status, body) = send(&app, empty_request(Method::DELETE, &format!("/api/composers/{id}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Composer deleted successfully");

    let (status, _) = send(&app, empty_request(Method::GET, &format!("/api/composers/{id}"))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn cors_preflight_allows_configured_origin_only() {
    let app = setup_app();

    let preflight = |origin: &str| {
        Request::builder()
            .method(Method::OPTIONS)
            .uri("/api/composers")
            .header(header::ORIGIN, origin)
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
            .body(Body::empty())
            .unwrap()
    };

    let response = app.clone().oneshot(preflight("http://localhost:5173")).await.unwrap();
    let headers = response.headers();
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "http://localhost:5173"
    );
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).unwrap(),
        "true"
    );

    let response = app.clone().oneshot(preflight("https://evil.example")).await.unwrap();
    assert!(response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
}
