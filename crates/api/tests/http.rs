//! Router-level tests driving the API end to end against in-memory SQLite

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use labarchive_api::{create_router, AppState};
use labarchive_common::{auth::JwtManager, config::AppConfig, db::models::*, db::DbPool};
use sea_orm::{ConnectionTrait, Database, DbBackend, Schema};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

async fn test_app() -> Router {
    let conn = Database::connect("sqlite::memory:")
        .await
        .expect("connect to in-memory sqlite");

    let schema = Schema::new(DbBackend::Sqlite);
    let stmts = vec![
        schema.create_table_from_entity(UserEntity),
        schema.create_table_from_entity(TagEntity),
        schema.create_table_from_entity(PaperEntity),
        schema.create_table_from_entity(ProjectEntity),
        schema.create_table_from_entity(PaperAuthorEntity),
        schema.create_table_from_entity(PaperTagEntity),
        schema.create_table_from_entity(ProjectTagEntity),
        schema.create_table_from_entity(FileEntity),
        schema.create_table_from_entity(MediaEntity),
        schema.create_table_from_entity(EventEntity),
    ];
    for stmt in stmts {
        let backend = conn.get_database_backend();
        conn.execute(backend.build(&stmt)).await.expect("create table");
    }

    let config = AppConfig::default();
    let state = AppState {
        jwt: JwtManager::new("test-secret", 3600),
        config: Arc::new(config),
        db: DbPool::from_connection(conn),
    };

    create_router(state)
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    (status, value)
}

/// Register a user through the API and return its id
async fn register_user(app: &Router, email: &str, password: &str, role: &str) -> i32 {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/papers/user",
        None,
        Some(json!({
            "name": email.split('@').next().unwrap(),
            "email": email,
            "password": password,
            "role": role,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_i64().unwrap() as i32
}

/// Log in through the API and return the bearer token
async fn login(app: &Router, email: &str, password: &str) -> String {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/login",
        None,
        Some(json!({ "email": email, "password": password })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["token"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn health_endpoints_respond() {
    let app = test_app().await;

    let (status, body) = send(&app, Method::GET, "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let (status, body) = send(&app, Method::GET, "/ready", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["checks"]["database"]["status"], "up");
}

#[tokio::test]
async fn login_requires_credentials() {
    let app = test_app().await;

    let (status, _) = send(&app, Method::POST, "/api/login", None, Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/login",
        None,
        Some(json!({ "email": "ghost@example.com", "password": "nope" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn login_rejects_wrong_password() {
    let app = test_app().await;
    register_user(&app, "alice@example.com", "hunter2", "USER").await;

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/login",
        None,
        Some(json!({ "email": "alice@example.com", "password": "wrong" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn duplicate_email_conflicts() {
    let app = test_app().await;
    register_user(&app, "alice@example.com", "hunter2", "USER").await;

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/papers/user",
        None,
        Some(json!({ "email": "alice@example.com", "password": "hunter2" })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn admin_dashboard_is_guarded() {
    let app = test_app().await;

    // No token
    let (status, _) = send(&app, Method::GET, "/api/admin", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // Garbage token
    let (status, _) = send(&app, Method::GET, "/api/admin", Some("garbage"), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // Non-admin token
    register_user(&app, "user@example.com", "hunter2", "USER").await;
    let token = login(&app, "user@example.com", "hunter2").await;
    let (status, _) = send(&app, Method::GET, "/api/admin", Some(&token), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    // Admin token
    register_user(&app, "admin@example.com", "admin123", "ADMIN").await;
    let token = login(&app, "admin@example.com", "admin123").await;
    let (status, body) = send(&app, Method::GET, "/api/admin", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["users"].as_array().unwrap().len() >= 2);
    assert!(body["papers"].is_array());
}

#[tokio::test]
async fn paper_crud_roundtrip() {
    let app = test_app().await;

    let alice = register_user(&app, "alice@example.com", "hunter2", "USER").await;

    // Create
    let (status, created) = send(
        &app,
        Method::POST,
        "/api/papers",
        None,
        Some(json!({
            "title": "A Study on Quantum Algorithms",
            "abstract": "Quantum computing...",
            "date": "2024-01-01",
            "author_ids": [alice],
            "tag_names": ["Quantum", "Algorithms"],
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let paper_id = created["id"].as_i64().unwrap();
    assert_eq!(created["authors"][0]["role"], "corresponding");
    assert_eq!(created["tags"].as_array().unwrap().len(), 2);

    // List
    let (status, list) = send(&app, Method::GET, "/api/papers", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().unwrap().len(), 1);

    // Lookup helpers
    let (_, years) = send(&app, Method::GET, "/api/papers/years", None, None).await;
    assert_eq!(years, json!([2024]));

    let (_, next) = send(&app, Method::GET, "/api/papers/new-id", None, None).await;
    assert_eq!(next["id"].as_i64().unwrap(), paper_id + 1);

    let (_, tags) = send(&app, Method::GET, "/api/papers/tags", None, None).await;
    assert_eq!(tags.as_array().unwrap().len(), 2);

    let (_, authors) = send(&app, Method::GET, "/api/papers/authors", None, None).await;
    assert_eq!(authors.as_array().unwrap().len(), 1);

    // Get
    let uri = format!("/api/papers/{}", paper_id);
    let (status, fetched) = send(&app, Method::GET, &uri, None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["title"], "A Study on Quantum Algorithms");

    // Patch: retitle and replace tags
    let (status, patched) = send(
        &app,
        Method::PATCH,
        &uri,
        None,
        Some(json!({ "title": "Quantum Algorithms, Revisited", "tag_names": ["Quantum"] })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(patched["title"], "Quantum Algorithms, Revisited");
    assert_eq!(patched["tags"].as_array().unwrap().len(), 1);
    assert_eq!(patched["abstract"], "Quantum computing...");

    // Delete
    let (status, _) = send(&app, Method::DELETE, &uri, None, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, Method::GET, &uri, None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::DELETE, &uri, None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn paper_search_with_filters_and_sort() {
    let app = test_app().await;

    let alice = register_user(&app, "alice@example.com", "hunter2", "USER").await;

    for (title, year, tag, authors) in [
        ("Machine Learning in Healthcare", 2023, "Healthcare", vec![alice]),
        ("Blockchain and Security", 2025, "Security", vec![]),
    ] {
        let (status, _) = send(
            &app,
            Method::POST,
            "/api/papers",
            None,
            Some(json!({
                "title": title,
                "abstract": "An overview...",
                "date": format!("{}-01-01", year),
                "author_ids": authors,
                "tag_names": [tag],
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    // Free-text query, case-insensitive
    let (status, found) = send(
        &app,
        Method::GET,
        "/api/papers/search?query=machine%20learning",
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(found.as_array().unwrap().len(), 1);

    // Year filter
    let (_, found) = send(&app, Method::GET, "/api/papers/search?year=2025", None, None).await;
    assert_eq!(found.as_array().unwrap().len(), 1);
    assert_eq!(found[0]["title"], "Blockchain and Security");

    // Non-numeric year is ignored
    let (_, found) = send(&app, Method::GET, "/api/papers/search?year=abc", None, None).await;
    assert_eq!(found.as_array().unwrap().len(), 2);

    // Column filters as JSON (author name contains)
    let (_, found) = send(
        &app,
        Method::GET,
        "/api/papers/search?filters=%7B%22author%22%3A%22alice%22%7D",
        None,
        None,
    )
    .await;
    assert_eq!(found.as_array().unwrap().len(), 1);
    assert_eq!(found[0]["title"], "Machine Learning in Healthcare");

    // Invalid filters JSON is ignored
    let (status, found) = send(
        &app,
        Method::GET,
        "/api/papers/search?filters=not-json",
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(found.as_array().unwrap().len(), 2);

    // Sort by title descending
    let (_, found) = send(
        &app,
        Method::GET,
        "/api/papers/search?sort=title_desc",
        None,
        None,
    )
    .await;
    let titles: Vec<_> = found
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["title"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(
        titles,
        vec!["Machine Learning in Healthcare", "Blockchain and Security"]
    );
}

#[tokio::test]
async fn user_routes_expose_detail_graph() {
    let app = test_app().await;

    let alice = register_user(&app, "alice@example.com", "hunter2", "USER").await;

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/papers",
        None,
        Some(json!({
            "title": "Her Paper",
            "abstract": "a",
            "author_ids": [alice],
            "tag_names": ["AI"],
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, created) = send(
        &app,
        Method::POST,
        "/api/users/projects",
        None,
        Some(json!({
            "title": "Her Project",
            "summary": "Summary",
            "owner_id": alice,
            "tag_names": ["AI"],
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["owner"]["id"].as_i64().unwrap() as i32, alice);

    // Listing hides emails and hashes
    let (status, list) = send(&app, Method::GET, "/api/users", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(list[0].get("email").is_none());
    assert!(list[0].get("password_hash").is_none());

    // Detail graph
    let (status, detail) = send(
        &app,
        Method::GET,
        &format!("/api/users/{}", alice),
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(detail["papers"].as_array().unwrap().len(), 1);
    assert_eq!(detail["papers"][0]["role"], "corresponding");
    assert_eq!(detail["projects"].as_array().unwrap().len(), 1);

    let (status, _) = send(&app, Method::GET, "/api/users/999", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn project_routes_roundtrip() {
    let app = test_app().await;

    let (status, created) = send(
        &app,
        Method::POST,
        "/api/projects",
        None,
        Some(json!({
            "title": "AI for Social Good",
            "summary": "Research project",
            "start_date": "2023-06-01",
            "end_date": "2025-06-01",
            "tag_names": ["AI"],
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let project_id = created["id"].as_i64().unwrap();
    assert_eq!(created["tags"][0]["name"], "AI");

    let (status, list) = send(&app, Method::GET, "/api/projects", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().unwrap().len(), 1);

    let (status, fetched) = send(
        &app,
        Method::GET,
        &format!("/api/projects/{}", project_id),
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["title"], "AI for Social Good");

    let (status, _) = send(&app, Method::GET, "/api/projects/999", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn create_paper_requires_title() {
    let app = test_app().await;

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/papers",
        None,
        Some(json!({ "title": "", "abstract": "a" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
