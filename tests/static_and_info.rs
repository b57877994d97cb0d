mod common;

use axum::http::{Method, StatusCode};
use common::spawn_app;
use std::fs;

#[tokio::test]
async fn status_endpoints_serve_fixed_documents() {
    let app = spawn_app(None).await;

    let status = app.get("/api/status").await;
    assert_eq!(status.status, StatusCode::OK);
    assert_eq!(status.json()["status"], "operational");
    assert_eq!(status.json()["services"]["database"], "connected");

    let infra = app.get("/api/infrastructure").await;
    assert_eq!(infra.status, StatusCode::OK);
    let body = infra.json();
    assert_eq!(body["environments"]["preprod"]["status"], "active");
    assert_eq!(body["technologies"].as_array().unwrap().len(), 9);
}

#[tokio::test]
async fn fallback_without_static_dir_is_not_found() {
    let app = spawn_app(None).await;

    let response = app.get("/dashboard").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.text(), "Static folder not configured");
}

#[tokio::test]
async fn fallback_serves_assets_and_index() {
    let site = tempfile::tempdir().unwrap();
    fs::write(site.path().join("index.html"), "<html>spa</html>").unwrap();
    fs::create_dir(site.path().join("assets")).unwrap();
    fs::write(site.path().join("assets/app.js"), "console.log(1)").unwrap();
    let app = spawn_app(Some(site.path().to_path_buf())).await;

    let root = app.get("/").await;
    assert_eq!(root.status, StatusCode::OK);
    assert_eq!(root.text(), "<html>spa</html>");
    assert!(root.content_type.unwrap().starts_with("text/html"));

    let asset = app.get("/assets/app.js").await;
    assert_eq!(asset.status, StatusCode::OK);
    assert_eq!(asset.text(), "console.log(1)");
    assert!(asset.content_type.unwrap().contains("javascript"));

    let client_route = app.get("/settings/profile").await;
    assert_eq!(client_route.status, StatusCode::OK);
    assert_eq!(client_route.text(), "<html>spa</html>");

    let directory = app.get("/assets").await;
    assert_eq!(directory.text(), "<html>spa</html>");
}

#[tokio::test]
async fn fallback_without_index_is_not_found() {
    let site = tempfile::tempdir().unwrap();
    fs::write(site.path().join("robots.txt"), "User-agent: *").unwrap();
    let app = spawn_app(Some(site.path().to_path_buf())).await;

    let robots = app.get("/robots.txt").await;
    assert_eq!(robots.status, StatusCode::OK);

    let response = app.get("/missing").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.text(), "index.html not found");
}

#[tokio::test]
async fn unknown_api_method_is_not_served_by_fallback() {
    let app = spawn_app(None).await;

    let response = app.send(Method::PATCH, "/api/users/1", None).await;
    assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED);
}
