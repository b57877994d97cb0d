#![allow(dead_code)]

use axum::{
    Router,
    body::{Body, Bytes, to_bytes},
    http::{HeaderMap, Method, Request, StatusCode, header::CONTENT_TYPE},
};
use serde_json::Value;
use stackboard::config::{AppConfig, BIND_ADDRESS, ConfigService, STATIC_DIR};
use stackboard::infrastructure::database::connect_database;
use stackboard::lifecycle::Application;
use std::path::PathBuf;
use tempfile::TempDir;
use tower::ServiceExt;

pub struct TestApp {
    pub router: Router,
    _db_dir: TempDir,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap()
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

pub async fn spawn_app(static_dir: Option<PathBuf>) -> TestApp {
    let db_dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}?mode=rwc", db_dir.path().join("test.db").display());
    let db = connect_database(&url).await.unwrap();

    let static_dir = static_dir
        .as_deref()
        .map(|dir| dir.to_str().unwrap().to_string())
        .unwrap_or_default();
    let service = ConfigService::from_pairs([
        (BIND_ADDRESS, "127.0.0.1:0"),
        (STATIC_DIR, static_dir.as_str()),
    ]);
    let config = AppConfig::from_service(&service).unwrap();

    let app = Application::builder()
        .config(config)
        .database(db)
        .build()
        .await
        .unwrap();

    TestApp {
        router: app.router(),
        _db_dir: db_dir,
    }
}

impl TestApp {
    pub async fn request(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let content_type = headers
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        TestResponse {
            status,
            content_type,
            headers,
            body,
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(Method::GET, uri, None).await
    }

    pub async fn send(&self, method: Method, uri: &str, json: Option<Value>) -> TestResponse {
        let builder = Request::builder().method(method).uri(uri);
        let request = match json {
            Some(json) => builder
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        };
        self.request(request.unwrap()).await
    }

    pub async fn create_user(&self, username: &str, email: &str) -> Value {
        let response = self
            .send(
                Method::POST,
                "/api/users",
                Some(serde_json::json!({ "username": username, "email": email })),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{}", response.text());
        response.json()
    }
}
