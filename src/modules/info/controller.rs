use axum::{Json, Router, routing::get};
use serde_json::{Value, json};

pub const SERVICE_VERSION: &str = "1.0.0";

pub struct InfoController;

impl InfoController {
    pub fn router() -> Router {
        Router::new()
            .route("/status", get(status))
            .route("/infrastructure", get(infrastructure))
    }
}

async fn status() -> Json<Value> {
    Json(json!({
        "status": "operational",
        "services": {
            "database": "connected",
            "api": "running",
            "version": SERVICE_VERSION,
        }
    }))
}

async fn infrastructure() -> Json<Value> {
    Json(json!({
        "environments": {
            "preprod": { "status": "active", "url": "https://preprod.example.com" },
            "prod": { "status": "deployed", "url": "https://prod.example.com" },
        },
        "services": [
            { "name": "Frontend", "status": "running", "health": "healthy" },
            { "name": "Backend", "status": "running", "health": "healthy" },
            { "name": "Database", "status": "running", "health": "healthy" },
            { "name": "Security", "status": "active", "health": "secure" },
            { "name": "Monitoring", "status": "active", "health": "monitoring" },
            { "name": "CI/CD", "status": "active", "health": "automated" },
        ],
        "technologies": [
            "Terraform",
            "Ansible",
            "Kubernetes",
            "Docker",
            "Traefik",
            "Prometheus",
            "Grafana",
            "SonarQube",
            "GitHub Actions",
        ],
    }))
}
