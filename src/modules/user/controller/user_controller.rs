use crate::common::JsonBody;
use crate::error::Result;
use crate::modules::user::domain::User;
use crate::modules::user::service::UserService;
use crate::pipe::Pipe;
use crate::pipe::builtins::{CreateUserPipe, ParseIdPipe, UpdateUserPipe};
use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use std::sync::Arc;

/// `/users` and `/users/{id}`.
pub struct UserController;

impl UserController {
    pub fn router(service: Arc<UserService>) -> Router {
        Router::new()
            .route("/users", get(list).post(create))
            .route("/users/{id}", get(get_one).put(update).delete(remove))
            .with_state(service)
    }
}

async fn list(State(service): State<Arc<UserService>>) -> Result<Json<Vec<User>>> {
    Ok(Json(service.list().await?))
}

async fn create(
    State(service): State<Arc<UserService>>,
    body: JsonBody,
) -> Result<(StatusCode, Json<User>)> {
    let new_user = CreateUserPipe.transform(body.value()?).await?;
    let user = service.create(new_user).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

async fn get_one(
    State(service): State<Arc<UserService>>,
    Path(id): Path<String>,
) -> Result<Json<User>> {
    let id = ParseIdPipe.transform(id).await?;
    Ok(Json(service.get(id).await?))
}

async fn update(
    State(service): State<Arc<UserService>>,
    Path(id): Path<String>,
    body: JsonBody,
) -> Result<Json<User>> {
    let id = ParseIdPipe.transform(id).await?;
    // 404 takes precedence over a bad payload.
    service.get(id).await?;

    let changes = UpdateUserPipe.transform(body.value()?).await?;
    Ok(Json(service.update(id, changes).await?))
}

async fn remove(
    State(service): State<Arc<UserService>>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    let id = ParseIdPipe.transform(id).await?;
    service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
