use crate::error::{AppError, Result};
use crate::modules::user::domain::{NewUser, User, UserChanges};
use crate::modules::user::repository::{StoreError, UserStore};
use std::sync::Arc;

/// Translates store outcomes into the errors the HTTP layer reports.
pub struct UserService {
    store: Arc<dyn UserStore>,
}

impl UserService {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    pub async fn create(&self, new_user: NewUser) -> Result<User> {
        self.store
            .insert(new_user)
            .await
            .map_err(|e| write_error(e, "Error creating user"))
    }

    pub async fn get(&self, id: i32) -> Result<User> {
        self.store
            .fetch(id)
            .await
            .map_err(read_error)?
            .ok_or(AppError::NotFound)
    }

    pub async fn list(&self) -> Result<Vec<User>> {
        self.store.list().await.map_err(read_error)
    }

    pub async fn update(&self, id: i32, changes: UserChanges) -> Result<User> {
        self.store.update(id, changes).await.map_err(|e| match e {
            StoreError::DuplicateEmail => AppError::validation("Email already in use by another user"),
            other => write_error(other, "Error updating user"),
        })
    }

    pub async fn delete(&self, id: i32) -> Result<()> {
        self.store
            .delete(id)
            .await
            .map_err(|e| write_error(e, "Error deleting user"))
    }
}

fn read_error(err: StoreError) -> AppError {
    match err {
        StoreError::NotFound => AppError::NotFound,
        other => AppError::Database(other.to_string()),
    }
}

fn write_error(err: StoreError, context: &str) -> AppError {
    match err {
        StoreError::NotFound => AppError::NotFound,
        StoreError::DuplicateEmail => AppError::validation("Email already exists"),
        StoreError::WriteFailed(detail) | StoreError::ReadFailed(detail) => {
            AppError::WriteFailed(format!("{context}: {detail}"))
        }
    }
}
