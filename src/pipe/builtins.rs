use crate::modules::user::domain::{NewUser, UserChanges};
use crate::pipe::{Pipe, PipeError, PipeResult};
use async_trait::async_trait;
use serde_json::{Map, Value};

const MISSING_FIELDS: &str = "Missing required fields: username and email";
const NOT_STRINGS: &str = "Fields username and email must be strings";
const NO_DATA: &str = "No data provided";

/// Parses a path segment into a user id. Only plain decimal digits are
/// accepted; anything else cannot name a stored user.
#[derive(Default)]
pub struct ParseIdPipe;

#[async_trait]
impl Pipe for ParseIdPipe {
    type Input = String;
    type Output = i32;

    async fn transform(&self, input: String) -> PipeResult<i32> {
        if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
            return Err(PipeError::NotFound);
        }
        input.parse::<i32>().map_err(|_| PipeError::NotFound)
    }
}

/// Validates a create payload: an object carrying string `username` and `email`.
#[derive(Default)]
pub struct CreateUserPipe;

#[async_trait]
impl Pipe for CreateUserPipe {
    type Input = Value;
    type Output = NewUser;

    async fn transform(&self, input: Value) -> PipeResult<NewUser> {
        let Value::Object(fields) = input else {
            return Err(PipeError::Validation(MISSING_FIELDS.to_string()));
        };

        match (fields.get("username"), fields.get("email")) {
            (Some(Value::String(username)), Some(Value::String(email))) => Ok(NewUser {
                username: username.clone(),
                email: email.clone(),
            }),
            (Some(_), Some(_)) => Err(PipeError::Validation(NOT_STRINGS.to_string())),
            _ => Err(PipeError::Validation(MISSING_FIELDS.to_string())),
        }
    }
}

/// Validates an update payload: a non-empty object whose known fields are strings.
/// Unknown keys are ignored.
#[derive(Default)]
pub struct UpdateUserPipe;

#[async_trait]
impl Pipe for UpdateUserPipe {
    type Input = Value;
    type Output = UserChanges;

    async fn transform(&self, input: Value) -> PipeResult<UserChanges> {
        let fields = match input {
            Value::Object(fields) if !fields.is_empty() => fields,
            _ => return Err(PipeError::Validation(NO_DATA.to_string())),
        };

        Ok(UserChanges {
            username: optional_string(&fields, "username")?,
            email: optional_string(&fields, "email")?,
        })
    }
}

fn optional_string(fields: &Map<String, Value>, key: &str) -> PipeResult<Option<String>> {
    match fields.get(key) {
        None => Ok(None),
        Some(Value::String(value)) => Ok(Some(value.clone())),
        Some(_) => Err(PipeError::Validation(NOT_STRINGS.to_string())),
    }
}
