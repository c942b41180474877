//! Response handling shared by the HTTP adapters
//!
//! Both APIs signal auth failures with 401 and throttling with 429; anything
//! else non-2xx is reported with its status and body.

use reqwest::StatusCode;
use serde::Deserialize;

use crate::error::{BoardError, ForumError};

/// Adapter error type that can represent HTTP failures
pub trait HttpError: From<reqwest::Error> {
    fn unauthorized() -> Self;
    fn rate_limited() -> Self;
    fn api(status: u16, message: String) -> Self;
    fn deserialization(message: String) -> Self;
}

impl HttpError for BoardError {
    fn unauthorized() -> Self {
        BoardError::Unauthorized
    }

    fn rate_limited() -> Self {
        BoardError::RateLimited
    }

    fn api(status: u16, message: String) -> Self {
        BoardError::Api { status, message }
    }

    fn deserialization(message: String) -> Self {
        BoardError::Deserialization(message)
    }
}

impl HttpError for ForumError {
    fn unauthorized() -> Self {
        ForumError::Unauthorized
    }

    fn rate_limited() -> Self {
        ForumError::RateLimited
    }

    fn api(status: u16, message: String) -> Self {
        ForumError::Api { status, message }
    }

    fn deserialization(message: String) -> Self {
        ForumError::Deserialization(message)
    }
}

/// Map a failed status to an adapter error
pub fn status_error<E: HttpError>(status: StatusCode, message: String) -> E {
    match status {
        StatusCode::UNAUTHORIZED => E::unauthorized(),
        StatusCode::TOO_MANY_REQUESTS => E::rate_limited(),
        _ => E::api(status.as_u16(), message),
    }
}

pub async fn handle_response<T, E>(response: reqwest::Response) -> Result<T, E>
where
    T: for<'de> Deserialize<'de>,
    E: HttpError,
{
    let status = response.status();

    if status.is_success() {
        response
            .json()
            .await
            .map_err(|e| E::deserialization(e.to_string()))
    } else {
        let message = response.text().await.unwrap_or_default();
        Err(status_error(status, message))
    }
}

pub async fn handle_empty_response<E: HttpError>(response: reqwest::Response) -> Result<(), E> {
    let status = response.status();

    if status.is_success() {
        Ok(())
    } else {
        let message = response.text().await.unwrap_or_default();
        Err(status_error(status, message))
    }
}
