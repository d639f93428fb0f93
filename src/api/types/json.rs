//! Custom JSON extractor that returns rejections as JSON
//!
//! A body the framework itself cannot parse is an unhandled failure as
//! far as callers are concerned: the response is the fixed 500 error
//! body, and the parse detail is logged.

use axum::{
    extract::{FromRequest, Request},
    response::{IntoResponse, Response},
    Json as AxumJson,
};
use serde::de::DeserializeOwned;
use tracing::error;

use super::error::ApiError;

/// Custom JSON extractor wrapping `axum::Json`
#[derive(Debug, Clone, Copy, Default)]
pub struct Json<T>(pub T);

impl<T> Json<T> {
    /// Consume the extractor and return the inner value
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> std::ops::Deref for Json<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// JSON rejection carrying the parse detail for the log
#[derive(Debug)]
pub struct JsonRejection {
    detail: String,
}

impl IntoResponse for JsonRejection {
    fn into_response(self) -> Response {
        error!("Failed to parse request body: {}", self.detail);
        ApiError::internal().into_response()
    }
}

impl<S, T> FromRequest<S> for Json<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = JsonRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match AxumJson::<T>::from_request(req, state).await {
            Ok(AxumJson(value)) => Ok(Json(value)),
            Err(rejection) => Err(JsonRejection {
                detail: format_rejection_detail(&rejection),
            }),
        }
    }
}

fn format_rejection_detail(rejection: &axum::extract::rejection::JsonRejection) -> String {
    use axum::extract::rejection::JsonRejection::*;

    match rejection {
        JsonDataError(err) => format!("invalid JSON data: {}", err.body_text()),
        JsonSyntaxError(err) => format!("invalid JSON syntax: {}", err.body_text()),
        MissingJsonContentType(_) => {
            "missing Content-Type header, expected 'application/json'".to_string()
        }
        BytesRejection(err) => format!("failed to read request body: {}", err.body_text()),
        _ => "invalid JSON request".to_string(),
    }
}

impl<T> IntoResponse for Json<T>
where
    T: serde::Serialize,
{
    fn into_response(self) -> Response {
        AxumJson(self.0).into_response()
    }
}
