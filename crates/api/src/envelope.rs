//! `{success, data?, error?}` wrapper shared by every `/api` route.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use std::any::Any;

#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> Envelope<T> {
    pub fn ok(data: T) -> Json<Self> {
        Json(Self {
            success: true,
            data: Some(data),
            error: None,
        })
    }
}

impl Envelope<()> {
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
        }
    }
}

/// Any failure inside a handler. Always rendered as a 500 envelope.
#[derive(Debug)]
pub struct ApiError(anyhow::Error);

impl<E> From<E> for ApiError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        sentry_anyhow::capture_anyhow(&self.0);
        tracing::error!(error = %self.0, "request failed");
        internal_error(format!("{:#}", self.0))
    }
}

pub type ApiResult<T> = Result<Json<Envelope<T>>, ApiError>;

/// Used by the catch-panic layer so a panicking handler still answers with an envelope.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "handler panicked".to_string()
    };
    tracing::error!(error = %message, "handler panicked");
    internal_error(message)
}

fn internal_error(message: String) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(Envelope::<()>::failure(message)),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    async fn body_json(resp: Response) -> Value {
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn success_omits_error_field() {
        let Json(env) = Envelope::ok(vec![1, 2]);
        assert_eq!(
            serde_json::to_value(&env).unwrap(),
            json!({"success": true, "data": [1, 2]})
        );
    }

    #[tokio::test]
    async fn errors_render_as_500_envelope() {
        let resp = ApiError::from(anyhow::anyhow!("generation blew up")).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(resp).await,
            json!({"success": false, "error": "generation blew up"})
        );
    }

    #[tokio::test]
    async fn panics_render_as_500_envelope() {
        let resp = panic_response(Box::new("index out of bounds"));
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(resp).await;
        assert_eq!(body["success"], json!(false));
        assert_eq!(body["error"], json!("index out of bounds"));
    }
}
