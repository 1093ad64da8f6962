//! OCR proxy endpoint
//!
//! The single POST handler: validate the inbound image payload, obtain a
//! vendor access token (cached between requests), forward the image, relay
//! the vendor JSON back. Every failure funnels into the same error
//! envelope; a failed request never takes the process or the cached token
//! down with it.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::Serialize;
use serde_json::Value;

use crate::ocr::{OcrError, OcrRequest};
use crate::state::AppState;

/// Error envelope returned on every failure path
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    /// Debug representation of the failure, included only when the
    /// service runs with error detail exposed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Create the OCR proxy router
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        post(recognize)
            .options(preflight)
            .fallback(method_not_allowed),
    )
}

/// Answer OPTIONS requests that are not CORS preflights
///
/// Real preflights are handled by the CORS layer before the router runs;
/// this keeps a bare OPTIONS at 200 with an empty body as well.
async fn preflight() -> StatusCode {
    StatusCode::OK
}

/// Proxy one OCR request to the vendor
///
/// The body extractor is optional so that a missing or malformed body
/// reaches the same validation error as an empty `image` field, instead of
/// the extractor's default rejection.
async fn recognize(
    State(state): State<AppState>,
    body: Option<Json<OcrRequest>>,
) -> Result<Json<Value>, (StatusCode, Json<ErrorResponse>)> {
    let image = body.map(|Json(request)| request.image).unwrap_or_default();
    if image.is_empty() {
        return Err(error_response(&state, OcrError::MissingImage));
    }

    match state.ocr().recognize(&image).await {
        Ok(result) => Ok(Json(result)),
        Err(e) => {
            tracing::error!("OCR proxy request failed: {}", e);
            Err(error_response(&state, e))
        }
    }
}

/// Reject non-POST methods on the handler path
///
/// Preflight OPTIONS never reaches this: the CORS layer answers it first.
async fn method_not_allowed() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorResponse {
            error: "Method not allowed".to_string(),
            detail: None,
        }),
    )
        .into_response()
}

fn error_response(state: &AppState, error: OcrError) -> (StatusCode, Json<ErrorResponse>) {
    let detail = state
        .config()
        .expose_error_detail
        .then(|| format!("{:?}", error));
    (
        error.status_code(),
        Json(ErrorResponse {
            error: error.to_string(),
            detail,
        }),
    )
}
