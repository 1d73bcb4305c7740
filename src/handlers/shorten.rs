use crate::error::{ApiError, ErrorResponse};
use crate::models::{ShortenRequest, ShortenResponse};
use crate::routes;
use crate::state::AppState;
use crate::validation::is_valid_url;
use axum::{body::Bytes, extract::State, http::StatusCode, Json};
use serde_json::Value as JsonValue;

/// POST /shorten handler - Issue a short key for a URL
///
/// The body is decoded explicitly rather than through the `Json` extractor,
/// so a missing `Content-Type` header is tolerated and every decoding failure
/// yields the same error payload.
#[utoipa::path(
    post,
    path = routes::SHORTEN,
    request_body = ShortenRequest,
    responses(
        (status = 200, description = "Short link created", body = ShortenResponse),
        (status = 400, description = "Invalid request body or invalid URL", body = ErrorResponse)
    ),
    tag = "links"
)]
pub async fn shorten_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<ShortenResponse>), ApiError> {
    let value: JsonValue = serde_json::from_slice(&body)?;
    if !value.is_object() {
        tracing::debug!("Rejected shorten request with non-object body");
        return Err(ApiError::InvalidRequestBody);
    }

    // Required field: present, string typed, non-empty
    let request: ShortenRequest = serde_json::from_value(value)?;
    if request.url.is_empty() {
        tracing::debug!("Rejected shorten request with empty url");
        return Err(ApiError::InvalidRequestBody);
    }

    if !is_valid_url(&request.url) {
        tracing::debug!("Rejected shorten request with invalid url: {:?}", request.url);
        return Err(ApiError::InvalidUrl);
    }

    let key = state.store.shorten(request.url);
    let short_url = state.config.short_url(&key);

    tracing::info!("Created short link {}", short_url);
    Ok((StatusCode::OK, Json(ShortenResponse { short_url })))
}
