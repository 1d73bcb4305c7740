use crate::error::{ApiError, ErrorResponse};
use crate::routes;
use crate::state::AppState;
use anyhow::Context;
use axum::{
    extract::{Path, State},
    http::{header, HeaderValue, StatusCode},
};

/// GET /{short_key} handler - Redirect to the stored URL
///
/// Answers with 301 Moved Permanently; the store is never modified here.
#[utoipa::path(
    get,
    path = routes::SHORT_LINK,
    params(
        ("short_key" = String, Path, description = "Key returned by POST /shorten")
    ),
    responses(
        (status = 301, description = "Redirect to the original URL",
            headers(("Location" = String, description = "Original URL"))),
        (status = 404, description = "Short key not found", body = ErrorResponse),
        (status = 500, description = "Stored target is not a valid header value", body = ErrorResponse)
    ),
    tag = "links"
)]
pub async fn resolve_handler(
    State(state): State<AppState>,
    Path(short_key): Path<String>,
) -> Result<(StatusCode, [(header::HeaderName, HeaderValue); 1]), ApiError> {
    let Some(target) = state.store.get(&short_key) else {
        tracing::debug!("Short key not found: {}", short_key);
        return Err(ApiError::UrlNotFound);
    };

    let location = HeaderValue::from_bytes(target.as_bytes())
        .with_context(|| format!("Stored target for {} is not a valid header value", short_key))?;

    tracing::info!("Resolved short key {} to {}", short_key, target);
    Ok((StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location)]))
}
