use crate::api_doc::ApiDoc;
use crate::handlers::{health_handler, resolve_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tower_http::LatencyUnit;
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

// Route path constants - single source of truth for all API paths

pub const HEALTH: &str = "/health";
pub const SHORTEN: &str = "/shorten";
pub const SHORT_LINK: &str = "/{short_key}";
pub const SWAGGER_UI: &str = "/swagger-ui";
pub const OPENAPI_JSON: &str = "/api-docs/openapi.json";

/// Build the application router with request tracing attached
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new(SWAGGER_UI).url(OPENAPI_JSON, ApiDoc::openapi()))
        .route(HEALTH, get(health_handler))
        .route(SHORTEN, post(shorten_handler))
        .route(SHORT_LINK, get(resolve_handler))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .latency_unit(LatencyUnit::Millis),
                ),
        )
        .with_state(state)
}
