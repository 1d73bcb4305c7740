use utoipa::OpenApi;

use crate::error::{ErrorResponse, HealthResponse};
use crate::handlers;
use crate::models::{ShortenRequest, ShortenResponse};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "rust-url-shortener API",
        version = "1.0.0",
        description = "A minimal in-memory URL shortener issuing hexadecimal short keys"
    ),
    paths(
        handlers::health::health_handler,
        handlers::shorten::shorten_handler,
        handlers::resolve::resolve_handler
    ),
    components(
        schemas(
            ShortenRequest,
            ShortenResponse,
            ErrorResponse,
            HealthResponse
        )
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "links", description = "Short link operations")
    )
)]
pub struct ApiDoc;
