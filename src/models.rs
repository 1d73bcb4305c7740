use serde::{Deserialize, Serialize};

/// Request body for POST /shorten
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ShortenRequest {
    /// Absolute URI or absolute path to redirect to
    pub url: String,
}

/// Response type for successful shorten operations
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ShortenResponse {
    pub short_url: String,
}
