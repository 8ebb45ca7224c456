use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Landing payload for the cover page.
#[derive(Serialize)]
pub struct LandingResponse {
    /// Service name.
    pub service: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
}

/// GET / -- public cover page data.
async fn landing() -> Json<LandingResponse> {
    Json(LandingResponse {
        service: "ticklist",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Mount the landing route.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(landing))
}
