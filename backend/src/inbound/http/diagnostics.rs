//! Service banner and store diagnostics.
//!
//! ```text
//! GET /
//! GET /test
//! ```

use actix_web::{get, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::DiagnosticsReport;
use crate::inbound::http::state::HttpState;

/// Banner returned by `GET /`.
pub const BANNER: &str = "Hotel Booking Backend is running";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BannerResponse {
    #[schema(example = "Hotel Booking Backend is running")]
    pub message: String,
}

/// Store diagnostics as reported by `GET /test`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DiagnosticsResponse {
    /// Always `running`.
    pub backend: String,
    /// `connected`, or `error: ` followed by a truncated failure message.
    pub database: String,
    /// `set` or `not set`.
    pub database_url: String,
    pub database_name: Option<String>,
    /// `connected` or `not connected`.
    pub connection_status: String,
    /// Up to ten collection names.
    pub collections: Vec<String>,
}

impl From<DiagnosticsReport> for DiagnosticsResponse {
    fn from(report: DiagnosticsReport) -> Self {
        let flag = |on: bool, yes: &str, no: &str| (if on { yes } else { no }).to_owned();
        Self {
            backend: "running".to_owned(),
            database: report.database,
            database_url: flag(report.database_url_set, "set", "not set"),
            database_name: report.database_name,
            connection_status: flag(report.connected, "connected", "not connected"),
            collections: report.collections,
        }
    }
}

/// Report that the service is up.
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Service banner", body = BannerResponse)),
    tags = ["diagnostics"],
    operation_id = "root"
)]
#[get("/")]
pub async fn root() -> web::Json<BannerResponse> {
    web::Json(BannerResponse {
        message: BANNER.to_owned(),
    })
}

/// Probe the document store. Always answers 200; failures are described in
/// the body.
#[utoipa::path(
    get,
    path = "/test",
    responses((status = 200, description = "Store diagnostics", body = DiagnosticsResponse)),
    tags = ["diagnostics"],
    operation_id = "testDatabase"
)]
#[get("/test")]
pub async fn test_database(state: web::Data<HttpState>) -> web::Json<DiagnosticsResponse> {
    web::Json(state.diagnostics.report().await.into())
}
