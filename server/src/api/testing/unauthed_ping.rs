use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UnauthedPingResponse {
    pub message: String,
}

/// Liveness check that works without a token, including on read-only
/// deployments with no tokens configured at all.
#[utoipa::path(
    get,
    path = "/api/test/unauthed-ping",
    tag = "testing",
    responses(
        (status = 200, description = "Unauthed ping response", body = UnauthedPingResponse)
    )
)]
pub async fn unauthed_ping() -> Json<UnauthedPingResponse> {
    Json(UnauthedPingResponse {
        message: "unauthed-ping".to_string(),
    })
}
