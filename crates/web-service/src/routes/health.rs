use crate::models::common::HealthReply;
use axum::Json;
use tracing::instrument;

/// 健康检查
#[utoipa::path(get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is running", body = HealthReply)
    )
)]
#[instrument]
pub async fn health_check() -> Json<HealthReply> {
    Json(HealthReply {
        status: "healthy".to_string(),
        service: env!("CARGO_PKG_NAME").to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}
