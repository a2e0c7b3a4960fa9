use axum::{http::StatusCode, Json};
use contracts::domain::a005_regional_performance::RegionalPerformance;

use crate::domain::a005_regional_performance;

/// GET /api/regional-performance
pub async fn list_all() -> Result<Json<Vec<RegionalPerformance>>, StatusCode> {
    match a005_regional_performance::service::list_all().await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Failed to fetch regional performance: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
