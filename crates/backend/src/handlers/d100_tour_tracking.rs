use axum::{extract::Query, http::StatusCode, Json};
use contracts::dashboards::d100_tour_tracking::{DashboardMetrics, TourTableQuery, TourTableResponse};

use crate::dashboards::d100_tour_tracking::service;

/// GET /api/dashboard/metrics
pub async fn get_metrics() -> Result<Json<DashboardMetrics>, StatusCode> {
    match service::get_metrics().await {
        Ok(metrics) => Ok(Json(metrics)),
        Err(e) => {
            tracing::error!("D100 Dashboard: Failed to compute metrics: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/dashboard/tour-table?salesUnit=HN&levels=domestic:1&collapsed=international
pub async fn get_tour_table(
    Query(query): Query<TourTableQuery>,
) -> Result<Json<TourTableResponse>, StatusCode> {
    let view = query.into_view_state().map_err(|e| {
        tracing::info!("D100 Dashboard: Rejected tour table query: {}", e);
        StatusCode::BAD_REQUEST
    })?;

    match service::get_tour_table(view).await {
        Ok(response) => {
            tracing::info!(
                "D100 Dashboard: Returning {} rows ({} tours after filter)",
                response.rows.len(),
                response.filtered_tour_count
            );
            Ok(Json(response))
        }
        Err(e) => {
            tracing::error!("D100 Dashboard: Failed to build tour table: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
