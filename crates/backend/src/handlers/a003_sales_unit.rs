use axum::{http::StatusCode, Json};
use contracts::domain::a003_sales_unit::SalesUnit;

use crate::domain::a003_sales_unit;

/// GET /api/sales-units
pub async fn list_all() -> Result<Json<Vec<SalesUnit>>, StatusCode> {
    match a003_sales_unit::service::list_all().await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Failed to fetch sales units: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
