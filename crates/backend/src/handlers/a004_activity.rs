use axum::{extract::Query, http::StatusCode, Json};
use contracts::domain::a004_activity::Activity;
use serde::Deserialize;

use crate::domain::a004_activity;
use crate::shared::config::get_config;

#[derive(Debug, Deserialize)]
pub struct ActivitiesQuery {
    pub limit: Option<usize>,
}

/// GET /api/activities?limit=10
pub async fn list_recent(
    Query(query): Query<ActivitiesQuery>,
) -> Result<Json<Vec<Activity>>, StatusCode> {
    let limit = query.limit.unwrap_or(get_config().dashboard.activities_limit);
    match a004_activity::service::list_recent(limit).await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Failed to fetch recent activities: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
