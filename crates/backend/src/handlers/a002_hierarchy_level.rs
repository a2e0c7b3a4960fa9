use axum::{extract::Path, http::StatusCode, Json};
use contracts::domain::a002_hierarchy_level::HierarchyLevel;
use contracts::enums::hierarchy_level_kind::HierarchyLevelKind;
use contracts::enums::tour_category::TourCategory;

use crate::domain::a002_hierarchy_level;

fn respond(
    result: anyhow::Result<Vec<HierarchyLevel>>,
) -> Result<Json<Vec<HierarchyLevel>>, StatusCode> {
    result.map(Json).map_err(|e| {
        tracing::error!("Failed to fetch hierarchy levels: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })
}

/// GET /api/hierarchy-levels
pub async fn list_all() -> Result<Json<Vec<HierarchyLevel>>, StatusCode> {
    respond(a002_hierarchy_level::service::list_all().await)
}

/// GET /api/hierarchy-levels/category/:category
pub async fn list_by_category(
    Path(category): Path<String>,
) -> Result<Json<Vec<HierarchyLevel>>, StatusCode> {
    let category = TourCategory::from_code(&category).ok_or(StatusCode::BAD_REQUEST)?;
    respond(a002_hierarchy_level::service::list_by_category(category).await)
}

/// GET /api/hierarchy-levels/level/:level
pub async fn list_by_level(Path(level): Path<String>) -> Result<Json<Vec<HierarchyLevel>>, StatusCode> {
    let level = HierarchyLevelKind::from_code(&level).ok_or(StatusCode::BAD_REQUEST)?;
    respond(a002_hierarchy_level::service::list_by_level(level).await)
}
