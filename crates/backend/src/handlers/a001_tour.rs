use axum::{
    extract::{Path, Query},
    http::StatusCode,
    Json,
};
use contracts::domain::a001_tour::{Tour, TourId, UpdateBookingsRequest};
use contracts::domain::common::AggregateId;
use contracts::enums::tour_category::TourCategory;
use serde::Deserialize;

use crate::domain::a001_tour;
use crate::shared::config::get_config;
use crate::shared::data::storage::StorageError;

#[derive(Debug, Deserialize)]
pub struct TopToursQuery {
    pub limit: Option<usize>,
}

fn respond(result: anyhow::Result<Vec<Tour>>, what: &str) -> Result<Json<Vec<Tour>>, StatusCode> {
    match result {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Failed to fetch {}: {}", what, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/tours
pub async fn list_all() -> Result<Json<Vec<Tour>>, StatusCode> {
    respond(a001_tour::service::list_all().await, "tours")
}

/// GET /api/tours/top?limit=10
pub async fn list_top(Query(query): Query<TopToursQuery>) -> Result<Json<Vec<Tour>>, StatusCode> {
    let limit = query.limit.unwrap_or(get_config().dashboard.top_tours_limit);
    respond(a001_tour::service::list_top(limit).await, "top tours")
}

/// GET /api/tours/category/:category
pub async fn list_by_category(Path(category): Path<String>) -> Result<Json<Vec<Tour>>, StatusCode> {
    let category = TourCategory::from_code(&category).ok_or(StatusCode::BAD_REQUEST)?;
    respond(
        a001_tour::service::list_by_category(category).await,
        "tours by category",
    )
}

/// GET /api/tours/area/:area_code
pub async fn list_by_area(Path(area_code): Path<String>) -> Result<Json<Vec<Tour>>, StatusCode> {
    respond(a001_tour::service::list_by_area(&area_code).await, "tours by area")
}

/// GET /api/tours/sales-unit/:code
pub async fn list_by_sales_unit(Path(code): Path<String>) -> Result<Json<Vec<Tour>>, StatusCode> {
    respond(
        a001_tour::service::list_by_sales_unit(&code).await,
        "tours by sales unit",
    )
}

/// POST /api/tours/:id/update-bookings
pub async fn update_bookings(
    Path(id): Path<String>,
    Json(request): Json<UpdateBookingsRequest>,
) -> Result<Json<Tour>, StatusCode> {
    let id = TourId::from_string(&id).map_err(|_| StatusCode::BAD_REQUEST)?;

    match a001_tour::service::update_bookings(id, request.new_bookings).await {
        Ok(tour) => Ok(Json(tour)),
        Err(e) => match e.downcast_ref::<StorageError>() {
            Some(StorageError::TourNotFound(_)) => Err(StatusCode::NOT_FOUND),
            _ => {
                tracing::error!("Failed to update tour bookings: {}", e);
                Err(StatusCode::INTERNAL_SERVER_ERROR)
            }
        },
    }
}
