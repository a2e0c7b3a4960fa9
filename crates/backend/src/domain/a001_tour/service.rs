use contracts::dashboards::d100_tour_tracking::top_tours;
use contracts::domain::a001_tour::{Tour, TourId};
use contracts::enums::tour_category::TourCategory;

use crate::shared::data::storage::get_storage;

/// Получение списка всех туров
pub async fn list_all() -> anyhow::Result<Vec<Tour>> {
    Ok(get_storage().list_tours().await)
}

pub async fn list_by_category(category: TourCategory) -> anyhow::Result<Vec<Tour>> {
    Ok(get_storage().list_tours_by_category(category).await)
}

pub async fn list_by_area(area_code: &str) -> anyhow::Result<Vec<Tour>> {
    Ok(get_storage().list_tours_by_area(area_code).await)
}

pub async fn list_by_sales_unit(code: &str) -> anyhow::Result<Vec<Tour>> {
    Ok(get_storage().list_tours_by_sales_unit(code).await)
}

/// Лидеры продаж
pub async fn list_top(limit: usize) -> anyhow::Result<Vec<Tour>> {
    let tours = get_storage().list_tours().await;
    Ok(top_tours(&tours, limit))
}

/// Регистрация новых бронирований тура.
///
/// Неизвестный id возвращает `StorageError::TourNotFound` внутри `anyhow::Error`.
pub async fn update_bookings(id: TourId, new_bookings: i64) -> anyhow::Result<Tour> {
    let tour = get_storage().update_tour_bookings(id, new_bookings).await?;

    tracing::info!(
        "Tour {} bookings updated: +{} (sold {})",
        tour.id,
        new_bookings,
        tour.sold
    );
    Ok(tour)
}
