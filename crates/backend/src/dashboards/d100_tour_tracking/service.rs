use anyhow::Result;
use contracts::dashboards::d100_tour_tracking::{
    build_rows, compute_dashboard_metrics, filter_tours, DashboardMetrics, MetricsBaseline,
    TourTableData, TourTableResponse, ViewState,
};

use crate::shared::data::storage::get_storage;

/// Снимок данных для построения таблицы
async fn snapshot() -> TourTableData {
    let storage = get_storage();
    TourTableData {
        tours: storage.list_tours().await,
        hierarchy_levels: storage.list_hierarchy_levels().await,
        sales_units: storage.list_sales_units().await,
    }
}

/// KPI дашборда по текущим турам
pub async fn get_metrics() -> Result<DashboardMetrics> {
    let tours = get_storage().list_tours().await;
    Ok(compute_dashboard_metrics(&tours, &MetricsBaseline::default()))
}

/// Видимые строки иерархической таблицы для заданного состояния
pub async fn get_tour_table(view: ViewState) -> Result<TourTableResponse> {
    let data = snapshot().await;
    let rows = build_rows(&data, &view);
    let filtered_tour_count = filter_tours(&data.tours, &view).len();

    Ok(TourTableResponse {
        rows,
        filtered_tour_count,
        active_level_filters: view.level_filters.active_count(),
        view,
    })
}
