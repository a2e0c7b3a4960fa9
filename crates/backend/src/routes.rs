use axum::{
    http::{header, Method},
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::handlers;
use crate::system::middleware::request_logger::request_logger;

/// Конфигурация всех роутов приложения
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // DASHBOARDS
        // ========================================
        // D100 Tour Tracking
        .route(
            "/api/dashboard/metrics",
            get(handlers::d100_tour_tracking::get_metrics),
        )
        .route(
            "/api/dashboard/tour-table",
            get(handlers::d100_tour_tracking::get_tour_table),
        )
        // ========================================
        // AGGREGATES
        // ========================================
        // A001 Tours
        .route("/api/tours", get(handlers::a001_tour::list_all))
        .route("/api/tours/top", get(handlers::a001_tour::list_top))
        .route(
            "/api/tours/category/:category",
            get(handlers::a001_tour::list_by_category),
        )
        .route(
            "/api/tours/area/:area_code",
            get(handlers::a001_tour::list_by_area),
        )
        .route(
            "/api/tours/sales-unit/:code",
            get(handlers::a001_tour::list_by_sales_unit),
        )
        .route(
            "/api/tours/:id/update-bookings",
            post(handlers::a001_tour::update_bookings),
        )
        // A002 Hierarchy levels
        .route(
            "/api/hierarchy-levels",
            get(handlers::a002_hierarchy_level::list_all),
        )
        .route(
            "/api/hierarchy-levels/category/:category",
            get(handlers::a002_hierarchy_level::list_by_category),
        )
        .route(
            "/api/hierarchy-levels/level/:level",
            get(handlers::a002_hierarchy_level::list_by_level),
        )
        // A003 Sales units
        .route("/api/sales-units", get(handlers::a003_sales_unit::list_all))
        // A004 Activities
        .route("/api/activities", get(handlers::a004_activity::list_recent))
        // A005 Regional performance
        .route(
            "/api/regional-performance",
            get(handlers::a005_regional_performance::list_all),
        )
}

/// Роуты + логирование запросов + CORS
pub fn build_app() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    configure_routes()
        .layer(middleware::from_fn(request_logger))
        .layer(cors)
}
