//src/lib.rs

use axum::{routing::get, routing::post, Json, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;

pub mod common;
pub mod config;
pub mod db;
pub mod docs;
pub mod handlers;
pub mod models;
pub mod services;

use crate::config::AppState;

// Monta o router completo. Separado do main para os testes de integração.
pub fn build_router(app_state: AppState) -> Router {
    let dashboard_routes = Router::new()
        .route("/overview", get(handlers::dashboard::get_overview))
        .route("/kpis", get(handlers::dashboard::get_kpis))
        .route("/sales-chart", get(handlers::dashboard::get_sales_chart))
        .route("/sales/export", get(handlers::dashboard::export_sales))
        .route("/top-sellers", get(handlers::dashboard::get_top_sellers))
        .route("/alerts", get(handlers::dashboard::get_alerts))
        .route("/pricing", get(handlers::dashboard::get_pricing));

    let analytics_routes = Router::new()
        .route("/evaluate", post(handlers::analytics::evaluate))
        .route("/weekday", get(handlers::analytics::get_weekday_sales))
        .route("/profit-leaders", get(handlers::analytics::get_profit_leaders))
        .route("/basket-pairs", get(handlers::analytics::get_basket_pairs));

    // Combina tudo no router principal
    Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .route("/api/settings", get(handlers::settings::get_settings))
        .route("/api-docs/openapi.json", get(|| async { Json(docs::ApiDoc::openapi()) }))
        .nest("/api/dashboard", dashboard_routes)
        .nest("/api/analytics", analytics_routes)
        .route("/api/inventory", get(handlers::inventory::get_inventory))
        .route("/api/inventory/export", get(handlers::inventory::export_inventory))
        .route("/api/suppliers", get(handlers::inventory::get_suppliers))
        .route("/api/suppliers/export", get(handlers::inventory::export_suppliers))
        .route("/api/orders", get(handlers::operations::get_orders))
        .route("/api/orders/export", get(handlers::operations::export_orders))
        .route("/api/expenses", get(handlers::finance::get_expenses))
        .route("/api/expenses/export", get(handlers::finance::export_expenses))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
