// src/handlers/operations.rs

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    common::{
        csv_export::{to_csv, CsvDownload},
        error::AppError,
    },
    config::AppState,
    models::{
        operations::{Order, OrdersView},
        settings::OrdersQuery,
    },
};

// GET /api/orders
#[utoipa::path(
    get,
    path = "/api/orders",
    tag = "Operations",
    params(OrdersQuery),
    responses(
        (status = 200, description = "Pedidos (online + loja), filtrados por status", body = OrdersView),
        (status = 400, description = "Status desconhecido")
    )
)]
pub async fn get_orders(
    State(app_state): State<AppState>,
    Query(query): Query<OrdersQuery>,
) -> Result<impl IntoResponse, AppError> {
    let view = app_state.operation_service.get_orders_view(query.status.as_deref())?;

    Ok((StatusCode::OK, Json(view)))
}

// GET /api/orders/export
#[utoipa::path(
    get,
    path = "/api/orders/export",
    tag = "Operations",
    params(OrdersQuery),
    responses(
        (status = 200, description = "orders.csv", content_type = "text/csv", body = String),
        (status = 400, description = "Status desconhecido")
    )
)]
pub async fn export_orders(
    State(app_state): State<AppState>,
    Query(query): Query<OrdersQuery>,
) -> Result<CsvDownload, AppError> {
    let orders: Vec<Order> = app_state.operation_service.get_orders(query.status.as_deref())?;
    let body = to_csv(Order::CSV_HEADERS, &orders)?;

    Ok(CsvDownload { filename: "orders.csv", body })
}
