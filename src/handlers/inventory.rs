// src/handlers/inventory.rs

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    common::{
        csv_export::{to_csv, CsvDownload},
        date_utils::today,
        error::AppError,
    },
    config::AppState,
    models::{
        inventory::{InventoryRow, InventoryView, Supplier},
        settings::InventoryQuery,
    },
};

// GET /api/inventory
#[utoipa::path(
    get,
    path = "/api/inventory",
    tag = "Inventory",
    params(InventoryQuery),
    responses(
        (status = 200, description = "Estoque com dias até o vencimento, filtrado e ordenado", body = InventoryView)
    )
)]
pub async fn get_inventory(
    State(app_state): State<AppState>,
    Query(query): Query<InventoryQuery>,
) -> impl IntoResponse {
    let view = app_state.inventory_service.get_inventory_view(&query, today());
    (StatusCode::OK, Json(view))
}

// GET /api/inventory/export
// Mesmos filtros da tabela; o CSV sai exatamente com as linhas exibidas.
#[utoipa::path(
    get,
    path = "/api/inventory/export",
    tag = "Inventory",
    params(InventoryQuery),
    responses(
        (status = 200, description = "inventory.csv", content_type = "text/csv", body = String)
    )
)]
pub async fn export_inventory(
    State(app_state): State<AppState>,
    Query(query): Query<InventoryQuery>,
) -> Result<CsvDownload, AppError> {
    let view = app_state.inventory_service.get_inventory_view(&query, today());
    let body = to_csv(InventoryRow::CSV_HEADERS, &view.items)?;

    Ok(CsvDownload { filename: "inventory.csv", body })
}

// GET /api/suppliers
#[utoipa::path(
    get,
    path = "/api/suppliers",
    tag = "Suppliers",
    responses(
        (status = 200, description = "Fornecedores, mais baratos e mais rápidos primeiro", body = Vec<Supplier>)
    )
)]
pub async fn get_suppliers(State(app_state): State<AppState>) -> impl IntoResponse {
    (StatusCode::OK, Json(app_state.inventory_service.get_suppliers()))
}

// GET /api/suppliers/export
#[utoipa::path(
    get,
    path = "/api/suppliers/export",
    tag = "Suppliers",
    responses(
        (status = 200, description = "suppliers.csv", content_type = "text/csv", body = String)
    )
)]
pub async fn export_suppliers(State(app_state): State<AppState>) -> Result<CsvDownload, AppError> {
    let suppliers = app_state.inventory_service.get_suppliers();
    let body = to_csv(Supplier::CSV_HEADERS, &suppliers)?;

    Ok(CsvDownload { filename: "suppliers.csv", body })
}
