// src/handlers/finance.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    common::{
        csv_export::{to_csv, CsvDownload},
        error::AppError,
    },
    config::AppState,
    models::finance::{ExpenseRecord, ExpenseSummary},
};

// GET /api/expenses
#[utoipa::path(
    get,
    path = "/api/expenses",
    tag = "Finance",
    responses(
        (status = 200, description = "Despesas mensais e total", body = ExpenseSummary)
    )
)]
pub async fn get_expenses(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let summary = app_state.finance_service.get_expense_summary()?;

    Ok((StatusCode::OK, Json(summary)))
}

// GET /api/expenses/export
#[utoipa::path(
    get,
    path = "/api/expenses/export",
    tag = "Finance",
    responses(
        (status = 200, description = "expenses.csv", content_type = "text/csv", body = String)
    )
)]
pub async fn export_expenses(State(app_state): State<AppState>) -> Result<CsvDownload, AppError> {
    let expenses = app_state.finance_service.get_expenses();
    let body = to_csv(ExpenseRecord::CSV_HEADERS, &expenses)?;

    Ok(CsvDownload { filename: "expenses.csv", body })
}
