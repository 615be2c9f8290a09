// src/handlers/analytics.rs

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    common::{date_utils::today, error::AppError},
    config::AppState,
    models::{
        analytics::{BasketPair, EvaluatePayload, EvaluationResult, ProfitLeader, WeekdaySales},
        settings::DashboardQuery,
    },
};

// POST /api/analytics/evaluate
// Roda o núcleo de análise sobre tabelas enviadas pelo cliente.
#[utoipa::path(
    post,
    path = "/api/analytics/evaluate",
    tag = "Analytics",
    request_body = EvaluatePayload,
    responses(
        (status = 200, description = "KPIs, previsão, queda de vendas, alertas e preços", body = EvaluationResult),
        (status = 422, description = "Tabela de entrada malformada")
    )
)]
pub async fn evaluate(
    State(app_state): State<AppState>,
    payload: Result<Json<EvaluatePayload>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    // Campo ausente ou com tipo errado = violação de contrato, não 400 genérico
    let Json(payload) = payload.map_err(|rejection| AppError::data_contract(rejection.body_text()))?;

    tracing::info!(
        sales = payload.sales.len(),
        expenses = payload.expenses.len(),
        inventory = payload.inventory.len(),
        "Avaliando tabelas enviadas"
    );

    let result = app_state.dashboard_service.evaluate(payload, today())?;

    Ok((StatusCode::OK, Json(result)))
}

// GET /api/analytics/weekday
#[utoipa::path(
    get,
    path = "/api/analytics/weekday",
    tag = "Analytics",
    params(DashboardQuery),
    responses(
        (status = 200, description = "Média de vendas por dia da semana", body = Vec<WeekdaySales>),
        (status = 400, description = "Parâmetros inválidos")
    )
)]
pub async fn get_weekday_sales(
    State(app_state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Result<impl IntoResponse, AppError> {
    let params = query.resolve(app_state.config.default_days, &app_state.config.default_currency)?;
    let rows = app_state.dashboard_service.get_weekday_sales(params.days, today());

    Ok((StatusCode::OK, Json(rows)))
}

// GET /api/analytics/profit-leaders
#[utoipa::path(
    get,
    path = "/api/analytics/profit-leaders",
    tag = "Analytics",
    responses(
        (status = 200, description = "Margem em valor e em % dos mais vendidos", body = Vec<ProfitLeader>)
    )
)]
pub async fn get_profit_leaders(State(app_state): State<AppState>) -> impl IntoResponse {
    (StatusCode::OK, Json(app_state.dashboard_service.get_profit_leaders()))
}

// GET /api/analytics/basket-pairs
#[utoipa::path(
    get,
    path = "/api/analytics/basket-pairs",
    tag = "Analytics",
    responses(
        (status = 200, description = "Pares comprados juntos (ideias de combos)", body = Vec<BasketPair>)
    )
)]
pub async fn get_basket_pairs(State(app_state): State<AppState>) -> impl IntoResponse {
    (StatusCode::OK, Json(app_state.dashboard_service.get_basket_pairs()))
}
