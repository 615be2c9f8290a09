// src/handlers/dashboard.rs

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
    // Importamos os models para referenciar no Swagger
    models::{
        dashboard::{Alert, DashboardOverview, Kpis, PricingRecommendation, SalesChart, SalesRecord, TopSeller},
        settings::{DashboardQuery, DisplayParams},
    },
};

fn resolve(app_state: &AppState, query: DashboardQuery) -> Result<DisplayParams, AppError> {
    query.resolve(app_state.config.default_days, &app_state.config.default_currency)
}

// GET /api/dashboard/overview
#[utoipa::path(
    get,
    path = "/api/dashboard/overview",
    tag = "Dashboard",
    params(DashboardQuery),
    responses(
        (status = 200, description = "KPIs, vendas, previsão, mais vendidos, alertas e preços", body = DashboardOverview),
        (status = 400, description = "Parâmetros inválidos")
    )
)]
pub async fn get_overview(
    State(app_state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Result<impl IntoResponse, AppError> {
    let params = resolve(&app_state, query)?;
    tracing::info!(days = params.days, currency = %params.currency, "Montando visão geral");

    let overview = app_state.dashboard_service.get_overview(&params, today())?;

    Ok((StatusCode::OK, Json(overview)))
}

// GET /api/dashboard/kpis
#[utoipa::path(
    get,
    path = "/api/dashboard/kpis",
    tag = "Dashboard",
    params(DashboardQuery),
    responses(
        (status = 200, description = "Receita, despesas e lucro da janela", body = Kpis),
        (status = 400, description = "Parâmetros inválidos")
    )
)]
pub async fn get_kpis(
    State(app_state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Result<impl IntoResponse, AppError> {
    let params = resolve(&app_state, query)?;
    let kpis = app_state.dashboard_service.get_kpis(params.days, today())?;

    Ok((StatusCode::OK, Json(kpis)))
}

// GET /api/dashboard/sales-chart
#[utoipa::path(
    get,
    path = "/api/dashboard/sales-chart",
    tag = "Dashboard",
    params(DashboardQuery),
    responses(
        (status = 200, description = "Vendas diárias da janela + previsão de 7 dias", body = SalesChart),
        (status = 400, description = "Parâmetros inválidos")
    )
)]
pub async fn get_sales_chart(
    State(app_state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Result<impl IntoResponse, AppError> {
    let params = resolve(&app_state, query)?;
    let chart = app_state.dashboard_service.get_sales_chart(params.days, today())?;

    Ok((StatusCode::OK, Json(chart)))
}

// GET /api/dashboard/sales/export
// Mesma janela do gráfico, uma linha por dia.
#[utoipa::path(
    get,
    path = "/api/dashboard/sales/export",
    tag = "Dashboard",
    params(DashboardQuery),
    responses(
        (status = 200, description = "sales.csv", content_type = "text/csv", body = String),
        (status = 400, description = "Parâmetros inválidos")
    )
)]
pub async fn export_sales(
    State(app_state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Result<CsvDownload, AppError> {
    let params = resolve(&app_state, query)?;
    let sales = app_state.dashboard_service.get_sales(params.days, today());
    let body = to_csv(SalesRecord::CSV_HEADERS, &sales)?;

    Ok(CsvDownload { filename: "sales.csv", body })
}

// GET /api/dashboard/top-sellers
#[utoipa::path(
    get,
    path = "/api/dashboard/top-sellers",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Ranking dos produtos mais vendidos (Curva ABC)", body = Vec<TopSeller>)
    )
)]
pub async fn get_top_sellers(State(app_state): State<AppState>) -> impl IntoResponse {
    (StatusCode::OK, Json(app_state.dashboard_service.get_top_sellers()))
}

// GET /api/dashboard/alerts
#[utoipa::path(
    get,
    path = "/api/dashboard/alerts",
    tag = "Dashboard",
    params(DashboardQuery),
    responses(
        (status = 200, description = "Alertas ativos (nunca vazio)", body = Vec<Alert>),
        (status = 400, description = "Parâmetros inválidos")
    )
)]
pub async fn get_alerts(
    State(app_state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Result<impl IntoResponse, AppError> {
    let params = resolve(&app_state, query)?;
    let alerts = app_state.dashboard_service.get_alerts(params.days, today());

    Ok((StatusCode::OK, Json(alerts)))
}

// GET /api/dashboard/pricing
#[utoipa::path(
    get,
    path = "/api/dashboard/pricing",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Sugestão de preço por item do estoque", body = Vec<PricingRecommendation>)
    )
)]
pub async fn get_pricing(State(app_state): State<AppState>) -> impl IntoResponse {
    (StatusCode::OK, Json(app_state.dashboard_service.get_pricing(today())))
}
