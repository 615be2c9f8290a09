// src/handlers/settings.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    config::AppState,
    models::settings::{DisplaySettings, MAX_WINDOW_DAYS, MIN_WINDOW_DAYS, SUPPORTED_CURRENCIES},
};

// GET /api/settings
// Opções dos controles globais (janela de dias e moeda de exibição)
#[utoipa::path(
    get,
    path = "/api/settings",
    tag = "Settings",
    responses(
        (status = 200, description = "Opções e padrões dos controles do painel", body = DisplaySettings)
    )
)]
pub async fn get_settings(State(app_state): State<AppState>) -> impl IntoResponse {
    let settings = DisplaySettings {
        currency_options: SUPPORTED_CURRENCIES.iter().map(|c| c.to_string()).collect(),
        default_currency: app_state.config.default_currency.clone(),
        min_days: MIN_WINDOW_DAYS,
        max_days: MAX_WINDOW_DAYS,
        default_days: app_state.config.default_days,
    };

    (StatusCode::OK, Json(settings))
}
