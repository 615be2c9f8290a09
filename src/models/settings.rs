// src/models/settings.rs

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

use crate::common::error::AppError;

pub const SUPPORTED_CURRENCIES: [&str; 4] = ["KSh", "$", "€", "£"];
pub const MIN_WINDOW_DAYS: u32 = 7;
pub const MAX_WINDOW_DAYS: u32 = 90;

// ---
// Validação Customizada
// ---
fn validate_currency(symbol: &str) -> Result<(), ValidationError> {
    if !SUPPORTED_CURRENCIES.contains(&symbol) {
        let mut err = ValidationError::new("currency");
        err.message = Some("Moeda não suportada. Use KSh, $, € ou £.".into());
        return Err(err);
    }
    Ok(())
}

// Parâmetros controlados pelo usuário (o "slider" de dias e o seletor de moeda)
#[derive(Debug, Default, Deserialize, Validate, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct DashboardQuery {
    /// Janela de dias (7 a 90). Padrão vem da configuração.
    #[validate(range(min = 7, max = 90, message = "A janela deve ter entre 7 e 90 dias."))]
    pub days: Option<u32>,

    /// Símbolo de moeda, apenas exibição (KSh, $, €, £).
    #[validate(custom(function = "validate_currency"))]
    pub currency: Option<String>,
}

// Valores já resolvidos (padrões aplicados)
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayParams {
    pub days: u32,
    pub currency: String,
}

impl DashboardQuery {
    pub fn resolve(self, default_days: u32, default_currency: &str) -> Result<DisplayParams, AppError> {
        self.validate()?;

        Ok(DisplayParams {
            days: self.days.unwrap_or(default_days),
            currency: self.currency.unwrap_or_else(|| default_currency.to_string()),
        })
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct InventoryQuery {
    /// Nome exato do fornecedor, ou "All".
    pub supplier: Option<String>,
    /// Apenas estoque baixo (qty <= 5).
    pub low_only: Option<bool>,
    /// Apenas vencimento próximo (<= 3 dias).
    pub near_expiry: Option<bool>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct OrdersQuery {
    /// Lista separada por vírgulas, ex.: "Pending,Delivered". Vazio = todos.
    pub status: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DisplaySettings {
    #[schema(example = json!(["KSh", "$", "€", "£"]))]
    pub currency_options: Vec<String>,
    #[schema(example = "KSh")]
    pub default_currency: String,
    #[schema(example = 7)]
    pub min_days: u32,
    #[schema(example = 90)]
    pub max_days: u32,
    #[schema(example = 30)]
    pub default_days: u32,
}
