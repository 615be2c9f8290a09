// src/models/analytics.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{
    dashboard::{Alert, ForecastPoint, Kpis, PricingRecommendation, SalesRecord},
    finance::ExpenseRecord,
    inventory::InventoryItem,
};

// Média de vendas por dia da semana (Segunda..Domingo)
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WeekdaySales {
    #[schema(example = "Monday")]
    pub weekday: String,
    // None quando a janela não tem nenhum registro daquele dia
    pub average_revenue: Option<Decimal>,
}

// Líderes de lucro: receita x margem
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfitLeader {
    pub name: String,
    pub sold: u32,
    pub revenue: Decimal,
    #[schema(example = 25)]
    pub margin_pct: Decimal,
    #[schema(example = 2100)]
    pub margin_value: Decimal,
}

// Pares comprados juntos (ideias de combos)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BasketPair {
    #[schema(example = "Bread")]
    pub item_a: String,
    #[schema(example = "Milk")]
    pub item_b: String,
    #[schema(example = 180)]
    pub count: u32,
}

// Tabelas enviadas pelo cliente para o núcleo de análise
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EvaluatePayload {
    pub sales: Vec<SalesRecord>,
    pub expenses: Vec<ExpenseRecord>,
    pub inventory: Vec<InventoryItem>,

    // Opcional: fixa o "hoje" (útil para reproduzir um cenário)
    #[schema(value_type = Option<String>, format = Date, example = "2024-03-10")]
    pub today: Option<NaiveDate>,

    // Opcional: semente do ruído da previsão
    #[schema(example = 7)]
    pub seed: Option<u64>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationResult {
    pub kpis: Kpis,
    pub forecast: Vec<ForecastPoint>,
    #[schema(example = 16.7)]
    pub sales_drop_pct: f64,
    pub alerts: Vec<Alert>,
    pub pricing: Vec<PricingRecommendation>,
}
