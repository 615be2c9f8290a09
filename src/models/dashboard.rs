// src/models/dashboard.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// 1. Venda diária (um registro por dia da janela)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SalesRecord {
    #[schema(value_type = String, format = Date, example = "2024-03-10")]
    pub date: NaiveDate,
    #[schema(example = 512)]
    pub revenue: Decimal,
}

impl SalesRecord {
    pub const CSV_HEADERS: &'static [&'static str] = &["date", "revenue"];
}

// 2. Mais vendidos (catálogo fixo da demo)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TopSeller {
    #[schema(example = "BAN-001")]
    pub sku: String,
    #[schema(example = "Bananas (kg)")]
    pub name: String,
    #[schema(example = "Produce")]
    pub category: String,
    #[schema(example = 420)]
    pub sold: u32,
    #[schema(example = 8400)]
    pub revenue: Decimal,
    // Fração em [0, 1]
    #[schema(example = 0.25)]
    pub margin: Decimal,
}

// 3. Previsão (sempre 7 dias consecutivos após a última venda)
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ForecastPoint {
    #[schema(value_type = String, format = Date, example = "2024-03-11")]
    pub date: NaiveDate,
    #[schema(example = 497)]
    pub predicted: Decimal,
}

// 4. Resumo financeiro (os cards do topo)
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Kpis {
    pub revenue: Decimal,
    pub expenses: Decimal,
    pub profit: Decimal,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct KpiCard {
    #[schema(example = "Revenue (30 days)")]
    pub label: String,
    pub value: Decimal,
    #[schema(example = "KSh 12,840")]
    pub display: String,
}

// 5. Alertas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertKind {
    LowStock,
    NearExpiry,
    SalesDrop,
    None, // Sentinela "No active alerts"
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub kind: AlertKind,
    #[schema(example = "Low stock: Pasta 500g (0)")]
    pub message: String,
}

// 6. Precificação dinâmica (apenas sugestão, nenhum preço é alterado)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PricingAction {
    OutOfStock,
    NearExpiryDiscount,
    OverstockDiscount,
    FastMovingIncrease,
    KeepPrice,
}

impl PricingAction {
    pub fn label(self) -> &'static str {
        match self {
            PricingAction::OutOfStock => "Out of stock",
            PricingAction::NearExpiryDiscount => "Recommend 15% discount (near expiry)",
            PricingAction::OverstockDiscount => "Recommend 5% discount (overstock)",
            PricingAction::FastMovingIncrease => "Consider +5% price (fast-moving)",
            PricingAction::KeepPrice => "Keep price",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PricingRecommendation {
    #[schema(example = "BREAD-TR")]
    pub sku: String,
    #[schema(example = "Fresh Bread (loaf)")]
    pub name: String,
    pub action: PricingAction,
    #[schema(example = "Recommend 15% discount (near expiry)")]
    pub recommendation: String,
}

// 7. Gráfico de vendas + previsão
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SalesChart {
    pub sales: Vec<SalesRecord>,
    pub forecast: Vec<ForecastPoint>,
}

// 8. Visão geral (a página principal inteira numa resposta)
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardOverview {
    #[schema(example = 30)]
    pub window_days: u32,
    #[schema(example = "KSh")]
    pub currency: String,
    pub kpis: Kpis,
    pub kpi_cards: Vec<KpiCard>,
    pub sales: Vec<SalesRecord>,
    pub forecast: Vec<ForecastPoint>,
    pub top_sellers: Vec<TopSeller>,
    pub alerts: Vec<Alert>,
    pub pricing: Vec<PricingRecommendation>,
}
