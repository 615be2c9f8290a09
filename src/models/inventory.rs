// src/models/inventory.rs

use serde::{Serialize, Deserialize};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use utoipa::ToSchema;

// --- 1. Item de estoque ---
// `qty == 0` significa sem estoque. Validade é uma data simples (Dia/Mês/Ano).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    #[schema(example = "MILK-1L")]
    pub sku: String,
    #[schema(example = "Milk 1L")]
    pub name: String,
    #[schema(example = "Dairy")]
    pub category: String,
    #[schema(example = 12)]
    pub qty: u32,
    #[schema(value_type = String, format = Date, example = "2024-03-12")]
    pub expiry: NaiveDate,
    #[schema(example = 80)]
    pub cost: Decimal,
    #[schema(example = 100)]
    pub price: Decimal,
    #[schema(example = "DairyCo")]
    pub supplier: String,
}

// --- 2. Fornecedores ---
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    #[schema(example = "GrainHub")]
    pub name: String,
    #[schema(example = 2450)]
    pub last_price: Decimal,
    #[schema(example = 14)]
    pub avg_lead_days: u32,
}

impl Supplier {
    pub const CSV_HEADERS: &'static [&'static str] = &["name", "lastPrice", "avgLeadDays"];
}

// --- 3. Classificação visual das linhas ---
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StockStatus {
    OutOfStock, // qty == 0
    Low,        // qty <= 5
    Ok,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExpiryStatus {
    Expired,    // dias < 0
    NearExpiry, // dias <= 3
    Ok,
}

// --- 4. Linha da tabela de estoque (item + campos derivados) ---
// Campos planos de propósito: a mesma struct vira linha de CSV.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InventoryRow {
    pub sku: String,
    pub name: String,
    pub category: String,
    pub qty: u32,
    #[schema(value_type = String, format = Date)]
    pub expiry: NaiveDate,
    pub cost: Decimal,
    pub price: Decimal,
    pub supplier: String,
    #[schema(example = 2)]
    pub days_to_expiry: i64,
    pub stock_status: StockStatus,
    pub expiry_status: ExpiryStatus,
}

impl InventoryRow {
    pub const CSV_HEADERS: &'static [&'static str] = &[
        "sku",
        "name",
        "category",
        "qty",
        "expiry",
        "cost",
        "price",
        "supplier",
        "daysToExpiry",
        "stockStatus",
        "expiryStatus",
    ];
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InventoryView {
    // Valores possíveis para o filtro de fornecedor (ordenados, sem repetição)
    pub supplier_options: Vec<String>,
    pub items: Vec<InventoryRow>,
}
