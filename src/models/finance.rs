// src/models/finance.rs

use serde::{Deserialize, Serialize};
use rust_decimal::Decimal;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseRecord {
    // `type` é palavra reservada em Rust
    #[serde(rename = "type")]
    #[schema(example = "Rent")]
    pub kind: String,

    #[schema(example = 80000)]
    pub amount: Decimal,
}

impl ExpenseRecord {
    pub const CSV_HEADERS: &'static [&'static str] = &["type", "amount"];
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseSummary {
    #[schema(example = 236000)]
    pub total: Decimal,
    pub items: Vec<ExpenseRecord>,
}
