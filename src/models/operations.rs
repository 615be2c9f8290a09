// src/models/operations.rs

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use rust_decimal::Decimal;
use utoipa::ToSchema;

// --- Enums ---
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema)]
pub enum OrderStatus {
    Delivered,
    Dispatched,
    Pending,
    Preparing,
}

impl OrderStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Dispatched => "Dispatched",
            OrderStatus::Pending => "Pending",
            OrderStatus::Preparing => "Preparing",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    // Aceita qualquer capitalização ("pending", "PENDING")
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "delivered" => Ok(OrderStatus::Delivered),
            "dispatched" => Ok(OrderStatus::Dispatched),
            "pending" => Ok(OrderStatus::Pending),
            "preparing" => Ok(OrderStatus::Preparing),
            other => Err(format!("Status de pedido desconhecido: '{}'", other)),
        }
    }
}

// --- Structs de Operação ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[schema(example = "ORD-1001")]
    pub id: String,
    #[schema(example = "Asha W.")]
    pub customer: String,
    #[schema(example = 5)]
    pub items: u32,
    #[schema(example = 1200)]
    pub total: Decimal,
    pub status: OrderStatus,
}

impl Order {
    pub const CSV_HEADERS: &'static [&'static str] = &["id", "customer", "items", "total", "status"];
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrdersView {
    pub status_options: Vec<OrderStatus>,
    pub orders: Vec<Order>,
}
