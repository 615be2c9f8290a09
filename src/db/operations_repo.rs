// src/db/operations_repo.rs

use rust_decimal::Decimal;

use crate::models::operations::{Order, OrderStatus};

#[derive(Clone, Default)]
pub struct OperationsRepository;

impl OperationsRepository {
    pub fn new() -> Self {
        Self
    }

    // Pedidos online + loja física (mock)
    pub fn orders(&self) -> Vec<Order> {
        [
            ("ORD-1001", "Asha W.", 5, 1200, OrderStatus::Delivered),
            ("ORD-1002", "John K.", 3, 540, OrderStatus::Preparing),
            ("ORD-1003", "Farmers Coop", 50, 22000, OrderStatus::Pending),
            ("ORD-1004", "Mary N.", 2, 400, OrderStatus::Delivered),
            ("ORD-1005", "Baraka Online", 8, 3200, OrderStatus::Dispatched),
            ("ORD-1006", "Office NextDoor", 14, 5600, OrderStatus::Pending),
        ]
        .into_iter()
        .map(|(id, customer, items, total, status)| Order {
            id: id.to_string(),
            customer: customer.to_string(),
            items,
            total: Decimal::from(total),
            status,
        })
        .collect()
    }
}
