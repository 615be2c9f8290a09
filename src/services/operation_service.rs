// src/services/operation_service.rs

use std::collections::BTreeSet;

use validator::{ValidationError, ValidationErrors};

use crate::{
    common::error::AppError,
    db::OperationsRepository,
    models::operations::{Order, OrderStatus, OrdersView},
};

#[derive(Clone)]
pub struct OperationService {
    repo: OperationsRepository,
}

// "Pending, delivered" -> {Pending, Delivered}. Vazio = sem filtro.
fn parse_status_filter(raw: Option<&str>) -> Result<BTreeSet<OrderStatus>, AppError> {
    let mut wanted = BTreeSet::new();
    for part in raw.unwrap_or_default().split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let status = part.parse::<OrderStatus>().map_err(|message| {
            let mut err = ValidationError::new("status");
            err.message = Some(message.into());
            let mut errors = ValidationErrors::new();
            errors.add("status", err);
            AppError::ValidationError(errors)
        })?;
        wanted.insert(status);
    }
    Ok(wanted)
}

impl OperationService {
    pub fn new(repo: OperationsRepository) -> Self {
        Self { repo }
    }

    pub fn get_orders(&self, status_filter: Option<&str>) -> Result<Vec<Order>, AppError> {
        let wanted = parse_status_filter(status_filter)?;
        Ok(self
            .repo
            .orders()
            .into_iter()
            .filter(|order| wanted.is_empty() || wanted.contains(&order.status))
            .collect())
    }

    pub fn get_orders_view(&self, status_filter: Option<&str>) -> Result<OrdersView, AppError> {
        // As opções vêm da tabela completa, não da filtrada
        let status_options: Vec<OrderStatus> = self
            .repo
            .orders()
            .iter()
            .map(|order| order.status)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        Ok(OrdersView {
            status_options,
            orders: self.get_orders(status_filter)?,
        })
    }
}
