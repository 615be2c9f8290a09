// src/services/inventory_service.rs

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::{
    common::date_utils::days_to_expiry,
    db::InventoryRepository,
    models::{
        inventory::{ExpiryStatus, InventoryItem, InventoryRow, InventoryView, StockStatus, Supplier},
        settings::InventoryQuery,
    },
    services::analytics_service::AnalyticsThresholds,
};

pub const ALL_SUPPLIERS: &str = "All";

#[derive(Clone)]
pub struct InventoryService {
    inventory_repo: InventoryRepository,
    thresholds: AnalyticsThresholds,
}

impl InventoryService {
    pub fn new(inventory_repo: InventoryRepository, thresholds: AnalyticsThresholds) -> Self {
        Self { inventory_repo, thresholds }
    }

    fn to_row(&self, item: InventoryItem, today: NaiveDate) -> InventoryRow {
        let days = days_to_expiry(item.expiry, today);

        let stock_status = if item.qty == 0 {
            StockStatus::OutOfStock
        } else if item.qty <= self.thresholds.low_stock_qty {
            StockStatus::Low
        } else {
            StockStatus::Ok
        };

        let expiry_status = if days < 0 {
            ExpiryStatus::Expired
        } else if days <= self.thresholds.near_expiry_days {
            ExpiryStatus::NearExpiry
        } else {
            ExpiryStatus::Ok
        };

        InventoryRow {
            sku: item.sku,
            name: item.name,
            category: item.category,
            qty: item.qty,
            expiry: item.expiry,
            cost: item.cost,
            price: item.price,
            supplier: item.supplier,
            days_to_expiry: days,
            stock_status,
            expiry_status,
        }
    }

    // --- TABELA DE ESTOQUE (com filtros) ---
    pub fn get_inventory_view(&self, query: &InventoryQuery, today: NaiveDate) -> InventoryView {
        let items = self.inventory_repo.inventory(today);

        let supplier_options: Vec<String> = items
            .iter()
            .map(|item| item.supplier.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let supplier = query
            .supplier
            .as_deref()
            .filter(|s| !s.is_empty() && *s != ALL_SUPPLIERS);
        let low_only = query.low_only.unwrap_or(false);
        let near_expiry = query.near_expiry.unwrap_or(false);

        let mut rows: Vec<InventoryRow> = items
            .into_iter()
            .filter(|item| supplier.is_none_or(|s| item.supplier == s))
            .map(|item| self.to_row(item, today))
            .filter(|row| !low_only || row.qty <= self.thresholds.low_stock_qty)
            .filter(|row| !near_expiry || row.days_to_expiry <= self.thresholds.near_expiry_days)
            .collect();

        rows.sort_by(|a, b| {
            a.days_to_expiry
                .cmp(&b.days_to_expiry)
                .then_with(|| a.name.cmp(&b.name))
        });

        tracing::debug!(?supplier, low_only, near_expiry, rows = rows.len(), "Estoque filtrado");

        InventoryView { supplier_options, items: rows }
    }

    // --- FORNECEDORES (mais baratos e mais rápidos primeiro) ---
    pub fn get_suppliers(&self) -> Vec<Supplier> {
        let mut suppliers = self.inventory_repo.suppliers();
        suppliers.sort_by(|a, b| {
            a.last_price
                .cmp(&b.last_price)
                .then_with(|| a.avg_lead_days.cmp(&b.avg_lead_days))
        });
        suppliers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> InventoryService {
        InventoryService::new(InventoryRepository::new(), AnalyticsThresholds::default())
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
    }

    #[test]
    fn rows_sorted_by_expiry_then_name() {
        let view = service().get_inventory_view(&InventoryQuery::default(), today());
        assert_eq!(view.items.len(), 13);
        assert_eq!(view.items[0].sku, "BREAD-TR");
        assert!(view.items.windows(2).all(|w| w[0].days_to_expiry <= w[1].days_to_expiry));
        assert_eq!(view.supplier_options.first().map(String::as_str), Some("BakeryHouse"));
        assert_eq!(view.supplier_options.len(), 8);
    }

    #[test]
    fn filters_combine() {
        let query = InventoryQuery {
            supplier: Some("DairyCo".into()),
            low_only: None,
            near_expiry: Some(true),
        };
        let view = service().get_inventory_view(&query, today());
        let skus: Vec<&str> = view.items.iter().map(|r| r.sku.as_str()).collect();
        assert_eq!(skus, vec!["MILK-1L"]);
        assert_eq!(view.items[0].expiry_status, ExpiryStatus::NearExpiry);

        let low = InventoryQuery { low_only: Some(true), ..InventoryQuery::default() };
        let view = service().get_inventory_view(&low, today());
        assert_eq!(view.items.len(), 1);
        assert_eq!(view.items[0].stock_status, StockStatus::OutOfStock);
    }

    #[test]
    fn all_supplier_means_no_filter() {
        let query = InventoryQuery { supplier: Some("All".into()), ..InventoryQuery::default() };
        assert_eq!(service().get_inventory_view(&query, today()).items.len(), 13);
    }

    #[test]
    fn suppliers_cheapest_first() {
        let names: Vec<String> = service().get_suppliers().into_iter().map(|s| s.name).collect();
        assert_eq!(names.first().map(String::as_str), Some("DairyCo"));
        assert_eq!(names.last().map(String::as_str), Some("OilSup"));
    }
}
