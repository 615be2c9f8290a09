// src/db/inventory_repo.rs

use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;

use crate::models::inventory::{InventoryItem, Supplier};

// (sku, nome, categoria, qty, dias até vencer, custo, preço, fornecedor)
type CatalogRow = (&'static str, &'static str, &'static str, u32, i64, i64, i64, &'static str);

const CATALOG: [CatalogRow; 13] = [
    ("MILK-1L", "Milk 1L", "Dairy", 12, 2, 80, 100, "DairyCo"),
    ("OIL-05L", "Cooking Oil 5L", "Grocery", 6, 45, 4200, 5000, "OilSup"),
    ("RICE-5KG", "Rice 5kg", "Grocery", 20, 300, 2500, 3000, "GrainHub"),
    ("BREAD-TR", "Fresh Bread (loaf)", "Bakery", 40, 1, 20, 30, "BakeryHouse"),
    ("PASTA-500", "Pasta 500g", "Grocery", 0, 400, 120, 160, "PastaMakers"),
    ("SUGAR-1KG", "Sugar 1kg", "Grocery", 55, 600, 110, 150, "GrainHub"),
    ("FLOUR-2KG", "Maize Flour 2kg", "Grocery", 8, 200, 150, 210, "GrainHub"),
    ("YOG-500", "Yogurt 500ml", "Dairy", 18, 4, 90, 120, "DairyCo"),
    ("SODA-330", "Cola 330ml", "Beverage", 72, 365, 90, 150, "BeverageCorp"),
    ("WATER-1L", "Water 1L", "Beverage", 120, 720, 25, 50, "BeverageCorp"),
    ("EGG-30", "Eggs Tray (30)", "Produce", 13, 12, 280, 360, "FreshFarms"),
    ("CHICK-1KG", "Chicken 1kg", "Butchery", 9, 3, 360, 520, "FreshFarms"),
    ("DET-1L", "Detergent 1L", "Household", 27, 900, 200, 320, "CleanSupplies"),
];

#[derive(Clone, Default)]
pub struct InventoryRepository;

impl InventoryRepository {
    pub fn new() -> Self {
        Self
    }

    // Catálogo fixo; as validades são relativas ao "hoje" da geração
    pub fn inventory(&self, today: NaiveDate) -> Vec<InventoryItem> {
        CATALOG
            .iter()
            .map(|&(sku, name, category, qty, expiry_in, cost, price, supplier)| InventoryItem {
                sku: sku.to_string(),
                name: name.to_string(),
                category: category.to_string(),
                qty,
                expiry: today + Duration::days(expiry_in),
                cost: Decimal::from(cost),
                price: Decimal::from(price),
                supplier: supplier.to_string(),
            })
            .collect()
    }

    pub fn suppliers(&self) -> Vec<Supplier> {
        [
            ("DairyCo", 78, 2),
            ("OilSup", 4200, 7),
            ("GrainHub", 2450, 14),
            ("PastaMakers", 120, 21),
            ("BeverageCorp", 88, 5),
            ("FreshFarms", 300, 3),
            ("CleanSupplies", 190, 6),
        ]
        .into_iter()
        .map(|(name, last_price, avg_lead_days)| Supplier {
            name: name.to_string(),
            last_price: Decimal::from(last_price),
            avg_lead_days,
        })
        .collect()
    }
}
