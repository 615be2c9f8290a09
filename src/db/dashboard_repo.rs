// src/db/dashboard_repo.rs
//
// Fonte de dados da demo: nada é persistido, cada chamada gera a tabela de novo.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;

use crate::models::{
    analytics::BasketPair,
    dashboard::{SalesRecord, TopSeller},
};

pub const DEFAULT_SALES_SEED: u64 = 42;

#[derive(Clone)]
pub struct DashboardRepository {
    sales_seed: u64,
}

impl DashboardRepository {
    pub fn new(sales_seed: u64) -> Self {
        Self { sales_seed }
    }

    // 1. Vendas por dia (janela terminando hoje)
    // Curva senoidal + reforço de fim de semana + ruído inteiro em [0, 120).
    pub fn sales_by_day(&self, window_days: u32, today: NaiveDate) -> Vec<SalesRecord> {
        let mut rng = StdRng::seed_from_u64(self.sales_seed);
        let start = today - Duration::days(i64::from(window_days) - 1);

        (0..window_days)
            .map(|i| {
                let date = start + Duration::days(i64::from(i));
                let base = 300.0 + (f64::from(i) / 2.0).sin() * 80.0;
                let weekend_boost = match date.weekday() {
                    Weekday::Sat | Weekday::Sun => 200.0,
                    _ => 0.0,
                };
                let noise: u32 = rng.gen_range(0..120);
                let revenue = (base + weekend_boost + f64::from(noise)).trunc();

                SalesRecord {
                    date,
                    revenue: Decimal::from_f64(revenue).unwrap_or(Decimal::ZERO),
                }
            })
            .collect()
    }

    // 2. Curva ABC (catálogo fixo dos mais vendidos)
    pub fn top_sellers(&self) -> Vec<TopSeller> {
        let rows: [(&str, &str, &str, u32, i64, Decimal); 5] = [
            ("BAN-001", "Bananas (kg)", "Produce", 420, 8400, Decimal::new(25, 2)),
            ("OIL-05L", "Cooking Oil 5L", "Grocery", 320, 64000, Decimal::new(22, 2)),
            ("BREAD-TR", "Fresh Bread (loaf)", "Bakery", 290, 8700, Decimal::new(30, 2)),
            ("SODA-330", "Cola 330ml", "Beverage", 260, 39000, Decimal::new(40, 2)),
            ("ICE-1L", "Ice Cream 1L", "Frozen", 150, 15000, Decimal::new(35, 2)),
        ];

        rows.into_iter()
            .map(|(sku, name, category, sold, revenue, margin)| TopSeller {
                sku: sku.to_string(),
                name: name.to_string(),
                category: category.to_string(),
                sold,
                revenue: Decimal::from(revenue),
                margin,
            })
            .collect()
    }

    // 3. Pares comprados juntos (ideias de combos)
    pub fn basket_pairs(&self) -> Vec<BasketPair> {
        [
            ("Bread", "Milk", 180),
            ("Rice 5kg", "Cooking Oil 5L", 95),
            ("Eggs", "Bread", 120),
            ("Cola 330ml", "Chips", 140),
        ]
        .into_iter()
        .map(|(item_a, item_b, count)| BasketPair {
            item_a: item_a.to_string(),
            item_b: item_b.to_string(),
            count,
        })
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
    }

    #[test]
    fn one_record_per_day_ending_today() {
        let sales = DashboardRepository::new(DEFAULT_SALES_SEED).sales_by_day(30, today());
        assert_eq!(sales.len(), 30);
        assert_eq!(sales.first().unwrap().date, NaiveDate::from_ymd_opt(2024, 2, 10).unwrap());
        assert_eq!(sales.last().unwrap().date, today());
        assert!(sales.windows(2).all(|w| w[1].date - w[0].date == Duration::days(1)));
    }

    #[test]
    fn same_seed_same_sales() {
        let a = DashboardRepository::new(42).sales_by_day(14, today());
        let b = DashboardRepository::new(42).sales_by_day(14, today());
        let c = DashboardRepository::new(43).sales_by_day(14, today());
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn revenue_stays_in_generated_band() {
        for record in DashboardRepository::new(42).sales_by_day(90, today()) {
            let weekend = matches!(record.date.weekday(), Weekday::Sat | Weekday::Sun);
            let (low, high) = if weekend { (420, 700) } else { (220, 500) };
            assert!(record.revenue >= Decimal::from(low), "{:?}", record);
            assert!(record.revenue < Decimal::from(high), "{:?}", record);
        }
    }

    #[test]
    fn empty_window_is_empty() {
        assert!(DashboardRepository::new(42).sales_by_day(0, today()).is_empty());
    }
}
