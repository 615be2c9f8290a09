// src/db/finance_repo.rs

use rust_decimal::Decimal;

use crate::models::finance::ExpenseRecord;

#[derive(Clone, Default)]
pub struct FinanceRepository;

impl FinanceRepository {
    pub fn new() -> Self {
        Self
    }

    // Despesas mensais fixas da demo
    pub fn expenses(&self) -> Vec<ExpenseRecord> {
        [
            ("Rent", 80_000),
            ("Salaries", 120_000),
            ("Utilities", 15_000),
            ("Supplies", 12_000),
            ("Logistics", 9_000),
        ]
        .into_iter()
        .map(|(kind, amount)| ExpenseRecord {
            kind: kind.to_string(),
            amount: Decimal::from(amount),
        })
        .collect()
    }
}
