// src/services/finance_service.rs

use rust_decimal::Decimal;

use crate::{
    common::error::AppError,
    db::FinanceRepository,
    models::finance::{ExpenseRecord, ExpenseSummary},
    services::analytics_service,
};

#[derive(Clone)]
pub struct FinanceService {
    repo: FinanceRepository,
}

impl FinanceService {
    pub fn new(repo: FinanceRepository) -> Self {
        Self { repo }
    }

    pub fn get_expenses(&self) -> Vec<ExpenseRecord> {
        self.repo.expenses()
    }

    /// Total mensal + linhas (o gráfico de pizza fica no front).
    pub fn get_expense_summary(&self) -> Result<ExpenseSummary, AppError> {
        let items = self.repo.expenses();
        analytics_service::validate_expenses(&items)?;

        let total: Decimal = items.iter().map(|e| e.amount).sum();
        Ok(ExpenseSummary { total, items })
    }
}
