// src/services/dashboard_service.rs

use chrono::NaiveDate;

use crate::{
    common::{error::AppError, money::format_money},
    db::{DashboardRepository, FinanceRepository, InventoryRepository},
    models::{
        analytics::{BasketPair, EvaluatePayload, EvaluationResult, ProfitLeader, WeekdaySales},
        dashboard::{Alert, DashboardOverview, KpiCard, Kpis, PricingRecommendation, SalesChart, SalesRecord, TopSeller},
        settings::DisplayParams,
    },
    services::{
        analytics_service::{self, AnalyticsThresholds},
        insights_service,
    },
};

// Cada chamada é uma passada completa: Dados -> Núcleo de análise -> resposta.
// Nenhum estado mutável é compartilhado entre requisições.
#[derive(Clone)]
pub struct DashboardService {
    repo: DashboardRepository,
    inventory_repo: InventoryRepository,
    finance_repo: FinanceRepository,
    thresholds: AnalyticsThresholds,
    forecast_seed: u64,
}

impl DashboardService {
    pub fn new(
        repo: DashboardRepository,
        inventory_repo: InventoryRepository,
        finance_repo: FinanceRepository,
        thresholds: AnalyticsThresholds,
        forecast_seed: u64,
    ) -> Self {
        Self { repo, inventory_repo, finance_repo, thresholds, forecast_seed }
    }

    // 1. Página principal inteira
    pub fn get_overview(&self, params: &DisplayParams, today: NaiveDate) -> Result<DashboardOverview, AppError> {
        let sales = self.repo.sales_by_day(params.days, today);
        let inventory = self.inventory_repo.inventory(today);
        let expenses = self.finance_repo.expenses();

        let kpis = analytics_service::compute_kpis(&sales, &expenses)?;
        let kpi_cards = self.kpi_cards(&kpis, params);
        let forecast =
            analytics_service::simple_forecast_next_7_days(&sales, self.forecast_seed, today, &self.thresholds)?;
        let alerts = analytics_service::build_alerts(&inventory, &sales, today, &self.thresholds);
        let pricing = analytics_service::dynamic_pricing_recommendations(&inventory, today, &self.thresholds);

        tracing::debug!(days = params.days, alerts = alerts.len(), "Visão geral montada");

        Ok(DashboardOverview {
            window_days: params.days,
            currency: params.currency.clone(),
            kpis,
            kpi_cards,
            sales,
            forecast,
            top_sellers: self.repo.top_sellers(),
            alerts,
            pricing,
        })
    }

    fn kpi_cards(&self, kpis: &Kpis, params: &DisplayParams) -> Vec<KpiCard> {
        [
            (format!("Revenue ({} days)", params.days), kpis.revenue),
            ("Expenses".to_string(), kpis.expenses),
            ("Profit".to_string(), kpis.profit),
        ]
        .into_iter()
        .map(|(label, value)| KpiCard {
            label,
            value,
            display: format_money(&params.currency, value),
        })
        .collect()
    }

    // 2. Blocos individuais (mesmas regras da visão geral)
    pub fn get_kpis(&self, days: u32, today: NaiveDate) -> Result<Kpis, AppError> {
        let sales = self.repo.sales_by_day(days, today);
        analytics_service::compute_kpis(&sales, &self.finance_repo.expenses())
    }

    pub fn get_sales(&self, days: u32, today: NaiveDate) -> Vec<SalesRecord> {
        self.repo.sales_by_day(days, today)
    }

    pub fn get_sales_chart(&self, days: u32, today: NaiveDate) -> Result<SalesChart, AppError> {
        let sales = self.repo.sales_by_day(days, today);
        let forecast =
            analytics_service::simple_forecast_next_7_days(&sales, self.forecast_seed, today, &self.thresholds)?;
        Ok(SalesChart { sales, forecast })
    }

    pub fn get_top_sellers(&self) -> Vec<TopSeller> {
        self.repo.top_sellers()
    }

    pub fn get_alerts(&self, days: u32, today: NaiveDate) -> Vec<Alert> {
        let sales = self.repo.sales_by_day(days, today);
        let inventory = self.inventory_repo.inventory(today);
        analytics_service::build_alerts(&inventory, &sales, today, &self.thresholds)
    }

    pub fn get_pricing(&self, today: NaiveDate) -> Vec<PricingRecommendation> {
        let inventory = self.inventory_repo.inventory(today);
        analytics_service::dynamic_pricing_recommendations(&inventory, today, &self.thresholds)
    }

    // 3. Página de análises
    pub fn get_weekday_sales(&self, days: u32, today: NaiveDate) -> Vec<WeekdaySales> {
        insights_service::sales_by_weekday(&self.repo.sales_by_day(days, today))
    }

    pub fn get_profit_leaders(&self) -> Vec<ProfitLeader> {
        insights_service::profit_leaders(&self.repo.top_sellers())
    }

    pub fn get_basket_pairs(&self) -> Vec<BasketPair> {
        self.repo.basket_pairs()
    }

    // 4. Núcleo sobre tabelas enviadas pelo cliente
    pub fn evaluate(&self, payload: EvaluatePayload, today: NaiveDate) -> Result<EvaluationResult, AppError> {
        let today = payload.today.unwrap_or(today);
        let seed = payload.seed.unwrap_or(self.forecast_seed);

        analytics_service::validate_inventory(&payload.inventory)?;
        let kpis = analytics_service::compute_kpis(&payload.sales, &payload.expenses)?;

        let forecast =
            analytics_service::simple_forecast_next_7_days(&payload.sales, seed, today, &self.thresholds)?;
        let drop = analytics_service::sales_drop(&payload.sales, &self.thresholds);
        let alerts = analytics_service::build_alerts(&payload.inventory, &payload.sales, today, &self.thresholds);
        let pricing =
            analytics_service::dynamic_pricing_recommendations(&payload.inventory, today, &self.thresholds);

        Ok(EvaluationResult {
            kpis,
            forecast,
            sales_drop_pct: drop.drop_pct,
            alerts,
            pricing,
        })
    }
}
