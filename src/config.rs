// src/config.rs

use std::{env, str::FromStr};

use anyhow::Context;

use crate::{
    db::{dashboard_repo::DEFAULT_SALES_SEED, DashboardRepository, FinanceRepository, InventoryRepository, OperationsRepository},
    models::settings::{MAX_WINDOW_DAYS, MIN_WINDOW_DAYS, SUPPORTED_CURRENCIES},
    services::{
        analytics_service::{AnalyticsThresholds, DEFAULT_FORECAST_SEED},
        DashboardService, FinanceService, InventoryService, OperationService,
    },
};

// Configuração lida das variáveis de ambiente (ou do .env)
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub sales_seed: u64,
    pub forecast_seed: u64,
    pub default_days: u32,
    pub default_currency: String,
    pub thresholds: AnalyticsThresholds,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            sales_seed: DEFAULT_SALES_SEED,
            forecast_seed: DEFAULT_FORECAST_SEED,
            default_days: 30,
            default_currency: "KSh".to_string(),
            thresholds: AnalyticsThresholds::default(),
        }
    }
}

// Lê uma variável opcional; se existir e não fizer parse, falha com contexto.
fn env_or<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{} inválida: '{}'", key, raw)),
        Err(_) => Ok(default),
    }
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        // O .env é opcional: em produção as variáveis vêm do ambiente
        dotenvy::dotenv().ok();

        let defaults = Self::default();
        let mut thresholds = defaults.thresholds.clone();
        thresholds.low_stock_qty = env_or("LOW_STOCK_QTY", thresholds.low_stock_qty)?;
        thresholds.near_expiry_days = env_or("NEAR_EXPIRY_DAYS", thresholds.near_expiry_days)?;
        thresholds.sales_drop_pct = env_or("SALES_DROP_PCT", thresholds.sales_drop_pct)?;
        thresholds.overstock_qty = env_or("OVERSTOCK_QTY", thresholds.overstock_qty)?;

        let config = Self {
            host: env_or("APP_HOST", defaults.host)?,
            port: env_or("APP_PORT", defaults.port)?,
            sales_seed: env_or("SALES_SEED", defaults.sales_seed)?,
            forecast_seed: env_or("FORECAST_SEED", defaults.forecast_seed)?,
            default_days: env_or("DEFAULT_DAYS_WINDOW", defaults.default_days)?,
            default_currency: env_or("DEFAULT_CURRENCY", defaults.default_currency)?,
            thresholds,
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if !(MIN_WINDOW_DAYS..=MAX_WINDOW_DAYS).contains(&self.default_days) {
            anyhow::bail!(
                "DEFAULT_DAYS_WINDOW deve estar entre {} e {} (veio {})",
                MIN_WINDOW_DAYS,
                MAX_WINDOW_DAYS,
                self.default_days
            );
        }
        if !SUPPORTED_CURRENCIES.contains(&self.default_currency.as_str()) {
            anyhow::bail!("DEFAULT_CURRENCY não suportada: '{}'", self.default_currency);
        }
        Ok(())
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

// O estado compartilhado que será acessível em toda a aplicação.
// Somente leitura: cada requisição recalcula tudo do zero.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub dashboard_service: DashboardService,
    pub inventory_service: InventoryService,
    pub finance_service: FinanceService,
    pub operation_service: OperationService,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        // --- Monta o gráfico de dependências ---
        let dashboard_repo = DashboardRepository::new(config.sales_seed);
        let inventory_repo = InventoryRepository::new();
        let finance_repo = FinanceRepository::new();

        let dashboard_service = DashboardService::new(
            dashboard_repo,
            inventory_repo.clone(),
            finance_repo.clone(),
            config.thresholds.clone(),
            config.forecast_seed,
        );
        let inventory_service = InventoryService::new(inventory_repo, config.thresholds.clone());
        let finance_service = FinanceService::new(finance_repo);
        let operation_service = OperationService::new(OperationsRepository::new());

        Self {
            config,
            dashboard_service,
            inventory_service,
            finance_service,
            operation_service,
        }
    }
}
