// src/services/analytics_service.rs
//
// Núcleo de análise: funções puras que transformam as tabelas cruas em
// KPIs, previsão, alertas e sugestões de preço. Nada aqui lê relógio,
// banco ou estado global: "hoje" e a semente chegam como parâmetros.

use std::collections::HashSet;

use chrono::{Duration, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::prelude::*;

use crate::{
    common::{date_utils::days_to_expiry, error::AppError},
    models::{
        dashboard::{
            Alert, AlertKind, ForecastPoint, Kpis, PricingAction, PricingRecommendation,
            SalesRecord,
        },
        finance::ExpenseRecord,
        inventory::InventoryItem,
    },
};

/// A previsão sempre cobre exatamente esta quantidade de dias.
pub const FORECAST_HORIZON_DAYS: i64 = 7;
/// Ruído multiplicativo da previsão, sorteado uniformemente em `[min, max]`.
pub const FORECAST_NOISE_MIN: f64 = -0.05;
pub const FORECAST_NOISE_MAX: f64 = 0.12;
pub const DEFAULT_FORECAST_SEED: u64 = 7;

pub const NO_ALERTS_MESSAGE: &str = "No active alerts";

/// Constantes de negócio da demo. A configuração pode sobrescrever
/// algumas delas (ver `AppConfig::from_env`).
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsThresholds {
    /// Tamanho da janela móvel (média da previsão e semanas comparadas).
    pub trailing_window: usize,
    /// Alerta de estoque baixo quando `qty <= low_stock_qty`.
    pub low_stock_qty: u32,
    /// Alerta de validade quando `dias <= near_expiry_days`.
    pub near_expiry_days: i64,
    /// Alerta de queda quando a queda percentual é `> sales_drop_pct`.
    pub sales_drop_pct: f64,
    /// Desconto de validade quando `dias < discount_expiry_days`.
    pub discount_expiry_days: i64,
    /// Desconto de excesso quando `qty > overstock_qty`.
    pub overstock_qty: u32,
    /// Aumento sugerido quando `qty < fast_moving_qty` e `dias > fast_moving_min_days`.
    pub fast_moving_qty: u32,
    pub fast_moving_min_days: i64,
}

impl Default for AnalyticsThresholds {
    fn default() -> Self {
        Self {
            trailing_window: 7,
            low_stock_qty: 5,
            near_expiry_days: 3,
            sales_drop_pct: 8.0,
            discount_expiry_days: 2,
            overstock_qty: 100,
            fast_moving_qty: 5,
            fast_moving_min_days: 14,
        }
    }
}

// ---
// Contrato das tabelas de entrada
// ---

pub fn validate_sales(sales: &[SalesRecord]) -> Result<(), AppError> {
    if let Some(bad) = sales.iter().find(|r| r.revenue.is_sign_negative() && !r.revenue.is_zero()) {
        return Err(AppError::data_contract(format!(
            "sales: receita negativa em {} ({})",
            bad.date, bad.revenue
        )));
    }
    checked_total(sales.iter().map(|r| r.revenue), "sales")?;
    Ok(())
}

pub fn validate_expenses(expenses: &[ExpenseRecord]) -> Result<(), AppError> {
    if let Some(bad) = expenses.iter().find(|e| e.amount.is_sign_negative() && !e.amount.is_zero()) {
        return Err(AppError::data_contract(format!(
            "expenses: valor negativo para '{}' ({})",
            bad.kind, bad.amount
        )));
    }
    checked_total(expenses.iter().map(|e| e.amount), "expenses")?;
    Ok(())
}

pub fn validate_inventory(inventory: &[InventoryItem]) -> Result<(), AppError> {
    let mut seen = HashSet::new();
    for item in inventory {
        if !seen.insert(item.sku.as_str()) {
            return Err(AppError::data_contract(format!(
                "inventory: SKU duplicado '{}'",
                item.sku
            )));
        }
    }
    Ok(())
}

// Soma sem estouro: um total fora da faixa do Decimal é tabela inválida
fn checked_total(mut values: impl Iterator<Item = Decimal>, table: &str) -> Result<Decimal, AppError> {
    values
        .try_fold(Decimal::ZERO, |acc, value| acc.checked_add(value))
        .ok_or_else(|| AppError::data_contract(format!("{}: total excede a faixa numérica suportada", table)))
}

// ---
// 1. KPIs
// ---

pub fn compute_kpis(sales: &[SalesRecord], expenses: &[ExpenseRecord]) -> Result<Kpis, AppError> {
    validate_sales(sales)?;
    validate_expenses(expenses)?;

    let revenue = checked_total(sales.iter().map(|r| r.revenue), "sales")?;
    let expenses = checked_total(expenses.iter().map(|e| e.amount), "expenses")?;
    let profit = revenue
        .checked_sub(expenses)
        .ok_or_else(|| AppError::data_contract("kpis: lucro fora da faixa numérica suportada"))?;

    Ok(Kpis { revenue, expenses, profit })
}

// ---
// 2. Previsão ingênua
// ---

fn sorted_by_date(sales: &[SalesRecord]) -> Vec<&SalesRecord> {
    let mut sorted: Vec<&SalesRecord> = sales.iter().collect();
    sorted.sort_by_key(|r| r.date);
    sorted
}

// None quando a soma estoura
fn mean_revenue(records: &[&SalesRecord]) -> Option<Decimal> {
    if records.is_empty() {
        return Some(Decimal::ZERO);
    }
    records
        .iter()
        .try_fold(Decimal::ZERO, |acc, r| acc.checked_add(r.revenue))?
        .checked_div(Decimal::from(records.len()))
}

/// Previsão dos próximos 7 dias com um gerador de ruído injetado.
/// Os 7 sorteios são consumidos em sequência do mesmo `rng`.
///
/// Falha com `DataContract` quando a média estoura ou quando os 7 dias
/// seguintes caem fora do calendário suportado.
pub fn forecast_with_rng<R: Rng>(
    sales: &[SalesRecord],
    rng: &mut R,
    today: NaiveDate,
    trailing_window: usize,
) -> Result<Vec<ForecastPoint>, AppError> {
    let sorted = sorted_by_date(sales);
    let tail_start = sorted.len().saturating_sub(trailing_window);
    let baseline = mean_revenue(&sorted[tail_start..])
        .ok_or_else(|| AppError::data_contract("sales: média fora da faixa numérica suportada"))?
        .to_f64()
        .unwrap_or(0.0);

    // Sem histórico, a previsão começa amanhã
    let last_date = sorted.last().map(|r| r.date).unwrap_or(today);

    (1..=FORECAST_HORIZON_DAYS)
        .map(|offset| {
            let date = last_date.checked_add_signed(Duration::days(offset)).ok_or_else(|| {
                AppError::data_contract(format!("sales: {} não admite previsão de 7 dias", last_date))
            })?;
            let noise = rng.gen_range(FORECAST_NOISE_MIN..=FORECAST_NOISE_MAX);
            let predicted = (baseline * (1.0 + noise)).floor();
            Ok(ForecastPoint {
                date,
                predicted: Decimal::from_f64(predicted).unwrap_or(Decimal::ZERO),
            })
        })
        .collect()
}

/// Previsão com semente: mesma semente + mesma tabela = mesmos valores.
pub fn simple_forecast_next_7_days(
    sales: &[SalesRecord],
    seed: u64,
    today: NaiveDate,
    thresholds: &AnalyticsThresholds,
) -> Result<Vec<ForecastPoint>, AppError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let forecast = forecast_with_rng(sales, &mut rng, today, thresholds.trailing_window)?;
    tracing::debug!(
        records = sales.len(),
        seed,
        first = ?forecast.first().map(|p| p.date),
        "Previsão de 7 dias calculada"
    );
    Ok(forecast)
}

// ---
// 3. Queda de vendas (semana atual x semana anterior)
// ---

#[derive(Debug, Clone, PartialEq)]
pub struct SalesDrop {
    /// 0.0 quando a comparação é pulada.
    pub drop_pct: f64,
    pub message: Option<String>,
}

impl SalesDrop {
    fn skipped() -> Self {
        Self { drop_pct: 0.0, message: None }
    }
}

pub fn sales_drop(sales: &[SalesRecord], thresholds: &AnalyticsThresholds) -> SalesDrop {
    let window = thresholds.trailing_window;
    let sorted = sorted_by_date(sales);

    // Precisa de duas janelas completas
    if window == 0 || sorted.len() < window * 2 {
        return SalesDrop::skipped();
    }

    let recent_start = sorted.len() - window;
    let (Some(recent_mean), Some(prior_mean)) = (
        mean_revenue(&sorted[recent_start..]),
        mean_revenue(&sorted[recent_start - window..recent_start]),
    ) else {
        return SalesDrop::skipped();
    };
    if prior_mean.is_zero() {
        return SalesDrop::skipped();
    }

    // Razão fora da faixa só acontece com alta explosiva, nunca com queda
    let Some(drop) = recent_mean
        .checked_div(prior_mean)
        .and_then(|ratio| Decimal::ONE.checked_sub(ratio))
        .and_then(|share| share.checked_mul(Decimal::ONE_HUNDRED))
    else {
        return SalesDrop::skipped();
    };
    let drop_pct = drop.to_f64().unwrap_or(0.0);

    let message = (drop_pct > thresholds.sales_drop_pct)
        .then(|| format!("Sales dropped {:.1}% vs previous week", drop_pct));

    SalesDrop { drop_pct, message }
}

// ---
// 4. Alertas
// ---

pub fn build_alerts(
    inventory: &[InventoryItem],
    sales: &[SalesRecord],
    today: NaiveDate,
    thresholds: &AnalyticsThresholds,
) -> Vec<Alert> {
    let mut alerts = Vec::new();

    // Estoque baixo
    let low: Vec<String> = inventory
        .iter()
        .filter(|item| item.qty <= thresholds.low_stock_qty)
        .map(|item| format!("{} ({})", item.name, item.qty))
        .collect();
    if !low.is_empty() {
        alerts.push(Alert {
            kind: AlertKind::LowStock,
            message: format!("Low stock: {}", low.join(", ")),
        });
    }

    // Validade próxima (inclui itens já vencidos, com dias negativos)
    let expiring: Vec<String> = inventory
        .iter()
        .filter_map(|item| {
            let days = days_to_expiry(item.expiry, today);
            (days <= thresholds.near_expiry_days).then(|| format!("{} in {}d", item.name, days))
        })
        .collect();
    if !expiring.is_empty() {
        alerts.push(Alert {
            kind: AlertKind::NearExpiry,
            message: format!("Expiry soon: {}", expiring.join("; ")),
        });
    }

    // Queda de vendas
    if let Some(message) = sales_drop(sales, thresholds).message {
        alerts.push(Alert { kind: AlertKind::SalesDrop, message });
    }

    if alerts.is_empty() {
        alerts.push(Alert {
            kind: AlertKind::None,
            message: NO_ALERTS_MESSAGE.to_string(),
        });
    } else {
        for alert in &alerts {
            tracing::warn!(kind = ?alert.kind, "{}", alert.message);
        }
    }

    alerts
}

// ---
// 5. Precificação dinâmica
// ---

/// Primeira regra que casar vence; as seguintes nunca sobrescrevem.
pub fn pricing_action(qty: u32, days_to_expiry: i64, thresholds: &AnalyticsThresholds) -> PricingAction {
    if qty == 0 {
        return PricingAction::OutOfStock;
    }
    if days_to_expiry < thresholds.discount_expiry_days {
        return PricingAction::NearExpiryDiscount;
    }
    if qty > thresholds.overstock_qty {
        return PricingAction::OverstockDiscount;
    }
    if qty < thresholds.fast_moving_qty && days_to_expiry > thresholds.fast_moving_min_days {
        return PricingAction::FastMovingIncrease;
    }
    PricingAction::KeepPrice
}

pub fn dynamic_pricing_recommendations(
    inventory: &[InventoryItem],
    today: NaiveDate,
    thresholds: &AnalyticsThresholds,
) -> Vec<PricingRecommendation> {
    inventory
        .iter()
        .map(|item| {
            let action = pricing_action(item.qty, days_to_expiry(item.expiry, today), thresholds);
            PricingRecommendation {
                sku: item.sku.clone(),
                name: item.name.clone(),
                action,
                recommendation: action.label().to_string(),
            }
        })
        .collect()
}
