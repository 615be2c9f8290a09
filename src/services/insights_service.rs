// src/services/insights_service.rs

use chrono::{Datelike, Weekday};
use rust_decimal::Decimal;

use crate::models::{
    analytics::{ProfitLeader, WeekdaySales},
    dashboard::{SalesRecord, TopSeller},
};

const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Média de receita por dia da semana, sempre 7 linhas de Segunda a Domingo.
pub fn sales_by_weekday(sales: &[SalesRecord]) -> Vec<WeekdaySales> {
    let mut totals = [(Decimal::ZERO, 0u32); 7];
    for record in sales {
        let slot = &mut totals[record.date.weekday().num_days_from_monday() as usize];
        slot.0 += record.revenue;
        slot.1 += 1;
    }

    WEEK.iter()
        .zip(totals)
        .map(|(day, (total, count))| WeekdaySales {
            weekday: weekday_name(*day).to_string(),
            average_revenue: (count > 0).then(|| total / Decimal::from(count)),
        })
        .collect()
}

/// Valor de margem (2 casas) e margem percentual (inteira) de cada campeão de vendas.
pub fn profit_leaders(top_sellers: &[TopSeller]) -> Vec<ProfitLeader> {
    top_sellers
        .iter()
        .map(|seller| ProfitLeader {
            name: seller.name.clone(),
            sold: seller.sold,
            revenue: seller.revenue,
            margin_pct: (seller.margin * Decimal::ONE_HUNDRED).round(),
            margin_value: (seller.revenue * seller.margin).round_dp(2),
        })
        .collect()
}
