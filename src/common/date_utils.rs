use chrono::{Local, NaiveDate};

// ---
// Helper de Datas: o "hoje" da loja
// ---
/// Dia corrente no fuso local, já normalizado para meia-noite.
/// Só a camada de handlers chama isto; os serviços recebem `today` como parâmetro.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Dias até o vencimento. Negativo quando o item já venceu.
pub fn days_to_expiry(expiry: NaiveDate, today: NaiveDate) -> i64 {
    (expiry - today).num_days()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn days_to_expiry_counts_whole_days() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        assert_eq!(days_to_expiry(NaiveDate::from_ymd_opt(2024, 3, 13).unwrap(), today), 3);
        assert_eq!(days_to_expiry(today, today), 0);
        assert_eq!(days_to_expiry(NaiveDate::from_ymd_opt(2024, 3, 8).unwrap(), today), -2);
    }
}
