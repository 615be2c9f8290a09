use rust_decimal::Decimal;

/// Formata um valor para os cards de KPI: `"<símbolo> <inteiro agrupado>"`,
/// ex.: `"KSh 1,234,567"`. Arredonda para inteiro (sem casas decimais).
pub fn format_money(symbol: &str, amount: Decimal) -> String {
    let rounded = amount.round();
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let digits = rounded.abs().trunc().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if negative {
        format!("{} -{}", symbol, grouped)
    } else {
        format!("{} {}", symbol, grouped)
    }
}
