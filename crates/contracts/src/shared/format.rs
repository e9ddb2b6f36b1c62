//! Утилиты форматирования чисел для дашборда и таблиц

use rust_decimal::prelude::*;

/// Один знак после запятой, half away from zero по точному двоичному
/// значению: 1.45 хранится как 1.4499.. и даёт 1.4, точное 0.25 даёт 0.3
pub fn round1(value: f64) -> f64 {
    Decimal::from_f64_retain(value)
        .map(|d| d.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|d| d.to_f64())
        .unwrap_or(0.0)
}

/// Форматирует целое число с разделителем тысяч (запятая)
pub fn format_thousands(n: i64) -> String {
    let s = n.unsigned_abs().to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    if n < 0 {
        result.push('-');
    }
    result.chars().rev().collect()
}

/// Объём в тысячах долларов: 14000 → "$14K"
pub fn format_volume_k(volume: f64) -> String {
    format!("${:.0}K", volume / 1000.0)
}

/// Денежный объём без дробной части: 1234567 → "$1,234,567"
pub fn format_volume(volume: f64) -> String {
    format!("${}", format_thousands(volume.round() as i64))
}

/// Процент с одним знаком: 1.25 → "1.3%"
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", round1(value))
}
