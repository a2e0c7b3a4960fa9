//! Форматирование чисел для таблицы туров и карточек KPI

use serde::{Deserialize, Serialize};

/// Разбор десятичной строки из данных ("75.34", "8089550000").
/// Некорректная строка даёт `NaN`.
pub fn parse_decimal(value: &str) -> f64 {
    value.trim().parse::<f64>().unwrap_or(f64::NAN)
}

/// Как [`parse_decimal`], но некорректное значение считается нулём (суммы KPI)
pub fn parse_decimal_or_zero(value: &str) -> f64 {
    let parsed = parse_decimal(value);
    if parsed.is_nan() {
        0.0
    } else {
        parsed
    }
}

/// Процент с одним знаком после запятой: "75.34" → "75.3%", "75.36" → "75.4%"
pub fn format_percent(value: &str) -> String {
    format_percent_value(parse_decimal(value))
}

pub fn format_percent_value(value: f64) -> String {
    format!("{}%", to_fixed_1(value))
}

/// Один знак после запятой; точная половина округляется от нуля
/// ("75.25" → "75.3", "0.25" → "0.3"), остальное как `{:.1}`.
pub fn to_fixed_1(value: f64) -> String {
    let abs = value.abs();
    // точная половина возможна только для x.25 / x.75
    if value.is_finite() && (abs * 4.0).fract() == 0.0 && (abs * 10.0).fract() == 0.5 {
        let rounded = ((abs * 10.0).ceil() / 10.0).copysign(value);
        return format!("{:.1}", rounded);
    }
    format!("{:.1}", value)
}

/// Масштаб отображения денежных сумм
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurrencyScale {
    /// Миллиарды, суффикс "B" (таблица)
    #[default]
    Billions,
    /// Миллионы, суффикс "M" (карточки)
    Millions,
}

impl CurrencyScale {
    pub fn divisor(&self) -> f64 {
        match self {
            CurrencyScale::Billions => 1_000_000_000.0,
            CurrencyScale::Millions => 1_000_000.0,
        }
    }

    pub fn suffix(&self) -> &'static str {
        match self {
            CurrencyScale::Billions => "B",
            CurrencyScale::Millions => "M",
        }
    }
}

/// "8089550000" → "8.1B" (Billions) или "8089.6M" (Millions)
pub fn format_currency(value: &str, scale: CurrencyScale) -> String {
    let scaled = parse_decimal(value) / scale.divisor();
    format!("{}{}", to_fixed_1(scaled), scale.suffix())
}

/// Форматирует число с разделителями тысяч (точками)
///
/// # Примеры
/// ```
/// use contracts::shared::number_format::format_number;
/// assert_eq!(format_number(1234567), "1.234.567");
/// assert_eq!(format_number(-4976), "-4.976");
/// assert_eq!(format_number(0), "0");
/// ```
pub fn format_number(n: i64) -> String {
    let s = n.unsigned_abs().to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('.');
        }
        result.push(ch);
    }
    if n < 0 {
        result.push('-');
    }
    result.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_percent_rounds_to_one_decimal() {
        assert_eq!(format_percent("75.34"), "75.3%");
        assert_eq!(format_percent("75.36"), "75.4%");
        assert_eq!(format_percent("36"), "36.0%");
        assert_eq!(format_percent(" 90.3 "), "90.3%");
    }

    #[test]
    fn test_format_percent_ties_round_up() {
        assert_eq!(format_percent("75.25"), "75.3%");
        assert_eq!(format_percent("0.25"), "0.3%");
        assert_eq!(format_percent("12.75"), "12.8%");
        assert_eq!(format_percent("-0.25"), "-0.3%");
        // 1.45 хранится как 1.4499…, это не половина
        assert_eq!(format_percent("1.45"), "1.4%");
    }

    #[test]
    fn test_malformed_percent_shows_nan() {
        assert_eq!(format_percent("abc"), "NaN%");
        assert_eq!(format_percent(""), "NaN%");
    }

    #[test]
    fn test_parse_decimal_or_zero() {
        assert_eq!(parse_decimal_or_zero("120000000"), 120_000_000.0);
        assert_eq!(parse_decimal_or_zero("n/a"), 0.0);
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency("8089550000", CurrencyScale::Billions), "8.1B");
        assert_eq!(format_currency("45000000", CurrencyScale::Millions), "45.0M");
        assert_eq!(format_currency("0", CurrencyScale::Billions), "0.0B");
        assert_eq!(format_currency("x", CurrencyScale::Millions), "NaNM");
        assert_eq!(format_currency("2250000000", CurrencyScale::Billions), "2.3B");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(42), "42");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1.000");
        assert_eq!(format_number(1234567890), "1.234.567.890");
        assert_eq!(format_number(-1000), "-1.000");
    }
}
