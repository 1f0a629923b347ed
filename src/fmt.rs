use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::{BursarError, Result};

/// Format an amount with two decimals and thousands separators: 1,234.56
pub fn money(val: Decimal) -> String {
    let negative = val.is_sign_negative() && !val.is_zero();
    let cents = format!("{:.2}", val.abs());
    let parts: Vec<&str> = cents.split('.').collect();
    let int_part = parts[0];
    let dec_part = parts[1];

    let mut with_commas = String::new();
    for (i, c) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            with_commas.push(',');
        }
        with_commas.push(c);
    }
    let with_commas: String = with_commas.chars().rev().collect();

    if negative {
        format!("-{with_commas}.{dec_part}")
    } else {
        format!("{with_commas}.{dec_part}")
    }
}

/// Parse user input as a non-negative monetary amount.
///
/// Thousands separators are tolerated; anything else that fails to parse is
/// rejected rather than coerced to zero, so a typo in a debit/credit field
/// surfaces instead of silently zeroing the row.
pub fn parse_amount(raw: &str) -> Result<Decimal> {
    let cleaned = raw.trim().replace(',', "");
    let amount: Decimal = cleaned
        .parse()
        .map_err(|_| BursarError::UnparseableAmount(raw.trim().to_string()))?;
    if amount.is_sign_negative() {
        return Err(BursarError::NegativeAmount(raw.trim().to_string()));
    }
    Ok(amount)
}

/// Parse a YYYY-MM-DD date string.
pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| BursarError::InvalidDate(raw.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_money_formatting() {
        assert_eq!(money(dec("1234.56")), "1,234.56");
        assert_eq!(money(dec("-500")), "-500.00");
        assert_eq!(money(Decimal::ZERO), "0.00");
        assert_eq!(money(dec("1000000.99")), "1,000,000.99");
        assert_eq!(money(dec("42.1")), "42.10");
    }

    #[test]
    fn test_parse_amount_plain_and_with_commas() {
        assert_eq!(parse_amount("100").unwrap(), dec("100"));
        assert_eq!(parse_amount(" 1,250.50 ").unwrap(), dec("1250.50"));
        assert_eq!(parse_amount("0").unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_parse_amount_rejects_garbage() {
        assert!(matches!(
            parse_amount("ten"),
            Err(BursarError::UnparseableAmount(_))
        ));
        assert!(matches!(
            parse_amount(""),
            Err(BursarError::UnparseableAmount(_))
        ));
    }

    #[test]
    fn test_parse_amount_rejects_negative() {
        assert!(matches!(
            parse_amount("-5"),
            Err(BursarError::NegativeAmount(_))
        ));
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2023-11-12").unwrap(),
            NaiveDate::from_ymd_opt(2023, 11, 12).unwrap()
        );
        assert!(matches!(
            parse_date("12/11/2023"),
            Err(BursarError::InvalidDate(_))
        ));
    }
}
