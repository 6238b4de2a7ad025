use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Display locales supported by the reporting screens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "pt-BR")]
    PtBr,
    #[serde(rename = "en-US")]
    EnUs,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("unknown locale tag: {0}")]
    UnknownLocale(String),
    #[error("unknown currency code: {0}")]
    UnknownCurrency(String),
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::PtBr => "pt-BR",
            Locale::EnUs => "en-US",
        }
    }

    fn decimal_separator(&self) -> char {
        match self {
            Locale::PtBr => ',',
            Locale::EnUs => '.',
        }
    }

    fn grouping_separator(&self) -> char {
        match self {
            Locale::PtBr => '.',
            Locale::EnUs => ',',
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = FormatError;

    /// Accepts BCP 47-ish tags case-insensitively, with `-` or `_`.
    /// An unknown tag is a caller error, not a data-quality issue.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().replace('_', "-").to_ascii_lowercase().as_str() {
            "pt-br" | "pt" => Ok(Locale::PtBr),
            "en-us" | "en" => Ok(Locale::EnUs),
            _ => Err(FormatError::UnknownLocale(s.to_string())),
        }
    }
}

/// Renders a canonical amount with two fraction digits and locale grouping.
///
/// `pt-BR` output feeds straight back through [`crate::parse_amount_str`]:
/// any amount representable with two fraction digits round-trips. The same
/// holds for `en-US` only below the first grouping threshold, since the
/// parser reads mixed separators as Brazilian format. A non-finite amount
/// renders as zero.
pub fn format_decimal(amount: f64, locale: Locale) -> String {
    let amount = if amount.is_finite() { amount } else { 0.0 };
    let fixed = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut out = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
    if amount < 0.0 {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part, locale.grouping_separator()));
    out.push(locale.decimal_separator());
    out.push_str(frac_part);
    out
}

/// Renders a currency display string, e.g. `R$ 1.234,50` or `$1,234.50`.
///
/// Unknown currency codes surface as [`FormatError::UnknownCurrency`]
/// instead of being coerced; the sign leads the whole string.
pub fn format_currency(
    amount: f64,
    locale: Locale,
    currency_code: &str,
) -> Result<String, FormatError> {
    let symbol = currency_symbol(currency_code)?;
    let amount = if amount.is_finite() { amount } else { 0.0 };
    let body = format_decimal(amount.abs(), locale);

    let display = match locale {
        Locale::PtBr => format!("{symbol} {body}"),
        Locale::EnUs => format!("{symbol}{body}"),
    };

    Ok(if amount < 0.0 {
        format!("-{display}")
    } else {
        display
    })
}

fn currency_symbol(code: &str) -> Result<&'static str, FormatError> {
    match code.trim().to_ascii_uppercase().as_str() {
        "BRL" => Ok("R$"),
        "USD" => Ok("$"),
        "EUR" => Ok("€"),
        _ => Err(FormatError::UnknownCurrency(code.to_string())),
    }
}

/// Inserts the grouping separator every three digits, right to left.
fn group_thousands(digits: &str, separator: char) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.insert(0, separator);
        }
        grouped.insert(0, c);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::amount::parse_amount_str;

    #[test]
    fn test_format_decimal_pt_br() {
        assert_eq!(format_decimal(1234.56, Locale::PtBr), "1.234,56");
        assert_eq!(format_decimal(1234.5, Locale::PtBr), "1.234,50");
        assert_eq!(format_decimal(0.0, Locale::PtBr), "0,00");
        assert_eq!(format_decimal(-600822115.84, Locale::PtBr), "-600.822.115,84");
    }

    #[test]
    fn test_format_decimal_en_us() {
        assert_eq!(format_decimal(1234.56, Locale::EnUs), "1,234.56");
        assert_eq!(format_decimal(-50.25, Locale::EnUs), "-50.25");
        assert_eq!(format_decimal(999.0, Locale::EnUs), "999.00");
    }

    #[test]
    fn test_format_currency_symbols() {
        assert_eq!(
            format_currency(1234.5, Locale::PtBr, "BRL").unwrap(),
            "R$ 1.234,50"
        );
        assert_eq!(
            format_currency(1234.5, Locale::EnUs, "USD").unwrap(),
            "$1,234.50"
        );
        assert_eq!(
            format_currency(-10.0, Locale::PtBr, "BRL").unwrap(),
            "-R$ 10,00"
        );
    }

    #[test]
    fn test_format_currency_rejects_unknown_code() {
        assert_eq!(
            format_currency(1.0, Locale::PtBr, "XYZ"),
            Err(FormatError::UnknownCurrency("XYZ".to_string()))
        );
    }

    #[test]
    fn test_non_finite_renders_as_zero() {
        assert_eq!(format_decimal(f64::NAN, Locale::PtBr), "0,00");
        assert_eq!(format_decimal(f64::INFINITY, Locale::EnUs), "0.00");
        assert_eq!(
            format_currency(f64::NEG_INFINITY, Locale::PtBr, "BRL").unwrap(),
            "R$ 0,00"
        );
    }

    #[test]
    fn test_locale_from_str() {
        assert_eq!("pt-BR".parse::<Locale>().unwrap(), Locale::PtBr);
        assert_eq!("pt_br".parse::<Locale>().unwrap(), Locale::PtBr);
        assert_eq!("EN-US".parse::<Locale>().unwrap(), Locale::EnUs);
        assert!(matches!(
            "fr-FR".parse::<Locale>(),
            Err(FormatError::UnknownLocale(_))
        ));
    }

    #[test]
    fn test_round_trip_within_epsilon_pt_br() {
        let values = [0.0, 0.5, 1.0, 123.45, 1234.56, 600822115.84, -50.25];
        for value in values {
            let rendered = format_decimal(value, Locale::PtBr);
            let reparsed = parse_amount_str(&rendered);
            assert!(
                (reparsed - value).abs() < 1e-9,
                "{value} -> {rendered} -> {reparsed}"
            );
        }
    }

    #[test]
    fn test_round_trip_within_epsilon_en_us() {
        // The amount parser reads mixed separators as Brazilian format, so
        // the en-US round trip holds below the first grouping threshold.
        let values = [0.0, 0.5, 1.0, 123.45, -50.25, 999.99];
        for value in values {
            let rendered = format_decimal(value, Locale::EnUs);
            let reparsed = parse_amount_str(&rendered);
            assert!(
                (reparsed - value).abs() < 1e-9,
                "{value} -> {rendered} -> {reparsed}"
            );
        }
    }
}
