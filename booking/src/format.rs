//! Display formatting for dates and amounts.
//!
//! The booking pages show dates and prices the way the browser's
//! `toLocaleDateString` / `toLocaleString` would for the configured locale.
//! Only the two locales the site is published in are supported.

use serde::{Deserialize, Serialize};
use time::Date;

/// Maximum fraction digits printed for amounts.
const MAX_FRACTION_DIGITS: usize = 3;

/// Display locale for dates and amounts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Locale {
    /// `6/1/2024`, `50,000.5`
    #[default]
    #[serde(rename = "en-US")]
    EnUs,
    /// `1/6/2024`, `50.000,5`
    #[serde(rename = "es-AR")]
    EsAr,
}

impl Locale {
    /// Parse a BCP 47-ish tag. Accepts the bare language as shorthand.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "en-us" | "en" => Some(Self::EnUs),
            "es-ar" | "es" => Some(Self::EsAr),
            _ => None,
        }
    }

    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::EnUs => "en-US",
            Self::EsAr => "es-AR",
        }
    }

    fn group_separator(self) -> char {
        match self {
            Self::EnUs => ',',
            Self::EsAr => '.',
        }
    }

    fn decimal_separator(self) -> char {
        match self {
            Self::EnUs => '.',
            Self::EsAr => ',',
        }
    }

    /// Format a calendar date without zero padding.
    #[must_use]
    pub fn format_date(self, date: Date) -> String {
        let month = u8::from(date.month());
        let day = date.day();
        let year = date.year();
        match self {
            Self::EnUs => format!("{month}/{day}/{year}"),
            Self::EsAr => format!("{day}/{month}/{year}"),
        }
    }

    /// Format an amount with digit grouping and at most three fraction digits.
    #[must_use]
    pub fn format_amount(self, amount: f64) -> String {
        if amount.is_nan() {
            return "NaN".to_owned();
        }
        if amount.is_infinite() {
            return if amount.is_sign_positive() { "∞".to_owned() } else { "-∞".to_owned() };
        }

        let rendered = format!("{:.*}", MAX_FRACTION_DIGITS, amount.abs());
        let (int_part, frac_part) = rendered.split_once('.').unwrap_or((rendered.as_str(), ""));
        let frac = frac_part.trim_end_matches('0');

        let mut out = String::with_capacity(rendered.len() + int_part.len() / 3 + 1);
        if amount < 0.0 && (int_part != "0" || !frac.is_empty()) {
            out.push('-');
        }
        out.push_str(&group_digits(int_part, self.group_separator()));
        if !frac.is_empty() {
            out.push(self.decimal_separator());
            out.push_str(frac);
        }
        out
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
#[path = "format_test.rs"]
mod tests;
