//! Session context handed over by the date-picking step.
//!
//! SYSTEM CONTEXT
//! ==============
//! The previous page of the booking flow leaves two JSON blobs in the
//! browser's local storage: the chosen date range with the party size, and
//! the computed total with the deposit. The confirmation step reads them
//! once, never writes them back, and only uses them for display and for the
//! `startDate`/`endDate` of the persisted record.
//!
//! ERROR HANDLING
//! ==============
//! A missing blob is normal (the user landed here directly). A malformed
//! blob is treated the same way: the section it feeds is omitted and the
//! problem is reported back as a [`SessionIssue`] for the caller to log.

use serde::Deserialize;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime};

use crate::form::PARTY_SIZE_RANGE;
use crate::format::Locale;

/// Storage key of the date range blob.
pub const DATES_STORAGE_KEY: &str = "reservaDate";

/// Storage key of the pricing blob.
pub const PRICING_STORAGE_KEY: &str = "reservaInfo";

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("invalid session JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid date `{0}`")]
    Date(String),
}

/// A storage blob that was present but could not be used.
#[derive(Debug)]
pub struct SessionIssue {
    pub key: &'static str,
    pub error: SessionError,
}

#[derive(Deserialize)]
struct StoredDates {
    #[serde(rename = "startDate")]
    start_date: String,
    #[serde(rename = "endDate")]
    end_date: String,
    #[serde(rename = "cantidadPersonas", default)]
    party_size: Option<serde_json::Value>,
}

#[derive(Deserialize)]
struct StoredPricing {
    total: f64,
    reserva: f64,
}

/// Date range and party size, with dates already formatted for display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReservationDates {
    pub start_date: String,
    pub end_date: String,
    pub party_size: u8,
}

impl ReservationDates {
    /// Parse the `reservaDate` blob.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Json`] for malformed JSON and
    /// [`SessionError::Date`] when either date is not an ISO-8601 date or
    /// timestamp.
    pub fn from_storage_json(raw: &str, locale: Locale) -> Result<Self, SessionError> {
        let stored: StoredDates = serde_json::from_str(raw)?;
        Ok(Self {
            start_date: locale.format_date(parse_stored_date(&stored.start_date)?),
            end_date: locale.format_date(parse_stored_date(&stored.end_date)?),
            party_size: party_size_from_stored(stored.party_size.as_ref().and_then(stored_number)),
        })
    }

    /// `"6/1/2024 - 6/3/2024"`
    #[must_use]
    pub fn range_label(&self) -> String {
        format!("{} - {}", self.start_date, self.end_date)
    }
}

/// Total price and deposit as computed by the previous step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReservationPricing {
    pub total: f64,
    pub deposit: f64,
}

impl ReservationPricing {
    /// Parse the `reservaInfo` blob.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Json`] if the blob is not `{total, reserva}`.
    pub fn from_storage_json(raw: &str) -> Result<Self, SessionError> {
        let stored: StoredPricing = serde_json::from_str(raw)?;
        Ok(Self { total: stored.total, deposit: stored.reserva })
    }
}

/// Read-only context the confirmation form is built from.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionContext {
    pub locale: Locale,
    pub dates: Option<ReservationDates>,
    pub pricing: Option<ReservationPricing>,
}

impl SessionContext {
    /// Build the context from the raw storage values (`None` = key absent).
    ///
    /// Blobs that fail to parse are left out of the context and returned as
    /// issues instead.
    #[must_use]
    pub fn from_storage(
        raw_dates: Option<&str>,
        raw_pricing: Option<&str>,
        locale: Locale,
    ) -> (Self, Vec<SessionIssue>) {
        let mut issues = Vec::new();

        let dates = raw_dates.and_then(|raw| match ReservationDates::from_storage_json(raw, locale) {
            Ok(dates) => Some(dates),
            Err(error) => {
                issues.push(SessionIssue { key: DATES_STORAGE_KEY, error });
                None
            }
        });

        let pricing = raw_pricing.and_then(|raw| match ReservationPricing::from_storage_json(raw) {
            Ok(pricing) => Some(pricing),
            Err(error) => {
                issues.push(SessionIssue { key: PRICING_STORAGE_KEY, error });
                None
            }
        });

        (Self { locale, dates, pricing }, issues)
    }

    /// Party size shown by the disabled selector.
    #[must_use]
    pub fn party_size(&self) -> u8 {
        self.dates.as_ref().map_or(*PARTY_SIZE_RANGE.start(), |dates| dates.party_size)
    }

    #[must_use]
    pub fn formatted_total(&self) -> Option<String> {
        self.pricing.map(|pricing| self.locale.format_amount(pricing.total))
    }

    #[must_use]
    pub fn formatted_deposit(&self) -> Option<String> {
        self.pricing.map(|pricing| self.locale.format_amount(pricing.deposit))
    }
}

fn parse_stored_date(raw: &str) -> Result<Date, SessionError> {
    let raw = raw.trim();
    if let Ok(at) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Ok(at.date());
    }
    Date::parse(raw, format_description!("[year]-[month]-[day]")).map_err(|_| SessionError::Date(raw.to_owned()))
}

// Numbers may arrive as JSON numbers or numeric strings; anything else is
// treated as missing so the dates still load.
fn stored_number(value: &serde_json::Value) -> Option<f64> {
    match value {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

// The upstream page writes whatever the selector held; anything outside the
// selector's options falls back to its nearest option.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn party_size_from_stored(raw: Option<f64>) -> u8 {
    let min = *PARTY_SIZE_RANGE.start();
    let max = *PARTY_SIZE_RANGE.end();
    match raw {
        Some(value) if value.is_finite() => value.round().clamp(f64::from(min), f64::from(max)) as u8,
        _ => min,
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
