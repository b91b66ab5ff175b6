//! Persisted reservation document.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::form::FormData;
use crate::session::ReservationDates;

/// Logical collection reservation documents are appended to.
pub const COLLECTION: &str = "reservas";

/// One completed booking request as written to the document store.
///
/// The form fields are flattened into the top level, so the JSON carries
/// `nombre`, `telefono`, ... next to `startDate`, `endDate` and `createdAt`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationRecord {
    #[serde(flatten)]
    pub form: FormData,
    #[serde(rename = "startDate", default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(rename = "endDate", default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(rename = "createdAt", with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl ReservationRecord {
    /// Merge the form with the session dates, stamped at `created_at`.
    ///
    /// Dates are copied verbatim (already display-formatted); without a
    /// session date range both stay absent.
    #[must_use]
    pub fn build(form: &FormData, dates: Option<&ReservationDates>, created_at: OffsetDateTime) -> Self {
        Self {
            form: form.clone(),
            start_date: dates.map(|d| d.start_date.clone()),
            end_date: dates.map(|d| d.end_date.clone()),
            created_at,
        }
    }
}

/// Response body of a successful create.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedDocument {
    pub id: String,
}

/// A reservation read back from the store together with its identifier.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredReservation {
    pub id: String,
    #[serde(flatten)]
    pub record: ReservationRecord,
}

#[cfg(test)]
#[path = "record_test.rs"]
mod tests;
