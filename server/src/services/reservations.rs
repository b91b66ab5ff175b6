//! Reservation service: writes and reads confirmation records.
//!
//! DESIGN
//! ======
//! Handlers hand over an already-deserialized [`ReservationRecord`]; this
//! layer only serializes it into the configured collection. No business
//! validation happens here: the confirmation page is the only gate.

use booking::{ReservationRecord, StoredReservation};
use tracing::info;
use uuid::Uuid;

use super::documents::{DocumentStore, StoreError};

#[derive(Debug, thiserror::Error)]
pub enum ReservationError {
    #[error("reservation not found: {0}")]
    NotFound(Uuid),
    #[error("stored document {id} is not a reservation: {source}")]
    Corrupt {
        id: Uuid,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode reservation: {0}")]
    Encode(#[source] serde_json::Error),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Append `record` to `collection` and return its new identifier.
///
/// # Errors
///
/// Returns a store error if the write fails.
pub async fn create_reservation(
    store: &dyn DocumentStore,
    collection: &str,
    record: &ReservationRecord,
) -> Result<Uuid, ReservationError> {
    let data = serde_json::to_value(record).map_err(ReservationError::Encode)?;
    let id = store.add_doc(collection, data).await?;
    info!(%id, collection, created_at = %record.created_at, "reservation stored");
    Ok(id)
}

/// Load one reservation by identifier.
///
/// # Errors
///
/// Returns [`ReservationError::NotFound`] for unknown ids and
/// [`ReservationError::Corrupt`] if the stored document does not have the
/// reservation shape.
pub async fn get_reservation(
    store: &dyn DocumentStore,
    collection: &str,
    id: Uuid,
) -> Result<StoredReservation, ReservationError> {
    let data = store
        .get_doc(collection, id)
        .await?
        .ok_or(ReservationError::NotFound(id))?;
    let record =
        serde_json::from_value::<ReservationRecord>(data).map_err(|source| ReservationError::Corrupt { id, source })?;
    Ok(StoredReservation { id: id.to_string(), record })
}

#[cfg(test)]
#[path = "reservations_test.rs"]
mod tests;
