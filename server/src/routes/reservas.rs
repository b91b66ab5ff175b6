//! Reservation routes: the `reservas` collection over HTTP.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use booking::{CreatedDocument, ReservationRecord, StoredReservation};
use tracing::{error, warn};
use uuid::Uuid;

use crate::services::reservations::{self, ReservationError};
use crate::state::AppState;

/// `POST /api/reservas`: append one reservation document.
pub async fn create_reservation(
    State(state): State<AppState>,
    Json(record): Json<ReservationRecord>,
) -> Result<(StatusCode, Json<CreatedDocument>), StatusCode> {
    let id = reservations::create_reservation(state.store.as_ref(), &state.collection, &record)
        .await
        .map_err(|e| {
            error!(error = %e, collection = %state.collection, "reservation write failed");
            reservation_error_to_status(&e)
        })?;

    Ok((StatusCode::CREATED, Json(CreatedDocument { id: id.to_string() })))
}

/// `GET /api/reservas/{id}`: fetch one reservation document.
pub async fn get_reservation(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<StoredReservation>, StatusCode> {
    let stored = reservations::get_reservation(state.store.as_ref(), &state.collection, id)
        .await
        .map_err(|e| {
            match &e {
                ReservationError::NotFound(_) => {}
                ReservationError::Corrupt { .. } => warn!(error = %e, "unreadable reservation document"),
                ReservationError::Encode(_) | ReservationError::Store(_) => {
                    error!(error = %e, %id, "reservation read failed");
                }
            }
            reservation_error_to_status(&e)
        })?;

    Ok(Json(stored))
}

pub(crate) fn reservation_error_to_status(err: &ReservationError) -> StatusCode {
    match err {
        ReservationError::NotFound(_) => StatusCode::NOT_FOUND,
        ReservationError::Corrupt { .. } | ReservationError::Encode(_) | ReservationError::Store(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

#[cfg(test)]
#[path = "reservas_test.rs"]
mod tests;
