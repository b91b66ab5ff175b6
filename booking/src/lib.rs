//! Shared reservation model for the confirmation step of the booking flow.
//!
//! This crate owns the form record, the session context handed over by the
//! date-picking step, the validation rules and the persisted record shape.
//! Both `server` and `client` (and `cli`) depend on it, so the JSON written
//! to the `reservas` collection is defined exactly once.
//!
//! Nothing here touches the browser, the network or a clock: storage blobs
//! come in as strings, timestamps come in as arguments, and the remote
//! write goes through the [`ReservationStore`] trait.

pub mod form;
pub mod format;
pub mod record;
pub mod session;
pub mod submission;
pub mod validate;

pub use form::{ADD_ON_RANGE, Field, FieldError, FormData, PARTY_SIZE_RANGE};
pub use format::Locale;
pub use record::{COLLECTION, CreatedDocument, ReservationRecord, StoredReservation};
pub use session::{
    DATES_STORAGE_KEY, PRICING_STORAGE_KEY, ReservationDates, ReservationPricing, SessionContext, SessionError,
    SessionIssue,
};
pub use submission::{
    CONFIRM_PROMPT, ReservationForm, ReservationStore, SubmissionOutcome, SubmissionPhase, SubmitRejection,
};
pub use validate::{ValidationError, is_valid_email, is_valid_phone, validate};
