//! Submission controller for the confirmation form.
//!
//! DESIGN
//! ======
//! [`ReservationForm`] owns the form record, the session context it was
//! built from, and an explicit [`SubmissionPhase`]. A submit runs
//! validate → confirm → build record synchronously in
//! [`ReservationForm::begin_submit`], which moves the phase to `Submitting`;
//! the caller performs the single remote write and reports the result to
//! [`ReservationForm::finish_submit`]. Hosts that can hold the controller
//! across an await use [`ReservationForm::submit`] instead.
//!
//! ```text
//! Idle ─begin─▶ Submitting ─Ok──▶ Done
//!   ▲                │
//!   └──────Err───────┘
//! ```
//!
//! Validation failures and a declined confirmation leave the phase at
//! `Idle`. Submits while `Submitting` or after `Done` are rejected without
//! touching the store. A failed write is never retried automatically.

use std::fmt::Display;

use time::OffsetDateTime;

use crate::form::{FieldError, FormData};
use crate::record::ReservationRecord;
use crate::session::SessionContext;
use crate::validate::{ValidationError, validate};

/// Question asked before the record is written.
pub const CONFIRM_PROMPT: &str = "are you sure you want to continue with the reservation?";

const SAVED_MESSAGE: &str = "reservation completed successfully.";
const FAILED_MESSAGE: &str = "could not complete the reservation. please try again.";
const IN_FLIGHT_MESSAGE: &str = "the reservation is already being sent.";
const ALREADY_SUBMITTED_MESSAGE: &str = "this reservation was already completed.";

/// Remote collection the reservation record is written to.
#[async_trait::async_trait]
pub trait ReservationStore: Send + Sync {
    type Error: Display + Send;

    /// Append one record and return the identifier the store assigned.
    async fn create_reservation(&self, record: &ReservationRecord) -> Result<String, Self::Error>;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Submitting,
    Done,
}

/// Why a submit stopped before reaching the store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmitRejection {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("reservation not confirmed")]
    Declined,
    #[error("a reservation request is already in flight")]
    InFlight,
    #[error("reservation already submitted")]
    AlreadySubmitted,
}

/// Result of one submit, for the UI shell to present.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Saved { id: String },
    Rejected(SubmitRejection),
    Failed { error: String },
}

impl SubmissionOutcome {
    /// Message to show the user, `None` when there is nothing to say.
    #[must_use]
    pub fn user_message(&self) -> Option<String> {
        match self {
            Self::Saved { .. } => Some(SAVED_MESSAGE.to_owned()),
            Self::Rejected(SubmitRejection::Invalid(err)) => Some(err.to_string()),
            Self::Rejected(SubmitRejection::Declined) => None,
            Self::Rejected(SubmitRejection::InFlight) => Some(IN_FLIGHT_MESSAGE.to_owned()),
            Self::Rejected(SubmitRejection::AlreadySubmitted) => Some(ALREADY_SUBMITTED_MESSAGE.to_owned()),
            Self::Failed { .. } => Some(FAILED_MESSAGE.to_owned()),
        }
    }

    #[must_use]
    pub fn is_saved(&self) -> bool {
        matches!(self, Self::Saved { .. })
    }
}

/// Form state plus the session context and submission phase.
#[derive(Clone, Debug, PartialEq)]
pub struct ReservationForm {
    form: FormData,
    session: SessionContext,
    phase: SubmissionPhase,
}

impl ReservationForm {
    #[must_use]
    pub fn new(session: SessionContext) -> Self {
        Self { form: FormData::seeded(&session), session, phase: SubmissionPhase::Idle }
    }

    #[must_use]
    pub fn form(&self) -> &FormData {
        &self.form
    }

    #[must_use]
    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    #[must_use]
    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    /// See [`FormData::on_field_change`].
    ///
    /// # Errors
    ///
    /// Propagates the field error; the form is unchanged.
    pub fn on_field_change(&mut self, name: &str, value: &str) -> Result<(), FieldError> {
        self.form.on_field_change(name, value)
    }

    /// # Errors
    ///
    /// Returns the first failing contact-field rule.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate(&self.form)
    }

    /// Validate, ask `confirm`, and build the record to write.
    ///
    /// On success the phase is `Submitting` until [`Self::finish_submit`].
    /// `confirm` is only called when the form is valid.
    ///
    /// # Errors
    ///
    /// Returns a [`SubmitRejection`]; the phase is left unchanged.
    pub fn begin_submit(
        &mut self,
        confirm: impl FnOnce() -> bool,
        now: OffsetDateTime,
    ) -> Result<ReservationRecord, SubmitRejection> {
        match self.phase {
            SubmissionPhase::Idle => {}
            SubmissionPhase::Submitting => return Err(SubmitRejection::InFlight),
            SubmissionPhase::Done => return Err(SubmitRejection::AlreadySubmitted),
        }

        self.validate()?;
        if !confirm() {
            return Err(SubmitRejection::Declined);
        }

        self.phase = SubmissionPhase::Submitting;
        Ok(ReservationRecord::build(&self.form, self.session.dates.as_ref(), now))
    }

    /// Record the result of the remote write started by [`Self::begin_submit`].
    pub fn finish_submit<E: Display>(&mut self, result: Result<String, E>) -> SubmissionOutcome {
        match result {
            Ok(id) => {
                self.phase = SubmissionPhase::Done;
                SubmissionOutcome::Saved { id }
            }
            Err(e) => {
                self.phase = SubmissionPhase::Idle;
                SubmissionOutcome::Failed { error: e.to_string() }
            }
        }
    }

    /// Full submit against `store`: at most one `create_reservation` call.
    pub async fn submit<S: ReservationStore>(
        &mut self,
        store: &S,
        confirm: impl FnOnce() -> bool,
        now: OffsetDateTime,
    ) -> SubmissionOutcome {
        let record = match self.begin_submit(confirm, now) {
            Ok(record) => record,
            Err(rejection) => return SubmissionOutcome::Rejected(rejection),
        };
        let result = store.create_reservation(&record).await;
        self.finish_submit(result)
    }
}

#[cfg(test)]
#[path = "submission_test.rs"]
mod tests;
