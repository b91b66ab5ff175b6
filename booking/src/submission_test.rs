use super::*;
use crate::format::Locale;
use std::cell::Cell;
use std::sync::Mutex;
use time::macros::datetime;

const DATES: &str = r#"{"startDate":"2024-06-01T00:00:00Z","endDate":"2024-06-03T00:00:00Z","cantidadPersonas":4}"#;
const PRICING: &str = r#"{"total":50000,"reserva":10000}"#;

// =============================================================================
// MockStore
// =============================================================================

struct MockStore {
    calls: Mutex<Vec<ReservationRecord>>,
    fail_with: Option<String>,
}

impl MockStore {
    fn ok() -> Self {
        Self { calls: Mutex::new(Vec::new()), fail_with: None }
    }

    fn failing(message: &str) -> Self {
        Self { calls: Mutex::new(Vec::new()), fail_with: Some(message.to_owned()) }
    }

    fn calls(&self) -> Vec<ReservationRecord> {
        self.calls.lock().expect("mock mutex should lock").clone()
    }
}

#[async_trait::async_trait]
impl ReservationStore for MockStore {
    type Error = String;

    async fn create_reservation(&self, record: &ReservationRecord) -> Result<String, String> {
        let mut calls = self.calls.lock().expect("mock mutex should lock");
        calls.push(record.clone());
        match &self.fail_with {
            Some(message) => Err(message.clone()),
            None => Ok(format!("doc-{}", calls.len())),
        }
    }
}

fn session() -> SessionContext {
    SessionContext::from_storage(Some(DATES), Some(PRICING), Locale::EnUs).0
}

fn filled_form(session: SessionContext) -> ReservationForm {
    let mut form = ReservationForm::new(session);
    form.on_field_change("nombre", "Ana").expect("name");
    form.on_field_change("telefono", "1122334455").expect("phone");
    form.on_field_change("email", "ana@example.com").expect("email");
    form
}

fn now() -> OffsetDateTime {
    datetime!(2024-05-20 14:30:00 UTC)
}

// =============================================================================
// submit
// =============================================================================

#[tokio::test]
async fn confirmed_valid_submit_writes_exactly_one_record() {
    let store = MockStore::ok();
    let mut form = filled_form(session());

    let outcome = form.submit(&store, || true, now()).await;

    assert_eq!(outcome, SubmissionOutcome::Saved { id: "doc-1".to_owned() });
    assert_eq!(form.phase(), SubmissionPhase::Done);

    let calls = store.calls();
    assert_eq!(calls.len(), 1);
    let record = &calls[0];
    assert_eq!(record.form.name, "Ana");
    assert_eq!(record.form.phone, "1122334455");
    assert_eq!(record.form.email, "ana@example.com");
    assert_eq!(record.form.party_size, 4);
    assert_eq!((record.form.chocolates, record.form.large_towels, record.form.towels), (0, 0, 0));
    assert_eq!(record.start_date.as_deref(), Some("6/1/2024"));
    assert_eq!(record.end_date.as_deref(), Some("6/3/2024"));
    assert_eq!(record.created_at, now());
}

#[tokio::test]
async fn declined_confirmation_writes_nothing() {
    let store = MockStore::ok();
    let mut form = filled_form(session());

    let outcome = form.submit(&store, || false, now()).await;

    assert_eq!(outcome, SubmissionOutcome::Rejected(SubmitRejection::Declined));
    assert_eq!(outcome.user_message(), None);
    assert_eq!(form.phase(), SubmissionPhase::Idle);
    assert!(store.calls().is_empty());
}

#[tokio::test]
async fn invalid_form_is_rejected_without_asking_for_confirmation() {
    let store = MockStore::ok();
    let mut form = ReservationForm::new(session());
    form.on_field_change("nombre", "Ana").expect("name");
    form.on_field_change("telefono", "123").expect("phone");
    let asked = Cell::new(false);

    let outcome = form
        .submit(
            &store,
            || {
                asked.set(true);
                true
            },
            now(),
        )
        .await;

    assert_eq!(outcome, SubmissionOutcome::Rejected(SubmitRejection::Invalid(ValidationError::PhoneInvalid)));
    assert_eq!(outcome.user_message().as_deref(), Some("phone must contain at least 10 digits."));
    assert!(!asked.get());
    assert!(store.calls().is_empty());
}

#[tokio::test]
async fn failed_write_reports_generic_message_and_does_not_retry() {
    let store = MockStore::failing("backend unavailable");
    let mut form = filled_form(session());

    let outcome = form.submit(&store, || true, now()).await;

    assert_eq!(outcome, SubmissionOutcome::Failed { error: "backend unavailable".to_owned() });
    assert_eq!(outcome.user_message().as_deref(), Some("could not complete the reservation. please try again."));
    assert_eq!(store.calls().len(), 1);
    assert_eq!(form.phase(), SubmissionPhase::Idle);
}

#[tokio::test]
async fn user_can_resubmit_manually_after_a_failure() {
    let failing = MockStore::failing("timeout");
    let ok = MockStore::ok();
    let mut form = filled_form(session());

    assert!(!form.submit(&failing, || true, now()).await.is_saved());
    assert!(form.submit(&ok, || true, now()).await.is_saved());
    assert_eq!(failing.calls().len(), 1);
    assert_eq!(ok.calls().len(), 1);
}

#[tokio::test]
async fn submit_after_success_is_rejected() {
    let store = MockStore::ok();
    let mut form = filled_form(session());

    assert!(form.submit(&store, || true, now()).await.is_saved());
    let outcome = form.submit(&store, || true, now()).await;

    assert_eq!(outcome, SubmissionOutcome::Rejected(SubmitRejection::AlreadySubmitted));
    assert_eq!(store.calls().len(), 1);
}

#[tokio::test]
async fn missing_session_dates_leave_record_dates_absent() {
    let store = MockStore::ok();
    let mut form = filled_form(SessionContext::default());

    assert!(form.submit(&store, || true, now()).await.is_saved());

    let calls = store.calls();
    assert!(calls[0].start_date.is_none());
    assert!(calls[0].end_date.is_none());
    assert_eq!(calls[0].form.party_size, 1);
}

// =============================================================================
// begin_submit / finish_submit
// =============================================================================

#[test]
fn begin_submit_blocks_reentrant_submits_while_in_flight() {
    let mut form = filled_form(session());

    let record = form.begin_submit(|| true, now()).expect("first submit");
    assert_eq!(record.form.name, "Ana");
    assert_eq!(form.phase(), SubmissionPhase::Submitting);

    let err = form.begin_submit(|| true, now()).expect_err("second submit");
    assert_eq!(err, SubmitRejection::InFlight);
    assert_eq!(form.phase(), SubmissionPhase::Submitting);
}

#[test]
fn finish_submit_moves_to_done_or_back_to_idle() {
    let mut form = filled_form(session());
    form.begin_submit(|| true, now()).expect("submit");
    let outcome = form.finish_submit::<String>(Err("boom".to_owned()));
    assert!(matches!(outcome, SubmissionOutcome::Failed { .. }));
    assert_eq!(form.phase(), SubmissionPhase::Idle);

    form.begin_submit(|| true, now()).expect("resubmit");
    let outcome = form.finish_submit::<String>(Ok("id-9".to_owned()));
    assert_eq!(outcome, SubmissionOutcome::Saved { id: "id-9".to_owned() });
    assert_eq!(outcome.user_message().as_deref(), Some("reservation completed successfully."));
    assert_eq!(form.phase(), SubmissionPhase::Done);
}

#[test]
fn field_changes_leave_session_untouched() {
    let mut form = ReservationForm::new(session());
    let before = form.session().clone();
    form.on_field_change("toallas", "3").expect("towels");
    assert_eq!(form.session(), &before);
    assert_eq!(form.form().towels, 3);
}
