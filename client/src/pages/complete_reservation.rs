//! Reservation confirmation page.
//!
//! ARCHITECTURE
//! ============
//! The page owns one `RwSignal<ReservationForm>`. On mount it reads the
//! session blobs left by the date-picking step, then every input writes
//! through `ReservationForm::on_field_change`. Submitting runs the
//! controller's validate → confirm → build step synchronously, performs the
//! single POST in a local task, and hands the result back to the controller.
//! All user feedback goes through blocking browser dialogs.

#[cfg(test)]
#[path = "complete_reservation_test.rs"]
mod complete_reservation_test;

use booking::{
    CONFIRM_PROMPT, DATES_STORAGE_KEY, Field, Locale, PRICING_STORAGE_KEY, ReservationForm, SessionContext,
    SubmissionOutcome, SubmissionPhase,
};
use leptos::prelude::*;
use time::OffsetDateTime;

use crate::util::{dialog, storage};

#[component]
pub fn CompleteReservationPage() -> impl IntoView {
    let form = RwSignal::new(ReservationForm::new(SessionContext::default()));

    // Storage is browser-only; read it once after hydration.
    Effect::new(move |_| {
        form.set(ReservationForm::new(load_session(Locale::default())));
    });

    let submitting = move || form.with(|f| f.phase() == SubmissionPhase::Submitting);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(begun) =
            form.try_update(|f| f.begin_submit(|| dialog::confirm(CONFIRM_PROMPT), OffsetDateTime::now_utc()))
        else {
            return;
        };
        let record = match begun {
            Ok(record) => record,
            Err(rejection) => {
                report_outcome(&SubmissionOutcome::Rejected(rejection));
                return;
            }
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::create_reservation(&record).await;
            if let Some(outcome) = form.try_update(|f| f.finish_submit(result)) {
                report_outcome(&outcome);
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = record;
        }
    };

    view! {
        <div class="complete-reserva">
            <h2>"Reservation details"</h2>

            {move || {
                form.with(|f| dates_line(f.session()))
                    .map(|line| view! { <p class="complete-reserva__dates">{line}</p> })
            }}

            {move || {
                form.with(|f| total_line(f.session()).zip(deposit_line(f.session())))
                    .map(|(total, deposit)| {
                        view! {
                            <div class="complete-reserva__pricing">
                                <p>{total} <br/> {deposit}</p>
                            </div>
                        }
                    })
            }}

            <form on:submit=on_submit>
                <TextInput field=Field::Name input_type="text" form=form/>
                <TextInput field=Field::Phone input_type="tel" form=form/>
                <TextInput field=Field::Email input_type="email" form=form/>
                <QuantitySelect field=Field::PartySize form=form disabled=true/>
                <QuantitySelect field=Field::Chocolates form=form/>
                <QuantitySelect field=Field::LargeTowels form=form/>
                <QuantitySelect field=Field::Towels form=form/>
                <button type="submit" class="complete-reserva__submit" disabled=submitting>
                    "Next"
                </button>
            </form>
        </div>
    }
}

#[component]
fn TextInput(field: Field, input_type: &'static str, form: RwSignal<ReservationForm>) -> impl IntoView {
    let id = field.input_name();
    view! {
        <div class="form-group">
            <label for=id>{field_label(field)}</label>
            <input
                type=input_type
                id=id
                name=id
                required=true
                prop:value=move || form.with(|f| f.form().value(field))
                on:input=move |ev| apply_field_change(form, field, &event_target_value(&ev))
            />
        </div>
    }
}

#[component]
fn QuantitySelect(
    field: Field,
    form: RwSignal<ReservationForm>,
    #[prop(optional)] disabled: bool,
) -> impl IntoView {
    let id = field.input_name();
    let options = select_options(field)
        .into_iter()
        .map(|n| {
            let value = n.to_string();
            let is_selected = {
                let value = value.clone();
                move || form.with(|f| f.form().value(field)) == value
            };
            view! { <option value=value selected=is_selected>{n}</option> }
        })
        .collect_view();

    view! {
        <div class="form-group">
            <label for=id>{field_label(field)}</label>
            <select
                id=id
                name=id
                disabled=disabled
                required=!disabled
                on:change=move |ev| apply_field_change(form, field, &event_target_value(&ev))
            >
                {options}
            </select>
        </div>
    }
}

fn apply_field_change(form: RwSignal<ReservationForm>, field: Field, value: &str) {
    form.update(|f| {
        if let Err(e) = f.on_field_change(field.input_name(), value) {
            #[cfg(feature = "hydrate")]
            log::warn!("ignored input: {e}");
            #[cfg(not(feature = "hydrate"))]
            let _ = e;
        }
    });
}

/// Read both session blobs and report the ones that could not be used.
pub(crate) fn load_session(locale: Locale) -> SessionContext {
    let raw_dates = storage::read_raw(DATES_STORAGE_KEY);
    let raw_pricing = storage::read_raw(PRICING_STORAGE_KEY);
    let (session, issues) = SessionContext::from_storage(raw_dates.as_deref(), raw_pricing.as_deref(), locale);
    for issue in issues {
        #[cfg(feature = "hydrate")]
        log::warn!("ignoring stored {}: {}", issue.key, issue.error);
        #[cfg(not(feature = "hydrate"))]
        let _ = issue;
    }
    session
}

pub(crate) fn report_outcome(outcome: &SubmissionOutcome) {
    #[cfg(feature = "hydrate")]
    match outcome {
        SubmissionOutcome::Saved { id } => log::info!("reservation saved with id {id}"),
        SubmissionOutcome::Failed { error } => log::error!("reservation write failed: {error}"),
        SubmissionOutcome::Rejected(_) => {}
    }
    if let Some(message) = outcome.user_message() {
        dialog::alert(&message);
    }
}

pub(crate) fn dates_line(session: &SessionContext) -> Option<String> {
    session
        .dates
        .as_ref()
        .map(|dates| format!("Reservation dates: {}", dates.range_label()))
}

pub(crate) fn total_line(session: &SessionContext) -> Option<String> {
    session.formatted_total().map(|total| format!("Total price: ${total}"))
}

pub(crate) fn deposit_line(session: &SessionContext) -> Option<String> {
    session.formatted_deposit().map(|deposit| format!("Deposit: ${deposit}"))
}

pub(crate) fn field_label(field: Field) -> String {
    format!("{}:", field.label())
}

pub(crate) fn select_options(field: Field) -> Vec<u8> {
    field.range().map(Iterator::collect).unwrap_or_default()
}
