mod error;
mod http;
mod input;

use std::io;

use booking::{
    CONFIRM_PROMPT, Field, Locale, ReservationForm, SessionContext, SubmissionOutcome, SubmitRejection,
};
use clap::{Args, Parser, Subcommand};
use time::OffsetDateTime;

use crate::error::CliError;
use crate::http::HttpStore;

#[derive(Parser, Debug)]
#[command(name = "reservas-cli", about = "Complete and inspect reservations from the terminal")]
struct Cli {
    #[arg(long, env = "RESERVAS_BASE_URL", default_value = "http://127.0.0.1:3000")]
    base_url: String,

    #[arg(long, default_value = "en-US", value_parser = parse_locale)]
    locale: Locale,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Ping,
    Submit(SubmitArgs),
    Show { id: String },
}

#[derive(Args, Debug)]
struct SubmitArgs {
    #[arg(long, help = "reservaDate blob: inline JSON or a file path")]
    dates: Option<String>,

    #[arg(long, help = "reservaInfo blob: inline JSON or a file path")]
    pricing: Option<String>,

    #[arg(long)]
    name: String,

    #[arg(long)]
    phone: String,

    #[arg(long)]
    email: String,

    #[arg(long, default_value = "0")]
    chocolates: String,

    #[arg(long, default_value = "0")]
    large_towels: String,

    #[arg(long, default_value = "0")]
    towels: String,

    #[arg(long, short = 'y', help = "Skip the confirmation prompt")]
    yes: bool,
}

fn parse_locale(raw: &str) -> Result<Locale, CliError> {
    Locale::parse(raw).ok_or_else(|| CliError::InvalidLocale(raw.to_owned()))
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let store = HttpStore::new(&cli.base_url)?;

    match cli.command {
        Command::Ping => {
            store.ping().await?;
            println!("ok");
            Ok(())
        }
        Command::Submit(args) => run_submit(&store, cli.locale, args).await,
        Command::Show { id } => {
            let stored = store.fetch_reservation(&id).await?;
            println!("{}", serde_json::to_string_pretty(&stored)?);
            Ok(())
        }
    }
}

async fn run_submit(store: &HttpStore, locale: Locale, args: SubmitArgs) -> Result<(), CliError> {
    let mut form = build_form(locale, &args)?;
    for line in summary_lines(&form) {
        println!("{line}");
    }

    let confirm = || {
        args.yes
            || input::ask(CONFIRM_PROMPT, &mut io::stdin().lock(), &mut io::stdout()).unwrap_or_else(|e| {
                eprintln!("warning: {e}");
                false
            })
    };
    let outcome = form.submit(store, confirm, OffsetDateTime::now_utc()).await;
    report(outcome)
}

fn build_form(locale: Locale, args: &SubmitArgs) -> Result<ReservationForm, CliError> {
    let raw_dates = input::read_blob(args.dates.as_deref())?;
    let raw_pricing = input::read_blob(args.pricing.as_deref())?;
    let (session, issues) = SessionContext::from_storage(raw_dates.as_deref(), raw_pricing.as_deref(), locale);
    for issue in issues {
        eprintln!("warning: ignoring {}: {}", issue.key, issue.error);
    }

    let mut form = ReservationForm::new(session);
    for (field, value) in [
        (Field::Name, &args.name),
        (Field::Phone, &args.phone),
        (Field::Email, &args.email),
        (Field::Chocolates, &args.chocolates),
        (Field::LargeTowels, &args.large_towels),
        (Field::Towels, &args.towels),
    ] {
        form.on_field_change(field.input_name(), value)?;
    }
    Ok(form)
}

fn summary_lines(form: &ReservationForm) -> Vec<String> {
    let session = form.session();
    let mut lines = Vec::new();
    if let Some(dates) = &session.dates {
        lines.push(format!("Reservation dates: {}", dates.range_label()));
    }
    if let (Some(total), Some(deposit)) = (session.formatted_total(), session.formatted_deposit()) {
        lines.push(format!("Total price: ${total}"));
        lines.push(format!("Deposit: ${deposit}"));
    }
    for field in Field::ALL {
        lines.push(format!("{}: {}", field.label(), form.form().value(field)));
    }
    lines
}

fn report(outcome: SubmissionOutcome) -> Result<(), CliError> {
    let message = outcome.user_message();
    match outcome {
        SubmissionOutcome::Saved { id } => {
            println!("{}", message.unwrap_or_default());
            println!("id: {id}");
            Ok(())
        }
        SubmissionOutcome::Rejected(SubmitRejection::Declined) => {
            eprintln!("reservation not confirmed; nothing was written");
            Ok(())
        }
        SubmissionOutcome::Rejected(SubmitRejection::Invalid(e)) => Err(e.into()),
        SubmissionOutcome::Rejected(rejection) => Err(CliError::WriteFailed(rejection.to_string())),
        SubmissionOutcome::Failed { error } => {
            if let Some(message) = message {
                eprintln!("{message}");
            }
            Err(CliError::WriteFailed(error))
        }
    }
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;
