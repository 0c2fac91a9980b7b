//! memberdb-client CLI entry point.

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use memberdb_client::cli::add_user::AddUserArgs;
use memberdb_client::cli::{prompt, Cli, Commands};
use memberdb_client::controller::FormController;
use memberdb_client::guard::AccessGuard;
use memberdb_client::notifier::Notifier;
use memberdb_client::output::terminal::TerminalNavigator;
use memberdb_client::output::Printer;
use memberdb_client::page::AddUserPage;
use memberdb_client::MemberdbClient;
use memberdb_core::account::{validate_form, SubmitOutcome, SubmitRejected};
use memberdb_core::notice::Notice;
use tokio::sync::broadcast;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.json_logs);

    let config = cli.config().context("invalid configuration")?;
    let client = Arc::new(MemberdbClient::from_config(&config)?);
    let printer = Printer::new(cli.format, cli.quiet);
    let navigator = Arc::new(TerminalNavigator::new(printer));
    let guard = AccessGuard::new(client.clone(), navigator);

    match cli.command {
        Commands::Whoami => match guard.check_access().await {
            Ok(identity) => {
                printer.identity(&identity);
                Ok(ExitCode::SUCCESS)
            }
            Err(_) => Ok(ExitCode::FAILURE),
        },
        Commands::AddUser(args) => {
            let notifier = Notifier::new(config.notice_ttl);
            let notices = notifier.subscribe();
            let mut page = AddUserPage::new(guard, client, notifier);

            if page.enter().await.is_err() {
                return Ok(ExitCode::FAILURE);
            }
            printer.header(page.route());

            let Some(form) = page.form() else {
                return Ok(ExitCode::FAILURE);
            };
            add_user(form, &args, printer, notices).await
        }
    }
}

fn init_tracing(json_logs: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "memberdb_client=info".into());

    tracing_subscriber::registry()
        .with(filter)
        .with(json_logs.then(|| {
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
        }))
        .with((!json_logs).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr)))
        .init();
}

async fn add_user(
    form: &mut FormController,
    args: &AddUserArgs,
    printer: Printer,
    mut notices: broadcast::Receiver<Notice>,
) -> anyhow::Result<ExitCode> {
    args.fill(form);

    loop {
        if args.interactive {
            printer.form(form.values(), form.errors());
            prompt::prompt_form(form).context("failed to read form input")?;
        }

        if let Ok(request) = validate_form(form.values()) {
            printer.request(&request);
        }

        match form.submit().await {
            Ok(outcome) => {
                print_notices(&mut notices, printer);
                if matches!(outcome, SubmitOutcome::Created) {
                    return Ok(ExitCode::SUCCESS);
                }
            }
            Err(SubmitRejected::Invalid(errors)) => printer.field_errors(&errors),
            Err(rejected @ SubmitRejected::InFlight) => {
                tracing::warn!(reason = %rejected, "Submit ignored");
            }
        }

        if !args.interactive || !prompt::confirm_retry().context("failed to read answer")? {
            return Ok(ExitCode::FAILURE);
        }
    }
}

fn print_notices(notices: &mut broadcast::Receiver<Notice>, printer: Printer) {
    loop {
        match notices.try_recv() {
            Ok(notice) => printer.notice(&notice),
            Err(broadcast::error::TryRecvError::Lagged(skipped)) => {
                tracing::warn!(skipped, "Missed notices");
            }
            Err(_) => break,
        }
    }
}
