//! The reconciliation run: wire the ICS source, the Google backend, and
//! the driver together, then print the report.

use anyhow::Result;
use icsweep_core::{IcsSource, ReconcileOptions, SourceStrategy, reconcile};
use icsweep_google::{GoogleCalendar, Session};
use owo_colors::OwoColorize;

use crate::Cli;
use crate::render;

pub async fn run(cli: Cli) -> Result<()> {
    let account = resolve_account(cli.account.as_deref())?;
    let session = Session::load_valid(&account).await?;
    let remote = GoogleCalendar::new(session.client()?, cli.calendar.as_str());

    let spinner = render::create_spinner("Loading ICS file...");
    let source = IcsSource::load(&cli.ics)?;
    spinner.finish_and_clear();

    if source.strategy() == SourceStrategy::LineScan {
        println!(
            "{}",
            "ICS structure could not be parsed; falling back to a raw UID scan \
            (missing events will not be detailed)"
                .yellow()
        );
    }

    println!("Searching for events...");

    let options = ReconcileOptions {
        delete: cli.delete,
        limit: cli.limit,
        ..Default::default()
    };
    let verbose = cli.verbose;
    let summary = reconcile(&source, &remote, &options, |uid, outcome| {
        render::progress(uid, outcome, verbose);
    })
    .await?;

    println!();

    render::print_report(&source, &summary)?;

    Ok(())
}

/// Pick the Google account: the explicit flag, or the only stored session.
fn resolve_account(flag: Option<&str>) -> Result<String> {
    if let Some(account) = flag {
        return Ok(account.to_string());
    }

    let accounts = Session::available_accounts()?;
    match accounts.as_slice() {
        [] => anyhow::bail!(
            "No stored Google sessions found.\n\n\
            icsweep does not acquire OAuth tokens itself; place an existing\n\
            session under ~/.config/icsweep/session/<email>.toml first."
        ),
        [only] => Ok(only.clone()),
        _ => anyhow::bail!(
            "Multiple stored sessions found; pick one with --account. Available: {}",
            accounts.join(", ")
        ),
    }
}
