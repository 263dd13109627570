//! `taskpulse` CLI: argument parsing and the report run.

pub mod render;

use anyhow::Context;
use clap::Parser;
use owo_colors::{OwoColorize, Stream};
use taskpulse_core::auth::KEYRING_SERVICE;
use taskpulse_core::{AsanaClient, collect_report, resolve_credential};
use taskpulse_keyring_store::KeyringStore;

/// Console progress report for your Asana projects.
#[derive(Debug, Parser)]
#[command(name = "taskpulse", version, about)]
pub struct Cli {
    /// Asana personal access token. Falls back to ASANA_API_KEY, then the
    /// OS keychain, then an interactive prompt.
    pub api_key: Option<String>,
}

/// Resolves a credential, fetches the report, and prints it.
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let store = KeyringStore::new(KEYRING_SERVICE);
    let credential = resolve_credential(cli.api_key.as_deref(), &store)?;

    let client = AsanaClient::new(credential.token);

    // Connection check before the listing pass, so a bad token fails with
    // a clear message instead of mid-report.
    let user = client
        .current_user()
        .await
        .context("could not connect to the Asana API")?;
    println!(
        "{} Connected to Asana as {}",
        "✓".if_supports_color(Stream::Stdout, |glyph| glyph.green()),
        user.name.as_deref().unwrap_or(&user.gid),
    );

    let report = collect_report(&client).await?;

    if report.projects.is_empty() {
        println!("No projects found.");
        return Ok(());
    }

    println!();
    print!("{}", render::render_table(&report.projects));
    println!();
    print!("{}", render::render_summary(&report.summary));

    Ok(())
}
