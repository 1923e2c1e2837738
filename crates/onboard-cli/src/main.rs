//! Onboard CLI Application
//!
//! Terminal front end for the project onboarding wizard.

mod args;
mod cli;
mod renderer;
mod session;

use std::{path::PathBuf, time::Duration};

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use onboard_core::{NotificationSender, OutboxSender, SimulatedSender};
use renderer::TerminalRenderer;
use Commands::*;

/// Picks the delivery transport from the global flags.
fn build_sender(outbox_dir: Option<PathBuf>, simulate: bool) -> Result<Box<dyn NotificationSender>> {
    if simulate {
        return Ok(Box::new(SimulatedSender::new()));
    }

    let sender = match outbox_dir {
        Some(dir) => OutboxSender::new(dir),
        None => OutboxSender::from_xdg().context("Failed to resolve outbox directory")?,
    };
    info!("Delivering submissions to {}", sender.directory().display());
    Ok(Box::new(sender))
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        no_color,
        outbox_dir,
        simulate,
        timeout_secs,
        command,
    } = Args::parse();

    let cli = Cli::new(
        TerminalRenderer::new(!no_color),
        Duration::from_secs(timeout_secs),
    );

    info!("Onboard started");

    match command.unwrap_or(Start) {
        Start => {
            let sender = build_sender(outbox_dir, simulate)?;
            cli.start_session(sender).await
        }
        Validate(file_args) => cli.validate_file(&file_args.file),
        Submit(file_args) => {
            let sender = build_sender(outbox_dir, simulate)?;
            cli.submit_file(sender, &file_args.file).await
        }
        Options(options_args) => cli.list_options(options_args.list.as_deref()),
    }
}
