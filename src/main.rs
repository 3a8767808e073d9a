#![warn(clippy::pedantic)]

use anyhow::Result;
use circlesync::commands::handle_command;
use circlesync::state::{State, StateOptions};
use circlesync::{utils, CLI};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<()> {
    // setup panic hook
    utils::set_hook();

    // create a new CLI instance
    let cli = CLI::parse();

    utils::logs(cli.verbose);

    let state = State::new(StateOptions {
        override_profile: cli.profile,
        override_token: std::env::var("CIRCLE_TOKEN").ok(),
    })
    .await?;

    // bare `circlesync` runs a full sync
    if let Err(error) = handle_command(cli.commands.unwrap_or_default(), state).await {
        log::error!("{error}");
        std::process::exit(1);
    }

    Ok(())
}
