use anyhow::Result;
use clap::Parser;

use super::utils::format_contexts;
use crate::state::State;

#[derive(Debug, Parser)]
#[clap(about = "List contexts in the configured organization")]
pub struct Options {}

pub async fn handle(_options: Options, state: State) -> Result<()> {
    let circle = state.circle()?;
    let contexts = circle.list_contexts().await?;

    if contexts.is_empty() {
        log::info!("No contexts found in this organization");

        return Ok(());
    }

    println!("{}", format_contexts(&contexts, true).join("\n"));

    Ok(())
}
