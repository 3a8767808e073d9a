use anyhow::{anyhow, ensure, Result};
use clap::Parser;

use crate::state::State;

#[derive(Debug, Parser)]
#[clap(about = "Delete a context")]
pub struct Options {
    #[clap(name = "name", help = "Name of the context")]
    pub name: Option<String>,

    #[clap(long = "no-confirm", help = "Skip confirmation")]
    force: bool,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    let circle = state.circle()?;

    let context_name = match options.name {
        Some(name) => name,
        None => {
            let contexts = circle.list_contexts().await?;

            ensure!(
                !contexts.is_empty(),
                "No contexts found in this organization"
            );

            let contexts_fmt = contexts
                .iter()
                .map(|c| format!(" {} ({})", c.name, c.id))
                .collect::<Vec<_>>();

            let idx = dialoguer::Select::new()
                .with_prompt("Select a context to delete")
                .items(&contexts_fmt)
                .default(0)
                .interact_opt()?
                .ok_or_else(|| anyhow!("No context selected"))?;

            contexts[idx].name.clone()
        }
    };

    if !options.force {
        let confirm = dialoguer::Confirm::new()
            .with_prompt(format!(
                "Are you sure you want to delete context `{context_name}`?"
            ))
            .interact_opt()?;

        ensure!(confirm == Some(true), "Aborted deletion of `{context_name}`");
    }

    circle
        .delete_context(&context_name, state.config.context_match)
        .await?;

    log::info!("Context `{context_name}` deleted");

    Ok(())
}
