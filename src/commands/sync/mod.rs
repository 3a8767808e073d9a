use anyhow::Result;
use clap::Parser;

use crate::state::State;

#[derive(Debug, Parser, Default)]
#[clap(about = "Sync tagged vault secrets into CircleCI contexts")]
pub struct Options {
    #[clap(
        short = 't',
        long = "tag",
        help = "Sync secrets carrying this tag instead of the configured ones"
    )]
    pub tags: Vec<String>,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    let circle = state.circle()?;

    let tags = if options.tags.is_empty() {
        state.config.tags.clone()
    } else {
        options.tags
    };

    crate::sync::run(&state.vault, &circle, &tags, state.config.context_match).await?;

    Ok(())
}
