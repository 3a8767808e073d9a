pub mod completions;
pub mod contexts;
pub mod sync;

use anyhow::Result;
use clap::Subcommand;

use crate::state::State;

#[derive(Debug, Subcommand)]
pub enum Commands {
    #[clap(name = "sync", alias = "run")]
    Sync(sync::Options),
    #[clap(name = "contexts", alias = "ctx")]
    Contexts(contexts::Options),
    #[clap(name = "completions")]
    Completions(completions::Options),
}

impl Default for Commands {
    fn default() -> Self {
        Self::Sync(sync::Options::default())
    }
}

pub async fn handle_command(command: Commands, state: State) -> Result<()> {
    match command {
        Commands::Sync(options) => sync::handle(options, state).await,
        Commands::Contexts(options) => contexts::handle(options, state).await,
        Commands::Completions(options) => {
            completions::handle(&options);

            Ok(())
        }
    }
}
