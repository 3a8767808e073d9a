pub mod circle;
pub mod commands;
pub mod config;
pub mod errors;
pub mod state;
pub mod store;
pub mod sync;
pub mod types;
pub mod utils;
pub mod vault;

use clap::Parser;
use commands::Commands;

#[derive(Debug, Parser)]
#[clap(
    name = "circlesync",
    about = "🔄 Sync AWS Secrets Manager secrets into CircleCI contexts",
    version,
    author
)]
pub struct CLI {
    #[clap(subcommand)]
    pub commands: Option<Commands>,

    #[clap(
        short = 'p',
        long = "profile",
        help = "Name of the AWS profile to use",
        global = true
    )]
    pub profile: Option<String>,

    #[clap(
        short = 'v',
        long = "verbose",
        help = "Print more information",
        global = true
    )]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_cli() {
        use super::*;
        use clap::CommandFactory;

        CLI::command().debug_assert();
    }
}
