//! Commands module - CLI command implementations.
//!
//! Each command is implemented in its own module.

pub mod check;
pub mod companies;
pub mod users;

use common::{AppConfig, AppResult};

use crate::cli::{Cli, Commands};
use crate::container::Services;

/// Dispatch the parsed command line.
pub async fn run(cli: Cli, config: AppConfig) -> AppResult<()> {
    match cli.command {
        Commands::Check(args) => check::execute(args, cli.format).await,
        Commands::Users(args) => {
            let services = Services::open(&config).await?;
            users::execute(args, &services, cli.format).await
        }
        Commands::Companies(args) => {
            let services = Services::open(&config).await?;
            companies::execute(args, &services, cli.format).await
        }
    }
}
