//! Command dispatch logic for compass

use std::time::Instant;

use compass_core::error::Result;
use tracing::debug;

use crate::cli::{Cli, Commands};

mod command;

pub use command::CommandContext;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let ctx = CommandContext::resolve(cli, start)?;

    debug!(elapsed = ?start.elapsed(), format = %ctx.format, "resolve_config");

    match &cli.command {
        None => crate::commands::run::execute(&ctx, None),
        Some(Commands::Run { script }) => crate::commands::run::execute(&ctx, script.as_deref()),
        Some(Commands::Exec { commands }) => crate::commands::exec::execute(&ctx, commands),
        Some(Commands::Check) => crate::commands::check::execute(&ctx),
    }
}
