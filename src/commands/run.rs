use std::fs;
use std::io;
use std::path::Path;

use compass_core::command::run_script;
use compass_core::error::{CompassError, Result};

use crate::commands::dispatch::CommandContext;
use crate::commands::output::print_responses;

/// Execute a numbered command script from `script` or stdin
pub fn execute(ctx: &CommandContext, script: Option<&Path>) -> Result<()> {
    let mut compass = ctx.load_compass()?;

    let text = match script {
        Some(path) => fs::read_to_string(path)
            .map_err(|e| CompassError::io_operation("read script", path.display(), e))?,
        None => io::read_to_string(io::stdin())?,
    };

    let responses = run_script(&mut compass, &text)?;
    tracing::debug!(elapsed = ?ctx.start.elapsed(), commands = responses.len(), "run");
    print_responses(&responses, ctx.format)
}
