use compass_core::command::Response;
use compass_core::error::Result;

use crate::commands::dispatch::CommandContext;
use crate::commands::output::print_responses;

/// Execute each argument as one command, in order, against a single session
pub fn execute(ctx: &CommandContext, commands: &[String]) -> Result<()> {
    let mut compass = ctx.load_compass()?;

    let responses: Vec<Response> = commands
        .iter()
        .map(|line| compass.run_line(line))
        .collect();
    print_responses(&responses, ctx.format)
}
