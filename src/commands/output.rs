use compass_core::command::Response;
use compass_core::error::Result;
use compass_core::format::{render, OutputFormat};

/// Print each response to stdout in the requested format
pub fn print_responses(responses: &[Response], format: OutputFormat) -> Result<()> {
    for response in responses {
        println!("{}", render(response, format)?);
    }
    Ok(())
}
