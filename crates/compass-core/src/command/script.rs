use tracing::{debug, warn};

use super::{Compass, Response};
use crate::error::{CompassError, Result};

/// Split a command script into its command lines.
///
/// The first line holds the number of commands that follow. Extra trailing
/// lines are ignored; too few is an error.
pub fn parse_script(input: &str) -> Result<Vec<&str>> {
    let mut lines = input.lines();
    let header = lines
        .next()
        .ok_or_else(|| CompassError::UsageError("empty command script".to_string()))?;
    let count: usize = header
        .trim()
        .parse()
        .map_err(|_| CompassError::invalid_value("command count", header.trim()))?;

    let commands: Vec<&str> = lines.by_ref().take(count).collect();
    if commands.len() < count {
        return Err(CompassError::UsageError(format!(
            "script declares {} commands but only {} follow",
            count,
            commands.len()
        )));
    }

    let ignored = lines.count();
    if ignored > 0 {
        warn!(ignored, "ignoring lines after the declared command count");
    }
    Ok(commands)
}

/// Execute every command in `script` in order
pub fn run_script(compass: &mut Compass, script: &str) -> Result<Vec<Response>> {
    let commands = parse_script(script)?;
    debug!(commands = commands.len(), "run_script");
    Ok(commands
        .into_iter()
        .map(|line| compass.run_line(line))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_script_takes_declared_count() {
        let script = "2\nisConnected 1 2\ncheckEdgeStatus 1 2\nextra line\n";
        assert_eq!(
            parse_script(script).unwrap(),
            vec!["isConnected 1 2", "checkEdgeStatus 1 2"]
        );
    }

    #[test]
    fn test_parse_script_errors() {
        assert!(parse_script("").is_err());
        assert!(parse_script("two\nisConnected 1 2\n").is_err());
        assert!(parse_script("3\nisConnected 1 2\n").is_err());
        assert_eq!(parse_script("0\n").unwrap(), Vec::<&str>::new());
    }
}
