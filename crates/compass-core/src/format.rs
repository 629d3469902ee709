//! Output format handling for compass
//!
//! - human: command output lines exactly as the interpreter prints them
//! - json: one JSON object per executed command

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::command::Response;
use crate::error::CompassError;

/// Output format for compass commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for machine consumption
    Json,
}

impl FromStr for OutputFormat {
    type Err = CompassError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            other => Err(CompassError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Human => write!(f, "human"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Render one command response in the requested format
pub fn render(response: &Response, format: OutputFormat) -> Result<String, CompassError> {
    match format {
        OutputFormat::Human => Ok(response.lines.join("\n")),
        OutputFormat::Json => Ok(serde_json::to_string(response)?),
    }
}
