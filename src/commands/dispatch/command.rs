//! Shared context for command execution

use std::time::Instant;

use compass_core::command::Compass;
use compass_core::config::CompassConfig;
use compass_core::error::Result;
use compass_core::format::OutputFormat;
use compass_core::loader::DataPaths;
use compass_core::trace_time;

use crate::cli::Cli;

/// Config file merged with command-line overrides
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: CompassConfig,
    pub format: OutputFormat,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn resolve(cli: &'a Cli, start: Instant) -> Result<Self> {
        let mut config = CompassConfig::resolve(cli.config.as_deref())?;

        if let Some(dir) = &cli.data_dir {
            config.data.dir = Some(dir.clone());
        }
        if let Some(edges) = &cli.edges {
            config.data.edges = Some(edges.clone());
        }
        if let Some(classes) = &cli.classes {
            config.data.classes = Some(classes.clone());
        }

        let format = cli.format.unwrap_or(config.output.format);

        Ok(Self {
            cli,
            config,
            format,
            start,
        })
    }

    pub fn data_paths(&self) -> Result<DataPaths> {
        self.config.data_paths()
    }

    /// Load the campus graph and class catalog
    pub fn load_compass(&self) -> Result<Compass> {
        let paths = self.data_paths()?;
        let compass = Compass::load(&paths)?;
        tracing::debug!(
            edges = %paths.edges.display(),
            classes = %paths.classes.display(),
            locations = compass.graph.location_count(),
            "load_compass"
        );
        trace_time!(self.start, "load_compass");
        Ok(compass)
    }
}
