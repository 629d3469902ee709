use compass_core::error::Result;
use compass_core::format::OutputFormat;

use crate::commands::dispatch::CommandContext;

/// Load the data tables and summarise them
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let paths = ctx.data_paths()?;
    let compass = ctx.load_compass()?;

    match ctx.format {
        OutputFormat::Json => {
            let summary = serde_json::json!({
                "edges_file": paths.edges.display().to_string(),
                "classes_file": paths.classes.display().to_string(),
                "locations": compass.graph.location_count(),
                "edges": compass.graph.edge_count(),
                "classes": compass.registry.class_count(),
            });
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        OutputFormat::Human => {
            if !ctx.cli.quiet {
                println!("edges file: {}", paths.edges.display());
                println!("classes file: {}", paths.classes.display());
            }
            println!("locations: {}", compass.graph.location_count());
            println!("edges: {}", compass.graph.edge_count());
            println!("classes: {}", compass.registry.class_count());
        }
    }

    Ok(())
}
