//! CSV ingestion for the campus edge table and class catalog
//!
//! Edge table columns: `LocationID_1, LocationID_2, Name_1, Name_2, Time`.
//! Class table columns: `ClassCode, LocationID, Start Time, End Time` with
//! `HH:MM` times. Both files start with a header line, which is skipped.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Instant;

use chrono::{NaiveTime, Timelike};
use serde::Deserialize;
use tracing::debug;

use crate::error::{CompassError, Result};
use crate::graph::{CampusGraph, LocationId, Weight};
use crate::student::StudentRegistry;
use crate::trace_time;

pub const EDGES_FILE: &str = "edges.csv";
pub const CLASSES_FILE: &str = "classes.csv";

/// Directories searched, in order, when no data location is configured
pub const DEFAULT_DATA_DIRS: [&str; 3] = ["data", "../data", "./data"];

#[derive(Debug, Deserialize)]
struct EdgeRow(LocationId, LocationId, String, String, Weight);

#[derive(Debug, Deserialize)]
struct ClassRow(String, LocationId, String, String);

/// Locations of the two input tables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    pub edges: PathBuf,
    pub classes: PathBuf,
}

impl DataPaths {
    /// The standard file names inside `dir`
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            edges: dir.join(EDGES_FILE),
            classes: dir.join(CLASSES_FILE),
        }
    }

    fn exist(&self) -> bool {
        self.edges.is_file() && self.classes.is_file()
    }

    /// First candidate directory holding both tables
    pub fn locate<P: AsRef<Path>>(candidates: &[P]) -> Result<Self> {
        candidates
            .iter()
            .map(|dir| Self::in_dir(dir))
            .find(Self::exist)
            .ok_or_else(|| CompassError::DataNotFound {
                searched: candidates.iter().map(|p| p.as_ref().to_path_buf()).collect(),
            })
    }
}

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| CompassError::io_operation("open", path.display(), e))
}

fn csv_reader<R: Read>(input: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(false)
        .from_reader(input)
}

fn row_error(source: &Path, position: Option<&csv::Position>, err: impl std::fmt::Display) -> CompassError {
    let line = position.map(csv::Position::line).unwrap_or(0);
    CompassError::invalid_row(source, line, err.to_string())
}

/// Parse an `HH:MM` time into minutes after midnight
pub fn parse_clock(value: &str) -> Result<u32> {
    let time = NaiveTime::parse_from_str(value.trim(), "%H:%M")
        .map_err(|_| CompassError::invalid_value("time", value))?;
    Ok(time.hour() * 60 + time.minute())
}

/// Load the edge table at `path` into `graph`, returning the number of rows
pub fn load_edges(path: &Path, graph: &mut CampusGraph) -> Result<usize> {
    load_edges_from_reader(open(path)?, path, graph)
}

/// Each row names both endpoints (first name wins) and adds one open edge,
/// in file order.
pub fn load_edges_from_reader<R: Read>(
    input: R,
    source: &Path,
    graph: &mut CampusGraph,
) -> Result<usize> {
    let start = Instant::now();
    let mut reader = csv_reader(input);
    let mut rows = 0;

    for record in reader.records() {
        let record = record.map_err(|e| row_error(source, e.position(), &e))?;
        let EdgeRow(a, b, name_a, name_b, weight) = record
            .deserialize(None)
            .map_err(|e| row_error(source, record.position(), e))?;

        graph.add_location(a, name_a);
        graph.add_location(b, name_b);
        graph.add_edge(a, b, weight);
        rows += 1;
    }

    debug!(
        path = %source.display(),
        rows,
        locations = graph.location_count(),
        "load_edges"
    );
    trace_time!(start, "load_edges");
    Ok(rows)
}

/// Load the class catalog at `path` into `registry`
pub fn load_classes(path: &Path, registry: &mut StudentRegistry) -> Result<usize> {
    load_classes_from_reader(open(path)?, path, registry)
}

pub fn load_classes_from_reader<R: Read>(
    input: R,
    source: &Path,
    registry: &mut StudentRegistry,
) -> Result<usize> {
    let start = Instant::now();
    let mut reader = csv_reader(input);
    let mut rows = 0;

    for record in reader.records() {
        let record = record.map_err(|e| row_error(source, e.position(), &e))?;
        let ClassRow(code, location, starts, ends) = record
            .deserialize(None)
            .map_err(|e| row_error(source, record.position(), e))?;
        let begin = parse_clock(&starts).map_err(|e| row_error(source, record.position(), e))?;
        let end = parse_clock(&ends).map_err(|e| row_error(source, record.position(), e))?;

        registry.add_class(code, location, begin, end);
        rows += 1;
    }

    debug!(path = %source.display(), rows, "load_classes");
    trace_time!(start, "load_classes");
    Ok(rows)
}
