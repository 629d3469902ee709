//! Command interpreter
//!
//! Parses command text into [`Command`] and executes it against a
//! [`Compass`] session. Failures never abort a script: a command that is
//! malformed or cannot be carried out prints `unsuccessful`.

mod parse;
mod script;

use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::graph::CampusGraph;
use crate::loader::{self, DataPaths};
use crate::schedule;
use crate::student::StudentRegistry;

pub use parse::{Command, MAX_CLASSES};
pub use script::{parse_script, run_script};

pub const SUCCESSFUL: &str = "successful";
pub const UNSUCCESSFUL: &str = "unsuccessful";

/// Output of one executed command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Response {
    pub command: String,
    pub success: bool,
    pub lines: Vec<String>,
}

impl Response {
    pub fn new(command: impl Into<String>, success: bool, lines: Vec<String>) -> Self {
        Self {
            command: command.into(),
            success,
            lines,
        }
    }

    fn outcome(command: &str, success: bool) -> Self {
        let word = if success { SUCCESSFUL } else { UNSUCCESSFUL };
        Self::new(command, success, vec![word.to_string()])
    }
}

/// A loaded campus: the location graph plus enrolled students
#[derive(Debug, Clone, Default)]
pub struct Compass {
    pub graph: CampusGraph,
    pub registry: StudentRegistry,
}

impl Compass {
    pub fn new(graph: CampusGraph, registry: StudentRegistry) -> Self {
        Self { graph, registry }
    }

    /// Build a session from the edge and class tables
    pub fn load(paths: &DataPaths) -> Result<Self> {
        let mut compass = Self::default();
        loader::load_edges(&paths.edges, &mut compass.graph)?;
        loader::load_classes(&paths.classes, &mut compass.registry)?;
        Ok(compass)
    }

    /// Parse and execute one line of command text
    pub fn run_line(&mut self, line: &str) -> Response {
        match line.parse::<Command>() {
            Ok(command) => self.execute(line.trim(), &command),
            Err(e) => {
                debug!(error = %e, "run_line");
                Response::outcome(line.trim(), false)
            }
        }
    }

    /// Execute a parsed command; `text` is echoed back in the response
    pub fn execute(&mut self, text: &str, command: &Command) -> Response {
        match command {
            Command::Insert {
                name,
                id,
                residence,
                classes,
            } => {
                let result = self
                    .registry
                    .insert_student(name, id, *residence, classes.as_slice());
                self.report(text, result)
            }
            Command::Remove { id } => {
                let result = self.registry.remove_student(id);
                self.report(text, result)
            }
            Command::DropClass { id, code } => {
                let result = self.registry.drop_class(id, code);
                self.report(text, result)
            }
            Command::ReplaceClass { id, from, to } => {
                let result = self.registry.replace_class(id, from, to);
                self.report(text, result)
            }
            Command::RemoveClass { code } => {
                if !self.registry.class_exists(code) {
                    return Response::outcome(text, false);
                }
                match self.registry.remove_class_from_all(code) {
                    0 => Response::outcome(text, false),
                    affected => Response::new(text, true, vec![affected.to_string()]),
                }
            }
            Command::ToggleEdgesClosure { pairs } => {
                for &(a, b) in pairs {
                    self.graph.toggle_edge(a, b);
                }
                Response::outcome(text, true)
            }
            Command::CheckEdgeStatus { a, b } => {
                let status = self.graph.edge_status(*a, *b);
                Response::new(text, true, vec![status.to_string()])
            }
            Command::IsConnected { a, b } => {
                Response::outcome(text, self.graph.is_connected(*a, *b))
            }
            Command::PrintShortestEdges { id } => self.print_shortest_edges(text, id),
            Command::PrintStudentZone { id } => self.print_student_zone(text, id),
            Command::VerifySchedule { id } => self.verify_schedule(text, id),
        }
    }

    fn report(&self, text: &str, result: Result<()>) -> Response {
        if let Err(e) = &result {
            debug!(command = text, error = %e, "command rejected");
        }
        Response::outcome(text, result.is_ok())
    }

    fn print_shortest_edges(&self, text: &str, id: &str) -> Response {
        let Some(student) = self.registry.student(id) else {
            return Response::outcome(text, false);
        };

        let mut lines = vec![format!("Name: {}", student.name)];
        for class in schedule::shortest_edges(&self.graph, &self.registry, student) {
            let time = class.time.map_or(-1, |t| t as i64);
            lines.push(format!("{} | Total Time: {}", class.code, time));
        }
        Response::new(text, true, lines)
    }

    fn print_student_zone(&self, text: &str, id: &str) -> Response {
        let Some(student) = self.registry.student(id) else {
            return Response::outcome(text, false);
        };

        let cost = schedule::student_zone(&self.graph, &self.registry, student)
            .map_or(-1, |c| c as i64);
        Response::new(
            text,
            true,
            vec![format!("Student Zone Cost For {}: {}", student.name, cost)],
        )
    }

    fn verify_schedule(&self, text: &str, id: &str) -> Response {
        let Some(student) = self.registry.student(id) else {
            return Response::outcome(text, false);
        };
        let Ok(transitions) = schedule::verify_schedule(&self.graph, &self.registry, student)
        else {
            return Response::outcome(text, false);
        };

        let mut lines = vec![format!("Schedule Check for {}:", student.name)];
        for t in transitions {
            let verdict = if t.feasible {
                "Can make it!"
            } else {
                "Cannot make it!"
            };
            lines.push(format!("{} - {} \"{}\"", t.from, t.to, verdict));
        }
        Response::new(text, true, lines)
    }
}
