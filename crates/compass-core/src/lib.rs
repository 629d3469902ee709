//! Compass Core Library
//!
//! Campus graph query engine plus the student-schedule logic built on it.

pub mod command;
pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod loader;
pub mod logging;
pub mod schedule;
pub mod student;
