//! confessor - Guided journaling from the terminal
//!
//! Asks a profile's questions for a chosen mode and language, checks each
//! answer against the format the question implies, stores the finished
//! session in a local SQLite database and renders single or weekly reports.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::ConfessorError;
