pub mod cli;
pub mod config;
pub mod interpreter;
pub mod report;

// Re-export the run API
pub use interpreter::{run, ErrorKind, ScriptError, Variables};
