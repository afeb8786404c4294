//! Library side of the `datashape` command line tool.
//!
//! Each command takes the raw argument text and returns the report to print,
//! so the binary only deals with argument matching and exit codes.

pub mod commands;
mod report;
mod tracing_setup;

pub use commands::CommandError;
pub use report::render_syntax_error;
pub use tracing_setup::init_tracing;
