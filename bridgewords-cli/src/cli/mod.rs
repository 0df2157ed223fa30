//! Command-line interface for the bridge-word poet.
//!
//! `poem` rewrites text using a corpus; `inspect` reports what indexing a
//! corpus produced.

mod commands;

pub use commands::{
    Cli, CliError, CliErrorCode, Command, CorpusArgs, ExecutionSummary, InspectCommand,
    InspectSummary, PoemCommand, PoemSummary, Representation, render_summary, run_cli,
};

#[cfg(test)]
mod test_helpers;
