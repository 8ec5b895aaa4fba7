//! Command-line interface orchestration for the dendra BPT builder.
//!
//! The CLI offers a `build` command that loads a weighted graph from either
//! an explicit edge list or a regular grid description, builds the canonical
//! BPT, and renders a text summary.

mod commands;

pub use commands::{
    BuildCommand, BuildSource, BuildSummary, Cli, CliError, Command, Connectivity, EdgesArgs,
    GridArgs, render_summary, run_cli,
};
