//! Command definitions and execution for the dendra CLI.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use dendra_core::{BptError, CanonicalBpt, Graph, GraphError, bpt_canonical, grid};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "dendra",
    about = "Build canonical binary partition trees from weighted graphs."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Build the canonical BPT and minimum spanning forest of a graph.
    Build(BuildCommand),
}

/// Options accepted by the `build` command.
#[derive(Debug, Args, Clone)]
pub struct BuildCommand {
    /// Graph source configuration.
    #[command(subcommand)]
    pub source: BuildSource,
}

/// Input graph descriptions supported by the `build` command.
#[derive(Debug, Subcommand, Clone)]
pub enum BuildSource {
    /// Build from a text file of `source target weight` triples, one per
    /// line; `#` comments and blank lines are ignored.
    Edges(EdgesArgs),
    /// Build from a regular grid graph with one weight per grid edge, in
    /// grid enumeration order.
    Grid(GridArgs),
}

/// Edge-list ingestion arguments.
#[derive(Debug, Args, Clone)]
pub struct EdgesArgs {
    /// Path to the edge list file.
    pub path: PathBuf,

    /// Number of vertices in the graph. Explicit so trailing isolated
    /// vertices survive a round trip.
    #[arg(long)]
    pub vertices: usize,
}

/// Grid ingestion arguments.
#[derive(Debug, Args, Clone)]
pub struct GridArgs {
    /// Path to a file of whitespace-separated edge weights.
    pub path: PathBuf,

    /// Number of grid rows.
    #[arg(long)]
    pub height: usize,

    /// Number of grid columns.
    #[arg(long)]
    pub width: usize,

    /// Grid connectivity.
    #[arg(long, value_enum, default_value_t = Connectivity::Four)]
    pub connectivity: Connectivity,
}

/// Supported grid adjacencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Connectivity {
    /// Horizontal and vertical neighbours.
    #[value(name = "4")]
    Four,
    /// Horizontal, vertical, and diagonal neighbours.
    #[value(name = "8")]
    Eight,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// File I/O failed while loading an input file.
    #[error("failed to read `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// An input file contained a malformed line.
    #[error("failed to parse `{path}` line {line}: {message}")]
    Parse {
        /// Path of the malformed file.
        path: PathBuf,
        /// One-based line number of the malformed content.
        line: usize,
        /// Description of the problem.
        message: String,
    },
    /// Graph assembly failed.
    #[error(transparent)]
    Graph(#[from] GraphError),
    /// BPT construction failed.
    #[error(transparent)]
    Core(#[from] BptError),
}

impl CliError {
    /// Returns the stable error code of the underlying core error, when
    /// one exists.
    #[must_use]
    pub const fn code(&self) -> Option<&'static str> {
        match self {
            Self::Graph(err) => Some(err.code().as_str()),
            Self::Core(err) => Some(err.code().as_str()),
            Self::Io { .. } | Self::Parse { .. } => None,
        }
    }
}

/// Summarises the outcome of a `build` command.
#[derive(Debug, Clone)]
pub struct BuildSummary {
    /// Display name derived from the input path.
    pub source: String,
    /// Vertex count of the input graph.
    pub graph_vertices: usize,
    /// Edge count of the input graph.
    pub graph_edges: usize,
    /// The construction result.
    pub bpt: CanonicalBpt,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when loading, parsing, or construction fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use dendra_cli::cli::{BuildCommand, BuildSource, Cli, Command, EdgesArgs, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "0 1 2.0\n")?;
/// let cli = Cli {
///     command: Command::Build(BuildCommand {
///         source: BuildSource::Edges(EdgesArgs {
///             path: file.path().to_path_buf(),
///             vertices: 2,
///         }),
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.bpt.tree().num_vertices(), 3);
/// # Ok(())
/// # }
/// ```
pub fn run_cli(cli: Cli) -> Result<BuildSummary, CliError> {
    match cli.command {
        Command::Build(build) => run_build(build),
    }
}

fn run_build(command: BuildCommand) -> Result<BuildSummary, CliError> {
    match command.source {
        BuildSource::Edges(args) => run_edges(args),
        BuildSource::Grid(args) => run_grid(args),
    }
}

#[instrument(name = "cli.build_edges", err, skip(args), fields(path = field::Empty))]
fn run_edges(args: EdgesArgs) -> Result<BuildSummary, CliError> {
    let EdgesArgs { path, vertices } = args;
    Span::current().record("path", field::display(path.display()));

    let (graph, weights) = parse_edges_file(&path, vertices)?;
    finish_build(&path, &graph, &weights)
}

#[instrument(name = "cli.build_grid", err, skip(args), fields(path = field::Empty))]
fn run_grid(args: GridArgs) -> Result<BuildSummary, CliError> {
    let GridArgs {
        path,
        height,
        width,
        connectivity,
    } = args;
    Span::current().record("path", field::display(path.display()));

    let graph = match connectivity {
        Connectivity::Four => grid::four_adjacency(height, width),
        Connectivity::Eight => grid::eight_adjacency(height, width),
    };
    let weights = parse_weights_file(&path)?;
    finish_build(&path, &graph, &weights)
}

fn finish_build(path: &Path, graph: &Graph, weights: &[f32]) -> Result<BuildSummary, CliError> {
    let bpt = bpt_canonical(graph, weights)?;
    info!(
        nodes = bpt.tree().num_vertices(),
        roots = bpt.tree().roots().len(),
        mst_edges = bpt.mst().num_edges(),
        "build completed"
    );
    Ok(BuildSummary {
        source: derive_source_name(path),
        graph_vertices: graph.num_vertices(),
        graph_edges: graph.num_edges(),
        bpt,
    })
}

pub(super) fn parse_edges_file(path: &Path, vertices: usize) -> Result<(Graph, Vec<f32>), CliError> {
    let contents = read_input(path)?;
    let mut graph = Graph::new(vertices);
    let mut weights = Vec::new();

    for (index, raw) in contents.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let mut tokens = line.split_whitespace();
        let (Some(source), Some(target), Some(weight), None) =
            (tokens.next(), tokens.next(), tokens.next(), tokens.next())
        else {
            return Err(parse_error(path, index, "expected `source target weight`"));
        };
        let source: usize = source
            .parse()
            .map_err(|_| parse_error(path, index, "invalid source vertex"))?;
        let target: usize = target
            .parse()
            .map_err(|_| parse_error(path, index, "invalid target vertex"))?;
        let weight: f32 = weight
            .parse()
            .map_err(|_| parse_error(path, index, "invalid weight"))?;
        graph.add_edge(source, target)?;
        weights.push(weight);
    }

    Ok((graph, weights))
}

pub(super) fn parse_weights_file(path: &Path) -> Result<Vec<f32>, CliError> {
    let contents = read_input(path)?;
    contents
        .split_whitespace()
        .enumerate()
        .map(|(index, token)| {
            token
                .parse()
                .map_err(|_| parse_error(path, 0, &format!("invalid weight at position {index}")))
        })
        .collect()
}

fn read_input(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_error(path: &Path, line_index: usize, message: &str) -> CliError {
    CliError::Parse {
        path: path.to_path_buf(),
        line: line_index + 1,
        message: message.to_owned(),
    }
}

pub(super) fn derive_source_name(path: &Path) -> String {
    path.file_stem()
        .and_then(|value| value.to_str())
        .map(ToOwned::to_owned)
        .unwrap_or_else(|| "graph".to_owned())
}

/// Renders `summary` to `writer` in a human-readable text format.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use std::io::Cursor;
/// # use dendra_cli::cli::{BuildCommand, BuildSource, Cli, Command, EdgesArgs, render_summary, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "0 1 2.0\n")?;
/// let cli = Cli {
///     command: Command::Build(BuildCommand {
///         source: BuildSource::Edges(EdgesArgs {
///             path: file.path().to_path_buf(),
///             vertices: 2,
///         }),
///     }),
/// };
/// let summary = run_cli(cli)?;
/// let mut buffer = Cursor::new(Vec::new());
/// render_summary(&summary, &mut buffer)?;
/// let rendered = String::from_utf8(buffer.into_inner())?;
/// assert!(rendered.contains("tree: 3 nodes"));
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &BuildSummary, mut writer: impl Write) -> io::Result<()> {
    let tree = summary.bpt.tree();
    let altitudes = summary.bpt.altitudes();
    let max_altitude = altitudes.iter().copied().reduce(f32::max).unwrap_or(0.0);

    writeln!(writer, "source: {}", summary.source)?;
    writeln!(
        writer,
        "graph: {} vertices, {} edges",
        summary.graph_vertices, summary.graph_edges
    )?;
    writeln!(
        writer,
        "tree: {} nodes, {} edges, {} roots",
        tree.num_vertices(),
        tree.num_edges(),
        tree.roots().len()
    )?;
    writeln!(writer, "mst: {} edges", summary.bpt.mst().num_edges())?;
    writeln!(writer, "max altitude: {max_altitude}")?;
    writeln!(writer, "node\tparent\taltitude")?;
    for (node, (&parent, &altitude)) in tree.parents().iter().zip(altitudes).enumerate() {
        writeln!(writer, "{node}\t{parent}\t{altitude}")?;
    }
    Ok(())
}
