//! Command implementations and argument parsing for the bridgewords CLI.

use std::{
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
};

use bridgewords_core::{GraphKind, define_error_codes};
use bridgewords_poet::{GraphPoet, PoetError};
use clap::{Args, Parser, Subcommand, ValueEnum};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "bridgewords",
    version,
    about = "Insert bridge words into text using a corpus word graph."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Rewrite text, inserting bridge words learned from the corpus.
    Poem(PoemCommand),
    /// Report word, vertex and edge counts for the indexed corpus.
    Inspect(InspectCommand),
}

/// Corpus selection shared by every command.
#[derive(Debug, Args, Clone)]
pub struct CorpusArgs {
    /// Path to a UTF-8 corpus file.
    #[arg(long)]
    pub corpus: PathBuf,

    /// Graph representation used to index the corpus.
    #[arg(long, value_enum, default_value_t = Representation::Adjacency)]
    pub representation: Representation,
}

/// Options accepted by the `poem` command.
#[derive(Debug, Args, Clone)]
pub struct PoemCommand {
    /// Corpus configuration.
    #[command(flatten)]
    pub corpus: CorpusArgs,

    /// Text to rewrite. Words are joined with single spaces; when omitted,
    /// each line of standard input is rewritten separately.
    pub text: Vec<String>,
}

/// Options accepted by the `inspect` command.
#[derive(Debug, Args, Clone)]
pub struct InspectCommand {
    /// Corpus configuration.
    #[command(flatten)]
    pub corpus: CorpusArgs,
}

/// Graph representations selectable on the command line.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, ValueEnum)]
pub enum Representation {
    /// Vertex set plus a flat edge list.
    EdgeList,
    /// One record per vertex owning its outgoing edges.
    #[default]
    Adjacency,
}

impl From<Representation> for GraphKind {
    fn from(value: Representation) -> Self {
        match value {
            Representation::EdgeList => Self::EdgeList,
            Representation::Adjacency => Self::Adjacency,
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading text to rewrite from standard input failed.
    #[error("failed to read input text: {source}")]
    Input {
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Loading or indexing the corpus failed.
    #[error(transparent)]
    Poet(#[from] PoetError),
}

define_error_codes! {
    /// Stable codes describing [`CliError`] variants.
    enum CliErrorCode for CliError {
        /// Reading input text failed.
        Input => Input { .. } => "CLI_INPUT",
        /// Loading or indexing the corpus failed.
        Poet => Poet(..) => "CLI_POET",
    }
}

impl CliError {
    /// Returns the code of the wrapped poet error, if any.
    #[must_use]
    pub const fn poet_code(&self) -> Option<bridgewords_poet::PoetErrorCode> {
        match self {
            Self::Poet(err) => Some(err.code()),
            Self::Input { .. } => None,
        }
    }
}

/// Output of a `poem` run.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct PoemSummary {
    /// Rewritten lines, one per input line.
    pub lines: Vec<String>,
}

/// Output of an `inspect` run.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct InspectSummary {
    /// Corpus name derived from the file stem.
    pub corpus: String,
    /// Representation the corpus was indexed into.
    pub representation: GraphKind,
    /// Number of normalised words read from the corpus.
    pub words: usize,
    /// Number of distinct words.
    pub vertices: usize,
    /// Number of distinct adjacent word pairs.
    pub edges: usize,
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum ExecutionSummary {
    /// Result of the `poem` command.
    Poem(PoemSummary),
    /// Result of the `inspect` command.
    Inspect(InspectSummary),
}

/// Executes the CLI command represented by `cli`.
///
/// `input` supplies text for `poem` when no text arguments were given.
///
/// # Errors
/// Returns [`CliError`] when reading input or indexing the corpus fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use std::io;
/// # use bridgewords_cli::cli::{
/// #     Cli, Command, CorpusArgs, ExecutionSummary, PoemCommand, Representation, run_cli,
/// # };
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "Seek to explore strange new life\n")?;
/// let cli = Cli {
///     command: Command::Poem(PoemCommand {
///         corpus: CorpusArgs {
///             corpus: file.path().to_path_buf(),
///             representation: Representation::EdgeList,
///         },
///         text: vec!["explore".into(), "new".into()],
///     }),
/// };
/// let summary = run_cli(cli, io::empty())?;
/// let ExecutionSummary::Poem(poem) = summary else { unreachable!() };
/// assert_eq!(poem.lines, ["explore strange new"]);
/// # Ok(())
/// # }
/// ```
#[instrument(name = "cli.run", err, skip_all, fields(command = field::Empty))]
pub fn run_cli(cli: Cli, input: impl BufRead) -> Result<ExecutionSummary, CliError> {
    let span = Span::current();
    match cli.command {
        Command::Poem(command) => {
            span.record("command", field::display("poem"));
            run_poem(command, input).map(ExecutionSummary::Poem)
        }
        Command::Inspect(command) => {
            span.record("command", field::display("inspect"));
            run_inspect(command).map(ExecutionSummary::Inspect)
        }
    }
}

#[instrument(
    name = "cli.poem",
    err,
    skip_all,
    fields(source = field::Empty, lines = field::Empty),
)]
pub(super) fn run_poem(
    command: PoemCommand,
    input: impl BufRead,
) -> Result<PoemSummary, CliError> {
    let poet = load_poet(&command.corpus)?;
    let span = Span::current();

    let lines = if command.text.is_empty() {
        span.record("source", field::display("stdin"));
        input
            .lines()
            .map(|line| {
                line.map(|text| poet.poem(&text))
                    .map_err(|source| CliError::Input { source })
            })
            .collect::<Result<Vec<_>, _>>()?
    } else {
        span.record("source", field::display("arguments"));
        vec![poet.poem(&command.text.join(" "))]
    };

    span.record("lines", lines.len());
    info!(lines = lines.len(), "poem completed");
    Ok(PoemSummary { lines })
}

#[instrument(name = "cli.inspect", err, skip_all, fields(corpus = field::Empty))]
pub(super) fn run_inspect(command: InspectCommand) -> Result<InspectSummary, CliError> {
    let poet = load_poet(&command.corpus)?;
    let name = derive_corpus_name(&command.corpus.corpus);
    Span::current().record("corpus", field::display(&name));

    let graph = poet.graph();
    let summary = InspectSummary {
        corpus: name,
        representation: poet.representation(),
        words: poet.corpus_words().len(),
        vertices: graph.vertex_count(),
        edges: graph.edge_count(),
    };
    info!(
        corpus = summary.corpus.as_str(),
        vertices = summary.vertices,
        edges = summary.edges,
        "inspect completed"
    );
    Ok(summary)
}

#[instrument(
    name = "cli.load_corpus",
    err,
    skip_all,
    fields(path = field::Empty, representation = field::Empty, words = field::Empty),
)]
pub(super) fn load_poet(args: &CorpusArgs) -> Result<GraphPoet, CliError> {
    let span = Span::current();
    let kind = GraphKind::from(args.representation);
    span.record("path", field::display(args.corpus.display()));
    span.record("representation", field::display(kind));

    let poet = GraphPoet::builder()
        .with_representation(kind)
        .build_from_path(&args.corpus)?;
    span.record("words", poet.corpus_words().len());
    Ok(poet)
}

pub(super) fn derive_corpus_name(path: &Path) -> String {
    path.file_stem()
        .and_then(|value| value.to_str())
        .map_or_else(|| "corpus".to_owned(), ToOwned::to_owned)
}

/// Renders `summary` to `writer` as plain text.
///
/// Poems are written one per line. Inspection results are written as
/// `key: value` lines.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use bridgewords_cli::cli::{ExecutionSummary, PoemSummary, render_summary};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let summary = ExecutionSummary::Poem(PoemSummary {
///     lines: vec!["explore strange new".into()],
/// });
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// assert_eq!(String::from_utf8(buffer)?, "explore strange new\n");
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    match summary {
        ExecutionSummary::Poem(poem) => {
            for line in &poem.lines {
                writeln!(writer, "{line}")?;
            }
        }
        ExecutionSummary::Inspect(inspect) => {
            writeln!(writer, "corpus: {}", inspect.corpus)?;
            writeln!(writer, "representation: {}", inspect.representation)?;
            writeln!(writer, "words: {}", inspect.words)?;
            writeln!(writer, "vertices: {}", inspect.vertices)?;
            writeln!(writer, "edges: {}", inspect.edges)?;
        }
    }
    Ok(())
}
