//! Small helpers shared across CLI tests.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use tempfile::TempDir;

use super::{Cli, CliError, Command, CorpusArgs, PoemCommand, Representation, run_cli};

pub(super) const ONE_LINE_CORPUS: &str = "Seek to explore strange new life and new civilizations\n";

pub(super) fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

pub(super) fn create_text_file(dir: &TempDir, name: &str, contents: &str) -> io::Result<PathBuf> {
    let path = dir.path().join(name);
    let mut file = File::create(&path)?;
    file.write_all(contents.as_bytes())?;
    Ok(path)
}

pub(super) fn corpus_args(corpus: PathBuf, representation: Representation) -> CorpusArgs {
    CorpusArgs {
        corpus,
        representation,
    }
}

pub(super) fn poem_cli(corpus: PathBuf, representation: Representation, text: &[&str]) -> Cli {
    Cli {
        command: Command::Poem(PoemCommand {
            corpus: corpus_args(corpus, representation),
            text: text.iter().map(|word| (*word).to_owned()).collect(),
        }),
    }
}

pub(super) fn run_cli_expecting_error(cli: Cli, panic_msg: &str) -> CliError {
    match run_cli(cli, io::empty()) {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}
