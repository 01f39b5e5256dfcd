//! `ymerge` CLI — deep-merge YAML and JSON documents from the command line.
//!
//! The first file is the base; every following file overrides the result of
//! the ones before it. Mappings merge key by key, lists merge by position,
//! and anything else is replaced by the later file.
//!
//! ## Usage
//!
//! ```sh
//! # Merge two YAML files, result on stdout as YAML
//! ymerge values.yaml values-prod.yaml
//!
//! # Mix formats; .json files are read as JSON, everything else as YAML
//! ymerge base.yaml overrides.json
//!
//! # Write pretty-printed JSON to a file
//! ymerge -f json -o merged.json base.yaml staging.yaml
//!
//! # Read one of the documents from stdin
//! kubectl get cm app -o yaml | ymerge - local.yaml
//!
//! # Show what is being read and merged
//! ymerge -v base.yaml prod.yaml
//! ```

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser};
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;
use ymerge_core::{Format, Value};

/// Path argument that stands for standard input.
const STDIN: &str = "-";

#[derive(Parser)]
#[command(
    name = "ymerge",
    version,
    about = "Deep-merge YAML/JSON documents; later files override earlier ones"
)]
struct Cli {
    /// Documents to merge, lowest priority first (`-` reads stdin)
    #[arg(required = true, value_name = "FILE")]
    files: Vec<String>,

    /// Output file (writes to stdout if omitted)
    #[arg(short, long)]
    output: Option<String>,

    /// Format of the merged document
    #[arg(short = 'f', long, value_name = "yaml|json", default_value_t = Format::Yaml)]
    output_format: Format,

    /// Read every input as this format instead of guessing from its extension
    #[arg(long, value_name = "yaml|json")]
    input_format: Option<Format>,

    /// Log progress to stderr (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.files.iter().filter(|path| *path == STDIN).count() > 1 {
        bail!("standard input ('-') can only be given once");
    }

    // Decode everything before merging so that a bad file late in the list
    // aborts the run without any output.
    let documents = cli
        .files
        .iter()
        .map(|path| read_document(path, cli.input_format))
        .collect::<Result<Vec<Value>>>()?;

    tracing::debug!(documents = documents.len(), "merging documents");
    let merged = ymerge_core::merge_all(documents).context("no input documents")?;

    let encoded = ymerge_core::encode(&merged, cli.output_format)
        .with_context(|| format!("Failed to encode merged document as {}", cli.output_format))?;
    write_output(cli.output.as_deref(), &encoded)
}

/// Install a stderr subscriber. `RUST_LOG` wins over `-v` when it is set.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Read and decode one input. `forced` overrides extension-based detection.
fn read_document(path: &str, forced: Option<Format>) -> Result<Value> {
    let format = forced.unwrap_or_else(|| Format::from_path(path));
    let text = read_input(path)?;
    let value = ymerge_core::decode(&text, format)
        .with_context(|| format!("failed to parse file {path:?} as {format}"))?;
    tracing::debug!(path, %format, root = value.kind(), "decoded document");
    Ok(value)
}

fn read_input(path: &str) -> Result<String> {
    if path == STDIN {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read from stdin")?;
        Ok(buf)
    } else {
        std::fs::read_to_string(path).with_context(|| format!("failed to read file {path:?}"))
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
            tracing::debug!(path, bytes = content.len(), "wrote merged document");
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
