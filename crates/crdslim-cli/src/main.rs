//! Crdslim CLI - strip redundant description fields from CRD manifests
//!
//! Reads a multi-document YAML stream, removes `description` fields from
//! every CustomResourceDefinition version that is not the storage version
//! (and from `podTemplate` subtrees everywhere), and writes the stream back
//! out. With no arguments it filters stdin to stdout.

use clap::Parser;
use console::style;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::PathBuf;

use crdslim_core::strip_stream;

mod error;
mod exit_codes;

use error::CliError;

#[derive(Parser)]
#[command(name = "crdslim")]
#[command(author = "Crdslim Contributors")]
#[command(version)]
#[command(
    about = "Strip redundant description fields from CustomResourceDefinition manifests",
    long_about = None
)]
struct Cli {
    /// Manifest file to read (defaults to stdin)
    input: Option<PathBuf>,

    /// Write output to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable debug output
    #[arg(long)]
    debug: bool,
}

fn main() {
    // Setup miette for nice error display
    miette::set_panic_hook();

    let cli = Cli::parse();

    if let Err(error) = run(&cli) {
        let code = error.exit_code();
        eprintln!("{:?}", miette::Report::new(error));
        std::process::exit(code);
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let input: Box<dyn Read> = match &cli.input {
        Some(path) => Box::new(File::open(path).map_err(|err| CliError::io_at(path, err))?),
        None => Box::new(io::stdin().lock()),
    };

    let output: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(File::create(path).map_err(|err| CliError::io_at(path, err))?),
        None => Box::new(io::stdout().lock()),
    };

    let mut writer = BufWriter::new(output);
    let summary = strip_stream(BufReader::new(input), &mut writer)?;
    writer.flush()?;

    if cli.debug {
        eprintln!(
            "{} {} document(s) written, {} CRD(s) stripped",
            style("DEBUG").dim(),
            summary.documents,
            summary.stripped
        );
    }

    Ok(())
}
