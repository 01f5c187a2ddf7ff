//! Command-line front-end for the rtfpad document core.

use clap::{Parser, Subcommand};
use rtfpad::common::encoding;
use rtfpad::rtf::{self, DecodeOptions, Document, MissingColorTable};
use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;

/// Command-line arguments for rtfpad
#[derive(Debug, Parser)]
#[command(name = "rtfpad")]
#[command(about = "Read and write minimal RTF documents")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the paragraphs of an RTF file as plain text
    Text {
        /// RTF file to read
        file: PathBuf,

        /// Text encoding of the file (label or codepage), defaults to the locale's
        #[arg(long)]
        encoding: Option<String>,

        /// Reject files without a color table instead of passing them through
        #[arg(long)]
        strict: bool,
    },
    /// Convert a UTF-8 text file to RTF, one paragraph per line
    Encode {
        /// Plain text input
        input: PathBuf,
        /// RTF output
        output: PathBuf,
    },
    /// Check whether a file carries the RTF signature
    Check {
        /// File to check
        file: PathBuf,
    },
}

fn run(args: Args) -> rtfpad::Result<bool> {
    match args.command {
        Command::Text {
            file,
            encoding: label,
            strict,
        } => {
            let mut options = match label {
                Some(label) => DecodeOptions::with_encoding(encoding::resolve_label(&label)?),
                None => DecodeOptions::default(),
            };
            if strict {
                options = options.missing_color_table(MissingColorTable::Reject);
            }

            let doc = rtf::load(&file, &options)?;
            println!("{}", doc.text());
            Ok(true)
        },
        Command::Encode { input, output } => {
            let text = std::fs::read_to_string(&input)?;
            let text = text.strip_suffix('\n').unwrap_or(&text);
            let doc = Document::from_plain_text(text);
            rtf::save(&doc, &output)?;
            Ok(true)
        },
        Command::Check { file } => {
            let mut reader = File::open(&file)?;
            let is_rtf = rtf::detection::has_rtf_signature_from_reader(&mut reader);
            println!("{}: {}", file.display(), if is_rtf { "RTF" } else { "not RTF" });
            Ok(is_rtf)
        },
    }
}

fn main() -> ExitCode {
    env_logger::init();

    match run(Args::parse()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("rtfpad: {err}");
            ExitCode::FAILURE
        },
    }
}
