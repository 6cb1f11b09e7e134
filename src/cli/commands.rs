use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "resume-ats",
    version,
    about = "Parse a resume into structured fields and score it the way an ATS might",
    after_help = "Sections are recognised only by their canonical headings, each on a line \
                  of its own (see `resume-ats headings`). PDF files are read with a PDF text \
                  extractor; .txt/.text/.md files are read as plain text."
)]
pub struct Cli {
    /// Settings file (default: ./resume-ats.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log pipeline progress to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Extract fields from a resume and score it.
    ///
    /// Prints the resume record as JSON, or `{"error": ...}` and exits with
    /// status 1 when the document cannot be processed.
    Analyze {
        /// Resume document (PDF or plain text)
        path: PathBuf,
        /// Pretty-print the JSON output
        #[arg(long, conflicts_with = "minified")]
        pretty: bool,
        /// Print the JSON output on one line
        #[arg(long)]
        minified: bool,
    },

    /// Show the canonical sections found in a resume
    Sections {
        /// Resume document (PDF or plain text)
        path: PathBuf,
    },

    /// List the canonical section headings
    Headings,

    /// Show the effective settings as JSON
    Settings {
        /// Write the effective settings to the config file
        #[arg(long)]
        save: bool,
    },
}
