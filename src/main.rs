// Inherit lint configuration from lib.rs for consistency
#![allow(clippy::missing_errors_doc, clippy::needless_pass_by_value)]

use std::path::Path;

use clap::Parser;

use resume_ats::cli::commands::{Cli, Command};
use resume_ats::cli::output;
use resume_ats::config::Config;
use resume_ats::ingest::{DocumentExtractor, TextExtractor};
use resume_ats::models::{Analysis, Heading};
use resume_ats::parse;
use resume_ats::Analyzer;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            println!("{}", output::format_error(&e));
            std::process::exit(1);
        }
    }
}

/// Logs go to stderr; stdout carries the JSON result.
fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

type CmdResult = Result<bool, Box<dyn std::fmt::Display>>;

fn map_err(e: impl std::fmt::Display + 'static) -> Box<dyn std::fmt::Display> {
    Box::new(e.to_string())
}

/// Returns `Ok(false)` when the command printed an error record.
fn run(cli: Cli) -> CmdResult {
    let config = Config::load(cli.config.as_deref()).map_err(map_err)?;
    match cli.command {
        Command::Analyze {
            path,
            pretty,
            minified,
        } => {
            let pretty = if pretty || minified {
                pretty
            } else {
                config.settings.output.is_pretty()
            };
            cmd_analyze(&config, &path, pretty)
        }
        Command::Sections { path } => cmd_sections(&config, &path),
        Command::Headings => cmd_headings(),
        Command::Settings { save } => cmd_settings(&config, save),
    }
}

fn cmd_analyze(config: &Config, path: &Path, pretty: bool) -> CmdResult {
    let analysis = Analyzer::from_config(config).analyze(path);
    println!("{}", output::format(&analysis, pretty));
    Ok(!matches!(analysis, Analysis::Error(_)))
}

fn cmd_sections(config: &Config, path: &Path) -> CmdResult {
    let text = DocumentExtractor::from_config(config)
        .extract(path)
        .map_err(map_err)?;
    let sections = parse::segment(&text);
    println!(
        "{}",
        output::format(&sections, config.settings.output.is_pretty())
    );
    Ok(true)
}

fn cmd_headings() -> CmdResult {
    let headings: Vec<&str> = Heading::ALL.iter().map(Heading::as_str).collect();
    println!("{}", output::format_json(&headings));
    Ok(true)
}

fn cmd_settings(config: &Config, save: bool) -> CmdResult {
    if save {
        config.save_settings().map_err(map_err)?;
        tracing::info!(path = %config.config_path.display(), "saved settings");
    }
    println!(
        "{}",
        output::format(&config.settings, config.settings.output.is_pretty())
    );
    Ok(true)
}
