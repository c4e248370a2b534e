use anyhow::Result;
use clap::{Arg, Command};
use log::LevelFilter;
use std::path::PathBuf;

use comment_docs::{default_marker, extract_file, ExtractConfig, MARKER_ENV};

fn main() -> Result<()> {
    let matches = Command::new("comment_docs")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Extracts marked documentation blocks from source code comments")
        .arg(
            Arg::new("source")
                .required(true)
                .value_parser(clap::value_parser!(PathBuf))
                .help("Source file to scan"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .num_args(1)
                .value_parser(clap::value_parser!(PathBuf))
                .help("Write the extracted text to this file instead of stdout"),
        )
        .arg(
            Arg::new("marker")
                .short('m')
                .long("marker")
                .num_args(1)
                .help(format!(
                    "Marker a comment must contain (defaults to ${} or RAML)",
                    MARKER_ENV
                )),
        )
        .arg(
            Arg::new("regex")
                .long("regex")
                .help("Treat the marker as a regular expression")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose logging")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    let verbose = matches.get_flag("verbose");
    env_logger::Builder::new()
        .filter_level(if verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        })
        .parse_default_env()
        .init();

    let source = matches
        .get_one::<PathBuf>("source")
        .cloned()
        .unwrap_or_default();
    let config = ExtractConfig {
        source,
        output: matches.get_one::<PathBuf>("output").cloned(),
        marker: matches
            .get_one::<String>("marker")
            .cloned()
            .unwrap_or_else(default_marker),
        regex_marker: matches.get_flag("regex"),
        verbose,
    };
    log::debug!("Running with {:?}", config);

    extract_file(&config)?;
    Ok(())
}
