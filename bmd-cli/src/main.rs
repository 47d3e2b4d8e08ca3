//! Command-line interface for bmd
//! This binary converts bmd course sources into HTML fragments, or dumps their parsed tree.
//!
//! Usage:
//!   bmd [`<path>`]                           - Render a file (or stdin) to HTML on stdout
//!   bmd `<path>` --format json|treeviz       - Dump the parsed tree instead
//!   bmd `<path>` --line-numbers              - Prefix each output line with its source line
//!   bmd `<path>` --output `<file>`           - Write to a file instead of stdout
//!
//! Settings come from the built-in defaults, then `./bmd.toml` if present, then the file given
//! with `--config`, then the command line flags.

use bmd_config::{ConfigError, Loader};
use bmd_parser::bmd::loader::{DocumentLoader, LoaderError};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use log::{debug, info, LevelFilter};
use std::io;
use std::path::PathBuf;
use std::process;
use thiserror::Error;

const LOCAL_CONFIG: &str = "bmd.toml";

#[derive(Debug, Error)]
enum CliError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Load(#[from] LoaderError),
    #[error("cannot write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

fn main() {
    let matches = build_command().get_matches();
    init_logging(matches.get_count("verbose"));

    if let Err(err) = run(&matches) {
        eprintln!("bmd: {}", err);
        process::exit(1);
    }
}

fn build_command() -> Command {
    Command::new("bmd")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Render Block-Markdown (bmd) course sources to HTML")
        .arg(
            Arg::new("path")
                .help("Path to the bmd file ('-' or absent reads stdin)")
                .index(1),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Write the result to this file instead of stdout")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (default from configuration: html)")
                .value_parser(["html", "json", "treeviz"]),
        )
        .arg(
            Arg::new("line-numbers")
                .long("line-numbers")
                .short('n')
                .help("Prefix every output line with the source line it came from")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("tab-width")
                .long("tab-width")
                .short('t')
                .help("Spaces per indentation level")
                .value_parser(value_parser!(u32)),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Additional configuration file (must exist)")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .help("Increase log verbosity (-v info, -vv debug, -vvv trace)")
                .action(ArgAction::Count),
        )
}

/// Install env_logger. `RUST_LOG` wins over the `-v` count.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let env = env_logger::Env::default().default_filter_or(level.as_str().to_lowercase());
    env_logger::Builder::from_env(env).init();
}

fn run(matches: &ArgMatches) -> Result<(), CliError> {
    let mut loader = Loader::new().with_optional_file(LOCAL_CONFIG);
    if let Some(path) = matches.get_one::<PathBuf>("config") {
        loader = loader.with_file(path);
    }
    if let Some(format) = matches.get_one::<String>("format") {
        loader = loader.set_override("output.format", format.as_str())?;
    }
    if matches.get_flag("line-numbers") {
        loader = loader.set_override("output.line_numbers", true)?;
    }
    if let Some(width) = matches.get_one::<u32>("tab-width") {
        loader = loader.set_override("parsing.tab_width", i64::from(*width))?;
    }
    let config = loader.build()?;
    debug!("effective configuration: {:?}", config);

    let document = match matches.get_one::<String>("path").map(String::as_str) {
        None | Some("-") => DocumentLoader::from_reader(io::stdin().lock())?,
        Some(path) => DocumentLoader::from_path(path)?,
    };

    let target = config.output.format.target();
    let rendered = document.render(target, &config.render_options())?;

    match matches.get_one::<PathBuf>("output") {
        Some(path) => {
            std::fs::write(path, &rendered).map_err(|source| CliError::Write {
                path: path.clone(),
                source,
            })?;
            info!("wrote {} byte(s) to {}", rendered.len(), path.display());
        }
        None => print!("{}", rendered),
    }
    Ok(())
}
