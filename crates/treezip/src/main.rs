//! tz - navigate and edit JSON documents with a tree zipper

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::Value;
use treezip_core::config::Config;
use treezip_core::json;
use treezip_core::logging::{LogFormat, init_logging};
use treezip_core::{Direction, ZipTree, Zipper, zip};

mod script;

#[derive(Parser)]
#[command(name = "tz")]
#[command(version)]
#[command(about = "Navigate and edit JSON documents with a tree zipper", long_about = None)]
struct Cli {
    /// Config file (defaults to $TREEZIP_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Log format (pretty, json)
    #[arg(long, global = true)]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the focus at a path with its position markers
    Show {
        /// Input JSON file, or '-' for stdin
        input: String,

        /// Move script from the root
        #[arg(long, default_value = "")]
        path: String,
    },

    /// Print the JSON node at a path
    Get {
        /// Input JSON file, or '-' for stdin
        input: String,

        /// Move script from the root
        #[arg(long, default_value = "")]
        path: String,
    },

    /// Print the move script to the first node equal to a JSON value
    Find {
        /// Input JSON file, or '-' for stdin
        input: String,

        /// JSON value to look for
        #[arg(long)]
        equals: String,

        /// Move script to the starting position
        #[arg(long, default_value = "")]
        from: String,

        /// Search backwards in pre-order
        #[arg(long)]
        prev: bool,
    },

    /// Replace the node at a path and print the edited document
    Replace {
        /// Input JSON file, or '-' for stdin
        input: String,

        /// Move script from the root
        #[arg(long)]
        path: String,

        /// Replacement JSON value
        #[arg(long = "with")]
        with: String,
    },

    /// Remove the node at a path and print the edited document
    Remove {
        /// Input JSON file, or '-' for stdin
        input: String,

        /// Move script from the root
        #[arg(long)]
        path: String,
    },

    /// Print every position in pre-order as `depth<TAB>node`
    Walk {
        /// Input JSON file, or '-' for stdin
        input: String,

        /// Only print leaves
        #[arg(long)]
        leaves_only: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("tz: {err:#}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let mut config = Config::discover(cli.config.as_deref()).context("loading config")?;
    if let Some(level) = cli.log_level {
        config.log.level = level;
    }
    if let Some(format) = cli.log_format {
        config.log.format = format;
    }
    config.validate().context("invalid settings")?;
    init_logging(&config.log).context("initializing logging")?;

    match cli.command {
        Commands::Show { input, path } => {
            let z = navigate(&input, &path)?;
            println!("{}", z.display(&config.display));
        }
        Commands::Get { input, path } => {
            let z = navigate(&input, &path)?;
            print_json(&config, z.node())?;
        }
        Commands::Find {
            input,
            equals,
            from,
            prev,
        } => {
            let needle = parse_json(&equals).context("parsing --equals")?;
            let start = navigate(&input, &from)?;
            let direction = if prev { Direction::Prev } else { Direction::Next };
            match start.find(direction, |node| node == &needle) {
                Some(found) => println!("{}", script::for_route(&found.route())),
                None => {
                    tracing::info!(needle = %needle, "no matching node");
                    return Ok(ExitCode::from(1));
                }
            }
        }
        Commands::Replace { input, path, with } => {
            let value = parse_json(&with).context("parsing --with")?;
            let z = navigate(&input, &path)?;
            print_json(&config, &z.replace(value).root())?;
        }
        Commands::Remove { input, path } => {
            let z = navigate(&input, &path)?;
            let removed = z.remove().context("removing node")?;
            print_json(&config, &removed.root())?;
        }
        Commands::Walk { input, leaves_only } => {
            let doc = read_document(&input)?;
            let limit = config.cli.max_steps.unwrap_or(usize::MAX);
            for (seen, z) in zip(doc).iter().enumerate() {
                if seen == limit {
                    tracing::warn!(max_steps = limit, "walk stopped at step limit");
                    break;
                }
                if leaves_only && z.node().is_branch() {
                    continue;
                }
                println!("{}\t{}", z.depth(), z.node());
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn navigate(input: &str, path: &str) -> Result<Zipper<Value>> {
    let steps = script::parse(path).with_context(|| format!("parsing move script `{path}`"))?;
    let doc = read_document(input)?;
    script::run(zip(doc), &steps)
}

fn read_document(input: &str) -> Result<Value> {
    let doc = if input == "-" {
        json::read_document(std::io::stdin().lock())
    } else {
        json::load_document(Path::new(input))
    };
    doc.with_context(|| format!("reading {input}"))
}

fn parse_json(text: &str) -> Result<Value> {
    Ok(json::parse_document(text)?)
}

fn print_json(config: &Config, value: &Value) -> Result<()> {
    let text = if config.cli.pretty_json {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{text}");
    Ok(())
}
