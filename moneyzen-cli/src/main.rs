//! moneyzen CLI - bank statement import
//!
//! Usage:
//!   moneyzen parse --file extras.txt [--json]
//!   moneyzen learn --description "LIDL ROMANIA" --category Food
//!   moneyzen suggest "MEGA IMAGE 123"
//!   moneyzen banks
//!   moneyzen config init

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use moneyzen_finance::{JsonFileStorage, StatementParser};
use moneyzen_ingest::{ParsedTransaction, PlainTextExtractor};
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod config;
mod state;

#[derive(Parser, Debug)]
#[command(
    name = "moneyzen",
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("MONEYZEN_BUILD_SHA"), ")"),
    about = "Import Romanian bank statements into categorized transactions"
)]
struct Cli {
    /// Debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse a statement text export and print its transactions
    Parse {
        #[arg(long)]
        file: PathBuf,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Remember a category for an exact description
    Learn {
        #[arg(long)]
        description: String,

        #[arg(long)]
        category: String,
    },

    /// Show the category that would be suggested for a description
    Suggest { description: String },

    /// List supported banks and how they are recognized
    Banks,

    /// Configuration file commands
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write ~/.moneyzen/config.toml with defaults
    Init,

    /// Print the effective configuration
    Show,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let cfg = config::load_config()?;

    // Priority: RUST_LOG env var > --verbose flag > config level
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new(&cfg.logging.level)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    match cli.command {
        Command::Parse { file, json } => {
            let parser = build_parser(&cfg)?;
            let txns = parse_file(&parser, &file).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&txns)?);
            } else {
                print_table(&txns);
            }
        }

        Command::Learn { description, category } => {
            let parser = build_parser(&cfg)?;
            parser.learn_pattern(&description, &category);
            println!(
                "Learned: \"{}\" -> {} ({} patterns)",
                description.trim().to_lowercase(),
                category,
                parser.learned_count()
            );
        }

        Command::Suggest { description } => {
            let parser = build_parser(&cfg)?;
            match parser.suggest_category(&description) {
                Some(s) => println!("{} ({}%)", s.category, s.confidence),
                None => println!("(no suggestion)"),
            }
        }

        Command::Banks => {
            let parser = build_parser(&cfg)?;
            for p in parser.profiles() {
                println!("{:<20} {}", p.name, p.identifiers.join(" | "));
            }
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config()?,
            ConfigCommand::Show => print!("{}", toml::to_string_pretty(&cfg)?),
        },
    }

    Ok(())
}

fn build_parser(cfg: &config::Config) -> Result<StatementParser> {
    let dir = state::data_dir(cfg)?;
    debug!(data_dir = %dir.display(), "using learned pattern storage");
    StatementParser::new(Box::new(JsonFileStorage::new(dir)), Box::new(PlainTextExtractor))
}

async fn parse_file(parser: &StatementParser, path: &Path) -> Result<Vec<ParsedTransaction>> {
    let raw = tokio::fs::read(path)
        .await
        .with_context(|| format!("read {}", path.display()))?;
    let txns = parser
        .parse_document(&raw)
        .with_context(|| format!("parsing {}", path.display()))?;
    Ok(txns)
}

fn print_table(txns: &[ParsedTransaction]) {
    println!("Parsed {} transactions\n", txns.len());
    for t in txns {
        let suggestion = match (&t.suggested_category, t.confidence) {
            (Some(c), Some(conf)) => format!("{c} ({conf}%)"),
            _ => "-".to_string(),
        };
        println!(
            "{:<10}  {:<7}  {:>12.2}  {:<22}  {}",
            t.date,
            t.kind.as_str(),
            t.amount,
            suggestion,
            t.description
        );
    }

    let expenses: f64 = txns.iter().filter(|t| t.is_expense()).map(|t| t.amount).sum();
    let income: f64 = txns.iter().filter(|t| !t.is_expense()).map(|t| t.amount).sum();
    println!("\nIncome: {income:.2}  Expenses: {expenses:.2}");
}
