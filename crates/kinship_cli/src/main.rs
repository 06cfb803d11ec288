//! CLI driver over the kinship core facade.
//!
//! # Responsibility
//! - Run kinship queries from a terminal with deterministic output.
//! - Verify `kinship_core` wiring independently of the FFI runtime.
//!
//! Logging is opt-in through `KINSHIP_LOG_DIR` (absolute path) and
//! `KINSHIP_LOG_LEVEL`.

use clap::{Parser, Subcommand};
use kinship_core::{
    default_log_level, get_all_relations, get_relation_info, get_relations_by_generation,
    get_relations_by_type, init_logging, is_reciprocal, resolve, reverse_query, segment_chain,
    simplify_chain, CALCULATION_ERROR, UNKNOWN_RELATION,
};
use std::process::ExitCode;

const LOG_DIR_ENV: &str = "KINSHIP_LOG_DIR";
const LOG_LEVEL_ENV: &str = "KINSHIP_LOG_LEVEL";

#[derive(Parser)]
#[command(name = "kinship")]
#[command(about = "Resolve Chinese kinship titles from relation chains")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve a chain, e.g. `resolve 爸爸 姐姐 儿子` or `resolve 爸爸的姐姐的儿子`
    Resolve {
        /// Relation words or whole phrases
        words: Vec<String>,
        /// Print every candidate instead of the first
        #[arg(long)]
        all: bool,
    },
    /// List the chains known to produce a title
    Reverse { title: String },
    /// Check whether two titles are each other's inverse
    Reciprocal { a: String, b: String },
    /// Print a title's metadata as JSON
    Info { title: String },
    /// List titles, optionally filtered
    List {
        #[arg(long, allow_hyphen_values = true)]
        generation: Option<i32>,
        /// direct | collateral | spouse | in_law
        #[arg(long = "type")]
        category: Option<String>,
    },
    /// Collapse a known trailing compound without evaluating the chain
    Simplify { words: Vec<String> },
}

fn main() -> ExitCode {
    if let Err(err) = init_logging_from_env() {
        eprintln!("warning: logging disabled: {err}");
    }

    let cli = Cli::parse();
    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging_from_env() -> Result<(), String> {
    let Ok(log_dir) = std::env::var(LOG_DIR_ENV) else {
        return Ok(());
    };
    let level =
        std::env::var(LOG_LEVEL_ENV).unwrap_or_else(|_| default_log_level().to_string());
    init_logging(level.as_str(), log_dir.as_str())
}

fn run(command: Command) -> Result<(), String> {
    match command {
        Command::Resolve { words, all } => {
            let chain = words_to_chain(&words);
            match resolve(&chain) {
                Ok(resolution) if all => println!("{}", resolution.candidates().join("或")),
                Ok(resolution) => println!("{}", resolution.primary()),
                Err(err) if err.is_internal() => return Err(format!("{CALCULATION_ERROR}: {err}")),
                Err(_) => println!("{UNKNOWN_RELATION}"),
            }
        }
        Command::Reverse { title } => {
            let chains = reverse_query(title.as_str());
            if chains.is_empty() {
                return Err(format!("{UNKNOWN_RELATION}: {title}"));
            }
            for chain in chains {
                println!("{}", display_chain(&chain));
            }
        }
        Command::Reciprocal { a, b } => println!("{}", is_reciprocal(a.as_str(), b.as_str())),
        Command::Info { title } => {
            let atom = get_relation_info(title.as_str())
                .ok_or_else(|| format!("{UNKNOWN_RELATION}: {title}"))?;
            let json = serde_json::to_string_pretty(atom)
                .map_err(|err| format!("failed to encode `{title}`: {err}"))?;
            println!("{json}");
        }
        Command::List {
            generation,
            category,
        } => {
            let titles = match (generation, category) {
                (Some(generation), None) => get_relations_by_generation(generation),
                (None, Some(category)) => get_relations_by_type(category.as_str()),
                (None, None) => get_all_relations(),
                (Some(_), Some(_)) => {
                    return Err("use either --generation or --type, not both".to_string())
                }
            };
            println!("{}", titles.join(" "));
        }
        Command::Simplify { words } => {
            println!("{}", display_chain(&simplify_chain(&words_to_chain(&words))));
        }
    }
    Ok(())
}

/// Splits every argument on connectors so both `爸爸 姐姐` and `爸爸的姐姐` work.
fn words_to_chain(words: &[String]) -> Vec<String> {
    words
        .iter()
        .flat_map(|word| segment_chain(word.as_str()))
        .collect()
}

fn display_chain(chain: &[String]) -> String {
    if chain.is_empty() {
        return "(自己)".to_string();
    }
    chain.join("的")
}
