use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{info, warn};

use crate::rolls::RollSet;
use crate::solver::SearchEngine;
use crate::table::LookupTable;
use crate::target::Target;

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Sacred Geometry - find a dice-roll expression for a spell level
#[derive(Parser, Debug)]
#[command(name = "sacred-geometry")]
#[command(about = "Find an expression over the given dice rolls that reaches a spell level's target numbers")]
#[command(version)]
pub struct CliArgs {
    /// String of dice rolls, each 1-8 (e.g. "2835")
    pub rolls: String,

    /// Target spell level
    #[arg(value_parser = clap::value_parser!(u8).range(1..=9))]
    pub level: u8,

    /// Directory holding precomputed solution tables (sg0-sg9)
    #[arg(short, long)]
    pub tables: Option<PathBuf>,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let args = CliArgs::parse();

    init_logging(&args.log_level)?;

    let rolls = RollSet::parse(&args.rolls).context("Invalid roll string")?;
    let target = Target::from_level(args.level).context("Invalid spell level")?;

    let table = match &args.tables {
        Some(dir) => LookupTable::load(dir),
        None => LookupTable::empty(),
    };

    println!("Dice rolls are: {}", rolls);
    println!("Target numbers are: {:?}", target.values());
    info!(
        "Solving {} rolls for spell level {}",
        rolls.len(),
        args.level
    );

    let engine = SearchEngine::new();
    match engine.solve(&rolls, target, &table)? {
        Some(expression) => {
            println!("Result: {} = {}", expression, expression.value());
            Ok(())
        }
        None => {
            warn!("Search exhausted without a witness");
            println!("No result could be found.");
            Ok(())
        }
    }
}
