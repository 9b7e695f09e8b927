//! CLI module for the exam seating allocator
//!
//! Provides subcommands:
//! - `allocate`: seat one plan and write the arrangement
//! - `stats`: summarise a written arrangement
//! - `batch`: seat several plans concurrently

pub mod allocate;
pub mod batch;
pub mod stats;

use clap::{Parser, Subcommand};

use crate::config::AppConfig;
use crate::infrastructure::logging;

/// Exam seating - spread subjects apart and fill rooms by capacity
#[derive(Parser)]
#[command(name = "exam-seating")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Allocate seats for a single plan
    Allocate(allocate::AllocateArgs),

    /// Print statistics for a written arrangement
    Stats(stats::StatsArgs),

    /// Allocate seats for several plans concurrently
    Batch(batch::BatchArgs),
}

/// Loads `.env` and configuration, then installs logging
fn bootstrap() -> anyhow::Result<AppConfig> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_default();
    logging::init_logging(&config.logging)?;
    Ok(config)
}
