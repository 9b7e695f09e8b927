use clap::Parser;
use exam_seating::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Allocate(args) => cli::allocate::run(args).await,
        Command::Stats(args) => cli::stats::run(args).await,
        Command::Batch(args) => cli::batch::run(args).await,
    }
}
