//! Allocate command - seats one plan

use std::path::PathBuf;

use clap::Args;
use tracing::info;

use crate::config::{AppConfig, SeatingConfig};
use crate::domain::{statistics, AllocationOptions, AllocationStrategy, SeatingArrangement};
use crate::infrastructure::plan;

/// Arguments for the allocate command
#[derive(Args, Clone, Debug)]
pub struct AllocateArgs {
    /// Plan file with the exam, students and rooms
    #[arg(long)]
    pub plan: PathBuf,

    /// Shuffle seed (overrides config)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Seat students with special requirements in accessible rooms first
    #[arg(long)]
    pub special_requirements: bool,

    /// Facility that marks a room as accessible (overrides config)
    #[arg(long)]
    pub facility: Option<String>,

    /// Write the arrangement here instead of stdout
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Emit compact JSON
    #[arg(long)]
    pub compact: bool,
}

impl AllocateArgs {
    /// Config defaults with command-line overrides applied
    pub fn allocation_options(&self, seating: &SeatingConfig) -> AllocationOptions {
        let mut options = seating.allocation_options();

        if let Some(seed) = self.seed {
            options = options.with_seed(seed);
        }

        if self.special_requirements || self.facility.is_some() {
            let facility = self
                .facility
                .clone()
                .unwrap_or_else(|| seating.accessible_facility.clone());
            options = options.with_strategy(AllocationStrategy::SpecialRequirements { facility });
        }

        options
    }
}

/// Run the allocate command
pub async fn run(args: AllocateArgs) -> anyhow::Result<()> {
    let config = super::bootstrap()?;

    let arrangement = execute(&args, &config).await?;
    let pretty = config.seating.pretty_output && !args.compact;

    match &args.output {
        Some(path) => {
            plan::write_arrangement(path, &arrangement, pretty).await?;
            info!(path = %path.display(), "Arrangement written");
        }
        None => println!("{}", plan::to_json(&arrangement, pretty)?),
    }

    Ok(())
}

/// Loads the plan and generates its arrangement
pub async fn execute(args: &AllocateArgs, config: &AppConfig) -> anyhow::Result<SeatingArrangement> {
    let seating_plan = plan::load_plan(&args.plan).await?;
    let exam_id = seating_plan.exam.id().to_string();

    let options = args.allocation_options(&config.seating);
    let service = crate::create_seating_service(seating_plan, options)?;
    let arrangement = service.generate(&exam_id).await?;

    let stats = statistics(&arrangement);
    info!(
        exam = %exam_id,
        students = stats.total_students,
        rooms = stats.total_rooms,
        average_per_room = stats.average_per_room,
        "Allocation complete"
    );

    Ok(arrangement)
}
