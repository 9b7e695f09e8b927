//! Batch command - seats several plans concurrently

use std::path::{Path, PathBuf};

use clap::Args;
use tokio::task::JoinSet;
use tracing::{error, info};

use crate::config::AppConfig;
use crate::domain::{AllocationOptions, AllocationStrategy};
use crate::infrastructure::plan;

/// Arguments for the batch command
#[derive(Args, Clone, Debug)]
pub struct BatchArgs {
    /// Plan files; repeat the flag or pass several values
    #[arg(long = "plan", required = true, num_args = 1..)]
    pub plans: Vec<PathBuf>,

    /// Directory receiving one arrangement file per plan
    #[arg(long)]
    pub output_dir: PathBuf,

    /// Base seed; plan `i` is shuffled with `seed + i` (overrides config)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Seat students with special requirements in accessible rooms first
    #[arg(long)]
    pub special_requirements: bool,
}

/// Outcome of one successfully seated plan
#[derive(Debug, Clone)]
pub struct BatchOutcome {
    pub index: usize,
    pub plan: PathBuf,
    pub output: PathBuf,
    pub students: usize,
}

/// Run the batch command
pub async fn run(args: BatchArgs) -> anyhow::Result<()> {
    let config = super::bootstrap()?;

    let outcomes = execute(&args, &config).await?;
    info!(plans = outcomes.len(), dir = %args.output_dir.display(), "Batch complete");

    Ok(())
}

/// Seats every plan on its own task. Fails if any plan fails, after all
/// plans have been attempted.
pub async fn execute(args: &BatchArgs, config: &AppConfig) -> anyhow::Result<Vec<BatchOutcome>> {
    tokio::fs::create_dir_all(&args.output_dir).await?;

    let base_seed = args.seed.or(config.seating.seed);
    let mut tasks = JoinSet::new();

    for (index, plan_path) in args.plans.iter().enumerate() {
        let mut options = config.seating.allocation_options();
        if let Some(seed) = base_seed {
            options = options.with_seed(seed.wrapping_add(index as u64));
        }
        if args.special_requirements {
            options = options.with_strategy(AllocationStrategy::SpecialRequirements {
                facility: config.seating.accessible_facility.clone(),
            });
        }

        let plan_path = plan_path.clone();
        let output_dir = args.output_dir.clone();
        let pretty = config.seating.pretty_output;

        tasks.spawn(async move {
            let result = seat_plan(index, &plan_path, &output_dir, options, pretty).await;
            (plan_path, result)
        });
    }

    let mut outcomes = Vec::with_capacity(args.plans.len());
    let mut failures = 0usize;

    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((_, Ok(outcome))) => {
                info!(
                    plan = %outcome.plan.display(),
                    output = %outcome.output.display(),
                    students = outcome.students,
                    "Plan seated"
                );
                outcomes.push(outcome);
            }
            Ok((path, Err(e))) => {
                error!(plan = %path.display(), error = %e, "Plan failed");
                failures += 1;
            }
            Err(e) => {
                error!(error = %e, "Batch task failed");
                failures += 1;
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{} of {} plans failed", failures, args.plans.len());
    }

    outcomes.sort_by_key(|o| o.index);
    Ok(outcomes)
}

async fn seat_plan(
    index: usize,
    plan_path: &Path,
    output_dir: &Path,
    options: AllocationOptions,
    pretty: bool,
) -> anyhow::Result<BatchOutcome> {
    let seating_plan = plan::load_plan(plan_path).await?;
    let exam_id = seating_plan.exam.id().to_string();

    let service = crate::create_seating_service(seating_plan, options)?;
    let arrangement = service.generate(&exam_id).await?;

    let output = output_dir.join(format!("{}-{}.json", index + 1, exam_id));
    plan::write_arrangement(&output, &arrangement, pretty).await?;

    Ok(BatchOutcome {
        index,
        plan: plan_path.to_path_buf(),
        output,
        students: arrangement.total_students(),
    })
}
