//! Stats command - summarises a written arrangement

use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use crate::domain::allocation::{adjacent_conflicts, room_occupancy};
use crate::domain::{statistics, RoomOccupancy, SeatingArrangement, SeatingStatistics};
use crate::infrastructure::plan::{self, SeatingPlan};

/// Arguments for the stats command
#[derive(Args, Clone, Debug)]
pub struct StatsArgs {
    /// Arrangement file written by `allocate` or `batch`
    #[arg(long)]
    pub arrangement: PathBuf,

    /// Plan the arrangement was generated from; adds occupancy and conflicts
    #[arg(long)]
    pub plan: Option<PathBuf>,

    /// Emit compact JSON
    #[arg(long)]
    pub compact: bool,
}

/// Statistics output, extended with plan-dependent figures when available
#[derive(Debug, Serialize)]
pub struct StatsReport {
    #[serde(flatten)]
    pub statistics: SeatingStatistics,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occupancy: Option<Vec<RoomOccupancy>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adjacent_conflicts: Option<usize>,
}

impl StatsReport {
    pub fn build(arrangement: &SeatingArrangement, plan: Option<&SeatingPlan>) -> Self {
        Self {
            statistics: statistics(arrangement),
            occupancy: plan.map(|p| room_occupancy(arrangement, &p.rooms)),
            adjacent_conflicts: plan.map(|p| adjacent_conflicts(arrangement, &p.students)),
        }
    }
}

/// Run the stats command
pub async fn run(args: StatsArgs) -> anyhow::Result<()> {
    let config = super::bootstrap()?;

    let arrangement = plan::load_arrangement(&args.arrangement).await?;
    let seating_plan = match &args.plan {
        Some(path) => Some(plan::load_plan(path).await?),
        None => None,
    };

    let report = StatsReport::build(&arrangement, seating_plan.as_ref());
    let pretty = config.seating.pretty_output && !args.compact;
    println!("{}", plan::to_json(&report, pretty)?);

    Ok(())
}
