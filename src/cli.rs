mod estimate;
mod snapshot;
mod survey;
mod yard;

use clap::{Parser, Subcommand};

pub use self::{
    estimate::{EstimateArgs, estimate},
    snapshot::{SnapshotArgs, snapshot},
    survey::{SurveyArgs, survey},
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Main command: pull the fleet, optimise every rental, and render the cost report.
    #[clap(name = "survey")]
    Survey(Box<SurveyArgs>),

    /// Quote one rate card without touching the yard service.
    #[clap(name = "estimate")]
    Estimate(Box<EstimateArgs>),

    /// Save the fleet from the yard service into a local depot file.
    #[clap(name = "snapshot")]
    Snapshot(Box<SnapshotArgs>),
}
