use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "collabsync",
    version,
    about = "Risk and readiness scoring for research collaborations"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Flag risky clauses in an agreement document.
    Agreement(AgreementArgs),
    /// Score the health of an active collaboration.
    Collaboration(CollaborationArgs),
    /// Derive readiness metrics for a project.
    Quantum(QuantumArgs),
    /// Emit simulated live activity events.
    Pulse(PulseArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ReportArgs {
    /// Write the JSON report to this path.
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Print the JSON report to stdout instead of a text summary.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct AgreementArgs {
    #[arg(long)]
    pub input: PathBuf,

    #[command(flatten)]
    pub report: ReportArgs,
}

#[derive(Args, Debug, Clone)]
pub struct CollaborationArgs {
    /// JSON file with camelCase collaboration metrics.
    #[arg(long, conflicts_with_all = [
        "days_since_last_milestone",
        "budget_utilization",
        "milestone_progress",
        "communication_frequency",
        "sentiment_score",
    ])]
    pub input: Option<PathBuf>,

    #[arg(long)]
    pub days_since_last_milestone: Option<u32>,

    #[arg(long)]
    pub budget_utilization: Option<f64>,

    #[arg(long)]
    pub milestone_progress: Option<f64>,

    #[arg(long)]
    pub communication_frequency: Option<f64>,

    #[arg(long, allow_negative_numbers = true)]
    pub sentiment_score: Option<f64>,

    #[command(flatten)]
    pub report: ReportArgs,
}

#[derive(Args, Debug, Clone)]
pub struct QuantumArgs {
    /// JSON project record with optional `team_size` and `funding_allocated`.
    #[arg(long)]
    pub input: Option<PathBuf>,

    #[arg(long)]
    pub team_size: Option<u32>,

    #[arg(long)]
    pub funding_allocated: Option<f64>,

    #[command(flatten)]
    pub report: ReportArgs,
}

#[derive(Args, Debug, Clone)]
pub struct PulseArgs {
    #[arg(long, default_value_t = 1)]
    pub count: usize,

    /// Seed the generator for a reproducible message sequence.
    #[arg(long)]
    pub seed: Option<u64>,
}
