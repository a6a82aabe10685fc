use clap::{Args, Subcommand};
use rapport_core::enums::Partner;
use rapport_core::ids::{AssessmentId, CoupleId};

/// Assessment workflow commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AssessmentCommands {
    /// Open an assessment for the selected (or given) couple.
    Create {
        #[arg(long)]
        title: Option<String>,
        /// Couple to assess (defaults to the selected couple).
        #[arg(long)]
        couple: Option<CoupleId>,
    },
    /// Add one question and its answer to the current assessment.
    AddItem(AddItemArgs),
    /// Request a prediction for the current (or given) assessment.
    Predict {
        #[arg(long)]
        assessment: Option<AssessmentId>,
    },
}

#[derive(Clone, Debug, Args)]
pub struct AddItemArgs {
    /// Question text; also stored on the answer.
    #[arg(long)]
    pub text: String,
    /// Answer value, 0 to 4.
    #[arg(long, allow_hyphen_values = true)]
    pub value: i64,
    /// Partner the answer pertains to: A or B.
    #[arg(long)]
    pub partner: Partner,
    /// Assessment to add to (defaults to the selected assessment).
    #[arg(long)]
    pub assessment: Option<AssessmentId>,
}
