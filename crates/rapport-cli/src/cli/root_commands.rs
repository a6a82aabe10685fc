use clap::Subcommand;

use crate::cli::subcommands::{AssessmentCommands, CoupleCommands, DoctorCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Register or log in as a doctor.
    Doctor {
        #[command(subcommand)]
        action: DoctorCommands,
    },
    /// Forget the logged-in doctor and any selection.
    Logout,
    /// Show the identifiers held in the session.
    Status,
    /// Check that the backend is reachable.
    Health,
    /// Couples (patient records).
    Couple {
        #[command(subcommand)]
        action: CoupleCommands,
    },
    /// List the logged-in doctor's couples with their latest prediction.
    Dashboard,
    /// Assessment authoring and prediction.
    Assessment {
        #[command(subcommand)]
        action: AssessmentCommands,
    },
}
