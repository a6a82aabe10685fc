use clap::Subcommand;
use rapport_core::ids::CoupleId;

/// Couple commands.
#[derive(Clone, Debug, Subcommand)]
pub enum CoupleCommands {
    /// Add a couple under the logged-in doctor.
    Add {
        #[arg(long)]
        partner_a: String,
        #[arg(long)]
        partner_b: String,
    },
    /// Select a couple to begin a new assessment for.
    Select { couple_id: CoupleId },
}
