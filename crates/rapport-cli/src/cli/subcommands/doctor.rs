use clap::Subcommand;

/// Doctor account commands.
#[derive(Clone, Debug, Subcommand)]
pub enum DoctorCommands {
    /// Register a new doctor and log in as them.
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
    },
    /// Log in as an existing doctor.
    Login {
        #[arg(long)]
        email: String,
    },
}
