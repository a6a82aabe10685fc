use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Doctor { action } => commands::doctor::handle(&action, ctx, flags).await,
        Commands::Logout => commands::session::logout(ctx, flags),
        Commands::Status => commands::session::status(ctx, flags),
        Commands::Health => commands::health::handle(ctx, flags).await,
        Commands::Couple { action } => commands::couple::handle(&action, ctx, flags).await,
        Commands::Dashboard => commands::dashboard::handle(ctx, flags).await,
        Commands::Assessment { action } => commands::assessment::handle(&action, ctx, flags).await,
    }
}
