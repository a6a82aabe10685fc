use crate::cli::GlobalFlags;
use crate::cli::subcommands::DoctorCommands;
use crate::context::AppContext;
use crate::output::output;
use crate::ui;
use crate::workflow::doctor;

pub async fn handle(
    action: &DoctorCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        DoctorCommands::Register { name, email } => {
            let registered = doctor::register(&ctx.client, &mut ctx.session, name, email).await?;
            ui::notice(&format!("Doctor registered! ID: {}", registered.id));
            output(&registered, flags.format)
        }
        DoctorCommands::Login { email } => {
            let found = doctor::login(&ctx.client, &mut ctx.session, email).await?;
            ui::notice(&format!("Welcome back, Dr. {}!", found.name));
            output(&found, flags.format)
        }
    }
}
