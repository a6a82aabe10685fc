use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::CoupleCommands;
use crate::context::AppContext;
use crate::output::output;
use crate::ui;
use crate::workflow::couple;

#[derive(Serialize)]
struct CoupleSelected {
    couple_id: rapport_core::ids::CoupleId,
    next: &'static str,
}

pub async fn handle(
    action: &CoupleCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        CoupleCommands::Add {
            partner_a,
            partner_b,
        } => {
            let created = couple::add_couple(&ctx.client, &ctx.session, partner_a, partner_b).await?;
            ui::notice("Couple added successfully!");
            output(&created, flags.format)
        }
        CoupleCommands::Select { couple_id } => {
            let couple_id = couple::select_couple(&mut ctx.session, *couple_id)?;
            output(
                &CoupleSelected {
                    couple_id,
                    next: "rapport assessment create --title <title>",
                },
                flags.format,
            )
        }
    }
}
