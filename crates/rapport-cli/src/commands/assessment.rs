use rapport_core::entities::PredictionOutcome;
use rapport_core::enums::PredictionClass;
use rapport_core::stats::{PLACEHOLDER, format_probability};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{AddItemArgs, AssessmentCommands};
use crate::context::AppContext;
use crate::output::{output, output_verbatim};
use crate::progress::Progress;
use crate::ui;
use crate::workflow::assessment::{self, ItemInput};

pub async fn handle(
    action: &AssessmentCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        AssessmentCommands::Create { title, couple } => {
            let created = assessment::create_assessment(
                &ctx.client,
                &mut ctx.session,
                *couple,
                title.as_deref(),
            )
            .await?;
            ui::notice(&format!("Assessment created with ID {}", created.id));
            output(&created, flags.format)
        }
        AssessmentCommands::AddItem(args) => add_item(args, ctx, flags).await,
        AssessmentCommands::Predict { assessment } => {
            let spinner = Progress::spinner("Waiting for prediction...");
            let raw = match assessment::predict(&ctx.client, &ctx.session, *assessment).await {
                Ok(raw) => {
                    spinner.finish_clear();
                    raw
                }
                Err(error) => {
                    spinner.finish_err("prediction failed");
                    return Err(error.into());
                }
            };

            let outcome = PredictionOutcome::from_raw(&raw);
            ui::notice(&format!(
                "Prediction: {} ({})",
                format_probability(outcome.proba),
                outcome.class.map_or(PLACEHOLDER, PredictionClass::label)
            ));
            output_verbatim(&raw, flags.format)
        }
    }
}

async fn add_item(args: &AddItemArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let input = ItemInput {
        text: args.text.clone(),
        value: args.value,
        partner: args.partner,
    };
    let added = assessment::add_item(&ctx.client, &ctx.session, args.assessment, input).await?;
    ui::notice("Question + Answer added successfully!");
    output(&added, flags.format)
}
