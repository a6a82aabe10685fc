use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output_dashboard;
use crate::workflow::dashboard::load_dashboard;

pub async fn handle(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let view = load_dashboard(&ctx.client, &ctx.session, &ctx.config.web.frontend_url).await?;
    output_dashboard(&view, flags.format)
}
