use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct HealthResponse<'a> {
    base_url: &'a str,
    message: String,
}

pub async fn handle(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let status = ctx.client.health().await?;
    output(
        &HealthResponse {
            base_url: ctx.client.base_url(),
            message: status.message,
        },
        flags.format,
    )
}
