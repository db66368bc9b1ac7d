use crate::cli::GlobalFlags;
use crate::cli::root_commands::AskArgs;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

/// Handle `sully ask`.
pub async fn handle(
    args: &AskArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let progress = Progress::spinner("Researching with search grounding...");
    let advice = match ctx.pipeline.ask_advisor(&ctx.store, &args.query).await {
        Ok(advice) => {
            progress.finish_clear();
            advice
        }
        Err(error) => {
            progress.finish_err("advisor failed");
            return Err(error.into());
        }
    };
    output(
        &serde_json::json!({
            "text": advice.text,
            "sources": advice.sources,
            "minitasks": advice.minitasks,
        }),
        flags.format,
    )
}
