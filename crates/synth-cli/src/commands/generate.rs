use anyhow::Context;
use serde::Serialize;
use synth_core::entities::ResearchIdea;
use synth_core::enums::Creativity;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::GenerateArgs;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

#[derive(Debug, Serialize)]
struct GenerateResponse<'a> {
    fields: &'a [String],
    count: u32,
    creativity: Creativity,
    frameworks: Vec<String>,
    ideas: &'a [ResearchIdea],
}

/// Handle `synth generate`.
pub async fn handle(
    args: &GenerateArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let lab = &mut ctx.lab;
    lab.set_selected_fields(&args.fields);
    if let Some(count) = args.count {
        lab.set_count(count)?;
    }
    if let Some(creativity) = args.creativity.as_deref() {
        lab.set_creativity(creativity.parse()?);
    }

    let spinner = Progress::spinner(&format!(
        "Synthesizing {} ideas from {}",
        lab.count(),
        lab.selected_fields().join(" + ")
    ));
    let failure = lab.generate().await.err();
    // A failed call clears the displayed batch; the saved copy must follow.
    let saved = lab.remember_ideas();

    if let Some(error) = failure {
        spinner.finish_err("generation failed");
        if let Err(save_error) = saved {
            tracing::warn!(error = %save_error, "failed to clear the saved batch");
        }
        return Err(error.into());
    }
    spinner.finish_clear();
    saved.context("failed to save the generated batch")?;

    output(
        &GenerateResponse {
            fields: lab.selected_fields(),
            count: lab.count(),
            creativity: lab.creativity(),
            frameworks: lab.active_framework_names(),
            ideas: lab.ideas(),
        },
        flags.format,
    )
}
