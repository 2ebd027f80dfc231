use serde_json::json;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `synth ideas`: the last generated batch with bookmark state.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let ideas = ctx
        .lab
        .ideas()
        .iter()
        .map(|idea| {
            let mut value = serde_json::to_value(idea)?;
            value["bookmarked"] = json!(ctx.lab.is_bookmarked(&idea.id));
            Ok(value)
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    output(&json!({ "ideas": ideas }), flags.format)
}
