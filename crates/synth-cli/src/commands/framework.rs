use serde_json::json;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::FrameworkCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `synth framework`.
pub fn handle(
    action: &FrameworkCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let lab = &mut ctx.lab;
    match action {
        FrameworkCommands::List => output(&json!({ "frameworks": lab.frameworks() }), flags.format),
        FrameworkCommands::Toggle { id } => {
            let active = lab.toggle_framework_active(id)?;
            output(&json!({ "id": id, "active": active }), flags.format)
        }
        FrameworkCommands::Add(args) => {
            let framework = lab.add_framework(&args.name, &args.description)?;
            output(framework, flags.format)
        }
    }
}
