use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthCommands;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthStatusResponse {
    authenticated: bool,
    username: String,
    generation_configured: bool,
}

/// Handle `synth auth <subcommand>`.
pub fn handle(action: &AuthCommands, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        AuthCommands::Login => ctx.lab.sign_in()?,
        AuthCommands::Logout => ctx.lab.sign_out()?,
        AuthCommands::Status => {}
    }

    output(
        &AuthStatusResponse {
            authenticated: ctx.lab.is_authenticated(),
            username: ctx.lab.profile().username.clone(),
            generation_configured: ctx.config.gemini.is_configured(),
        },
        flags.format,
    )
}
