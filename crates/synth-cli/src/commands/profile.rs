use synth_lab::ProfileUpdate;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{InterestCommands, ProfileCommands, ProfileSetArgs};
use crate::context::AppContext;
use crate::output::output;

/// Handle `synth profile`.
pub fn handle(
    action: &ProfileCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let lab = &mut ctx.lab;
    match action {
        ProfileCommands::Show => {}
        ProfileCommands::Set(args) => {
            if !lab.update_profile(profile_update(args))? {
                tracing::info!("profile unchanged");
            }
        }
        ProfileCommands::Interest { action } => {
            let changed = match action {
                InterestCommands::Add { interest } => lab.add_interest(interest)?,
                InterestCommands::Remove { interest } => lab.remove_interest(interest)?,
            };
            if !changed {
                tracing::info!("interests unchanged");
            }
        }
    }
    output(lab.profile(), flags.format)
}

fn profile_update(args: &ProfileSetArgs) -> ProfileUpdate {
    ProfileUpdate {
        username: args.username.clone(),
        avatar: args.avatar.clone(),
        interests: args.interests.clone(),
    }
}
