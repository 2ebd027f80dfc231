use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a gated command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Generate(args) => commands::generate::handle(&args, ctx, flags).await,
        Commands::Ideas => commands::ideas::handle(ctx, flags),
        Commands::Bookmark { action } => commands::bookmark::handle(&action, ctx, flags),
        Commands::Profile { action } => commands::profile::handle(&action, ctx, flags),
        Commands::Framework { action } => commands::framework::handle(&action, ctx, flags),
        Commands::Fields(_) | Commands::Schema(_) | Commands::Auth { .. } => {
            unreachable!("fields/schema/auth are pre-dispatched in main")
        }
    }
}
