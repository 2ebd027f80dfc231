use anyhow::Context;
use serde_json::json;
use synth_core::entities::Resource;
use synth_core::enums::ResourceKind;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{BookmarkCommands, ResourceAddArgs, ResourceCommands};
use crate::context::AppContext;
use crate::output::output;

/// Handle `synth bookmark`.
pub fn handle(
    action: &BookmarkCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let lab = &mut ctx.lab;
    match action {
        BookmarkCommands::Toggle { id } => {
            let bookmarked = lab.toggle_bookmark_by_id(id)?;
            output(&json!({ "id": id, "bookmarked": bookmarked }), flags.format)
        }
        BookmarkCommands::List => output(&json!({ "bookmarks": lab.bookmarks() }), flags.format),
        BookmarkCommands::Get { id } => {
            let bookmark = lab
                .bookmark(id)
                .with_context(|| format!("bookmark not found: {id}"))?;
            output(bookmark, flags.format)
        }
        BookmarkCommands::Remove { id } => {
            let removed = lab.remove_bookmark(id)?;
            output(&json!({ "id": id, "removed": removed }), flags.format)
        }
        BookmarkCommands::Notes { id, text } => {
            if !lab.update_bookmark_notes(id, text)? {
                anyhow::bail!("bookmark not found: {id}");
            }
            output(&json!({ "id": id, "notes": text }), flags.format)
        }
        BookmarkCommands::Resource { action } => handle_resource(action, ctx, flags),
    }
}

fn handle_resource(
    action: &ResourceCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ResourceCommands::Add(args) => add_resource(args, ctx, flags),
        ResourceCommands::Remove {
            bookmark_id,
            resource_id,
        } => {
            if !ctx.lab.is_bookmarked(bookmark_id) {
                anyhow::bail!("bookmark not found: {bookmark_id}");
            }
            let removed = ctx.lab.remove_resource(bookmark_id, resource_id)?;
            output(
                &json!({ "bookmark_id": bookmark_id, "resource_id": resource_id, "removed": removed }),
                flags.format,
            )
        }
    }
}

fn add_resource(
    args: &ResourceAddArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let kind: ResourceKind = args.kind.parse()?;
    let resource = Resource::new(&args.name, kind, &args.url);
    if !ctx.lab.add_resource(&args.bookmark_id, resource.clone())? {
        anyhow::bail!("bookmark not found: {}", args.bookmark_id);
    }
    output(
        &json!({ "bookmark_id": args.bookmark_id, "resource": resource }),
        flags.format,
    )
}
