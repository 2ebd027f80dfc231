use clap::{Args, Subcommand};

/// Bookmark commands.
#[derive(Clone, Debug, Subcommand)]
pub enum BookmarkCommands {
    /// Bookmark an idea from the last batch, or un-bookmark it.
    Toggle {
        /// Idea ID.
        id: String,
    },
    /// List bookmarks.
    List,
    /// Show one bookmark.
    Get {
        /// Idea ID.
        id: String,
    },
    /// Remove a bookmark.
    Remove {
        /// Idea ID.
        id: String,
    },
    /// Replace the notes of a bookmark.
    Notes {
        /// Idea ID.
        id: String,
        /// New notes text.
        text: String,
    },
    /// Manage attached resources.
    Resource {
        #[command(subcommand)]
        action: ResourceCommands,
    },
}

#[derive(Clone, Debug, Subcommand)]
pub enum ResourceCommands {
    /// Attach a link or file reference.
    Add(ResourceAddArgs),
    /// Detach a resource.
    Remove {
        /// Idea ID of the bookmark.
        bookmark_id: String,
        /// Resource ID.
        resource_id: String,
    },
}

#[derive(Clone, Debug, Args)]
pub struct ResourceAddArgs {
    /// Idea ID of the bookmark.
    pub bookmark_id: String,
    /// Display name.
    #[arg(long)]
    pub name: String,
    /// URL or file location.
    #[arg(long)]
    pub url: String,
    /// link or file.
    #[arg(long, default_value = "link")]
    pub kind: String,
}
