use clap::{Args, Subcommand};

use crate::cli::subcommands::{
    AuthCommands, BookmarkCommands, FrameworkCommands, ProfileCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// List the academic field catalog.
    Fields(FieldsArgs),
    /// Synthesize research ideas from two or more fields.
    Generate(GenerateArgs),
    /// Show the last generated batch.
    Ideas,
    /// Lab journal: bookmarked ideas.
    Bookmark {
        #[command(subcommand)]
        action: BookmarkCommands,
    },
    /// Researcher profile.
    Profile {
        #[command(subcommand)]
        action: ProfileCommands,
    },
    /// Intellectual frameworks applied as lenses.
    Framework {
        #[command(subcommand)]
        action: FrameworkCommands,
    },
    /// Session gate.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Print JSON schemas for stored and generated records.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct FieldsArgs {
    /// Case-insensitive substring filter.
    #[arg(short, long)]
    pub search: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct GenerateArgs {
    /// Field to synthesize (repeat; at least two).
    #[arg(long = "field", value_name = "FIELD")]
    pub fields: Vec<String>,
    /// Number of ideas (1-10). Defaults to config.
    #[arg(short, long)]
    pub count: Option<u32>,
    /// conservative, balanced, or radical. Defaults to config.
    #[arg(long)]
    pub creativity: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Schema name. Lists all names when omitted.
    pub name: Option<String>,
}
