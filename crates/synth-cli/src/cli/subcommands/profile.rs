use clap::{Args, Subcommand};

/// Profile commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ProfileCommands {
    /// Show the profile.
    Show,
    /// Update profile fields.
    Set(ProfileSetArgs),
    /// Manage research interests.
    Interest {
        #[command(subcommand)]
        action: InterestCommands,
    },
}

#[derive(Clone, Debug, Args)]
pub struct ProfileSetArgs {
    #[arg(long)]
    pub username: Option<String>,
    /// Avatar as a data URI (empty string clears it).
    #[arg(long)]
    pub avatar: Option<String>,
    /// Replace all interests (repeat).
    #[arg(long = "interest", value_name = "INTEREST")]
    pub interests: Option<Vec<String>>,
}

#[derive(Clone, Debug, Subcommand)]
pub enum InterestCommands {
    /// Add an interest.
    Add {
        interest: String,
    },
    /// Remove an interest.
    Remove {
        interest: String,
    },
}
