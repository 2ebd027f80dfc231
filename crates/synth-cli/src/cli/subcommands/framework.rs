use clap::{Args, Subcommand};

/// Framework commands.
#[derive(Clone, Debug, Subcommand)]
pub enum FrameworkCommands {
    /// List frameworks.
    List,
    /// Activate or deactivate a framework.
    Toggle {
        /// Framework ID.
        id: String,
    },
    /// Add a custom framework (starts inactive).
    Add(FrameworkAddArgs),
}

#[derive(Clone, Debug, Args)]
pub struct FrameworkAddArgs {
    /// Framework name.
    pub name: String,
    /// What the lens focuses on.
    #[arg(long, default_value = "")]
    pub description: String,
}
