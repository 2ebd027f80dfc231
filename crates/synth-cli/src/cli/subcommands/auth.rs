use clap::Subcommand;

/// Session gate commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuthCommands {
    /// Open the session.
    Login,
    /// Close the session.
    Logout,
    /// Show whether the session is open.
    Status,
}
