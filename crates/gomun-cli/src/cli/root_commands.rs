use clap::{Args, Subcommand};

use crate::cli::subcommands::{
    AuthCommands, CompanyCommands, ExpertCommands, NotificationCommands, ProfileCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Sign in, register, and inspect the stored session.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Expert directory.
    Experts {
        #[command(subcommand)]
        action: ExpertCommands,
    },
    /// Company requests board.
    Companies {
        #[command(subcommand)]
        action: CompanyCommands,
    },
    /// Notifications for the signed-in user.
    Notifications {
        #[command(subcommand)]
        action: NotificationCommands,
    },
    /// Expert profile of the signed-in user.
    Profile {
        #[command(subcommand)]
        action: ProfileCommands,
    },
    /// List page routes and their access rules.
    Routes,
    /// Check whether the stored session may open a page.
    Navigate(NavigateArgs),
    /// Print form option lists (regions, categories, availability, urgency).
    Options,
    /// Print the JSON schema of a wire type, or validate a file against it.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct NavigateArgs {
    /// Page path, e.g. /profile or /requests/3.
    pub path: String,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Type name: session, auth-response, expert, company, notification,
    /// profile, remote-expert, remote-notification, register-request,
    /// profile-payload.
    pub type_name: String,

    /// Validate this JSON file against the schema instead of printing it.
    #[arg(long)]
    pub validate: Option<std::path::PathBuf>,
}
