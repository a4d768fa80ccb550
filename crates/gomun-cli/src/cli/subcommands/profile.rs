use clap::{Args, Subcommand};

/// Profile commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ProfileCommands {
    /// Show a profile (defaults to the signed-in user's).
    Show {
        #[arg(long)]
        email: Option<String>,
    },
    /// Update fields of the signed-in user's profile.
    Update(ProfileUpdateArgs),
}

#[derive(Clone, Debug, Default, Args)]
pub struct ProfileUpdateArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub region: Option<String>,
    #[arg(long)]
    pub focus: Option<String>,
    #[arg(long)]
    pub availability: Option<String>,
    #[arg(long)]
    pub response_time: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub website: Option<String>,
    #[arg(long)]
    pub bio: Option<String>,
}
