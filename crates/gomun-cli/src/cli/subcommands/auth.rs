use clap::{Args, Subcommand};
use gomun_core::Role;

/// Authentication commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuthCommands {
    /// Log in with email and password.
    Login(AuthLoginArgs),
    /// Create an account and log in.
    Register(AuthRegisterArgs),
    /// Clear the stored session.
    Logout,
    /// Show the stored session.
    Status,
}

#[derive(Clone, Debug, Args)]
pub struct AuthLoginArgs {
    /// Account role: expert or company.
    #[arg(long)]
    pub role: Role,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub password: String,
}

#[derive(Clone, Debug, Args)]
pub struct AuthRegisterArgs {
    /// Account role: expert or company.
    #[arg(long)]
    pub role: Role,
    /// Display name.
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub password: String,
    /// Company name (company accounts).
    #[arg(long)]
    pub company_name: Option<String>,
    /// Area of expertise (expert accounts).
    #[arg(long)]
    pub specialty: Option<String>,
}
