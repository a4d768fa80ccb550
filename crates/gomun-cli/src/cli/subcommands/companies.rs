use clap::Subcommand;

/// Company request commands.
#[derive(Clone, Debug, Subcommand)]
pub enum CompanyCommands {
    /// List company requests.
    List {
        #[arg(long)]
        region: Option<String>,
    },
    /// Get a company request by ID.
    Get { id: u64 },
}
