use clap::Subcommand;

/// Expert directory commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ExpertCommands {
    /// List experts, merged with the live directory unless --offline.
    List {
        /// Use built-in data only.
        #[arg(long)]
        offline: bool,
        #[arg(long)]
        region: Option<String>,
        /// Keep experts whose keywords include this one.
        #[arg(long)]
        keyword: Option<String>,
    },
    /// Get an expert by ID.
    Get {
        id: u64,
        /// Use built-in data only.
        #[arg(long)]
        offline: bool,
    },
}
