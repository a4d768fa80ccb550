use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Auth { action } => commands::auth::handle(&action, ctx, flags).await,
        Commands::Experts { action } => commands::experts::handle(&action, ctx, flags).await,
        Commands::Companies { action } => commands::companies::handle(&action, flags),
        Commands::Notifications { action } => {
            commands::notifications::handle(&action, ctx, flags).await
        }
        Commands::Profile { action } => commands::profile::handle(&action, ctx, flags).await,
        Commands::Navigate(args) => commands::navigate::handle(&args, ctx, flags),
        Commands::Routes => commands::routes::handle(flags),
        Commands::Options => commands::options::handle(flags),
        Commands::Schema(args) => commands::schema::handle(&args, flags),
    }
}
