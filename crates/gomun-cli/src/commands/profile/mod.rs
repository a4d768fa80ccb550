mod show;
mod update;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ProfileCommands;
use crate::context::AppContext;

/// Handle `gomun profile`.
pub async fn handle(
    action: &ProfileCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ProfileCommands::Show { email } => show::run(email.as_deref(), ctx, flags).await,
        ProfileCommands::Update(args) => update::run(args, ctx, flags).await,
    }
}
