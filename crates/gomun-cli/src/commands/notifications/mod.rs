mod list;
mod mark;
mod send;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::NotificationCommands;
use crate::context::AppContext;

/// Handle `gomun notifications`.
pub async fn handle(
    action: &NotificationCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        NotificationCommands::List { offline, unread } => {
            list::run(*offline, *unread, ctx, flags).await
        }
        NotificationCommands::Send {
            to,
            title,
            message,
            tag,
            action_route,
        } => {
            send::run(
                to,
                title,
                message,
                tag.as_deref(),
                action_route.as_deref(),
                ctx,
                flags,
            )
            .await
        }
        NotificationCommands::Mark { id, unread } => mark::run(id, !*unread, ctx, flags).await,
    }
}
