use gomun_core::entities::NotificationItem;
use gomun_seed::NotificationSeed;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Signed-in users get their backend inbox; everyone else (and `--offline`)
/// gets the built-in notices for their audience.
pub async fn run(
    offline: bool,
    unread: bool,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let state = ctx.session_state();

    let items: Vec<NotificationItem> = match state.active() {
        Some(session) if !offline => ctx
            .api()?
            .fetch_notifications(&session.token)
            .await
            .map_err(|error| ctx.api_failure(error, "failed to fetch notifications"))?
            .into_iter()
            .map(NotificationItem::from)
            .collect(),
        _ => NotificationSeed::seeded().for_audience(state.effective_role()),
    };

    let items = if unread {
        items.into_iter().filter(|item| !item.is_read()).collect()
    } else {
        items
    };

    output(&items, flags.format)
}
