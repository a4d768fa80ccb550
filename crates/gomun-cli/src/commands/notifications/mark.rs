use gomun_core::entities::NotificationItem;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(id: &str, read: bool, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let session = ctx.require_session()?;
    let updated = ctx
        .api()?
        .mark_notification(&session.token, id, read)
        .await
        .map_err(|error| ctx.api_failure(error, "failed to update notification"))?;

    output(&NotificationItem::from(updated), flags.format)
}
