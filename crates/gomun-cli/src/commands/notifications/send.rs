use gomun_core::entities::NotificationItem;
use gomun_core::payloads::NotificationPayload;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    to: &str,
    title: &str,
    message: &str,
    tag: Option<&str>,
    action_route: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let session = ctx.require_session()?;
    let payload = NotificationPayload {
        recipient: to.trim().to_string(),
        title: title.to_string(),
        message: message.to_string(),
        tag: tag.map(ToString::to_string),
        action_route: action_route.map(ToString::to_string),
    };

    let created = ctx
        .api()?
        .create_notification(&session.token, &payload)
        .await
        .map_err(|error| ctx.api_failure(error, "failed to send notification"))?;

    output(&NotificationItem::from(created), flags.format)
}
