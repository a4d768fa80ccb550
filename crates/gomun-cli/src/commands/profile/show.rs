use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(email: Option<&str>, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let session = ctx.require_session()?;
    let email = email.unwrap_or(&session.email);

    let profile = ctx
        .api()?
        .fetch_profile(&session.token, email)
        .await
        .map_err(|error| ctx.api_failure(error, "failed to fetch profile"))?;

    output(&profile, flags.format)
}
