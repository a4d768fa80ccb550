use anyhow::bail;
use gomun_core::payloads::ProfilePayload;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::profile::ProfileUpdateArgs;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    args: &ProfileUpdateArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let payload = payload_from(args);
    if payload.is_empty() {
        bail!("profile update: pass at least one field (e.g. --title or --bio)");
    }

    let session = ctx.require_session()?;
    let profile = ctx
        .api()?
        .update_profile(&session.token, &session.email, &payload)
        .await
        .map_err(|error| ctx.api_failure(error, "failed to update profile"))?;

    output(&profile, flags.format)
}

fn payload_from(args: &ProfileUpdateArgs) -> ProfilePayload {
    ProfilePayload {
        name: args.name.clone(),
        title: args.title.clone(),
        region: args.region.clone(),
        focus: args.focus.clone(),
        availability: args.availability.clone(),
        response_time: args.response_time.clone(),
        phone: args.phone.clone(),
        website: args.website.clone(),
        bio: args.bio.clone(),
    }
}
