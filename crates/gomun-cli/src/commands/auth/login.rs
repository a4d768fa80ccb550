use anyhow::{Context, bail};
use gomun_core::session::now_ms;
use gomun_core::{Role, Session};
use serde::Serialize;

use super::SessionView;
use crate::cli::GlobalFlags;
use crate::cli::subcommands::auth::AuthLoginArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthLoginResponse {
    authenticated: bool,
    #[serde(flatten)]
    session: SessionView,
}

pub async fn handle(
    args: &AuthLoginArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    if args.role == Role::Guest {
        bail!("auth login: guests browse without an account; use --role expert or --role company");
    }

    let api = ctx.api()?;
    let auth = api
        .login(args.role, args.email.trim(), &args.password)
        .await
        .context("login failed")?;

    let now = now_ms();
    let session = Session::from_auth(&auth, now);
    ctx.sessions
        .save(Some(&session))
        .context("failed to store session")?;
    tracing::debug!(role = %session.role, "logged in");

    output(
        &AuthLoginResponse {
            authenticated: true,
            session: SessionView::new(&session, now),
        },
        flags.format,
    )
}
