use anyhow::Context;
use gomun_core::payloads::RegisterRequest;
use gomun_core::session::now_ms;
use gomun_core::{CoreError, Role, Session};
use serde::Serialize;

use super::SessionView;
use crate::cli::GlobalFlags;
use crate::cli::subcommands::auth::AuthRegisterArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthRegisterResponse {
    registered: bool,
    #[serde(flatten)]
    session: SessionView,
}

pub async fn handle(
    args: &AuthRegisterArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let request = build_request(args)?;

    let api = ctx.api()?;
    let auth = api
        .register(&request)
        .await
        .context("registration failed")?;

    let now = now_ms();
    let session = Session::from_auth(&auth, now);
    ctx.sessions
        .save(Some(&session))
        .context("failed to store session")?;

    output(
        &AuthRegisterResponse {
            registered: true,
            session: SessionView::new(&session, now),
        },
        flags.format,
    )
}

/// Check the role-specific fields the backend requires before sending.
fn build_request(args: &AuthRegisterArgs) -> Result<RegisterRequest, CoreError> {
    let non_empty = |value: &Option<String>| {
        value
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(ToString::to_string)
    };

    let name = args.name.trim();
    let email = args.email.trim();
    if name.is_empty() || email.is_empty() || args.password.is_empty() {
        return Err(CoreError::Validation(
            "name, email and password are required".into(),
        ));
    }

    let (company_name, specialty) = match args.role {
        Role::Company => {
            let company_name = non_empty(&args.company_name).ok_or_else(|| {
                CoreError::Validation("company accounts need --company-name".into())
            })?;
            (Some(company_name), None)
        }
        Role::Expert => {
            let specialty = non_empty(&args.specialty).ok_or_else(|| {
                CoreError::Validation("expert accounts need --specialty".into())
            })?;
            (None, Some(specialty))
        }
        Role::Guest => {
            return Err(CoreError::Validation(
                "guest accounts cannot be registered".into(),
            ));
        }
    };

    Ok(RegisterRequest {
        role: args.role,
        name: name.to_string(),
        email: email.to_string(),
        password: args.password.clone(),
        company_name,
        specialty,
    })
}
