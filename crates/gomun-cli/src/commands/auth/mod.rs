mod login;
mod logout;
mod register;
mod status;

use gomun_core::{Role, Session};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthCommands;
use crate::context::AppContext;

/// Handle `gomun auth <subcommand>`.
pub async fn handle(
    action: &AuthCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        AuthCommands::Login(args) => login::handle(args, ctx, flags).await,
        AuthCommands::Register(args) => register::handle(args, ctx, flags).await,
        AuthCommands::Logout => logout::handle(ctx, flags),
        AuthCommands::Status => status::handle(ctx, flags),
    }
}

/// Session fields shown to the user. The token itself is never printed.
#[derive(Debug, Serialize)]
struct SessionView {
    role: Role,
    name: String,
    email: String,
    expires_at: Option<String>,
    remaining_secs: i64,
}

impl SessionView {
    fn new(session: &Session, now_ms: i64) -> Self {
        Self {
            role: session.role,
            name: session.name.clone(),
            email: session.email.clone(),
            expires_at: chrono::DateTime::from_timestamp_millis(session.expires_at)
                .map(|at| at.to_rfc3339()),
            remaining_secs: session.remaining_ms(now_ms) / 1000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_hides_token_and_formats_expiry() {
        let session = Session {
            token: "secret-token".into(),
            role: Role::Expert,
            name: "김한울".into(),
            email: "hanul@gomun.kr".into(),
            expires_at: 1_700_000_060_000,
        };
        let view = SessionView::new(&session, 1_700_000_000_000);
        let value = serde_json::to_value(&view).unwrap();

        assert!(!value.to_string().contains("secret-token"));
        assert_eq!(value["remaining_secs"], 60);
        assert_eq!(value["expires_at"], "2023-11-14T22:14:20+00:00");
    }
}
