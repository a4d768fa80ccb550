use gomun_core::Role;
use gomun_core::session::now_ms;
use gomun_session::SessionState;
use serde::Serialize;

use super::SessionView;
use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthStatusResponse {
    authenticated: bool,
    state: &'static str,
    effective_role: Role,
    session: Option<SessionView>,
}

/// Report the stored session without modifying it.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let now = now_ms();
    let state = ctx.sessions.state_at(now);

    let (label, session) = match &state {
        SessionState::Absent => ("absent", None),
        SessionState::Expired(session) => ("expired", Some(SessionView::new(session, now))),
        SessionState::Active(session) => ("active", Some(SessionView::new(session, now))),
    };

    output(
        &AuthStatusResponse {
            authenticated: state.active().is_some(),
            state: label,
            effective_role: state.effective_role(),
            session,
        },
        flags.format,
    )
}
