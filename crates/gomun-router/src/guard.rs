use std::fmt;

use gomun_core::session::now_ms;
use gomun_session::{SessionState, SessionStore, Storage};
use serde::Serialize;

use crate::routes::{Route, RouteMeta};

/// Where rejected navigations are sent.
pub const HOME: &str = "/";

/// Why a navigation was redirected, carried as `?auth=<signal>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthSignal {
    /// The stored session had expired and was cleared.
    Expired,
    /// The route needs a session and there is none.
    Required,
    /// The session's role is not allowed on the route.
    Forbidden,
}

impl AuthSignal {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Expired => "expired",
            Self::Required => "required",
            Self::Forbidden => "forbidden",
        }
    }
}

impl fmt::Display for AuthSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one navigation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum Decision {
    Allow,
    Redirect { to: &'static str, reason: AuthSignal },
}

impl Decision {
    const fn redirect(reason: AuthSignal) -> Self {
        Self::Redirect { to: HOME, reason }
    }

    #[must_use]
    pub const fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow)
    }

    /// Redirect target with its signal, e.g. `/?auth=required`.
    #[must_use]
    pub fn location(&self) -> Option<String> {
        match self {
            Self::Allow => None,
            Self::Redirect { to, reason } => Some(format!("{to}?auth={reason}")),
        }
    }
}

/// Decide whether a navigation to a route with `meta` may proceed.
///
/// Checks run in order: an expired session on an auth route, a missing
/// session on an auth route, then the role restriction. Without an active
/// session the role is [`Role::Guest`](gomun_core::Role::Guest).
#[must_use]
pub fn decide(meta: &RouteMeta, state: &SessionState) -> Decision {
    if meta.requires_auth {
        match state {
            SessionState::Expired(_) => return Decision::redirect(AuthSignal::Expired),
            SessionState::Absent => return Decision::redirect(AuthSignal::Required),
            SessionState::Active(_) => {}
        }
    }
    if !meta.permits(state.effective_role()) {
        return Decision::redirect(AuthSignal::Forbidden);
    }
    Decision::Allow
}

/// Runs [`decide`] against the stored session before each navigation.
#[derive(Debug)]
pub struct NavigationGuard<'a, S> {
    store: &'a SessionStore<S>,
}

impl<'a, S: Storage> NavigationGuard<'a, S> {
    pub const fn new(store: &'a SessionStore<S>) -> Self {
        Self { store }
    }

    /// Guard a navigation to `route` against the wall clock.
    pub fn before_each(&self, route: &Route) -> Decision {
        self.before_each_at(route, now_ms())
    }

    /// Guard a navigation to `route` at `now_ms`.
    ///
    /// An expired session is cleared whatever the target, so it never
    /// outlives the first navigation that notices it.
    pub fn before_each_at(&self, route: &Route, now_ms: i64) -> Decision {
        let state = self.store.state_at(now_ms);
        if matches!(state, SessionState::Expired(_)) {
            tracing::debug!(route = route.name, "clearing expired session");
            if let Err(error) = self.store.clear() {
                tracing::warn!(%error, "failed to clear expired session");
            }
        }

        let decision = decide(&route.meta, &state);
        if let Decision::Redirect { reason, .. } = decision {
            tracing::debug!(route = route.name, %reason, "navigation redirected");
        }
        decision
    }
}
