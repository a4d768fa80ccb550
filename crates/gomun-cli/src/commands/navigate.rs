use std::collections::BTreeMap;

use anyhow::Context;
use gomun_router::{AuthSignal, Decision, NavigationGuard};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::NavigateArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct NavigateResponse {
    path: String,
    route: &'static str,
    params: BTreeMap<String, String>,
    allowed: bool,
    reason: Option<AuthSignal>,
    location: Option<String>,
}

/// Run the navigation guard for `path` against the stored session.
pub fn handle(args: &NavigateArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let resolved = ctx
        .router
        .resolve(&args.path)
        .with_context(|| format!("no page matches '{}'", args.path))?;

    let decision = NavigationGuard::new(&ctx.sessions).before_each(resolved.route);
    let reason = match decision {
        Decision::Allow => None,
        Decision::Redirect { reason, .. } => Some(reason),
    };

    output(
        &NavigateResponse {
            path: args.path.clone(),
            route: resolved.route.name,
            params: resolved.params,
            allowed: decision.is_allowed(),
            reason,
            location: decision.location(),
        },
        flags.format,
    )
}
