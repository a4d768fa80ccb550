use gomun_core::Role;
use gomun_router::Router;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::output::output;

#[derive(Debug, Serialize)]
struct RouteRow {
    name: &'static str,
    path: &'static str,
    requires_auth: bool,
    /// Empty means every role.
    allowed_roles: &'static [Role],
}

/// Handle `gomun routes`.
pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    let rows = Router::new()
        .routes()
        .iter()
        .map(|route| RouteRow {
            name: route.name,
            path: route.path,
            requires_auth: route.meta.requires_auth,
            allowed_roles: route.meta.allowed_roles,
        })
        .collect::<Vec<_>>();
    output(&rows, flags.format)
}
