use std::collections::BTreeMap;

use gomun_core::Role;
use serde::Serialize;

/// Access requirements declared on a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteMeta {
    pub requires_auth: bool,
    /// Roles allowed through. Empty means every role.
    pub allowed_roles: &'static [Role],
}

impl RouteMeta {
    pub const PUBLIC: Self = Self {
        requires_auth: false,
        allowed_roles: &[],
    };

    pub const AUTHENTICATED: Self = Self {
        requires_auth: true,
        allowed_roles: &[],
    };

    #[must_use]
    pub const fn restricted(allowed_roles: &'static [Role]) -> Self {
        Self {
            requires_auth: true,
            allowed_roles,
        }
    }

    /// Whether `role` passes the role restriction (always true when unrestricted).
    #[must_use]
    pub fn permits(&self, role: Role) -> bool {
        self.allowed_roles.is_empty() || self.allowed_roles.contains(&role)
    }
}

/// A named page route. `:name` segments in `path` capture parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Route {
    pub name: &'static str,
    pub path: &'static str,
    pub meta: RouteMeta,
}

/// The client's page routes.
pub static ROUTES: &[Route] = &[
    Route {
        name: "home",
        path: "/",
        meta: RouteMeta::PUBLIC,
    },
    Route {
        name: "overview",
        path: "/overview",
        meta: RouteMeta::PUBLIC,
    },
    Route {
        name: "requests",
        path: "/requests",
        meta: RouteMeta::PUBLIC,
    },
    Route {
        name: "request-detail",
        path: "/requests/:id",
        meta: RouteMeta::AUTHENTICATED,
    },
    Route {
        name: "experts",
        path: "/experts",
        meta: RouteMeta::PUBLIC,
    },
    Route {
        name: "expert-detail",
        path: "/experts/:id",
        meta: RouteMeta::PUBLIC,
    },
    Route {
        name: "insights",
        path: "/insights",
        meta: RouteMeta::AUTHENTICATED,
    },
    Route {
        name: "profile",
        path: "/profile",
        meta: RouteMeta::restricted(&[Role::Expert]),
    },
];

/// A route matched against a concrete path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedRoute {
    pub route: &'static Route,
    pub params: BTreeMap<String, String>,
}

impl ResolvedRoute {
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

/// Matches concrete paths against a route table.
#[derive(Debug, Clone, Copy)]
pub struct Router {
    routes: &'static [Route],
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl Router {
    /// Router over [`ROUTES`].
    #[must_use]
    pub const fn new() -> Self {
        Self { routes: ROUTES }
    }

    #[must_use]
    pub const fn with_routes(routes: &'static [Route]) -> Self {
        Self { routes }
    }

    #[must_use]
    pub const fn routes(&self) -> &'static [Route] {
        self.routes
    }

    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&'static Route> {
        self.routes.iter().find(|route| route.name == name)
    }

    /// Find the first route matching `path`.
    ///
    /// Query strings, fragments, and trailing slashes are ignored. Parameter
    /// segments match any non-empty segment.
    #[must_use]
    pub fn resolve(&self, path: &str) -> Option<ResolvedRoute> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let requested = segments(path);

        self.routes.iter().find_map(|route| {
            let pattern = segments(route.path);
            if pattern.len() != requested.len() {
                return None;
            }
            let mut params = BTreeMap::new();
            for (expected, actual) in pattern.iter().zip(&requested) {
                match expected.strip_prefix(':') {
                    Some(name) => {
                        params.insert(name.to_string(), (*actual).to_string());
                    }
                    None if expected == actual => {}
                    None => return None,
                }
            }
            Some(ResolvedRoute { route, params })
        })
    }
}

fn segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("/", "home")]
    #[case("", "home")]
    #[case("/overview", "overview")]
    #[case("/requests/", "requests")]
    #[case("/requests/3", "request-detail")]
    #[case("/experts?region=서울", "experts")]
    #[case("/experts/5#contact", "expert-detail")]
    #[case("/insights", "insights")]
    #[case("/profile/", "profile")]
    fn resolves_known_paths(#[case] path: &str, #[case] name: &str) {
        let resolved = Router::new().resolve(path).expect("should resolve");
        assert_eq!(resolved.route.name, name);
    }

    #[rstest]
    #[case("/admin")]
    #[case("/requests/3/edit")]
    #[case("/experts/5/reviews")]
    fn unknown_paths_do_not_resolve(#[case] path: &str) {
        assert!(Router::new().resolve(path).is_none());
    }

    #[test]
    fn parameters_are_captured() {
        let resolved = Router::new().resolve("/requests/42?tab=info").unwrap();
        assert_eq!(resolved.param("id"), Some("42"));
        assert_eq!(resolved.param("other"), None);
    }

    #[test]
    fn route_names_are_unique() {
        let mut names: Vec<_> = ROUTES.iter().map(|r| r.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), ROUTES.len());
    }

    #[test]
    fn unrestricted_meta_permits_every_role() {
        for role in Role::ALL {
            assert!(RouteMeta::PUBLIC.permits(role));
            assert!(RouteMeta::AUTHENTICATED.permits(role));
        }
        let profile = Router::new().by_name("profile").unwrap();
        assert!(profile.meta.permits(Role::Expert));
        assert!(!profile.meta.permits(Role::Company));
        assert!(!profile.meta.permits(Role::Guest));
    }
}
