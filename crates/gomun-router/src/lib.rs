//! # gomun-router
//!
//! The client's page routes and the guard that runs before every navigation.
//!
//! Policy lives in the pure [`decide`] function so it can be checked without
//! touching storage; [`NavigationGuard`] is the thin adapter that reads the
//! session store, drops an expired record, and asks [`decide`].

pub mod guard;
pub mod routes;

pub use guard::{AuthSignal, Decision, NavigationGuard, decide};
pub use routes::{ROUTES, ResolvedRoute, Route, RouteMeta, Router};
