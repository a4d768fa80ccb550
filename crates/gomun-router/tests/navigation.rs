//! Guarded navigation over a file-backed session store.

use gomun_core::{Role, Session};
use gomun_router::{AuthSignal, Decision, NavigationGuard, Router};
use gomun_session::{FileStorage, SessionStore};
use pretty_assertions::assert_eq;

fn expert_until(expires_at: i64) -> Session {
    Session {
        token: "tok-expert".into(),
        role: Role::Expert,
        name: "박도윤".into(),
        email: "doyun@gomun.kr".into(),
        expires_at,
    }
}

fn navigate(
    guard: &NavigationGuard<'_, FileStorage>,
    path: &str,
    now_ms: i64,
) -> Option<Decision> {
    let resolved = Router::new().resolve(path)?;
    Some(guard.before_each_at(resolved.route, now_ms))
}

#[test]
fn session_lifecycle_across_navigations() {
    let tmp = tempfile::TempDir::new().expect("tmp dir");
    let store = SessionStore::new(FileStorage::new(tmp.path()));
    let guard = NavigationGuard::new(&store);

    assert_eq!(
        navigate(&guard, "/profile", 0).and_then(|d| d.location()),
        Some("/?auth=required".to_string())
    );
    assert_eq!(navigate(&guard, "/experts/2", 0), Some(Decision::Allow));

    store.save(Some(&expert_until(10_000))).expect("save");
    assert_eq!(navigate(&guard, "/profile", 9_999), Some(Decision::Allow));
    assert_eq!(navigate(&guard, "/requests/1?from=list", 9_999), Some(Decision::Allow));

    assert_eq!(
        navigate(&guard, "/insights", 10_000),
        Some(Decision::Redirect {
            to: "/",
            reason: AuthSignal::Expired
        })
    );
    assert_eq!(store.read(), None);

    // Once cleared, the same route reports a missing session instead.
    assert_eq!(
        navigate(&guard, "/insights", 10_001).and_then(|d| d.location()),
        Some("/?auth=required".to_string())
    );
}

#[test]
fn unknown_path_is_not_guarded() {
    let tmp = tempfile::TempDir::new().expect("tmp dir");
    let store = SessionStore::new(FileStorage::new(tmp.path()));
    let guard = NavigationGuard::new(&store);

    assert_eq!(navigate(&guard, "/admin", 0), None);
}
