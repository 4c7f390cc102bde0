use super::*;
use crate::net::types::User;
use crate::util::storage::MemoryStore;

const PROTECTED: [&str; 5] = ["/", "/profile", "/accounts", "/accounts/create", "/transfers"];

// =============================================================
// decide
// =============================================================

#[test]
fn protected_routes_redirect_to_login_when_logged_out() {
    for path in PROTECTED {
        assert_eq!(decide(&resolve(path), false), Navigation::Redirect(LOGIN_PATH), "{path}");
    }
}

#[test]
fn protected_routes_proceed_when_logged_in() {
    for path in PROTECTED {
        assert_eq!(decide(&resolve(path), true), Navigation::Proceed, "{path}");
    }
}

#[test]
fn login_redirects_to_profile_when_logged_in() {
    assert_eq!(decide(&resolve("/login"), true), Navigation::Redirect(PROFILE_PATH));
}

#[test]
fn register_redirects_to_profile_when_logged_in() {
    assert_eq!(decide(&resolve("/register"), true), Navigation::Redirect(PROFILE_PATH));
}

#[test]
fn public_only_routes_proceed_when_logged_out() {
    assert_eq!(decide(&resolve("/login"), false), Navigation::Proceed);
    assert_eq!(decide(&resolve("/register"), false), Navigation::Proceed);
}

#[test]
fn unknown_route_is_not_guarded() {
    assert_eq!(decide(&resolve("/nope"), false), Navigation::Proceed);
    assert_eq!(decide(&resolve("/nope"), true), Navigation::Proceed);
}

// =============================================================
// guard_decision
// =============================================================

fn ready_store(logged_in: bool) -> AuthStore {
    let store = AuthStore::new(MemoryStore::new());
    if logged_in {
        let user = User { username: "alice".to_owned(), ..User::default() };
        store.set_user(user, "acc".to_owned(), "ref".to_owned()).unwrap();
    }
    store.restore_user();
    store
}

#[test]
fn guard_decision_waits_until_store_is_restored() {
    let store = AuthStore::new(MemoryStore::new());
    for path in ["/profile", "/login", "/nope"] {
        assert_eq!(guard_decision(&store, path), None, "{path}");
    }
}

#[test]
fn guard_decision_waits_even_with_session_in_memory() {
    let store = AuthStore::new(MemoryStore::new());
    let user = User { username: "alice".to_owned(), ..User::default() };
    store.set_user(user, "acc".to_owned(), "ref".to_owned()).unwrap();
    assert_eq!(guard_decision(&store, "/login"), None);
}

#[test]
fn guard_decision_ready_logged_out_on_profile_goes_to_login() {
    let store = ready_store(false);
    assert_eq!(guard_decision(&store, "/profile"), Some(Navigation::Redirect(LOGIN_PATH)));
}

#[test]
fn guard_decision_ready_logged_in_on_login_goes_to_profile() {
    let store = ready_store(true);
    assert_eq!(guard_decision(&store, "/login"), Some(Navigation::Redirect(PROFILE_PATH)));
}

#[test]
fn guard_decision_follows_logout() {
    let store = ready_store(true);
    assert_eq!(guard_decision(&store, "/transfers"), Some(Navigation::Proceed));
    store.clear_user().unwrap();
    assert_eq!(guard_decision(&store, "/transfers"), Some(Navigation::Redirect(LOGIN_PATH)));
}

// =============================================================
// Redirect chains
// =============================================================

/// Follow table redirects, then guard redirects, the way the router applies
/// them: `<Redirect>` for the index and fallback, `RouteGuard` for the rest.
fn settle(path: &str, logged_in: bool) -> String {
    let mut target = resolve(path);
    for _ in 0..8 {
        let next = match target.redirect() {
            Some(to) => to,
            None => match decide(&target, logged_in) {
                Navigation::Proceed => return target.path,
                Navigation::Redirect(to) => to,
            },
        };
        target = resolve(next);
    }
    panic!("redirect loop from {path}");
}

#[test]
fn settle_logged_out_lands_on_login_for_protected_paths() {
    for path in PROTECTED {
        assert_eq!(settle(path, false), LOGIN_PATH, "{path}");
    }
}

#[test]
fn settle_logged_in_root_lands_on_profile() {
    assert_eq!(settle("/", true), PROFILE_PATH);
}

#[test]
fn settle_logged_in_keeps_protected_target() {
    assert_eq!(settle("/accounts/create", true), "/accounts/create");
    assert_eq!(settle("/transfers/", true), "/transfers");
}

#[test]
fn settle_unknown_path_goes_through_profile() {
    assert_eq!(settle("/does/not/exist", true), PROFILE_PATH);
    assert_eq!(settle("/does/not/exist", false), LOGIN_PATH);
}

#[test]
fn settle_public_only_paths() {
    assert_eq!(settle("/login", true), PROFILE_PATH);
    assert_eq!(settle("/register", true), PROFILE_PATH);
    assert_eq!(settle("/login", false), LOGIN_PATH);
    assert_eq!(settle("/register", false), "/register");
}
