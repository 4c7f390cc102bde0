//! Navigation guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every routed view is wrapped in [`RouteGuard`]. On each location change it
//! resolves the target against the route table, asks the [`AuthStore`]
//! whether a user is present, and either renders the view or redirects.
//!
//! DESIGN
//! ======
//! The decision itself ([`decide`]) is a pure function so it can be tested
//! without a router. The store's `user` is the only source of truth for
//! "logged in"; raw storage is never consulted here.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use super::table::{LOGIN_PATH, PROFILE_PATH, RouteMatch, resolve};
use crate::state::auth::AuthStore;

/// Outcome of guarding one navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Navigation {
    Proceed,
    Redirect(&'static str),
}

/// Decide whether navigation to `target` may proceed.
pub fn decide(target: &RouteMatch, logged_in: bool) -> Navigation {
    if target.requires_auth() && !logged_in {
        Navigation::Redirect(LOGIN_PATH)
    } else if target.is_public_only() && logged_in {
        Navigation::Redirect(PROFILE_PATH)
    } else {
        Navigation::Proceed
    }
}

/// Decision for the current location, or `None` while the store has not
/// been restored yet (server render and the first hydrated frame).
///
/// Reactive: reads the store's signals, so calling it inside a memo
/// re-evaluates on login, logout and restore.
pub fn guard_decision(store: &AuthStore, path: &str) -> Option<Navigation> {
    if !store.is_ready() {
        return None;
    }
    Some(decide(&resolve(path), store.is_logged_in()))
}

/// Render `children` only if the guard lets the current location through.
///
/// A placeholder is shown while [`guard_decision`] is still undecided.
#[component]
pub fn RouteGuard(children: ChildrenFn) -> impl IntoView {
    let store = expect_context::<AuthStore>();
    let pathname = use_location().pathname;

    let decision = Memo::new(move |_| guard_decision(&store, &pathname.get()));

    move || match decision.get() {
        None => view! { <div class="route-pending" aria-busy="true"></div> }.into_any(),
        Some(Navigation::Proceed) => children().into_any(),
        Some(Navigation::Redirect(to)) => {
            log::debug!("guard redirecting {} to {to}", pathname.get_untracked());
            view! { <Redirect path=to/> }.into_any()
        }
    }
}
