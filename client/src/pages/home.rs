//! Authenticated shell: navigation bar, logout, and the nested route outlet.

use leptos::prelude::*;
use leptos_router::components::{A, Outlet};

use crate::state::auth::AuthStore;

#[component]
pub fn HomePage() -> impl IntoView {
    let store = expect_context::<AuthStore>();
    let state = store.state();

    let username = move || state.with(|s| s.user.as_ref().map(|u| u.username.clone()).unwrap_or_default());

    // Clearing the store is enough; the guard redirects to `/login`.
    let on_logout = move |_| {
        if let Err(e) = store.clear_user() {
            log::warn!("logged out but stored session was not removed: {e}");
        }
    };

    view! {
        <div class="app-shell">
            <nav class="app-nav">
                <A href="/profile">"Profile"</A>
                <A href="/accounts">"Accounts"</A>
                <A href="/transfers">"Transfers"</A>
                <span class="app-nav__user">{username}</span>
                <button class="app-nav__logout" on:click=on_logout>
                    "Log out"
                </button>
            </nav>
            <main class="app-main">
                <Outlet/>
            </main>
        </div>
    }
}
