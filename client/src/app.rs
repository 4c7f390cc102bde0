//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ParentRoute, Redirect, Route, Router, Routes},
};

use crate::pages::{
    accounts::{AccountCreatePage, AccountsPage},
    home::HomePage,
    login::LoginPage,
    profile::ProfilePage,
    register::RegisterPage,
    transfers::TransfersPage,
};
use crate::router::guard::RouteGuard;
use crate::router::table::PROFILE_PATH;
use crate::state::auth::AuthStore;
use crate::util::storage::session_storage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the auth store and sets up client-side routing. The route tree
/// must stay in step with `router::table::ROUTES`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let store = AuthStore::with_shared(session_storage());
    provide_context(store.clone());

    // Effects only run in the browser, after hydration, so the server and the
    // first client frame both render the not-ready placeholder.
    Effect::new(move || {
        let outcome = store.restore_user();
        log::debug!("auth restore: {outcome:?}");
    });

    view! {
        <Title text="SimpleBank"/>

        <Router>
            <Routes fallback=|| view! { <Redirect path=PROFILE_PATH/> }>
                <Route
                    path=StaticSegment("login")
                    view=|| view! { <RouteGuard><LoginPage/></RouteGuard> }
                />
                <Route
                    path=StaticSegment("register")
                    view=|| view! { <RouteGuard><RegisterPage/></RouteGuard> }
                />
                <ParentRoute
                    path=StaticSegment("")
                    view=|| view! { <RouteGuard><HomePage/></RouteGuard> }
                >
                    <Route path=StaticSegment("") view=|| view! { <Redirect path=PROFILE_PATH/> }/>
                    <Route path=StaticSegment("profile") view=ProfilePage/>
                    <Route path=StaticSegment("accounts") view=AccountsPage/>
                    <Route path=(StaticSegment("accounts"), StaticSegment("create")) view=AccountCreatePage/>
                    <Route path=StaticSegment("transfers") view=TransfersPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}
