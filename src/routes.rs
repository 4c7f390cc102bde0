//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host only renders the Leptos app and serves its compiled assets. The
//! banking API lives in a separate service that the browser calls directly.

use std::path::PathBuf;

use axum::Router;
use axum::handler::HandlerWithoutStateExt;
use axum::http::StatusCode;
use axum::response::Redirect;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use simplebank_client::app::{App, shell};
use simplebank_client::router::table::PROFILE_PATH;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Leptos SSR routes + `/pkg` assets + `/healthz`.
///
/// Anything else is looked up as a file under the site root and otherwise
/// redirected to `/profile`, the same target as the client-side fallback.
pub fn app(leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(App);
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());
    let unknown = ServeDir::new(&site_root_path).fallback(redirect_unknown.into_service());

    Router::new()
        .route("/healthz", get(healthz))
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || shell(opts.clone())
        })
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .fallback_service(unknown)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(leptos_options)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

async fn redirect_unknown() -> Redirect {
    Redirect::temporary(PROFILE_PATH)
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;
