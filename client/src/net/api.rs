//! REST helpers for the banking backend's user endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since login and registration
//! only happen in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` so a failed login shows a message in the
//! form instead of crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{LoginUserResponse, User};
#[cfg(feature = "hydrate")]
use super::types::{CreateUserRequest, ErrorResponse, LoginUserRequest};

#[cfg(any(test, feature = "hydrate"))]
fn endpoint(base: &str, path: &str) -> String {
    format!("{base}{path}")
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(action: &str, status: u16, body: Option<&str>) -> String {
    match body {
        Some(detail) if !detail.trim().is_empty() => format!("{action} failed ({status}): {detail}"),
        _ => format!("{action} failed: {status}"),
    }
}

#[cfg(feature = "hydrate")]
async fn error_detail(resp: gloo_net::http::Response) -> Option<String> {
    resp.json::<ErrorResponse>().await.ok().map(|e| e.error)
}

/// Log in via `POST /users/login`.
///
/// # Errors
///
/// Returns an error string if the request fails, the backend rejects the
/// credentials, or the response body cannot be parsed.
pub async fn login_user(username: &str, password: &str) -> Result<LoginUserResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = endpoint(crate::config::api_base_url(), "/users/login");
        let payload = LoginUserRequest { username: username.to_owned(), password: password.to_owned() };
        let resp = gloo_net::http::Request::post(&url)
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let status = resp.status();
            let detail = error_detail(resp).await;
            return Err(request_failed_message("login", status, detail.as_deref()));
        }
        resp.json::<LoginUserResponse>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, password);
        Err("not available on server".to_owned())
    }
}

/// Register a new user via `POST /users`.
///
/// # Errors
///
/// Returns an error string if the request fails or the backend rejects the
/// registration (e.g. duplicate username).
pub async fn create_user(username: &str, password: &str, full_name: &str, email: &str) -> Result<User, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = endpoint(crate::config::api_base_url(), "/users");
        let payload = CreateUserRequest {
            username: username.to_owned(),
            password: password.to_owned(),
            full_name: full_name.to_owned(),
            email: email.to_owned(),
        };
        let resp = gloo_net::http::Request::post(&url)
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let status = resp.status();
            let detail = error_detail(resp).await;
            return Err(request_failed_message("registration", status, detail.as_deref()));
        }
        resp.json::<User>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, password, full_name, email);
        Err("not available on server".to_owned())
    }
}
