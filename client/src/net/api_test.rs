use super::*;

#[test]
fn endpoint_joins_base_and_path() {
    assert_eq!(endpoint("http://localhost:8080", "/users/login"), "http://localhost:8080/users/login");
}

#[test]
fn request_failed_message_without_body() {
    assert_eq!(request_failed_message("login", 401, None), "login failed: 401");
}

#[test]
fn request_failed_message_includes_backend_detail() {
    assert_eq!(
        request_failed_message("registration", 403, Some("username already exists")),
        "registration failed (403): username already exists"
    );
}

#[test]
fn request_failed_message_ignores_blank_detail() {
    assert_eq!(request_failed_message("login", 500, Some("  ")), "login failed: 500");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn login_is_unavailable_off_browser() {
    let result = block_on_ready(login_user("alice", "secret"));
    assert_eq!(result, Err("not available on server".to_owned()));
}

/// Poll a future that never yields to completion.
#[cfg(not(feature = "hydrate"))]
fn block_on_ready<F: std::future::Future>(fut: F) -> F::Output {
    use std::task::{Context, Poll, Waker};

    let mut fut = std::pin::pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    match fut.as_mut().poll(&mut cx) {
        Poll::Ready(out) => out,
        Poll::Pending => panic!("future was not immediately ready"),
    }
}
