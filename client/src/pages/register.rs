//! Registration page. Creates the user, then sends them to `/login`.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

const MIN_PASSWORD_LEN: usize = 6;

#[derive(Clone, Debug, PartialEq, Eq)]
struct RegisterInput {
    username: String,
    full_name: String,
    email: String,
    password: String,
}

/// Mirror the backend's request validation so obvious mistakes never leave
/// the browser.
fn validate_register_input(
    username: &str,
    full_name: &str,
    email: &str,
    password: &str,
) -> Result<RegisterInput, &'static str> {
    let username = username.trim();
    let full_name = full_name.trim();
    let email = email.trim();
    if username.is_empty() || full_name.is_empty() || email.is_empty() || password.is_empty() {
        return Err("All fields are required.");
    }
    if !username.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err("Username may only contain letters and digits.");
    }
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => {}
        _ => return Err("Enter a valid email address."),
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 6 characters.");
    }
    Ok(RegisterInput {
        username: username.to_owned(),
        full_name: full_name.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
    })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let full_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let input = match validate_register_input(&username.get(), &full_name.get(), &email.get(), &password.get()) {
            Ok(input) => input,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Creating account...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::create_user(&input.username, &input.password, &input.full_name, &input.email)
                    .await
                {
                    Ok(user) => {
                        log::info!("registered user {}", user.username);
                        navigate("/login", NavigateOptions::default());
                    }
                    Err(e) => {
                        info.set(format!("Registration failed: {e}"));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&navigate, input);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Create account"</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        autocomplete="username"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="text"
                        autocomplete="name"
                        placeholder="Full name"
                        prop:value=move || full_name.get()
                        on:input=move |ev| full_name.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="email"
                        autocomplete="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        autocomplete="new-password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Register"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <p class="login-card__footer">
                    "Already registered? "
                    <A href="/login">"Sign in"</A>
                </p>
            </div>
        </div>
    }
}
