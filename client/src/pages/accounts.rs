//! Account list and account creation views.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn AccountsPage() -> impl IntoView {
    view! {
        <section class="accounts-page">
            <h2>"Accounts"</h2>
            <A href="/accounts/create">"Open a new account"</A>
        </section>
    }
}

#[component]
pub fn AccountCreatePage() -> impl IntoView {
    view! {
        <section class="accounts-page">
            <h2>"Open a new account"</h2>
            <A href="/accounts">"Back to accounts"</A>
        </section>
    }
}
