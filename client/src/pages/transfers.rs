//! Transfers view.

use leptos::prelude::*;

#[component]
pub fn TransfersPage() -> impl IntoView {
    view! {
        <section class="transfers-page">
            <h2>"Transfers"</h2>
        </section>
    }
}
