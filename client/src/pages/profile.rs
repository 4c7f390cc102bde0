//! Profile page showing the stored user.

use leptos::prelude::*;

use crate::state::auth::AuthStore;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let state = expect_context::<AuthStore>().state();
    let user = move || state.with(|s| s.user.clone()).unwrap_or_default();

    view! {
        <section class="profile-page">
            <h2>"Profile"</h2>
            <dl class="profile-fields">
                <dt>"Username"</dt>
                <dd>{move || user().username}</dd>
                <dt>"Full name"</dt>
                <dd>{move || user().full_name}</dd>
                <dt>"Email"</dt>
                <dd>{move || user().email}</dd>
                <dt>"Member since"</dt>
                <dd>{move || user().created_at}</dd>
            </dl>
        </section>
    }
}
