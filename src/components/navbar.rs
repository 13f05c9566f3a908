//! Top navigation bar shared by the account pages.

use leptos::prelude::*;

/// Navbar with the product wordmark and account navigation links.
#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="navbar">
            <a class="navbar__brand" href="/">"Workspace"</a>
            <div class="navbar__links">
                <a href="/signin">"Sign in"</a>
                <a href="/signup">"Sign up"</a>
            </div>
        </nav>
    }
}
