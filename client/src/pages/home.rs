//! Landing page shown at the site root.

use leptos::prelude::*;

use crate::app::{APP_DESCRIPTION, APP_TITLE};

/// Landing page — a static hero introducing the product. No state, no
/// fetching; the shell wraps this subtree unchanged.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main class="home-page">
            <section class="home-page__hero">
                <h1 class="home-page__title">{APP_TITLE}</h1>
                <p class="home-page__tagline">{APP_DESCRIPTION}</p>
            </section>
        </main>
    }
}
