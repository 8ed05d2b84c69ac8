//! Not-found fallback rendered for unmatched routes.

use leptos::prelude::*;

/// Fallback page for unknown paths. During SSR it marks the response 404 so
/// probes and crawlers see the correct status; in the browser it renders
/// plainly.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        let response = expect_context::<leptos_axum::ResponseOptions>();
        response.set_status(http::StatusCode::NOT_FOUND);
    }

    view! {
        <main class="not-found-page">
            <h1 class="not-found-page__title">"Page not found"</h1>
            <p class="not-found-page__hint">
                <a href="/">"Back to the home page"</a>
            </p>
        </main>
    }
}
