//! Root document shell and application component.
//!
//! SYSTEM CONTEXT
//! ==============
//! `shell` is the server-rendered document template: exactly one
//! `<html lang="en">`, exactly one `<body>`, and the application subtree
//! rendered unchanged between them. `App` is the isomorphic root — it owns
//! the static document metadata (title, description), the global stylesheet
//! link, and client-side routing. Pages never restate metadata, so every
//! route served through this shell carries the same title and description.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{home::HomePage, not_found::NotFoundPage};

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

/// Document title shown in the browser tab and search results.
pub const APP_TITLE: &str = "IPL Auction";

/// Document description surfaced to browsers and search engines.
pub const APP_DESCRIPTION: &str = "Build your dream IPL team through live auctions";

/// Compiled global stylesheet, emitted by cargo-leptos from `style/main.css`.
pub const GLOBAL_STYLESHEET_HREF: &str = "/pkg/ipl-auction.css";

/// HTML shell rendered on the server for SSR + hydration.
///
/// The application subtree is injected into `<body>` as-is; metadata
/// registered by [`App`] lands in `<head>` through `<MetaTags/>`.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link rel="icon" type="image/svg+xml" href="/favicon.svg"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Declares the static document metadata and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href=GLOBAL_STYLESHEET_HREF/>
        <Title text=APP_TITLE/>
        <Meta name="description" content=APP_DESCRIPTION/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
