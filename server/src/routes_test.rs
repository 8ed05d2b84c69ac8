use axum::body::Body;
use axum::http::Request;
use tower::ServiceExt;

use super::*;

const TITLE: &str = "IPL Auction";
const DESCRIPTION: &str = "Build your dream IPL team through live auctions";

fn test_options() -> LeptosOptions {
    // PROD keeps the dev-reload script out of the rendered head, so the
    // document assertions below see only the shell's own markup.
    LeptosOptions::builder()
        .output_name("ipl-auction")
        .site_root("target/site")
        .env(leptos::config::Env::PROD)
        .build()
}

/// Issue a GET against a fresh router and return status + rendered document.
async fn get_document(path: &str) -> (StatusCode, String) {
    let app = router(test_options());
    let response = app
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8_lossy(&bytes).into_owned())
}

// =============================================================================
// Document shell structure
// =============================================================================

#[tokio::test]
async fn root_renders_one_html_element_with_lang_en() {
    let (status, html) = get_document("/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.starts_with("<!DOCTYPE html>"), "missing doctype: {html}");
    assert_eq!(html.matches("<html").count(), 1);
    assert!(html.contains(r#"<html lang="en""#));
}

#[tokio::test]
async fn root_renders_one_body_element() {
    let (_, html) = get_document("/").await;
    assert_eq!(html.matches("<body").count(), 1);
    assert_eq!(html.matches("</body>").count(), 1);
}

#[tokio::test]
async fn landing_subtree_renders_inside_body() {
    let (_, html) = get_document("/").await;
    let body_open = html.find("<body").expect("body open tag");
    let body_close = html.find("</body>").expect("body close tag");

    let main_open = html.find(r#"<main class="home-page""#).expect("landing main");
    let hero = html.find(r#"<section class="home-page__hero""#).expect("hero section");
    let title = html.find(r#"<h1 class="home-page__title""#).expect("hero title");
    assert!(body_open < main_open && main_open < body_close);
    assert!(main_open < hero && hero < title && title < body_close);

    // Text content of the subtree is preserved, inside the body.
    let tagline = html[body_open..].find(DESCRIPTION).expect("tagline text");
    assert!(body_open + tagline < body_close);
}

// =============================================================================
// Document metadata
// =============================================================================

#[tokio::test]
async fn document_head_carries_static_metadata() {
    let (_, html) = get_document("/").await;
    let body_open = html.find("<body").expect("body open tag");

    let title = html.find(&format!("<title>{TITLE}</title>")).expect("title tag");
    assert!(title < body_open, "title must be registered in <head>");

    assert!(html.contains(r#"name="description""#));
    assert!(html.contains(&format!(r#"content="{DESCRIPTION}""#)));
}

#[tokio::test]
async fn global_stylesheet_is_linked() {
    let (_, html) = get_document("/").await;
    assert!(html.contains("/pkg/ipl-auction.css"));
}

// =============================================================================
// Health + fallback
// =============================================================================

#[tokio::test]
async fn healthz_returns_ok() {
    let (status, body) = get_document("/healthz").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());
}

#[tokio::test]
async fn unknown_path_renders_not_found_document() {
    let (status, html) = get_document("/definitely/not/a/page").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // The fallback still goes through the shell: same document structure.
    assert_eq!(html.matches("<html").count(), 1);
    assert_eq!(html.matches("<body").count(), 1);
    assert!(html.contains("Page not found"));
}
