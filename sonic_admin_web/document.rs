use askama::Template;

use crate::errors::RenderError;

pub(crate) const SITE_NAME: &str = "SonicJS AI";
const FAVICON_URL: &str = "https://demo.sonicjs.com/images/favicon.ico";
const HTMX_URL: &str = "https://unpkg.com/htmx.org@2.0.3";
const ALPINE_URL: &str = "https://unpkg.com/alpinejs@3.x.x/dist/cdn.min.js";

/// Document shell for every screen rendered inside the admin chrome.
#[derive(Debug, Template)]
#[template(path = "admin_document.html")]
struct AdminDocument<'a> {
    title: &'a str,
    site_name: &'a str,
    favicon_url: &'a str,
    htmx_url: &'a str,
    alpine_url: &'a str,
    styles: &'a [String],
    scripts: &'a [String],
    body: &'a str,
}

/// Document shell for the standalone authentication screens.
#[derive(Debug, Template)]
#[template(path = "auth_document.html")]
struct AuthDocument<'a> {
    title: &'a str,
    site_name: &'a str,
    favicon_url: &'a str,
    htmx_url: &'a str,
    body: &'a str,
}

pub(crate) fn admin_document(
    title: &str,
    styles: &[String],
    scripts: &[String],
    body: &str,
) -> Result<String, RenderError> {
    let document = AdminDocument {
        title,
        site_name: SITE_NAME,
        favicon_url: FAVICON_URL,
        htmx_url: HTMX_URL,
        alpine_url: ALPINE_URL,
        styles,
        scripts,
        body,
    };
    Ok(document.render()?)
}

pub(crate) fn auth_document(title: &str, body: &str) -> Result<String, RenderError> {
    let document = AuthDocument {
        title,
        site_name: SITE_NAME,
        favicon_url: FAVICON_URL,
        htmx_url: HTMX_URL,
        body,
    };
    Ok(document.render()?)
}

/// Unwraps a rendered document, degrading to the bare body markup when the shell failed.
pub(crate) fn or_body(result: Result<String, RenderError>, body: String) -> String {
    match result {
        Ok(document) => document,
        Err(e) => {
            tracing::error!("Document shell failed, serving body only: {e}");
            body
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_document_escapes_title() {
        let html = admin_document(
            "<Posts>",
            &["/css/extra.css".to_string()],
            &["/js/extra.js".to_string()],
            "<main>ok</main>",
        )
        .unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("&lt;Posts&gt; - SonicJS AI Admin"));
        assert!(html.contains(r#"<link rel="stylesheet" href="/css/extra.css">"#));
        assert!(html.contains(r#"<script src="/js/extra.js"></script>"#));
        assert!(html.contains("<main>ok</main>"));
    }

    #[test]
    fn test_auth_document() {
        let html = auth_document("Login", "<form></form>").unwrap();
        assert!(html.contains("<title>Login - SonicJS AI</title>"));
        assert!(html.contains(HTMX_URL));
        assert!(html.contains("<form></form>"));
    }
}
