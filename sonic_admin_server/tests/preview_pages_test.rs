mod test_utils;

use axum::http::StatusCode;

use sonic_admin_server::{fixtures::PreviewPage, http::RequestMetrics};

use crate::test_utils::tests::{fixtures_dir, setup_preview_server, test_config};

#[tokio::test]
async fn test_every_page_renders() -> anyhow::Result<()> {
    let server = setup_preview_server(test_config(None)).await?;

    for page in PreviewPage::ALL {
        let res = server
            .client
            .get(server.url(&format!("/preview/{}", page.slug())))
            .send()
            .await?;
        assert_eq!(res.status(), StatusCode::OK, "page {}", page.slug());

        let body = res.text().await?;
        assert!(body.starts_with("<!DOCTYPE html>"), "page {}", page.slug());
    }

    Ok(())
}

#[tokio::test]
async fn test_index_links_every_page() -> anyhow::Result<()> {
    let server = setup_preview_server(test_config(None)).await?;

    let body = server.client.get(server.url("/")).send().await?.text().await?;
    for page in PreviewPage::ALL {
        assert!(body.contains(&format!("href=\"/preview/{}\"", page.slug())));
    }

    Ok(())
}

#[tokio::test]
async fn test_unknown_page_is_not_found() -> anyhow::Result<()> {
    let server = setup_preview_server(test_config(None)).await?;

    let res = server.client.get(server.url("/preview/plugins")).send().await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert!(res.text().await?.contains("plugins"));

    Ok(())
}

#[tokio::test]
async fn test_admin_pages_show_configured_version() -> anyhow::Result<()> {
    let server = setup_preview_server(test_config(None)).await?;

    let body = server
        .client
        .get(server.url("/preview/collections"))
        .send()
        .await?
        .text()
        .await?;
    assert!(body.contains("9.9.9-test"));
    assert!(body.contains("Collections - SonicJS AI Admin"));

    Ok(())
}

#[tokio::test]
async fn test_faq_list_pages_through_demo_data() -> anyhow::Result<()> {
    let server = setup_preview_server(test_config(None)).await?;

    let body = server
        .client
        .get(server.url("/preview/faq-list?page=2"))
        .send()
        .await?
        .text()
        .await?;
    assert!(body.contains("Showing"));
    assert!(body.contains(">42<"));
    assert!(body.contains("page=3"));
    assert!(body.contains("limit=10"));

    Ok(())
}

#[tokio::test]
async fn test_dashboard_fragments() -> anyhow::Result<()> {
    let server = setup_preview_server(test_config(None)).await?;

    for path in [
        "/admin/api/stats",
        "/admin/api/recent-activity",
        "/admin/api/storage",
    ] {
        let res = server.client.get(server.url(path)).send().await?;
        assert_eq!(res.status(), StatusCode::OK, "{path}");
        let body = res.text().await?;
        assert!(!body.contains("<!DOCTYPE html>"), "{path}");
        assert!(!body.is_empty(), "{path}");
    }

    Ok(())
}

#[tokio::test]
async fn test_dashboard_chart_metrics() -> anyhow::Result<()> {
    let server = setup_preview_server(test_config(None)).await?;

    let page = server
        .client
        .get(server.url("/preview/dashboard"))
        .send()
        .await?
        .text()
        .await?;
    assert!(page.contains("id=\"requestsChart\""));
    assert!(page.contains("hx-get=\"/admin/api/metrics\""));

    let res = server.client.get(server.url("/admin/api/metrics")).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    let metrics: RequestMetrics = serde_json::from_str(&res.text().await?)?;
    assert!((1.0..=3.0).contains(&metrics.requests_per_second));

    Ok(())
}

#[tokio::test]
async fn test_content_form_fields_fragment() -> anyhow::Result<()> {
    let server = setup_preview_server(test_config(None)).await?;

    let res = server
        .client
        .get(server.url("/admin/content/form-fields?modelName=blog_posts"))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.text().await?;
    assert!(body.contains("data-field=\"excerpt\""));
    assert!(body.find("data-field=\"title\"") < body.find("data-field=\"excerpt\""));

    let empty = server
        .client
        .get(server.url("/admin/content/form-fields"))
        .send()
        .await?;
    assert_eq!(empty.status(), StatusCode::OK);
    assert!(empty.text().await?.is_empty());

    let unknown = server
        .client
        .get(server.url("/admin/content/form-fields?modelName=missing"))
        .send()
        .await?;
    assert_eq!(unknown.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn test_fixture_files_override_demo_data() -> anyhow::Result<()> {
    let dir = fixtures_dir().await?;
    tokio::fs::write(
        dir.join("collections.json"),
        r#"{
            "collections": [{
                "id": "c-1",
                "name": "recipes",
                "displayName": "Recipes & Menus",
                "createdAt": "2024-05-01T10:00:00Z"
            }]
        }"#,
    )
    .await?;
    tokio::fs::write(dir.join("log-config.json"), "{ not json").await?;
    let server = setup_preview_server(test_config(Some(dir.clone()))).await?;

    let body = server
        .client
        .get(server.url("/preview/collections"))
        .send()
        .await?
        .text()
        .await?;
    assert!(body.contains("Recipes &amp; Menus"));
    assert!(body.contains("5/1/2024"));

    let broken = server.client.get(server.url("/preview/log-config")).send().await?;
    assert_eq!(broken.status(), StatusCode::INTERNAL_SERVER_ERROR);

    tokio::fs::remove_dir_all(&dir).await?;
    Ok(())
}
