#[cfg(test)]
pub mod tests {
    use reqwest::Client;
    use std::path::PathBuf;
    use tokio::net::TcpListener;

    use sonic_admin_server::{PreviewRouter, PreviewState, config::Config};

    /// Base URL of a running preview server plus a client to query it.
    pub struct TestServer {
        pub base_url: String,
        pub client: Client,
    }

    impl TestServer {
        pub fn url(&self, path: &str) -> String {
            format!("{}{}", self.base_url, path)
        }
    }

    pub fn test_config(fixtures_dir: Option<PathBuf>) -> Config {
        Config {
            port: 0,
            fixtures_dir,
            version: "9.9.9-test".to_string(),
            page_size: 10,
            ..Config::default()
        }
    }

    /// Starts the preview router on an ephemeral port.
    pub async fn setup_preview_server(config: Config) -> anyhow::Result<TestServer> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let router = PreviewRouter::router(PreviewState::new(&config));

        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, router).await {
                eprintln!("preview server stopped: {e}");
            }
        });

        Ok(TestServer {
            base_url: format!("http://{addr}"),
            client: Client::new(),
        })
    }

    /// Fresh fixtures directory under the system temp dir.
    pub async fn fixtures_dir() -> anyhow::Result<PathBuf> {
        let dir = std::env::temp_dir().join(format!("sonic-admin-it-{}", uuid::Uuid::new_v4()));
        tokio::fs::create_dir_all(&dir).await?;
        Ok(dir)
    }
}
