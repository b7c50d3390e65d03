use sonic_admin_server::{
    PreviewError, PreviewRouter, PreviewState, config::Config, logs::setup_logging,
};

#[tokio::main]
#[cfg(not(tarpaulin_include))]
async fn main() -> Result<(), PreviewError> {
    let config = Config::from_env();
    let _log_guard = setup_logging(&config);
    tracing::info!(
        version = %config.version,
        fixtures = ?config.fixtures_dir,
        page_size = config.page_size,
        log_dir = %config.log_dir.display(),
        "Starting admin preview"
    );

    let state = PreviewState::new(&config);
    PreviewRouter::serve(state, config.port).await
}
