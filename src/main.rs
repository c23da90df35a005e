mod model;
mod server;

use std::time::Duration;

use tokio::net::TcpListener;

use crate::server::{
    config::Config,
    error::AppError,
    router, startup,
    state::AppState,
    util::{image::ImageStore, jwt::JwtKeys},
};

/// In-flight requests get this long to finish after a shutdown signal.
const SHUTDOWN_GRACE: Duration = Duration::from_secs(5);

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let http_client = startup::setup_reqwest_client()?;

    let state = AppState::new(
        db,
        http_client,
        JwtKeys::new(&config.jwt_secret),
        ImageStore::new(config.upload_dir.clone()),
        config.invite_code.clone(),
    );
    let app = router::router(state);

    let address = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&address).await?;
    tracing::info!("Server running on {}", address);

    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();
    let server = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            })
            .await
    });

    startup::shutdown_signal().await;
    let _ = shutdown_tx.send(());

    match tokio::time::timeout(SHUTDOWN_GRACE, server).await {
        Ok(Ok(Ok(()))) => tracing::info!("Server stopped"),
        Ok(Ok(Err(e))) => tracing::error!("Server error: {}", e),
        Ok(Err(e)) => tracing::error!("Server task failed: {}", e),
        Err(_) => tracing::warn!(
            "Shutdown did not finish within {}s, exiting",
            SHUTDOWN_GRACE.as_secs()
        ),
    }

    Ok(())
}
