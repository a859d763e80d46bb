use sea_orm::Database;
use tracing::info;

use ecodatum_api::config::ApiConfig;
use ecodatum_api::router::build_router;
use ecodatum_api::state::AppState;
use ecodatum_core::tracing::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing("info");

    let config = ApiConfig::from_env()?;

    let db = Database::connect(&config.database_url).await?;

    let state = AppState {
        db,
        root_user: config.root_user,
    };

    if let Some(password) = &config.root_user_password {
        let root = state.manager().ensure_root_user(password).await?;
        info!(user_id = %root.id, "root user verified");
    }

    let router = build_router(state);
    let http_addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&http_addr).await?;

    info!("ecodatum api listening on {http_addr}");
    axum::serve(listener, router).await?;
    Ok(())
}
