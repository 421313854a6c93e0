use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use stegano_client::services::{auth, flask, images};
use stegano_client::{ApiClient, Config, SessionStore};

/// Connectivity doctor: boots the client and probes both backends.
///
/// Unavailability is detected, not repaired; the process exits zero either
/// way so it can run from health checks.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();

    let config = Config::from_env()?;
    tracing::info!("✅ Configuration loaded");
    tracing::info!("   main backend:     {}", config.api_base_url);
    tracing::info!("   analysis backend: {}", config.flask_base_url);

    let store = SessionStore::on_disk(&config.session_file)?;
    let client = ApiClient::new(config, store)?;

    match client.store().current_user() {
        Some(user) => {
            if auth::ensure_fresh(&client).await {
                tracing::info!("✅ Session active for {} ({:?})", user.username, user.role);
            } else {
                tracing::warn!("⏰ Session was near expiry and has been cleared");
            }
        }
        None => tracing::info!("ℹ️ No active session"),
    }

    match flask::health(&client).await {
        Ok(health) => tracing::info!("✅ Analysis backend reachable: {}", health.message),
        Err(e) => tracing::error!("❌ Analysis backend unreachable: {}", e),
    }

    match images::flask_status(&client).await {
        Ok(status) if status.flask_connected => {
            tracing::info!("✅ Main backend reachable and connected to analysis backend");
        }
        Ok(status) => {
            tracing::warn!(
                "⚠️ Main backend reachable but analysis link is down: {}",
                status.message.or(status.error).unwrap_or_default()
            );
        }
        Err(e) => tracing::error!("❌ Main backend unreachable: {}", e),
    }

    Ok(())
}
