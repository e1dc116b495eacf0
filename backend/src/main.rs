use std::sync::Arc;
use backend::{
    build_rocket,
    config::ServerConfig,
    rate_limiter::RateLimiter,
    routes::AppState,
};
use shuttle_runtime::CustomError;
use tokio::time::{interval, Duration};
use tracing::info;
use include_dir::{include_dir, Dir};
use uuid::Uuid;

static STATIC_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/static");

async fn run_prune_task(limiter: Arc<RateLimiter>) {
    let mut interval = interval(Duration::from_secs(60));
    info!("🧹 Rate limit pruning started");

    loop {
        interval.tick().await;
        limiter.prune();
    }
}

#[shuttle_runtime::main]
async fn rocket(
    #[shuttle_runtime::Secrets] secret_store: shuttle_runtime::SecretStore,
) -> shuttle_rocket::ShuttleRocket {
    info!("🚀 Starting Maartand landing server");

    let config = ServerConfig::from_lookup(|key| secret_store.get(key));
    info!(
        "📋 Contact form limit: {} submissions per {} minutes",
        config.max_submissions, config.window_minutes
    );
    let app_state = AppState::new(&config);

    let temp_dir = std::env::temp_dir().join(format!("maartand_static_{}", Uuid::new_v4()));
    std::fs::create_dir_all(&temp_dir).map_err(CustomError::new)?;
    STATIC_DIR.extract(&temp_dir).map_err(CustomError::new)?;

    tokio::spawn(run_prune_task(app_state.contact_limiter.clone()));

    Ok(build_rocket(app_state, temp_dir).into())
}
