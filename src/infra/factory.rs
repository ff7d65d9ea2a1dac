use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use crate::config::Config;
use crate::error::AppError;
use crate::infra::backend::http_backend_client::HttpBackendClient;
use crate::infra::clock::SystemClock;
use crate::state::AppState;

pub fn bootstrap_state(config: &Config) -> Result<AppState, AppError> {
    info!("Using backend at {} (timezone {})", config.backend_url, config.timezone);

    let backend = Arc::new(HttpBackendClient::new(
        config.backend_url.clone(),
        Duration::from_secs(config.upstream_timeout_secs),
    )?);

    Ok(AppState {
        config: config.clone(),
        amenity_repo: backend.clone(),
        reservation_repo: backend,
        clock: Arc::new(SystemClock::new(config.timezone)),
    })
}
