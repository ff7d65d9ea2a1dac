use std::sync::Arc;
use crate::domain::ports::{AmenityRepository, Clock, ReservationRepository};
use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub amenity_repo: Arc<dyn AmenityRepository>,
    pub reservation_repo: Arc<dyn ReservationRepository>,
    pub clock: Arc<dyn Clock>,
}
