use crate::domain::models::{
    amenity::Amenity, auth::Credentials, reservation::Reservation
};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};

#[async_trait]
pub trait AmenityRepository: Send + Sync {
    async fn find_by_id(&self, credentials: &Credentials, amenity_id: &str) -> Result<Option<Amenity>, AppError>;
}

#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// Reservations of one amenity whose start falls on a day in `start..=end`.
    async fn list_by_range(
        &self,
        credentials: &Credentials,
        amenity_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Reservation>, AppError>;
}

/// Building-local wall clock.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;

    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}
