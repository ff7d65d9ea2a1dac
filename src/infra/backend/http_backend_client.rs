use crate::domain::models::{amenity::Amenity, auth::Credentials, reservation::Reservation};
use crate::domain::ports::{AmenityRepository, ReservationRepository};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error};

/// Read-only client for the building-management REST backend.
/// Failures are surfaced as they happen; nothing is retried.
pub struct HttpBackendClient {
    client: Client,
    base_url: Url,
}

impl HttpBackendClient {
    pub fn new(base_url: String, timeout: Duration) -> Result<Self, AppError> {
        let base_url = Url::parse(&base_url)
            .map_err(|e| AppError::Config(format!("Invalid BACKEND_URL {}: {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(AppError::Config(format!("BACKEND_URL {} cannot carry a path", base_url)));
        }
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url })
    }

    /// Appends `segments` to the base path, each percent-encoded as a single segment.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, AppError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| AppError::Config(format!("BACKEND_URL {} cannot carry a path", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        credentials: &Credentials,
        segments: &[&str],
        query: &[(&str, String)],
    ) -> Result<T, AppError> {
        let url = self.endpoint(segments)?;
        let path = url.path().to_string();
        debug!("GET {}", url);

        let res = self.client.get(url.clone())
            .header("Authorization", credentials.authorization_header())
            .query(query)
            .send()
            .await
            .map_err(|e| {
                error!("Backend connection error for {}: {}", url, e);
                AppError::Http(e)
            })?;

        let status = res.status();
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => return Err(AppError::Unauthorized),
            StatusCode::NOT_FOUND => return Err(AppError::NotFound(format!("{} not found", path))),
            s if !s.is_success() => {
                let text = res.text().await.unwrap_or_default();
                let msg = format!("Backend returned {} for {}: {}", status, path, text);
                error!("{}", msg);
                return Err(AppError::Upstream(msg));
            }
            _ => {}
        }

        res.json::<T>().await.map_err(|e| {
            let msg = format!("Undecodable backend response for {}: {}", path, e);
            error!("{}", msg);
            AppError::Upstream(msg)
        })
    }
}

#[async_trait]
impl AmenityRepository for HttpBackendClient {
    async fn find_by_id(&self, credentials: &Credentials, amenity_id: &str) -> Result<Option<Amenity>, AppError> {
        match self.get_json(credentials, &["amenities", amenity_id], &[]).await {
            Ok(amenity) => Ok(Some(amenity)),
            Err(AppError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }
}

#[async_trait]
impl ReservationRepository for HttpBackendClient {
    async fn list_by_range(
        &self,
        credentials: &Credentials,
        amenity_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Reservation>, AppError> {
        let query = [
            ("startDate", start.format("%Y-%m-%d").to_string()),
            ("endDate", end.format("%Y-%m-%d").to_string()),
        ];
        let reservations: Vec<Reservation> = self
            .get_json(credentials, &["reservations", "amenity", amenity_id], &query)
            .await?;
        debug!(amenity_id, count = reservations.len(), "Fetched reservations");
        Ok(reservations)
    }
}
