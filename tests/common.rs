#![allow(dead_code)]

use amenity_occupancy::{
    api::router::create_router,
    config::Config,
    domain::models::{amenity::Amenity, auth::Credentials, reservation::{EntityId, Reservation}, time::LocalTimestamp},
    domain::ports::{AmenityRepository, Clock, ReservationRepository},
    domain::services::defaults::{SchedulingRules, DEFAULT_MAX_DURATION_MIN},
    error::AppError,
    state::AppState,
};
use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request},
    response::Response,
    Router,
};
use chrono::{NaiveDate, NaiveDateTime};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

pub const TOKEN: &str = "tenant-token-123";

pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

#[derive(Default)]
pub struct MockBackend {
    pub amenities: Mutex<HashMap<String, Amenity>>,
    pub reservations: Mutex<HashMap<String, Vec<Reservation>>>,
    pub seen_tokens: Mutex<Vec<String>>,
    pub requested_ranges: Mutex<Vec<(NaiveDate, NaiveDate)>>,
    pub fail_with_status: Mutex<Option<u16>>,
}

impl MockBackend {
    pub fn add_amenity(&self, amenity: Amenity) {
        self.amenities.lock().unwrap().insert(amenity.id.to_string(), amenity);
    }

    pub fn add_reservations(&self, amenity_id: &str, reservations: Vec<Reservation>) {
        self.reservations.lock().unwrap()
            .entry(amenity_id.to_string())
            .or_default()
            .extend(reservations);
    }

    fn check(&self, credentials: &Credentials) -> Result<(), AppError> {
        self.seen_tokens.lock().unwrap().push(credentials.token().to_string());
        match *self.fail_with_status.lock().unwrap() {
            Some(401) => Err(AppError::Unauthorized),
            Some(status) => Err(AppError::Upstream(format!("Backend returned {}", status))),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl AmenityRepository for MockBackend {
    async fn find_by_id(&self, credentials: &Credentials, amenity_id: &str) -> Result<Option<Amenity>, AppError> {
        self.check(credentials)?;
        Ok(self.amenities.lock().unwrap().get(amenity_id).cloned())
    }
}

#[async_trait]
impl ReservationRepository for MockBackend {
    async fn list_by_range(
        &self,
        credentials: &Credentials,
        amenity_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Reservation>, AppError> {
        self.check(credentials)?;
        self.requested_ranges.lock().unwrap().push((start, end));
        let all = self.reservations.lock().unwrap().get(amenity_id).cloned().unwrap_or_default();
        Ok(all.into_iter()
            .filter(|r| r.start_time.date() >= start && r.start_time.date() <= end)
            .collect())
    }
}

pub fn amenity(id: i64, capacity: i32, open: Option<&str>, close: Option<&str>, max_duration: Option<u32>) -> Amenity {
    Amenity {
        id: EntityId::Number(id),
        name: format!("Amenity {}", id),
        capacity,
        open_time: open.map(String::from),
        close_time: close.map(String::from),
        max_duration,
    }
}

pub fn at(raw: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M").unwrap()
}

/// A reservation between two `at` timestamps.
pub fn booking_at(start: &str, end: &str) -> Reservation {
    Reservation::new(LocalTimestamp::new(at(start)), LocalTimestamp::new(at(end)))
}

pub struct TestApp {
    pub router: Router,
    pub backend: Arc<MockBackend>,
}

impl TestApp {
    pub fn new(now: NaiveDateTime) -> Self {
        let backend = Arc::new(MockBackend::default());

        let config = Config {
            backend_url: "http://backend.invalid".to_string(),
            port: 0,
            timezone: chrono_tz::UTC,
            default_max_duration_min: DEFAULT_MAX_DURATION_MIN,
            upstream_timeout_secs: 1,
            rules: SchedulingRules::default(),
        };

        let state = AppState {
            config,
            amenity_repo: backend.clone(),
            reservation_repo: backend.clone(),
            clock: Arc::new(FixedClock(now)),
        };

        Self {
            router: create_router(Arc::new(state)),
            backend,
        }
    }

    pub async fn get(&self, uri: &str) -> Response {
        self.router.clone().oneshot(
            Request::builder().method("GET").uri(uri)
                .header(header::AUTHORIZATION, format!("Bearer {}", TOKEN))
                .body(Body::empty()).unwrap()
        ).await.unwrap()
    }

    pub async fn get_anonymous(&self, uri: &str) -> Response {
        self.router.clone().oneshot(
            Request::builder().method("GET").uri(uri)
                .body(Body::empty()).unwrap()
        ).await.unwrap()
    }

    pub async fn post_json(&self, uri: &str, body: &Value) -> Response {
        self.router.clone().oneshot(
            Request::builder().method("POST").uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string())).unwrap()
        ).await.unwrap()
    }
}

pub async fn parse_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
