use axum::{extract::{Path, Query, State}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::auth::AuthCredentials;
use crate::api::dtos::requests::{EndOptionsQuery, StartSlotsQuery, TimelineQuery};
use crate::api::dtos::responses::{EndOptionsResponse, StartSlotsResponse};
use crate::domain::models::{amenity::Amenity, auth::Credentials, time::TimeOfDay};
use crate::domain::services::slots::{generate_end_options, generate_start_slots};
use crate::domain::services::timeline::{build_week, week_end, week_start};
use crate::error::AppError;
use std::sync::Arc;
use chrono::NaiveDate;
use tracing::{debug, info};

pub async fn get_timeline(
    State(state): State<Arc<AppState>>,
    AuthCredentials(credentials): AuthCredentials,
    Path(amenity_id): Path<String>,
    Query(params): Query<TimelineQuery>,
) -> Result<impl IntoResponse, AppError> {
    check_amenity_id(&amenity_id)?;
    let week_of = parse_date_or_today(params.week.as_deref(), &state)?;
    let amenity = load_amenity(&state, &credentials, &amenity_id).await?;

    let (start, end) = (week_start(week_of), week_end(week_of));
    info!("get_timeline: amenity {} week {}..{}", amenity_id, start, end);

    let reservations = state.reservation_repo
        .list_by_range(&credentials, &amenity_id, start, end)
        .await?;

    Ok(Json(build_week(week_of, &amenity, reservations, &state.config.rules)))
}

pub async fn get_start_slots(
    State(state): State<Arc<AppState>>,
    AuthCredentials(credentials): AuthCredentials,
    Path(amenity_id): Path<String>,
    Query(params): Query<StartSlotsQuery>,
) -> Result<impl IntoResponse, AppError> {
    check_amenity_id(&amenity_id)?;
    let date = parse_date_or_today(params.date.as_deref(), &state)?;
    let amenity = load_amenity(&state, &credentials, &amenity_id).await?;

    let slots = generate_start_slots(
        amenity.open_time.as_deref(),
        amenity.close_time.as_deref(),
        date,
        state.clock.now(),
        &state.config.rules,
    );
    debug!(
        amenity_id = %amenity_id,
        available = slots.iter().filter(|s| s.available).count(),
        "Generated start slots"
    );

    Ok(Json(StartSlotsResponse {
        date: date.format("%Y-%m-%d").to_string(),
        open_time: amenity.open_time,
        close_time: amenity.close_time,
        slots,
    }))
}

pub async fn get_end_options(
    State(state): State<Arc<AppState>>,
    AuthCredentials(credentials): AuthCredentials,
    Path(amenity_id): Path<String>,
    Query(params): Query<EndOptionsQuery>,
) -> Result<impl IntoResponse, AppError> {
    check_amenity_id(&amenity_id)?;
    let start = TimeOfDay::parse(&params.start)
        .ok_or_else(|| AppError::Validation("Invalid start time format (HH:MM)".into()))?;

    let amenity = load_amenity(&state, &credentials, &amenity_id).await?;
    let max_duration = amenity.max_duration
        .filter(|d| *d > 0)
        .unwrap_or(state.config.default_max_duration_min);

    let options = generate_end_options(&params.start, max_duration, &state.config.rules);

    Ok(Json(EndOptionsResponse {
        start: start.to_string(),
        max_duration,
        options,
    }))
}

/// The id is forwarded as one upstream path segment, so separators and dot segments are refused.
fn check_amenity_id(amenity_id: &str) -> Result<(), AppError> {
    let trimmed = amenity_id.trim();
    if trimmed.is_empty() || trimmed == "." || trimmed == ".." || amenity_id.contains(['/', '\\']) {
        return Err(AppError::Validation(format!("Invalid amenity id: {}", amenity_id)));
    }
    Ok(())
}

async fn load_amenity(state: &AppState, credentials: &Credentials, amenity_id: &str) -> Result<Amenity, AppError> {
    state.amenity_repo.find_by_id(credentials, amenity_id).await?
        .ok_or(AppError::NotFound("Amenity not found".into()))
}

fn parse_date_or_today(raw: Option<&str>, state: &AppState) -> Result<NaiveDate, AppError> {
    match raw {
        Some(value) => NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .map_err(|_| AppError::Validation("Invalid date format".into())),
        None => Ok(state.clock.today()),
    }
}
