use axum::{extract::State, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::requests::SegmentDayRequest;
use crate::api::dtos::responses::SegmentsResponse;
use crate::domain::models::segment::VisibleWindow;
use crate::domain::models::time::TimeOfDay;
use crate::domain::services::segmentation::{dedupe_reservations, group_by_day, segment_day};
use crate::error::AppError;
use std::sync::Arc;

/// Segments one calendar day of reservations. Days are keyed by each
/// reservation's start date; input spanning several days is rejected.
pub async fn segment_reservations(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<SegmentDayRequest>,
) -> Result<impl IntoResponse, AppError> {
    let rules = &state.config.rules;
    let start = parse_bound(payload.visible_start.as_deref(), rules.timeline_default_open)?;
    let end = parse_bound(payload.visible_end.as_deref(), rules.timeline_default_close)?;

    let reservations = dedupe_reservations(payload.reservations);
    let mut days = group_by_day(reservations);
    if days.len() > 1 {
        let dates: Vec<String> = days.keys().map(|d| d.format("%Y-%m-%d").to_string()).collect();
        return Err(AppError::Validation(format!(
            "Reservations must share one start date, got {}",
            dates.join(", ")
        )));
    }
    let reservations = days.pop_first().map(|(_, day)| day).unwrap_or_default();
    let segments = segment_day(&reservations, payload.capacity, VisibleWindow::new(start.minutes(), end.minutes()));

    Ok(Json(SegmentsResponse { segments }))
}

fn parse_bound(raw: Option<&str>, default: TimeOfDay) -> Result<TimeOfDay, AppError> {
    match raw {
        None => Ok(default),
        Some(value) => TimeOfDay::parse(value)
            .ok_or_else(|| AppError::Validation(format!("Invalid time of day: {}", value))),
    }
}
