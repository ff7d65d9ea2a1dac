use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;
use crate::domain::models::amenity::Amenity;
use crate::domain::models::reservation::{EntityId, Reservation};
use crate::domain::models::segment::{Segment, VisibleWindow};
use crate::domain::models::time::{format_minutes, MINUTES_PER_DAY};
use crate::domain::services::defaults::SchedulingRules;
use crate::domain::services::hours::resolve_hours;
use crate::domain::services::segmentation::{dedupe_reservations, group_by_day, segment_day};

pub const DAYS_PER_WEEK: i64 = 7;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayTimeline {
    pub date: NaiveDate,
    pub weekday: String,
    pub reservation_count: usize,
    pub peak_count: usize,
    pub segments: Vec<Segment>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekTimeline {
    pub amenity_id: EntityId,
    pub capacity: i32,
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    pub visible_start: Option<String>,
    pub visible_end: Option<String>,
    pub hour_marks: Vec<String>,
    pub days: Vec<DayTimeline>,
}

/// Monday of the week containing `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

pub fn week_end(date: NaiveDate) -> NaiveDate {
    week_start(date) + Duration::days(DAYS_PER_WEEK - 1)
}

/// Whole-hour axis labels covering `window`. Empty when the window is inverted.
pub fn hour_marks(window: VisibleWindow) -> Vec<String> {
    if window.start > window.end {
        return Vec::new();
    }
    let first = window.start / 60;
    let last = window.end.div_ceil(60).min(MINUTES_PER_DAY / 60);
    (first..=last).map(|h| format_minutes(h * 60)).collect()
}

pub fn build_week(
    week_of: NaiveDate,
    amenity: &Amenity,
    reservations: Vec<Reservation>,
    rules: &SchedulingRules,
) -> WeekTimeline {
    let hours = resolve_hours(
        amenity.open_time.as_deref(),
        amenity.close_time.as_deref(),
        rules.timeline_default_open,
        rules.timeline_default_close,
    );
    let window = hours.map_or(VisibleWindow::EMPTY, |h| h.as_window());

    let mut by_day = group_by_day(dedupe_reservations(reservations));
    let start = week_start(week_of);

    let days = (0..DAYS_PER_WEEK)
        .map(|offset| {
            let date = start + Duration::days(offset);
            let day_reservations = by_day.remove(&date).unwrap_or_default();
            let segments = segment_day(&day_reservations, amenity.capacity, window);
            DayTimeline {
                date,
                weekday: date.weekday().to_string(),
                reservation_count: day_reservations.len(),
                peak_count: segments.iter().map(|s| s.count).max().unwrap_or(0),
                segments,
            }
        })
        .collect();

    WeekTimeline {
        amenity_id: amenity.id.clone(),
        capacity: amenity.capacity,
        week_start: start,
        week_end: week_end(week_of),
        visible_start: hours.map(|h| h.open.to_string()),
        visible_end: hours.map(|h| h.close.to_string()),
        hour_marks: hours.map_or_else(Vec::new, |h| hour_marks(h.as_window())),
        days,
    }
}
