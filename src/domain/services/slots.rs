use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use std::cmp::min;
use tracing::warn;
use crate::domain::models::slot::{EndOption, StartSlot};
use crate::domain::models::time::{format_minutes, TimeOfDay};
use crate::domain::services::defaults::SchedulingRules;
use crate::domain::services::hours::resolve_hours;

/// Start times on the slot grid between the fixed day bounds.
///
/// A slot is available when it lies within the operating hours and, if
/// `reference_date` is today, starts more than the grace period after `now`.
/// Other dates are never filtered against the clock.
pub fn generate_start_slots(
    open_time: Option<&str>,
    close_time: Option<&str>,
    reference_date: NaiveDate,
    now: NaiveDateTime,
    rules: &SchedulingRules,
) -> Vec<StartSlot> {
    let hours = resolve_hours(open_time, close_time, rules.picker_default_open, rules.picker_default_close);
    let is_today = reference_date == now.date();
    let cutoff = now + Duration::minutes(rules.past_grace_min);
    let midnight = reference_date.and_time(NaiveTime::MIN);

    let mut slots = Vec::new();
    let mut mark = rules.day_start.minutes();
    while mark <= rules.day_end.minutes() {
        let within_operating_hours = hours.is_some_and(|h| h.contains(mark));
        let upcoming = !is_today || midnight + Duration::minutes(i64::from(mark)) > cutoff;

        slots.push(StartSlot {
            time: format_minutes(mark),
            available: within_operating_hours && upcoming,
            within_operating_hours,
        });
        mark += rules.step();
    }
    slots
}

/// End times for a chosen start, one per slot step up to `max_duration_min`,
/// capped at the global end ceiling rather than the amenity's close time.
pub fn generate_end_options(start_time: &str, max_duration_min: u32, rules: &SchedulingRules) -> Vec<EndOption> {
    let Some(start) = TimeOfDay::parse(start_time) else {
        warn!(start_time, "Unparseable start time, no end options");
        return Vec::new();
    };
    let start = start.minutes();
    let ceiling = min(start.saturating_add(max_duration_min), rules.end_ceiling.minutes());
    let longest = min(max_duration_min, ceiling.saturating_sub(start));
    let step = rules.step();

    (1..)
        .map(|i| i * step)
        .take_while(|&duration| duration <= longest)
        .map(|duration| EndOption {
            time: format_minutes(start + duration),
            duration,
            label: duration_label(duration),
        })
        .collect()
}

/// `90` -> `"1h 30m"`, `60` -> `"1h"`, `30` -> `"30m"`.
pub fn duration_label(minutes: u32) -> String {
    let (hours, rest) = (minutes / 60, minutes % 60);
    match (hours, rest) {
        (0, m) => format!("{}m", m),
        (h, 0) => format!("{}h", h),
        (h, m) => format!("{}h {}m", h, m),
    }
}
