use chrono::NaiveDate;
use std::collections::{BTreeMap, HashSet};
use tracing::debug;
use crate::domain::models::reservation::Reservation;
use crate::domain::models::segment::{OccupancyTier, Segment, VisibleWindow};

/// Splits one day's reservations into non-overlapping occupancy segments.
///
/// Every start and end is a boundary; each pair of consecutive boundaries is
/// a candidate segment holding the reservations with `start < b1 && end > b0`.
/// Candidates nobody overlaps are skipped, the rest are clipped to `window`.
pub fn segment_day(reservations: &[Reservation], capacity: i32, window: VisibleWindow) -> Vec<Segment> {
    let spans: Vec<(i64, i64)> = reservations.iter().map(Reservation::minute_span).collect();

    let mut boundaries: Vec<i64> = spans.iter().flat_map(|&(start, end)| [start, end]).collect();
    boundaries.sort_unstable();
    boundaries.dedup();

    let visible_start = i64::from(window.start);
    let visible_end = i64::from(window.end);

    let mut segments = Vec::new();
    for pair in boundaries.windows(2) {
        let (seg_start, seg_end) = (pair[0], pair[1]);

        let active: Vec<Reservation> = reservations
            .iter()
            .zip(&spans)
            .filter(|&(_, &(start, end))| start < seg_end && end > seg_start)
            .map(|(r, _)| r.clone())
            .collect();

        if active.is_empty() {
            continue;
        }

        let clamped_start = seg_start.max(visible_start);
        let clamped_end = seg_end.min(visible_end);
        if clamped_start >= clamped_end {
            continue;
        }

        let count = active.len();
        let (ratio, tier) = OccupancyTier::classify(count, capacity);
        segments.push(Segment {
            start: clamped_start as u32,
            end: clamped_end as u32,
            reservations: active,
            count,
            ratio,
            tier,
        });
    }

    debug!(
        reservations = reservations.len(),
        segments = segments.len(),
        capacity,
        "Segmented day"
    );
    segments
}

/// Drops repeated reservations, keeping the first of each.
pub fn dedupe_reservations(reservations: Vec<Reservation>) -> Vec<Reservation> {
    let mut seen = HashSet::new();
    reservations.into_iter().filter(|r| seen.insert(r.key())).collect()
}

pub fn group_by_day(reservations: Vec<Reservation>) -> BTreeMap<NaiveDate, Vec<Reservation>> {
    let mut days: BTreeMap<NaiveDate, Vec<Reservation>> = BTreeMap::new();
    for reservation in reservations {
        days.entry(reservation.start_time.date()).or_default().push(reservation);
    }
    days
}
