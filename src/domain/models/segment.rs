use serde::{Deserialize, Serialize};
use crate::domain::models::reservation::Reservation;

/// Occupancy color tiers, ordered from emptiest to fullest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OccupancyTier {
    Low,
    Moderate,
    High,
    Full,
}

impl OccupancyTier {
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio >= 1.0 {
            OccupancyTier::Full
        } else if ratio >= 0.8 {
            OccupancyTier::High
        } else if ratio >= 0.5 {
            OccupancyTier::Moderate
        } else {
            OccupancyTier::Low
        }
    }

    /// Ratio and tier for `count` concurrent reservations.
    /// A non-positive capacity has no ratio and is reported as full.
    pub fn classify(count: usize, capacity: i32) -> (Option<f64>, Self) {
        if capacity <= 0 {
            return (None, OccupancyTier::Full);
        }
        let ratio = count as f64 / f64::from(capacity);
        (Some(ratio), Self::from_ratio(ratio))
    }
}

/// The rendered part of a day, in minutes since midnight. May be empty or inverted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleWindow {
    pub start: u32,
    pub end: u32,
}

impl VisibleWindow {
    pub const EMPTY: VisibleWindow = VisibleWindow { start: 0, end: 0 };

    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    pub start: u32,
    pub end: u32,
    pub reservations: Vec<Reservation>,
    pub count: usize,
    pub ratio: Option<f64>,
    pub tier: OccupancyTier,
}
