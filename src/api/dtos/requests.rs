use crate::domain::models::reservation::Reservation;
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentDayRequest {
    pub reservations: Vec<Reservation>,
    pub capacity: i32,
    pub visible_start: Option<String>,
    pub visible_end: Option<String>,
}

#[derive(Deserialize)]
pub struct TimelineQuery {
    pub week: Option<String>,
}

#[derive(Deserialize)]
pub struct StartSlotsQuery {
    pub date: Option<String>,
}

#[derive(Deserialize)]
pub struct EndOptionsQuery {
    pub start: String,
}
