use crate::domain::models::{
    segment::Segment,
    slot::{EndOption, StartSlot},
};
use serde::Serialize;

#[derive(Serialize)]
pub struct SegmentsResponse {
    pub segments: Vec<Segment>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StartSlotsResponse {
    pub date: String,
    pub open_time: Option<String>,
    pub close_time: Option<String>,
    pub slots: Vec<StartSlot>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EndOptionsResponse {
    pub start: String,
    pub max_duration: u32,
    pub options: Vec<EndOption>,
}
