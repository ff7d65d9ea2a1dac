use serde::{Deserialize, Serialize};
use crate::domain::models::reservation::EntityId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Amenity {
    pub id: EntityId,
    #[serde(default)]
    pub name: String,
    pub capacity: i32,
    #[serde(default)]
    pub open_time: Option<String>,
    #[serde(default)]
    pub close_time: Option<String>,
    #[serde(default, alias = "maxDurationMinutes")]
    pub max_duration: Option<u32>,
}
