use serde::{Deserialize, Serialize};
use std::fmt;
use crate::domain::models::time::LocalTimestamp;

/// Backend ids arrive as numbers from some endpoints and strings from others.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityId {
    Number(i64),
    Text(String),
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityId::Number(n) => write!(f, "{}", n),
            EntityId::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReservationUser {
    #[serde(default)]
    pub id: Option<EntityId>,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amenity_id: Option<EntityId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<EntityId>,
    pub start_time: LocalTimestamp,
    pub end_time: LocalTimestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<ReservationUser>,
}

/// Identity used to drop reservations the backend returned twice.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ReservationKey {
    Id(EntityId),
    Interval {
        start: LocalTimestamp,
        end: LocalTimestamp,
        user: Option<String>,
    },
}

impl Reservation {
    pub fn new(start_time: LocalTimestamp, end_time: LocalTimestamp) -> Self {
        Self {
            id: None,
            amenity_id: None,
            user_id: None,
            start_time,
            end_time,
            status: None,
            user: None,
        }
    }

    pub fn key(&self) -> ReservationKey {
        if let Some(id) = &self.id {
            return ReservationKey::Id(id.clone());
        }
        let user = self.user.as_ref().and_then(|u| {
            u.id.as_ref().map(ToString::to_string).or_else(|| u.name.clone())
        });
        ReservationKey::Interval {
            start: self.start_time,
            end: self.end_time,
            user,
        }
    }

    /// Start and end in minutes from midnight of the start day.
    pub fn minute_span(&self) -> (i64, i64) {
        let start = i64::from(self.start_time.minute_of_day());
        let end = self.end_time.minutes_since(self.start_time.date());
        (start, end)
    }
}
