use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StartSlot {
    pub time: String,
    pub available: bool,
    pub within_operating_hours: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EndOption {
    pub time: String,
    /// Minutes after the chosen start.
    pub duration: u32,
    pub label: String,
}
