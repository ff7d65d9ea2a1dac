use crate::domain::models::time::TimeOfDay;

pub const SLOT_STEP_MIN: u32 = 30;
pub const DAY_START: TimeOfDay = TimeOfDay::hm(6, 0);
pub const DAY_END: TimeOfDay = TimeOfDay::hm(23, 0);
/// Latest end time ever offered, regardless of the amenity's close time.
pub const END_CEILING: TimeOfDay = TimeOfDay::hm(22, 30);
pub const PAST_GRACE_MIN: i64 = 5;

pub const PICKER_DEFAULT_OPEN: TimeOfDay = TimeOfDay::hm(6, 0);
pub const PICKER_DEFAULT_CLOSE: TimeOfDay = TimeOfDay::hm(22, 30);
pub const TIMELINE_DEFAULT_OPEN: TimeOfDay = TimeOfDay::hm(8, 0);
pub const TIMELINE_DEFAULT_CLOSE: TimeOfDay = TimeOfDay::hm(20, 0);

pub const DEFAULT_MAX_DURATION_MIN: u32 = 120;

/// Fixed time policy for slot generation and the timeline.
///
/// The end ceiling and the day bounds are deliberately independent of any
/// amenity's operating hours, so an amenity closing at 22:00 is still offered
/// a 22:30 end time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchedulingRules {
    pub slot_step_min: u32,
    pub day_start: TimeOfDay,
    pub day_end: TimeOfDay,
    pub end_ceiling: TimeOfDay,
    pub past_grace_min: i64,
    pub picker_default_open: TimeOfDay,
    pub picker_default_close: TimeOfDay,
    pub timeline_default_open: TimeOfDay,
    pub timeline_default_close: TimeOfDay,
}

impl Default for SchedulingRules {
    fn default() -> Self {
        Self {
            slot_step_min: SLOT_STEP_MIN,
            day_start: DAY_START,
            day_end: DAY_END,
            end_ceiling: END_CEILING,
            past_grace_min: PAST_GRACE_MIN,
            picker_default_open: PICKER_DEFAULT_OPEN,
            picker_default_close: PICKER_DEFAULT_CLOSE,
            timeline_default_open: TIMELINE_DEFAULT_OPEN,
            timeline_default_close: TIMELINE_DEFAULT_CLOSE,
        }
    }
}

impl SchedulingRules {
    pub(crate) fn step(&self) -> u32 {
        self.slot_step_min.max(1)
    }
}
