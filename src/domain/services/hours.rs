use tracing::warn;
use crate::domain::models::segment::VisibleWindow;
use crate::domain::models::time::TimeOfDay;

/// Operating hours after defaults are applied. `open <= close` is not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatingHours {
    pub open: TimeOfDay,
    pub close: TimeOfDay,
}

impl OperatingHours {
    /// Inclusive at both ends: a mark equal to closing time counts as inside.
    pub fn contains(&self, minute: u32) -> bool {
        self.open.minutes() <= minute && minute <= self.close.minutes()
    }

    pub fn as_window(&self) -> VisibleWindow {
        VisibleWindow::new(self.open.minutes(), self.close.minutes())
    }
}

/// Blank or missing bounds fall back to the defaults. A bound that is present
/// but unparseable leaves the hours unresolved, so nothing falls inside them.
pub fn resolve_hours(
    open_time: Option<&str>,
    close_time: Option<&str>,
    default_open: TimeOfDay,
    default_close: TimeOfDay,
) -> Option<OperatingHours> {
    let open = resolve_bound(open_time, default_open);
    let close = resolve_bound(close_time, default_close);
    match (open, close) {
        (Some(open), Some(close)) => Some(OperatingHours { open, close }),
        _ => {
            warn!(?open_time, ?close_time, "Unparseable operating hours, treating window as empty");
            None
        }
    }
}

fn resolve_bound(raw: Option<&str>, default: TimeOfDay) -> Option<TimeOfDay> {
    match raw.map(str::trim) {
        None | Some("") => Some(default),
        Some(value) => TimeOfDay::parse(value),
    }
}
