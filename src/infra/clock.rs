use chrono::{NaiveDateTime, Utc};
use chrono_tz::Tz;
use crate::domain::ports::Clock;

/// Wall clock of the building, so "today" matches what tenants see.
pub struct SystemClock {
    tz: Tz,
}

impl SystemClock {
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Utc::now().with_timezone(&self.tz).naive_local()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_system_clock_applies_timezone() {
        let tz: Tz = "Asia/Tokyo".parse().unwrap();
        let local = SystemClock::new(tz).now();
        let expected = tz.from_utc_datetime(&Utc::now().naive_utc()).naive_local();
        assert!((expected - local).abs() < Duration::seconds(5));
    }
}
