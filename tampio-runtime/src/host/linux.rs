// Platform-specific Clock implementation for Linux/desktop
// Uses chrono to provide date/time components from the system clock

use crate::time_source::{Clock, DateComponents, Moment};
use chrono::{DateTime, Datelike, FixedOffset, Local, TimeZone, Timelike};

/// Linux/desktop clock using the system clock and local timezone
pub struct LinuxClock;

impl LinuxClock {
    pub fn new() -> Self {
        LinuxClock
    }
}

impl Default for LinuxClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for LinuxClock {
    fn now(&self) -> Moment {
        moment_from(&Local::now())
    }
}

/// The instant `epoch_millis` seen from `offset_minutes` east of UTC.
///
/// `None` when the instant or the offset is outside chrono's range.
pub fn moment_at(epoch_millis: i64, offset_minutes: i32) -> Option<Moment> {
    let offset = FixedOffset::east_opt(offset_minutes.checked_mul(60)?)?;
    let utc = DateTime::from_timestamp_millis(epoch_millis)?;
    Some(moment_from(&utc.with_timezone(&offset)))
}

// RUST CONCEPT: Generic over chrono's TimeZone
// Local::now() and a fixed offset both go through the same field extraction
fn moment_from<Tz: TimeZone>(time: &DateTime<Tz>) -> Moment {
    // Get timezone offset in seconds, convert to minutes
    let offset_seconds = time.fixed_offset().offset().local_minus_utc();

    let components = DateComponents {
        year: time.year(),
        month: time.month() as u8,
        day: time.day() as u8,
        hour: time.hour() as u8,
        minute: time.minute() as u8,
        second: time.second() as u8,
        offset_minutes: offset_seconds / 60,
    };

    Moment::new(time.timestamp_millis(), components)
}
