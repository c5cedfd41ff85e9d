//! Clock/calendar surface for Tampio programs.
//!
//! A `Clock` hands out `Moment`s; a `Moment` is one fixed instant and every
//! accessor derives from it, so reading the year and then the minute never
//! mixes two different instants.
//!
//! The platform supplies the calendar fields, the way an RTC chip or a
//! system clock library reports them. The runtime only formats them.
//!
//! # Examples
//!
//! ```
//! use tampio_runtime::time_source::{Clock, DateComponents, FixedClock, Moment};
//!
//! let components = DateComponents {
//!     year: 1970,
//!     month: 1,
//!     day: 1,
//!     hour: 2,
//!     minute: 0,
//!     second: 0,
//!     offset_minutes: 120,
//! };
//! let clock = FixedClock::new(Moment::new(0, components));
//! let moment = clock.now();
//! assert_eq!(moment.date_text(), "1.1.1970");
//! assert_eq!(moment.time_text(), "2.00.00");
//! ```

/// Date and time components, matching what RTC chips provide
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateComponents {
    pub year: i32,
    pub month: u8,           // 1-12
    pub day: u8,             // 1-31
    pub hour: u8,            // 0-23
    pub minute: u8,          // 0-59
    pub second: u8,          // 0-59
    pub offset_minutes: i32, // Timezone offset from UTC in minutes, positive east
}

/// One instant with its local calendar fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Moment {
    epoch_millis: i64,
    components: DateComponents,
}

impl Moment {
    /// Instant `epoch_millis` after 1970-01-01T00:00Z, with the local fields
    /// the platform computed for it.
    pub fn new(epoch_millis: i64, components: DateComponents) -> Self {
        Moment {
            epoch_millis,
            components,
        }
    }

    pub fn epoch_millis(&self) -> i64 {
        self.epoch_millis
    }

    pub fn components(&self) -> DateComponents {
        self.components
    }

    pub fn offset_minutes(&self) -> i32 {
        self.components.offset_minutes
    }

    pub fn year(&self) -> i32 {
        self.components.year
    }

    pub fn month(&self) -> u8 {
        self.components.month
    }

    pub fn day(&self) -> u8 {
        self.components.day
    }

    pub fn hour(&self) -> u8 {
        self.components.hour
    }

    pub fn minute(&self) -> u8 {
        self.components.minute
    }

    pub fn second(&self) -> u8 {
        self.components.second
    }

    /// Finnish short date, e.g. `18.10.2026`.
    pub fn date_text(&self) -> String {
        let c = &self.components;
        format!("{}.{}.{}", c.day, c.month, c.year)
    }

    /// Finnish time, e.g. `9.05.07`.
    pub fn time_text(&self) -> String {
        let c = &self.components;
        format!("{}.{:02}.{:02}", c.hour, c.minute, c.second)
    }

    pub fn full_text(&self) -> String {
        format!("{} {}", self.date_text(), self.time_text())
    }
}

pub trait Clock {
    /// The current instant.
    ///
    /// Platforms without a real-time clock may return a fixed value.
    fn now(&self) -> Moment;
}

/// Clock that is stopped at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    moment: Moment,
}

impl FixedClock {
    pub fn new(moment: Moment) -> Self {
        FixedClock { moment }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Moment {
        self.moment
    }
}
