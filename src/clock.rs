use chrono::{Local, NaiveDate, NaiveDateTime};

/// Source of the current wall-clock time.
pub trait TimeSource {
    /// Local date and time at the moment of the call.
    fn now(&self) -> NaiveDateTime;
}

/// Reads the system clock on every call, in the local timezone.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always reports the same instant. Used to pin rendering to a known date.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedClock(NaiveDateTime);

impl FixedClock {
    pub fn new(at: NaiveDateTime) -> Self {
        Self(at)
    }

    /// Midnight on the given calendar date, or `None` if the date does not exist.
    pub fn at(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(Self)
    }
}

impl TimeSource for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
