use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

pub mod sidereal;

pub const JD_J2000: f64 = 2451545.0;
pub const SEC_PER_DAY: f64 = 86400.0;
pub const DAYS_PER_CENTURY: f64 = 36525.0;

pub mod prelude {
    pub use crate::sidereal::{gst_from_jd, SiderealAngle};
    pub use crate::{CivilTimestamp, JulianDate};
}

/// A UTC calendar date and time of day, as handed to us by the caller.
///
/// Fields are signed and never range checked, so out of range values like
/// month 13 or day 32 still flow through the julian date calculation.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct CivilTimestamp {
    pub year: i32,
    pub month: i32,
    pub day: i32,
    pub hour: i32,
    pub minute: i32,
    pub second: f64,
}

impl CivilTimestamp {
    pub fn new(year: i32, month: i32, day: i32, hour: i32, minute: i32, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Converts the timestamp to a julian date.
    ///
    /// reference: Meeus, Jean. Astronomical Algorithms, 2nd Edition, 1998. Willmann-Bell, Inc
    pub fn to_jd(&self) -> JulianDate {
        // widened so the month shift and leap terms cannot overflow at the i32 limits
        let mut y = self.year as i64;
        let mut m = self.month as i64;

        // shift gregorian calendar to julian calendar, which starts in march
        if m <= 2 {
            y -= 1;
            m += 12;
        }

        // corrections for leap years
        let a = y.div_euclid(100);
        let b = 2 - a + a.div_euclid(4);

        // integer terms are summed exactly before the half day offset
        let days = (365.25 * (y as f64 + 4716.0)).trunc() as i64
            + (30.6001 * (m as f64 + 1.0)).trunc() as i64
            + self.day as i64
            + b;
        let jd_int = days as f64 - 1524.5;

        let frac_day =
            (self.hour as f64 + self.minute as f64 / 60.0 + self.second / 3600.0) / 24.0;

        JulianDate(jd_int + frac_day)
    }
}

impl From<NaiveDateTime> for CivilTimestamp {
    fn from(dt: NaiveDateTime) -> Self {
        let second = dt.second() as f64 + dt.nanosecond() as f64 * 1e-9;
        Self {
            year: dt.year(),
            month: dt.month() as i32,
            day: dt.day() as i32,
            hour: dt.hour() as i32,
            minute: dt.minute() as i32,
            second,
        }
    }
}

/// Continuous count of days since noon, January 1, 4713 BC.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
pub struct JulianDate(f64);

impl JulianDate {
    pub fn new(jd: f64) -> Self {
        Self(jd)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn days_since_j2000(&self) -> f64 {
        self.0 - JD_J2000
    }

    pub fn centuries_since_j2000(&self) -> f64 {
        self.days_since_j2000() / DAYS_PER_CENTURY
    }

    pub fn seconds_since_j2000(&self) -> f64 {
        self.days_since_j2000() * SEC_PER_DAY
    }
}

impl From<CivilTimestamp> for JulianDate {
    fn from(timestamp: CivilTimestamp) -> Self {
        timestamp.to_jd()
    }
}

impl From<f64> for JulianDate {
    fn from(jd: f64) -> Self {
        Self(jd)
    }
}
