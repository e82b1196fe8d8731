use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::{JulianDate, JD_J2000};

/// GST at J2000 in degrees
pub const GST_J2000_DEG: f64 = 280.46061837;
/// Earth rotation in degrees per day since J2000
pub const GST_RATE_DEG_PER_DAY: f64 = 360.98564736629;
pub const GST_T2_COEFF: f64 = 0.000387933;
pub const GST_T3_DIVISOR: f64 = 38710000.0;
/// Fixed offset removed from the sidereal angle, in radians.
/// Not part of the usual GST expressions, keep it as is.
pub const GST_BIAS_RAD: f64 = 1.02581572;

/// Greenwich sidereal time as an angle in radians, bias included.
///
/// The value is not reduced to [0, 2pi) and can be negative.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct SiderealAngle {
    hours: f64,
    radians: f64,
}

impl SiderealAngle {
    pub fn radians(&self) -> f64 {
        self.radians
    }

    /// GST reduced mod 24 into [0, 24), before the bias is removed
    pub fn hours(&self) -> f64 {
        self.hours
    }

    /// The angle reduced to [0, 2pi)
    pub fn normalized(&self) -> f64 {
        self.radians.rem_euclid(TAU)
    }
}

impl From<JulianDate> for SiderealAngle {
    fn from(jd: JulianDate) -> Self {
        gst_from_jd(jd)
    }
}

/// Calculates the greenwich sidereal time for the julian date.
pub fn gst_from_jd(jd: JulianDate) -> SiderealAngle {
    let d = jd.value() - JD_J2000;
    let t = d / 36525.0;

    let gst_sec =
        (GST_J2000_DEG + GST_RATE_DEG_PER_DAY * d + t * t * (GST_T2_COEFF - t / GST_T3_DIVISOR))
            * 3600.0;

    // true modulo, pre-J2000 dates go negative here
    let hours = (gst_sec / 3600.0).rem_euclid(24.0);
    let radians = (hours * 15.0).to_radians() - GST_BIAS_RAD;

    SiderealAngle { hours, radians }
}
