use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};
use time::sidereal::SiderealAngle;

/// Rotation of the earth fixed frame about the inertial Z axis.
///
/// Only the sine and cosine of the angle are kept, the polar axis is untouched.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct EarthRotation {
    cos: f64,
    sin: f64,
}

impl EarthRotation {
    /// Creates a new `EarthRotation` from an angle.
    ///
    /// # Arguments
    ///
    /// * `angle` - Rotation of the earth fixed frame from the inertial frame in radians.
    ///
    /// # Returns
    ///
    /// A new `EarthRotation`.
    pub fn from_angle(angle: f64) -> Self {
        Self {
            cos: angle.cos(),
            sin: angle.sin(),
        }
    }

    /// Transforms a vector from the inertial frame to the earth fixed frame.
    ///
    /// This is a passive rotation, the frame moves and the vector stays put.
    ///
    /// # Arguments
    ///
    /// * `v` - The vector in the inertial frame.
    ///
    /// # Returns
    ///
    /// The same vector expressed in the earth fixed frame.
    pub fn transform(&self, v: &Vector3<f64>) -> Vector3<f64> {
        Vector3::new(
            self.cos * v[0] + self.sin * v[1],
            -self.sin * v[0] + self.cos * v[1],
            v[2],
        )
    }

    /// Rotates a vector by the angle, the inverse of `transform`.
    ///
    /// # Arguments
    ///
    /// * `v` - The vector in the earth fixed frame.
    ///
    /// # Returns
    ///
    /// The same vector expressed in the inertial frame.
    pub fn rotate(&self, v: &Vector3<f64>) -> Vector3<f64> {
        Vector3::new(
            self.cos * v[0] - self.sin * v[1],
            self.sin * v[0] + self.cos * v[1],
            v[2],
        )
    }

    pub fn inv(&self) -> Self {
        Self {
            cos: self.cos,
            sin: -self.sin,
        }
    }

    /// Direction cosine matrix from the inertial frame to the earth fixed frame
    pub fn matrix(&self) -> Matrix3<f64> {
        Matrix3::new(
            self.cos, self.sin, 0.0, -self.sin, self.cos, 0.0, 0.0, 0.0, 1.0,
        )
    }
}

impl From<SiderealAngle> for EarthRotation {
    fn from(gst: SiderealAngle) -> Self {
        EarthRotation::from_angle(gst.radians())
    }
}

/// Converts an inertial position to the earth fixed frame at the given sidereal angle.
pub fn eci_to_ecef(eci: &Vector3<f64>, gst: SiderealAngle) -> Vector3<f64> {
    EarthRotation::from(gst).transform(eci)
}

/// Converts an earth fixed position back to the inertial frame at the given sidereal angle.
pub fn ecef_to_eci(ecef: &Vector3<f64>, gst: SiderealAngle) -> Vector3<f64> {
    EarthRotation::from(gst).rotate(ecef)
}
