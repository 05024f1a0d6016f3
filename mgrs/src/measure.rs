//! Distance and direction between two points on the map

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{consts::EARTH_RADIUS, coord::GeoPoint};

/// Great-circle distance in meters on the spherical Earth (haversine)
pub fn distance(from: &GeoPoint, to: &GeoPoint) -> f64 {
    let phi1 = from.lat().to_radians();
    let phi2 = to.lat().to_radians();
    let d_phi = phi2 - phi1;
    let d_lambda = (to.lng() - from.lng()).to_radians();

    let h = (d_phi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS * h.sqrt().min(1.0).asin()
}

/// Initial bearing from the first point to the second,
/// clockwise from the true north in the range `[0..360)`
pub fn azimuth(from: &GeoPoint, to: &GeoPoint) -> f64 {
    let phi1 = from.lat().to_radians();
    let phi2 = to.lat().to_radians();
    let d_lambda = (to.lng() - from.lng()).to_radians();

    let y = d_lambda.sin() * phi2.cos();
    let x = phi1.cos() * phi2.sin() - phi1.sin() * phi2.cos() * d_lambda.cos();
    y.atan2(x).to_degrees().rem_euclid(360.0)
}

#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
/// The result of measuring between two positions
pub struct Measurement {
    /// Meters
    pub distance: f64,
    /// Degrees from the true north
    pub azimuth: f64,
}

/// Measure both the distance and the azimuth
pub fn measure(from: &GeoPoint, to: &GeoPoint) -> Measurement {
    Measurement {
        distance: distance(from, to),
        azimuth: azimuth(from, to),
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let azimuth = self.azimuth.round() % 360.0;
        write!(
            f,
            "Distance: {:.0}m, Azimuth: {:.0}°",
            self.distance.round(),
            azimuth
        )
    }
}
