use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    consts::{MAX_LATITUDE, MAX_LONGITUDE, MIN_LATITUDE},
    errors::RangeError,
};

use super::{Hemisphere, Meridian};

#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
/// The point on the surface of the WGS84 ellipsoid in decimal degrees
pub struct GeoPoint {
    lat: f64,
    lng: f64,
}

impl GeoPoint {
    /// Construct a point which can be placed on the grid.
    ///
    /// # Errors
    /// - the latitude is outside of the MGRS bands coverage `-80 <= lat <= 84`;
    /// - the longitude is not in the range `-180 <= lng <= 180`.
    pub fn new(lat: f64, lng: f64) -> Result<Self, RangeError> {
        if !(MIN_LATITUDE..=MAX_LATITUDE).contains(&lat) {
            return Err(RangeError::Latitude);
        }

        if !(-MAX_LONGITUDE..=MAX_LONGITUDE).contains(&lng) {
            return Err(RangeError::Longitude);
        }

        Ok(Self { lat, lng })
    }

    /// Construct a point without checking the ranges.
    ///
    /// Used for the results of the inverse projection
    /// which can slightly overshoot the bands coverage.
    pub(crate) const fn new_unchecked(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Latitude in decimal degrees, positive to the north
    pub const fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in decimal degrees, positive to the east
    pub const fn lng(&self) -> f64 {
        self.lng
    }

    /// The hemisphere relative to the equator, `None` on the equator itself
    pub fn hemisphere(&self) -> Option<Hemisphere> {
        direction(self.lat)
    }

    /// The side relative to the prime meridian, `None` on the prime meridian itself
    pub fn meridian(&self) -> Option<Meridian> {
        direction(self.lng)
    }
}

fn direction<T: From<bool>>(value: f64) -> Option<T> {
    if value == 0.0 {
        None
    } else {
        Some(T::from(value > 0.0))
    }
}

impl From<GeoPoint> for (f64, f64) {
    fn from(point: GeoPoint) -> Self {
        (point.lat, point.lng)
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "Lat: {}°", self.lat.abs())?;
            if let Some(hemisphere) = self.hemisphere() {
                write!(f, "{hemisphere}")?;
            }

            write!(f, ", Long: {}°", self.lng.abs())?;
            if let Some(meridian) = self.meridian() {
                write!(f, "{meridian}")?;
            }
            Ok(())
        } else {
            write!(f, "({},{})", self.lat, self.lng)
        }
    }
}
