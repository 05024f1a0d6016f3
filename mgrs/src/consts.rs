//! Constants of the WGS84 ellipsoid and the UTM/MGRS grids

/// Semi-major axis (equatorial radius), meters
pub(crate) const WGS84_A: f64 = 6_378_137.0;
/// Flattening
#[allow(clippy::unreadable_literal)]
pub(crate) const WGS84_F: f64 = 1.0 / 298.257223563;

/// UTM central scale factor
pub(crate) const UTM_K0: f64 = 0.9996;
/// Easting of the central meridian of every zone
pub(crate) const FALSE_EASTING: f64 = 500_000.0;
/// Added to the northing in the southern hemisphere
pub(crate) const FALSE_NORTHING: f64 = 10_000_000.0;

pub(crate) const ZONE_WIDTH_DEG: f64 = 6.0;
pub(crate) const ZONES_COUNT: u8 = 60;

pub(crate) const BAND_HEIGHT_DEG: f64 = 8.0;
pub(crate) const MIN_LATITUDE: f64 = -80.0;
pub(crate) const MAX_LATITUDE: f64 = 84.0;
pub(crate) const MAX_LONGITUDE: f64 = 180.0;

/// The side of a grid square, meters
pub(crate) const SQUARE_SIZE: u32 = 100_000;
/// The row letters repeat every 20 squares (2000 km)
pub(crate) const ROWS_CYCLE: u32 = 20;

/// Mean radius of the sphere used for distances on the map, meters
pub(crate) const EARTH_RADIUS: f64 = 6_371_000.0;

/// Eccentricity squared of the ellipsoid
pub(crate) fn eccentricity_sq() -> f64 {
    2.0 * WGS84_F - WGS84_F * WGS84_F
}
