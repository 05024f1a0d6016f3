//! Universal Transverse Mercator projection of the WGS84 ellipsoid.
//!
//! The forward projection and the exact inverse are the classic series
//! from the USGS "Map Projections: A Working Manual" (Snyder, 1987).

use std::{convert::TryFrom, fmt};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::{
    band::LatitudeBand,
    consts::{
        eccentricity_sq, FALSE_EASTING, FALSE_NORTHING, MAX_LONGITUDE, SQUARE_SIZE, UTM_K0,
        WGS84_A, ZONES_COUNT, ZONE_WIDTH_DEG,
    },
    coord::{GeoPoint, South},
    errors::RangeError,
    utils::floor_to_u32,
};

/// The UTM zone number for the given longitude.
///
/// The antimeridian itself (+180) belongs to the last zone.
///
/// # Errors
/// The longitude is not in the range `-180 <= lng <= 180`.
pub fn zone_number(lng: f64) -> Result<u8, RangeError> {
    if !(-MAX_LONGITUDE..=MAX_LONGITUDE).contains(&lng) {
        return Err(RangeError::Longitude);
    }

    let zone = floor_to_u32((lng + MAX_LONGITUDE) / ZONE_WIDTH_DEG).ok_or(RangeError::Longitude)?;
    let zone = u8::try_from(zone + 1).map_err(|_| RangeError::Longitude)?;
    Ok(zone.min(ZONES_COUNT))
}

/// The longitude of the zone's central meridian
pub fn central_meridian(zone: u8) -> f64 {
    f64::from(zone.saturating_sub(1)) * ZONE_WIDTH_DEG - MAX_LONGITUDE + ZONE_WIDTH_DEG / 2.0
}

/// The way to get back from the grid to the geodetic coordinates
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum InverseMethod {
    /// Inverse Transverse Mercator through the footprint latitude,
    /// sub-meter accurate inside a zone
    #[default]
    Series,
    /// Linear offset from the band's center, 1 degree per 100 km.
    /// Only lands in the right 100 km square near the equator;
    /// kept to reproduce the positions stored by the earlier versions.
    Linear,
}

#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
/// The projected position: zone, latitude band and the metric offsets inside the zone
pub struct UtmCoordinate {
    zone: u8,
    band: LatitudeBand,
    easting: f64,
    northing: f64,
}

impl UtmCoordinate {
    /// Construct the coordinate checking only the numeric ranges.
    ///
    /// # Errors
    /// - zone is not in `1..=60`;
    /// - easting is not a positive finite number;
    /// - northing is not in `0..=10_000_000`.
    pub fn new(zone: u8, band: LatitudeBand, easting: f64, northing: f64) -> Result<Self, RangeError> {
        if !(1..=ZONES_COUNT).contains(&zone) {
            return Err(RangeError::Zone);
        }

        if !(easting.is_finite() && easting > 0.0) {
            return Err(RangeError::Easting);
        }

        if !(0.0..=FALSE_NORTHING).contains(&northing) {
            return Err(RangeError::Northing);
        }

        Ok(Self {
            zone,
            band,
            easting,
            northing,
        })
    }

    /// Project the point into its own zone.
    ///
    /// # Errors
    /// The point is outside of the bands coverage
    /// (e.g. the unprojected result of a reference from the band's edge).
    pub fn from_point(point: &GeoPoint) -> Result<Self, RangeError> {
        let (lat, lng) = (point.lat(), point.lng());
        let zone = zone_number(lng)?;
        let band = LatitudeBand::from_latitude(lat)?;

        let e2 = eccentricity_sq();
        let e4 = e2 * e2;
        let e6 = e4 * e2;
        let ep2 = e2 / (1.0 - e2);

        let phi = lat.to_radians();
        let (sin_phi, cos_phi) = phi.sin_cos();
        let tan_phi = phi.tan();

        let n = WGS84_A / (1.0 - e2 * sin_phi * sin_phi).sqrt();
        let t = tan_phi * tan_phi;
        let c = ep2 * cos_phi * cos_phi;
        let a = cos_phi * (lng - central_meridian(zone)).to_radians();

        // the meridional arc from the equator
        let m = WGS84_A
            * ((1.0 - e2 / 4.0 - 3.0 * e4 / 64.0 - 5.0 * e6 / 256.0) * phi
                - (3.0 * e2 / 8.0 + 3.0 * e4 / 32.0 + 45.0 * e6 / 1024.0) * (2.0 * phi).sin()
                + (15.0 * e4 / 256.0 + 45.0 * e6 / 1024.0) * (4.0 * phi).sin()
                - (35.0 * e6 / 3072.0) * (6.0 * phi).sin());

        // the 5th and 6th order terms carry the second eccentricity (58e'^2, 330e'^2);
        // the references stored with the bare 58 and 330 are up to ~1 m off at the zone edges
        let easting = UTM_K0
            * n
            * (a + (1.0 - t + c) * a.powi(3) / 6.0
                + (5.0 - 18.0 * t + t * t + 72.0 * c - 58.0 * ep2) * a.powi(5) / 120.0)
            + FALSE_EASTING;

        let mut northing = UTM_K0
            * (m + n
                * tan_phi
                * (a * a / 2.0
                    + (5.0 - t + 9.0 * c + 4.0 * c * c) * a.powi(4) / 24.0
                    + (61.0 - 58.0 * t + t * t + 600.0 * c - 330.0 * ep2) * a.powi(6) / 720.0));

        if lat < 0.0 {
            northing += FALSE_NORTHING;
        }

        let utm = Self {
            zone,
            band,
            easting,
            northing,
        };
        trace!(%point, %utm, "projected");
        Ok(utm)
    }

    /// Zone number `1..=60`
    pub const fn zone(&self) -> u8 {
        self.zone
    }

    /// Latitude band of the projected point
    pub const fn band(&self) -> LatitudeBand {
        self.band
    }

    /// Meters from the zone's origin to the east (the central meridian is at 500 km)
    pub const fn easting(&self) -> f64 {
        self.easting
    }

    /// Meters from the equator to the north (plus 10000 km in the southern hemisphere)
    pub const fn northing(&self) -> f64 {
        self.northing
    }

    /// Recover the geodetic coordinates with the exact inverse projection
    pub fn to_point(&self) -> GeoPoint {
        self.to_point_with(InverseMethod::default())
    }

    /// Recover the geodetic coordinates with the chosen method
    pub fn to_point_with(&self, method: InverseMethod) -> GeoPoint {
        let point = match method {
            InverseMethod::Series => self.inverse_series(),
            InverseMethod::Linear => self.inverse_linear(),
        };
        trace!(utm = %self, ?method, %point, "unprojected");
        point
    }

    fn inverse_series(&self) -> GeoPoint {
        let e2 = eccentricity_sq();
        let ep2 = e2 / (1.0 - e2);

        let x = self.easting - FALSE_EASTING;
        let y = if self.band.hemisphere() == South {
            self.northing - FALSE_NORTHING
        } else {
            self.northing
        };

        let mu = y
            / UTM_K0
            / (WGS84_A * (1.0 - e2 / 4.0 - 3.0 * e2.powi(2) / 64.0 - 5.0 * e2.powi(3) / 256.0));
        let e1 = (1.0 - (1.0 - e2).sqrt()) / (1.0 + (1.0 - e2).sqrt());

        // the footprint latitude
        let fp = mu
            + (3.0 * e1 / 2.0 - 27.0 * e1.powi(3) / 32.0) * (2.0 * mu).sin()
            + (21.0 * e1.powi(2) / 16.0 - 55.0 * e1.powi(4) / 32.0) * (4.0 * mu).sin()
            + (151.0 * e1.powi(3) / 96.0) * (6.0 * mu).sin()
            + (1097.0 * e1.powi(4) / 512.0) * (8.0 * mu).sin();

        let (sin_fp, cos_fp) = fp.sin_cos();
        let tan_fp = fp.tan();
        let c1 = ep2 * cos_fp * cos_fp;
        let t1 = tan_fp * tan_fp;
        let n1 = WGS84_A / (1.0 - e2 * sin_fp * sin_fp).sqrt();
        let r1 = WGS84_A * (1.0 - e2) / (1.0 - e2 * sin_fp * sin_fp).powf(1.5);
        let d = x / (n1 * UTM_K0);

        let lat = fp
            - (n1 * tan_fp / r1)
                * (d * d / 2.0
                    - (5.0 + 3.0 * t1 + 10.0 * c1 - 4.0 * c1 * c1 - 9.0 * ep2) * d.powi(4) / 24.0
                    + (61.0 + 90.0 * t1 + 298.0 * c1 + 45.0 * t1 * t1
                        - 252.0 * ep2
                        - 3.0 * c1 * c1)
                        * d.powi(6)
                        / 720.0);
        let lng = (d - (1.0 + 2.0 * t1 + c1) * d.powi(3) / 6.0
            + (5.0 - 2.0 * c1 + 28.0 * t1 - 3.0 * c1 * c1 + 8.0 * ep2 + 24.0 * t1 * t1)
                * d.powi(5)
                / 120.0)
            / cos_fp;

        GeoPoint::new_unchecked(lat.to_degrees(), central_meridian(self.zone) + lng.to_degrees())
    }

    fn inverse_linear(&self) -> GeoPoint {
        let square = f64::from(SQUARE_SIZE);
        // only the position inside the 2000 km cycle of row letters is used
        let cycle_northing = self.northing % (square * 20.0);

        let lng = central_meridian(self.zone) + (self.easting - FALSE_EASTING) / square;
        let mut lat = self.band.center() + cycle_northing / square;
        if self.band.hemisphere() == South {
            lat -= 4.0;
        }

        GeoPoint::new_unchecked(lat, lng)
    }
}

impl TryFrom<GeoPoint> for UtmCoordinate {
    type Error = RangeError;

    fn try_from(point: GeoPoint) -> Result<Self, Self::Error> {
        Self::from_point(&point)
    }
}

impl fmt::Display for UtmCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{} {:.0}mE {:.0}mN",
            self.zone, self.band, self.easting, self.northing
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(lat: f64, lng: f64) -> UtmCoordinate {
        UtmCoordinate::from_point(&GeoPoint::new(lat, lng).unwrap()).unwrap()
    }

    fn assert_close(actual: f64, expected: f64, eps: f64) {
        assert!(
            (actual - expected).abs() < eps,
            "{actual} is not within {eps} of {expected}"
        );
    }

    #[test]
    fn zones() {
        assert_eq!(zone_number(-180.0), Ok(1));
        assert_eq!(zone_number(-174.000_1), Ok(1));
        assert_eq!(zone_number(-174.0), Ok(2));
        assert_eq!(zone_number(-83.35769), Ok(17));
        assert_eq!(zone_number(0.0), Ok(31));
        assert_eq!(zone_number(179.999), Ok(60));
        assert_eq!(zone_number(180.0), Ok(60));
        assert_eq!(zone_number(180.1), Err(RangeError::Longitude));
    }

    #[test]
    fn meridians() {
        assert_eq!(central_meridian(1), -177.0);
        assert_eq!(central_meridian(17), -81.0);
        assert_eq!(central_meridian(31), 3.0);
        assert_eq!(central_meridian(60), 177.0);
    }

    #[test]
    fn new_york() {
        let utm = project(40.7128, -74.0060);
        assert_eq!(utm.zone(), 18);
        assert_eq!(utm.band().letter(), 'T');
        assert_close(utm.easting(), 583_959.372, 0.01);
        assert_close(utm.northing(), 4_507_350.998, 0.01);
        assert_eq!(utm.to_string(), "18T 583959mE 4507351mN");
    }

    #[test]
    fn origin_of_zone_31() {
        let utm = project(0.0, 0.0);
        assert_eq!(utm.zone(), 31);
        assert_eq!(utm.band().letter(), 'N');
        assert_close(utm.easting(), 166_021.443, 0.01);
        assert_close(utm.northing(), 0.0, 1e-6);
    }

    #[test]
    fn second_eccentricity_in_high_order_terms() {
        // the bare `- 58` variant gives 166022.648 here (the 31N AA 66022 00000 reference)
        let utm = project(0.0, 0.0);
        assert_close(utm.easting(), 166_021.443, 0.01);
        assert!(166_022.648 - utm.easting() > 1.0);
    }

    #[test]
    fn unprojected_point_outside_of_the_bands() {
        let polar = GeoPoint::new_unchecked(89.0, 0.0);
        assert_eq!(UtmCoordinate::from_point(&polar), Err(RangeError::Latitude));
        assert_eq!(UtmCoordinate::try_from(polar), Err(RangeError::Latitude));

        let beyond_antimeridian = GeoPoint::new_unchecked(-80.000_01, -180.000_04);
        assert_eq!(
            UtmCoordinate::from_point(&beyond_antimeridian),
            Err(RangeError::Latitude)
        );

        let west = GeoPoint::new_unchecked(10.0, -180.000_04);
        assert_eq!(UtmCoordinate::from_point(&west), Err(RangeError::Longitude));
    }

    #[test]
    fn central_meridian_has_false_easting() {
        let utm = project(72.0, 3.0);
        assert_close(utm.easting(), FALSE_EASTING, 1e-6);
        assert_close(utm.northing(), 7_988_932.504, 0.01);
    }

    #[test]
    fn southern_false_northing() {
        let utm = project(-33.45, -70.6667);
        assert_eq!(utm.zone(), 19);
        assert_eq!(utm.band().letter(), 'H');
        assert_close(utm.easting(), 345_090.361, 0.01);
        assert_close(utm.northing(), 6_297_582.059, 0.01);
    }

    #[test]
    fn inverse_series_recovers_the_point() {
        for &(lat, lng) in &[
            (33.88607, -83.35769),
            (-33.45, -70.6667),
            (59.9375, 30.308_611),
            (83.9, 179.9),
            (-79.9, -179.9),
            (-0.5, 0.5),
        ] {
            let point = project(lat, lng).to_point();
            assert_close(point.lat(), lat, 1e-7);
            assert_close(point.lng(), lng, 1e-6);
        }
    }

    #[test]
    fn inverse_linear_reproduces_legacy_positions() {
        let band = LatitudeBand::try_from('S').unwrap();
        let utm = UtmCoordinate::new(17, band, 285_128.0, 3_753_610.0).unwrap();

        let point = utm.to_point_with(InverseMethod::Linear);
        assert_close(point.lat(), 53.5361, 1e-9);
        assert_close(point.lng(), -83.14872, 1e-9);
    }

    #[test]
    fn inverse_linear_southern_correction() {
        let band = LatitudeBand::try_from('H').unwrap();
        let utm = UtmCoordinate::new(19, band, 345_090.0, 6_297_582.0).unwrap();

        let point = utm.to_point_with(InverseMethod::Linear);
        // band H center is -36, minus the 4 degrees southern correction
        assert_close(point.lat(), -40.0 + 2.97582, 1e-9);
        assert_close(point.lng(), -70.5491, 1e-9);
    }

    #[test]
    fn checked_construction() {
        let band = LatitudeBand::try_from('N').unwrap();
        assert_eq!(
            UtmCoordinate::new(0, band, 500_000.0, 0.0),
            Err(RangeError::Zone)
        );
        assert_eq!(
            UtmCoordinate::new(61, band, 500_000.0, 0.0),
            Err(RangeError::Zone)
        );
        assert_eq!(
            UtmCoordinate::new(1, band, f64::NAN, 0.0),
            Err(RangeError::Easting)
        );
        assert_eq!(
            UtmCoordinate::new(1, band, 500_000.0, -1.0),
            Err(RangeError::Northing)
        );
        assert_eq!(
            UtmCoordinate::new(1, band, 500_000.0, 10_000_001.0),
            Err(RangeError::Northing)
        );
    }
}
