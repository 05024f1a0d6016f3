//! The grid reference itself: zone, band, 100 km square and
//! the 1-meter easting and northing inside the square.

use std::{convert::TryFrom, fmt, str::FromStr};

use lazy_static::lazy_static;
use regex::Regex;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    band::LatitudeBand,
    consts::{ROWS_CYCLE, SQUARE_SIZE, ZONES_COUNT},
    coord::GeoPoint,
    errors::{FormatError, RangeError},
    square::{column_index, column_letter, row_index, row_letter},
    utils::{compact_upper, div_mod, floor_to_u32},
    utm::UtmCoordinate,
};

/// The number of digits for each of easting and northing (1 meter)
const DIGITS: usize = 5;

lazy_static! {
    static ref RE_COMPACT: Regex = Regex::new(
        r"^(?P<zone>\d{1,2})(?P<band>[A-Z])(?P<column>[A-Z])(?P<row>[A-Z])(?P<digits>\d*)$"
    )
    .expect("MGRS regex is valid");
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
/// Military Grid Reference System coordinate with the 1 meter precision
pub struct Mgrs {
    zone: u8,
    band: LatitudeBand,
    column: char,
    row: char,
    easting: u32,
    northing: u32,
}

impl Mgrs {
    /// The grid reference of the point
    ///
    /// # Errors
    /// The point is outside of the bands coverage.
    pub fn from_point(point: &GeoPoint) -> Result<Self, RangeError> {
        Self::try_from(&UtmCoordinate::from_point(point)?)
    }

    /// UTM zone number `1..=60`
    pub const fn zone(&self) -> u8 {
        self.zone
    }

    /// Latitude band of the reference
    pub const fn band(&self) -> LatitudeBand {
        self.band
    }

    /// The letters of the 100 km square: column and row
    pub const fn square(&self) -> (char, char) {
        (self.column, self.row)
    }

    /// Meters to the east from the square's western edge
    pub const fn easting(&self) -> u32 {
        self.easting
    }

    /// Meters to the north from the square's southern edge
    pub const fn northing(&self) -> u32 {
        self.northing
    }

    /// Reconstruct the full UTM coordinate.
    ///
    /// The row letters repeat every 2000 km, so the cycle containing
    /// the southern edge of the band is chosen.
    ///
    /// # Errors
    /// The row letter cannot appear in the band: the reconstructed
    /// position falls outside of the band's latitudes.
    pub fn to_utm(&self) -> Result<UtmCoordinate, RangeError> {
        let column = column_index(self.zone, self.column).map_err(|_| RangeError::Easting)?;
        let row = row_index(self.zone, self.row).map_err(|_| RangeError::Northing)?;

        let easting = column * SQUARE_SIZE + self.easting;
        let mut northing = row * SQUARE_SIZE + self.northing;

        let min_northing = self.band.min_northing();
        while northing < min_northing {
            northing += ROWS_CYCLE * SQUARE_SIZE;
        }

        let utm = UtmCoordinate::new(
            self.zone,
            self.band,
            f64::from(easting),
            f64::from(northing),
        )?;

        // the first cycle above the band's minimum can still overshoot the band
        if !self.band.contains(utm.to_point().lat()) {
            debug!(mgrs = %self, %utm, "row letter is outside of the band");
            return Err(RangeError::Northing);
        }

        Ok(utm)
    }

    fn parse_compact(s: &str) -> Result<Self, FormatError> {
        if s.is_empty() {
            return Err(FormatError::Empty);
        }

        let capture = RE_COMPACT.captures(s).ok_or(FormatError::Notation)?;
        let part = |name| capture.name(name).map_or("", |m| m.as_str());
        let letter = |name| part(name).chars().next().ok_or(FormatError::Notation);

        let zone: u8 = part("zone").parse().map_err(|_| FormatError::Notation)?;
        if !(1..=ZONES_COUNT).contains(&zone) {
            return Err(FormatError::Zone(zone));
        }

        let band = LatitudeBand::try_from(letter("band")?)?;

        let column = letter("column")?;
        let _ = column_index(zone, column)?;
        let row = letter("row")?;
        let _ = row_index(zone, row)?;

        let digits = part("digits");
        if digits.len() != DIGITS * 2 {
            return Err(FormatError::Digits(digits.len()));
        }

        let (easting, northing) = digits.split_at(DIGITS);
        let easting = easting.parse().map_err(|_| FormatError::Notation)?;
        let northing = northing.parse().map_err(|_| FormatError::Notation)?;

        Ok(Self {
            zone,
            band,
            column,
            row,
            easting,
            northing,
        })
    }
}

impl TryFrom<&UtmCoordinate> for Mgrs {
    type Error = RangeError;

    fn try_from(utm: &UtmCoordinate) -> Result<Self, Self::Error> {
        let zone = utm.zone();

        let easting = floor_to_u32(utm.easting()).ok_or(RangeError::Easting)?;
        let (column, easting) = div_mod(easting, SQUARE_SIZE);
        let column = column_letter(zone, column).ok_or(RangeError::Easting)?;

        let northing = floor_to_u32(utm.northing()).ok_or(RangeError::Northing)?;
        let (row, northing) = div_mod(northing, SQUARE_SIZE);
        let row = row_letter(zone, row);

        Ok(Self {
            zone,
            band: utm.band(),
            column,
            row,
            easting,
            northing,
        })
    }
}

impl FromStr for Mgrs {
    type Err = FormatError;

    /// Whitespaces are ignored everywhere and the letters are case-insensitive
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let compact = compact_upper(s);
        Self::parse_compact(&compact).map_err(|err| {
            debug!(input = s, %err, "rejected grid reference");
            err
        })
    }
}

impl fmt::Display for Mgrs {
    /// The canonical `17S KT 81958 52025` form,
    /// or the compact `17SKT8195852025` one with the `{:#}`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = if f.alternate() { "" } else { " " };
        write!(
            f,
            "{zone}{band}{sep}{col}{row}{sep}{e:0w$}{sep}{n:0w$}",
            zone = self.zone,
            band = self.band,
            col = self.column,
            row = self.row,
            e = self.easting,
            n = self.northing,
            w = DIGITS,
        )
    }
}

/// Rewrite the reference with the canonical spacing `17S KT 81958 52025`
///
/// # Errors
/// The string is not a valid grid reference.
pub fn normalize(s: &str) -> Result<String, FormatError> {
    s.parse::<Mgrs>().map(|mgrs| mgrs.to_string())
}
