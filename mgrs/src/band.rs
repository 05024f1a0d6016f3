//! Latitude bands of the grid: 8 degrees tall each (12 for the last one),
//! lettered from C to X skipping I and O.

use std::{convert::TryFrom, fmt};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    consts::{BAND_HEIGHT_DEG, MAX_LATITUDE, MIN_LATITUDE},
    coord::{Hemisphere, North, South},
    errors::{FormatError, RangeError},
    utils::floor_to_index,
};

/// The letter `X` is repeated to cover the extended 72..84 band
const BAND_LETTERS: &[u8; 21] = b"CDEFGHJKLMNPQRSTUVWXX";
const BANDS_COUNT: usize = 20;
const FIRST_NORTHERN: usize = 10; // N
// ~11 m, covers the truncation of a 1 m reference
const EDGE_TOLERANCE_DEG: f64 = 1e-4;

/// The smallest northing found in a band (rounded down to 100 km).
/// Resolves the 2000 km ambiguity of the row letters.
const MIN_NORTHING: [u32; BANDS_COUNT] = [
    1_100_000, // C
    2_000_000, // D
    2_800_000, // E
    3_700_000, // F
    4_600_000, // G
    5_500_000, // H
    6_400_000, // J
    7_300_000, // K
    8_200_000, // L
    9_100_000, // M
    0,         // N
    800_000,   // P
    1_700_000, // Q
    2_600_000, // R
    3_500_000, // S
    4_400_000, // T
    5_300_000, // U
    6_200_000, // V
    7_000_000, // W
    7_900_000, // X
];

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
/// One of the 20 latitude bands
pub struct LatitudeBand(u8);

impl LatitudeBand {
    /// Find the band containing the given latitude.
    ///
    /// # Errors
    /// The latitude is not in the range `-80 <= lat <= 84`.
    pub fn from_latitude(lat: f64) -> Result<Self, RangeError> {
        if !(MIN_LATITUDE..=MAX_LATITUDE).contains(&lat) {
            return Err(RangeError::Latitude);
        }

        let index = floor_to_index(lat / BAND_HEIGHT_DEG + 10.0).ok_or(RangeError::Latitude)?;
        let letter = BAND_LETTERS[index.min(BAND_LETTERS.len() - 1)];
        Ok(Self::with_letter(letter))
    }

    fn with_letter(letter: u8) -> Self {
        let index = BAND_LETTERS
            .iter()
            .position(|&l| l == letter)
            .expect("Letter is taken from the table");
        Self(index as u8)
    }

    /// Zero-based position from the southernmost band `C`
    pub fn index(self) -> usize {
        usize::from(self.0)
    }

    /// The letter designating the band
    pub fn letter(self) -> char {
        char::from(BAND_LETTERS[self.index()])
    }

    /// The latitude of the southern boundary
    pub fn south_edge(self) -> f64 {
        MIN_LATITUDE + BAND_HEIGHT_DEG * f64::from(self.0)
    }

    /// The latitude of the northern boundary (the band `X` is 12 degrees tall)
    pub fn north_edge(self) -> f64 {
        if self.index() == BANDS_COUNT - 1 {
            MAX_LATITUDE
        } else {
            self.south_edge() + BAND_HEIGHT_DEG
        }
    }

    /// Is the latitude inside the band, allowing for a few meters of the grid rounding
    pub fn contains(self, lat: f64) -> bool {
        (self.south_edge() - EDGE_TOLERANCE_DEG..=self.north_edge() + EDGE_TOLERANCE_DEG)
            .contains(&lat)
    }

    /// The latitude in the middle of a standard 8 degrees band
    pub fn center(self) -> f64 {
        self.south_edge() + BAND_HEIGHT_DEG / 2.0
    }

    /// The bands below `N` are southern
    pub fn hemisphere(self) -> Hemisphere {
        if self.index() < FIRST_NORTHERN {
            South
        } else {
            North
        }
    }

    /// The lowest UTM northing any point of the band can have
    pub fn min_northing(self) -> u32 {
        MIN_NORTHING[self.index()]
    }
}

impl TryFrom<char> for LatitudeBand {
    type Error = FormatError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        let upper = c.to_ascii_uppercase();
        u8::try_from(upper)
            .ok()
            .filter(|letter| BAND_LETTERS.contains(letter))
            .map(Self::with_letter)
            .ok_or(FormatError::Band(c))
    }
}

impl fmt::Display for LatitudeBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}
