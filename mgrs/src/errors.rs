use std::{error::Error as StdError, fmt};

use crate::enum_trivial_from_impl;

/// A numeric value lies outside the domain the grid is defined on
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RangeError {
    /// Latitude is not in `[-80..84]` or NaN
    Latitude,
    /// Longitude is not in `[-180..180]` or NaN
    Longitude,
    /// Zone number is not in `[1..60]`
    Zone,
    /// The 100 km column is outside of the lettered range
    Easting,
    /// Negative, beyond the false northing or outside of the latitude band
    Northing,
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::Latitude => "Latitude is outside of the MGRS bands coverage [-80..84]",
            Self::Longitude => "Longitude should be in the range [-180..180]",
            Self::Zone => "UTM zone number should be in the range [1..60]",
            Self::Easting => "Easting does not fall into a lettered 100km column",
            Self::Northing => "Northing should be in the range [0..10000000]",
        };

        write!(f, "{msg}")
    }
}

impl StdError for RangeError {}

/// The string cannot be read as a grid reference
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// Nothing but whitespace
    Empty,
    /// The overall shape is not `<zone><band><col><row><digits>`
    Notation,
    /// Zone number out of `[1..60]`
    Zone(u8),
    /// Not a latitude band letter
    Band(char),
    /// Not a column letter of the zone
    Column(char),
    /// Not a row letter of the zone
    Row(char),
    /// The total number of easting and northing digits is not 10
    Digits(usize),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cannot parse MGRS: ")?;
        match self {
            Self::Empty => write!(f, "empty string provided"),
            Self::Notation => write!(f, "expected <zone><band> <square> <easting> <northing>"),
            Self::Zone(zone) => write!(f, "zone {zone} is not in the range [1..60]"),
            Self::Band(band) => write!(f, "{band:?} is not a latitude band letter"),
            Self::Column(letter) => write!(f, "{letter:?} is not a column letter of the zone"),
            Self::Row(letter) => write!(f, "{letter:?} is not a row letter of the zone"),
            Self::Digits(n) => write!(f, "expected 5+5 digits of easting and northing, got {n}"),
        }
    }
}

impl StdError for FormatError {}

/// Any failure of the conversions exposed at the crate's root
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Error {
    /// A number is out of the grid's domain
    Range(RangeError),
    /// The text is not a grid reference
    Format(FormatError),
}

enum_trivial_from_impl!(RangeError => Error:Range);
enum_trivial_from_impl!(FormatError => Error:Format);

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Range(inner) => write!(f, "{inner}"),
            Self::Format(inner) => write!(f, "{inner}"),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Range(inner) => Some(inner),
            Self::Format(inner) => Some(inner),
        }
    }
}
