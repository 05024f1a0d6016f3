//! Conversion between the geodetic coordinates (WGS84)
//! and the Military Grid Reference System through the UTM projection.
//!
//! ```
//! let mgrs = geod_mgrs::forward(33.88607, -83.35769).unwrap();
//! assert_eq!(mgrs, "17S KT 81958 52025");
//!
//! let point = geod_mgrs::to_point("17SKT8195852025").unwrap();
//! assert!((point.lat() - 33.88607).abs() < 1e-4);
//! assert!((point.lng() + 83.35769).abs() < 1e-4);
//! ```

// do not warn on older Rust versions
#![allow(unknown_lints)]
//
// The following list was generated with the command
//   $ rustc -W help | grep ' allow ' | awk '{print $1}' | tr - _ | sort | xargs -I{} echo '#![warn({})]'
//
#![warn(absolute_paths_not_starting_with_crate)]
#![warn(anonymous_parameters)]
#![warn(deprecated_in_future)]
#![warn(elided_lifetimes_in_paths)]
#![warn(explicit_outlives_requirements)]
#![warn(keyword_idents)]
#![warn(macro_use_extern_crate)]
#![warn(meta_variable_misuse)]
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(non_ascii_idents)]
#![warn(single_use_lifetimes)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
// conflicts with the `clippy::redundant_pub_crate`
#![allow(unreachable_pub)]
// !!! NO UNSAFE
#![forbid(unsafe_code)]
#![warn(unstable_features)]
#![warn(unused_crate_dependencies)]
#![warn(unused_extern_crates)]
#![warn(unused_import_braces)]
#![warn(unused_labels)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]
#![warn(unused_results)]
#![warn(variant_size_differences)]
//
// additional recommendations
#![deny(clippy::mem_forget)]
// suppress some pedantic warnings
#![allow(clippy::non_ascii_literal)]
#![allow(clippy::must_use_candidate)]
// `use super::*` in tests
#![cfg_attr(test, allow(clippy::wildcard_imports))]

use tracing::debug;

pub use self::{
    band::LatitudeBand,
    coord::{GeoPoint, Hemisphere, Meridian},
    errors::{Error, FormatError, RangeError},
    measure::{azimuth, distance, measure, Measurement},
    mgrs::{normalize, Mgrs},
    utm::{central_meridian, zone_number, InverseMethod, UtmCoordinate},
};

mod band;
mod consts;
mod coord;
mod errors;
mod measure;
mod mgrs;
pub mod square;
mod utils;
mod utm;

/// Grid reference of the point in the canonical spacing `17S KT 81958 52025`.
///
/// # Errors
/// The latitude is outside of `-80..=84` or the longitude is outside of `-180..=180`.
pub fn forward(lat: f64, lng: f64) -> Result<String, Error> {
    let point = GeoPoint::new(lat, lng).map_err(|err| {
        debug!(lat, lng, %err, "cannot place the point on the grid");
        err
    })?;
    let mgrs = Mgrs::from_point(&point)?;
    Ok(mgrs.to_string())
}

/// The point designated by the grid reference.
///
/// Any whitespace inside the reference is ignored.
///
/// # Errors
/// - the string is not a 1-meter grid reference;
/// - the row letter cannot appear in the given latitude band.
pub fn to_point(mgrs: &str) -> Result<GeoPoint, Error> {
    to_point_with(mgrs, InverseMethod::default())
}

/// The point designated by the grid reference, unprojected with the chosen method.
///
/// # Errors
/// Same as for the [`to_point`].
pub fn to_point_with(mgrs: &str, method: InverseMethod) -> Result<GeoPoint, Error> {
    let utm = mgrs.parse::<Mgrs>()?.to_utm()?;
    Ok(utm.to_point_with(method))
}
