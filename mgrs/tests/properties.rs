use geod_mgrs::{distance, forward, square, to_point, GeoPoint, LatitudeBand, Mgrs};
use proptest::prelude::*;
use regex::Regex;

const BANDS: &str = "CDEFGHJKLMNPQRSTUVWXX";

/// Syntactically valid references: any zone, band, letters of the zone and digits,
/// including the combinations the grid never produces
fn well_formed_reference() -> impl Strategy<Value = String> {
    (1..=60_u8, 0..20_usize, 1..=8_u32, 0..20_u32, 0..100_000_u32, 0..100_000_u32).prop_map(
        |(zone, band, column, row, easting, northing)| {
            format!(
                "{}{}{}{}{:05}{:05}",
                zone,
                char::from(BANDS.as_bytes()[band]),
                square::column_letter(zone, column).unwrap(),
                square::row_letter(zone, row),
                easting,
                northing,
            )
        },
    )
}

fn canonical_re() -> Regex {
    Regex::new(r"^\d{1,2}[C-HJ-NP-X] [A-HJ-NP-Z][A-HJ-NP-V] \d{5} \d{5}$").unwrap()
}

#[test]
fn column_alphabets_rotate_with_period_of_three() {
    let first_letters = ['A', 'J', 'S'];
    for zone in 1..=60_u8 {
        let expected = first_letters[usize::from((zone - 1) % 3)];
        assert_eq!(square::column_letter(zone, 1), Some(expected), "zone {zone}");
    }
}

#[test]
fn row_alphabets_rotate_with_period_of_two() {
    let first_letters = ['A', 'F'];
    for zone in 1..=60_u8 {
        let expected = first_letters[usize::from((zone - 1) % 2)];
        assert_eq!(square::row_letter(zone, 0), expected, "zone {zone}");
    }
}

proptest! {
    /// The zone and band depend only on the point
    #[test]
    fn zone_and_band_are_determined_by_the_point(lat in -80.0..84.0_f64, lng in -180.0..180.0_f64) {
        let mgrs: Mgrs = forward(lat, lng).unwrap().parse().unwrap();

        let zone = ((lng + 180.0) / 6.0).floor() as u8 + 1;
        let band = BANDS.as_bytes()[(lat / 8.0 + 10.0).floor() as usize] as char;
        prop_assert_eq!(mgrs.zone(), zone);
        prop_assert_eq!(mgrs.band().letter(), band);
    }

    /// Every valid point produces the canonical notation
    #[test]
    fn forward_is_well_formed(lat in -80.0..=84.0_f64, lng in -180.0..=180.0_f64) {
        let mgrs = forward(lat, lng).unwrap();
        prop_assert!(canonical_re().is_match(&mgrs), "malformed: {}", mgrs);
    }

    /// Going to the grid and back stays within a few meters
    #[test]
    fn round_trip_stays_in_place(lat in -80.0..84.0_f64, lng in -180.0..180.0_f64) {
        let original = GeoPoint::new(lat, lng).unwrap();
        let point = to_point(&forward(lat, lng).unwrap()).unwrap();
        let error = distance(&original, &point);
        prop_assert!(error < 5.0, "{} -> {} is {} m away", original, point, error);
    }

    /// The spacing of the reference does not matter
    #[test]
    fn any_spacing_gives_the_same_point(
        lat in -80.0..84.0_f64,
        lng in -180.0..180.0_f64,
        spaces in prop::collection::vec("[ \t]{0,3}", 15),
    ) {
        let canonical = forward(lat, lng).unwrap();
        let compact: String = canonical.split_whitespace().collect();
        let spaced: String = compact
            .chars()
            .zip(spaces.iter().cycle())
            .flat_map(|(ch, pad)| std::iter::once(ch).chain(pad.chars()))
            .collect();

        prop_assert_eq!(to_point(&spaced).unwrap(), to_point(&canonical).unwrap());
    }

    /// A decoded reference lies in its own band and can be encoded again
    #[test]
    fn decoded_point_stays_in_its_band(reference in well_formed_reference()) {
        let band = LatitudeBand::try_from(reference.as_bytes()[reference.len() - 13] as char).unwrap();
        if let Ok(point) = to_point(&reference) {
            prop_assert!(
                band.contains(point.lat()),
                "{} decoded to {} outside of the band {}", reference, point, band
            );
            if let Ok(found) = LatitudeBand::from_latitude(point.lat()) {
                prop_assert!(
                    found.index().abs_diff(band.index()) <= 1,
                    "{} decoded to {} in the band {}", reference, point, found
                );
            }

            // out of the zone's longitudes is fine, panicking is not
            if let Ok(again) = forward(point.lat(), point.lng()) {
                prop_assert!(again.parse::<Mgrs>().is_ok());
            }
        }
    }

    /// Arbitrary input never panics
    #[test]
    fn parsing_never_panics(s in "\\PC*") {
        let _ = to_point(&s);
    }
}
