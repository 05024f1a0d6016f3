//! Lettering of the 100 km grid squares.
//!
//! The column alphabets rotate with the period of 3 zones
//! and the row alphabets with the period of 2 zones,
//! so the same square identifier never repeats in the adjacent zones.

use crate::{consts::ROWS_CYCLE, errors::FormatError};

const COLUMN_LETTERS: [&[u8; 8]; 3] = [b"ABCDEFGH", b"JKLMNPQR", b"STUVWXYZ"];
const ROW_LETTERS: [&[u8; ROWS_CYCLE as usize]; 2] =
    [b"ABCDEFGHJKLMNPQRSTUV", b"FGHJKLMNPQRSTUVABCDE"];

fn column_alphabet(zone: u8) -> &'static [u8] {
    COLUMN_LETTERS[usize::from(zone.saturating_sub(1) % 3)]
}

fn row_alphabet(zone: u8) -> &'static [u8] {
    ROW_LETTERS[usize::from(zone.saturating_sub(1) % 2)]
}

/// The letter of the 1-based column of 100 km squares.
///
/// The column 0 (easting < 100 km) never appears inside a zone,
/// so `None` is returned for it as well as for the columns beyond 8.
pub fn column_letter(zone: u8, column: u32) -> Option<char> {
    let index = usize::try_from(column.checked_sub(1)?).ok()?;
    column_alphabet(zone).get(index).copied().map(char::from)
}

/// The letter of the row of 100 km squares counting from the equator
pub fn row_letter(zone: u8, row: u32) -> char {
    let index = (row % ROWS_CYCLE) as usize;
    char::from(row_alphabet(zone)[index])
}

fn position(alphabet: &[u8], letter: char) -> Option<u32> {
    let letter = u8::try_from(letter.to_ascii_uppercase()).ok()?;
    alphabet
        .iter()
        .position(|&l| l == letter)
        .and_then(|i| u32::try_from(i).ok())
}

/// The 1-based column designated by the letter in the given zone
///
/// # Errors
/// The letter is absent from the zone's column alphabet.
pub fn column_index(zone: u8, letter: char) -> Result<u32, FormatError> {
    position(column_alphabet(zone), letter)
        .map(|i| i + 1)
        .ok_or(FormatError::Column(letter))
}

/// The row (modulo 20) designated by the letter in the given zone
///
/// # Errors
/// The letter is absent from the zone's row alphabet.
pub fn row_index(zone: u8, letter: char) -> Result<u32, FormatError> {
    position(row_alphabet(zone), letter).ok_or(FormatError::Row(letter))
}
