//! Utilities functions which do not linked to domain

use std::ops::{Div, Rem};

use num_traits::ToPrimitive;

#[doc(hidden)]
#[macro_export]
/// Implements `From` trait for newtype-like enum variants
macro_rules! enum_trivial_from_impl {
    ($from:ty => $to:ty:$constructor:ident) => {
        impl From<$from> for $to {
            fn from(val: $from) -> Self {
                Self::$constructor(val)
            }
        }
    };
}

/// Division and remainder in one step
pub fn div_mod<T>(divider: T, divisor: T) -> (T, T)
where
    T: Copy + Div<Output = T> + Rem<Output = T>,
{
    (divider / divisor, divider % divisor)
}

/// Truncate the non-negative float value into an unsigned integer.
///
/// Gives `None` for the negative, NaN, infinite or too big values.
pub(crate) fn floor_to_u32(value: f64) -> Option<u32> {
    value.floor().to_u32()
}

/// Truncate the float value into an index of some table
pub(crate) fn floor_to_index(value: f64) -> Option<usize> {
    value.floor().to_usize()
}

/// Remove every whitespace character and bring the letters to upper case
pub(crate) fn compact_upper(s: &str) -> String {
    s.chars()
        .filter(|ch| !ch.is_whitespace())
        .map(|ch| ch.to_ascii_uppercase())
        .collect()
}
