use std::fmt;

pub use self::point::GeoPoint;

mod point;

#[doc(hidden)]
#[macro_export]
/// Two sides of a reference line, constructed from the sign of a coordinate
/// and displayed as a single letter
macro_rules! bool_enum {
    ($(#[$meta:meta])* $name:ident: $truthy:ident and $falsy:ident; display as $true_ch:literal:$false_ch:literal) => {
        #[allow(unused_imports)]
        pub use self::$name::{$falsy, $truthy};

        $(#[$meta])*
        #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum $name {
            #[doc = concat!("Positive side, `", $true_ch, "`")]
            $truthy,
            #[doc = concat!("Negative side, `", $false_ch, "`")]
            $falsy,
        }

        impl From<bool> for $name {
            fn from(val: bool) -> Self {
                if val {
                    $truthy
                } else {
                    $falsy
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let symbol = match self {
                    $truthy => $true_ch,
                    $falsy => $false_ch,
                };
                write!(f, "{}", symbol)
            }
        }
    };
}

bool_enum!(
    /// The side of the equator
    Hemisphere: North and South; display as 'N':'S'
);
bool_enum!(
    /// The side of the prime meridian
    Meridian: East and West; display as 'E':'W'
);
