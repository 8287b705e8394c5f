//! Strongly typed, zero-cost identifier wrappers.
//!
//! `CityId` and `EdgeId` are dense indices assigned by the network builder and
//! index directly into its SoA `Vec`s.  `RoadId` is different: it is the
//! caller-supplied road identifier, used only for reporting and as the
//! deterministic tie-breaker, so it carries no index semantics.

use std::fmt;

/// Generate a typed dense-index wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid ID"; equal to `u32::MAX`.
            pub const INVALID: $name = $name(<$inner>::MAX);

            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl Default for $name {
            /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
            #[inline(always)]
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Index of a city in the network's sorted city table.
    ///
    /// Because the table is sorted, `CityId(0)` is always the
    /// lexicographically smallest city name.
    pub struct CityId(u32);
}

typed_id! {
    /// Index of an undirected road in the network's edge arrays.
    pub struct EdgeId(u32);
}

/// Caller-supplied road identifier.
///
/// Must be unique across a network.  Orders numerically, which is the
/// secondary key of every greedy selection in the analyzer.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoadId(pub i64);

impl fmt::Display for RoadId {
    /// Plain number, as it appears in input and report lines.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
