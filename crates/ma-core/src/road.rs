//! Road records: the raw form a parser produces and the validated form the
//! network stores.

use std::fmt;

use crate::{RoadId, ValidationError};

/// An unvalidated undirected road exactly as read from input.
///
/// Length and id are kept as wide signed integers so that out-of-range
/// values surface as [`ValidationError`]s rather than parse failures.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoadRecord {
    pub a:      String,
    pub b:      String,
    pub length: i64,
    pub id:     i64,
}

impl RoadRecord {
    pub fn new(a: impl Into<String>, b: impl Into<String>, length: i64, id: i64) -> Self {
        Self { a: a.into(), b: b.into(), length, id }
    }

    /// Check the length bound and convert into a [`Road`].
    ///
    /// Id uniqueness is a property of the whole edge list and is checked by
    /// the network builder, not here.
    pub fn validate(self) -> Result<Road, ValidationError> {
        let id = RoadId(self.id);
        let length = u32::try_from(self.length)
            .ok()
            .filter(|&l| l > 0)
            .ok_or(ValidationError::InvalidLength { id, length: self.length })?;
        Ok(Road { a: self.a, b: self.b, length, id })
    }
}

/// A validated, immutable undirected road between cities `a` and `b`.
///
/// `a`/`b` keep the input order only so reports echo the road as given;
/// no algorithm treats the pair as directed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Road {
    pub a:      String,
    pub b:      String,
    pub length: u32,
    pub id:     RoadId,
}

impl Road {
    /// `true` if `city` is one of the two endpoints.
    pub fn touches(&self, city: &str) -> bool {
        self.a == city || self.b == city
    }

    /// The endpoint opposite `city`, or `None` if the road doesn't touch it.
    pub fn other_end(&self, city: &str) -> Option<&str> {
        if self.a == city {
            Some(&self.b)
        } else if self.b == city {
            Some(&self.a)
        } else {
            None
        }
    }
}

impl fmt::Display for Road {
    /// Report line: `a<TAB>b<TAB>length<TAB>id`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}\t{}\t{}", self.a, self.b, self.length, self.id)
    }
}
