//! The closed set of genres a catalog entry may carry.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Genre of a catalog entry.
///
/// The set is closed: parsing accepts exactly the display names below and
/// nothing else (matching is case-sensitive).
///
/// # Example
///
/// ```rust
/// use libris::core::Genre;
///
/// assert_eq!("Sci-Fi".parse::<Genre>(), Ok(Genre::SciFi));
/// assert!("sci-fi".parse::<Genre>().is_err());
/// assert_eq!(Genre::NonFiction.to_string(), "Non-Fiction");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Genre {
    Fiction,
    #[serde(rename = "Non-Fiction")]
    NonFiction,
    #[serde(rename = "Sci-Fi")]
    SciFi,
    Biography,
    Mystery,
    Romance,
}

impl Genre {
    /// Every allowed genre, in display order.
    pub const ALL: [Genre; 6] = [
        Genre::Fiction,
        Genre::NonFiction,
        Genre::SciFi,
        Genre::Biography,
        Genre::Mystery,
        Genre::Romance,
    ];

    /// Display name, as accepted by [`Genre::from_str`].
    pub fn name(&self) -> &'static str {
        match self {
            Self::Fiction => "Fiction",
            Self::NonFiction => "Non-Fiction",
            Self::SciFi => "Sci-Fi",
            Self::Biography => "Biography",
            Self::Mystery => "Mystery",
            Self::Romance => "Romance",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string is not one of [`Genre::ALL`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown genre {0:?}")]
pub struct ParseGenreError(pub String);

impl FromStr for Genre {
    type Err = ParseGenreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Genre::ALL
            .into_iter()
            .find(|genre| genre.name() == s)
            .ok_or_else(|| ParseGenreError(s.to_string()))
    }
}
