use serde::{Deserialize, Serialize};

/// Recorded sex of a person, as it appears in the data file (`"m"` / `"f"`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sex {
    #[serde(rename = "m")]
    Male,
    #[serde(rename = "f")]
    Female,
}

impl Sex {
    /// The single-letter code used in the data file and table cells
    pub fn code(self) -> &'static str {
        match self {
            Sex::Male => "m",
            Sex::Female => "f",
        }
    }

    /// Parse a single-letter code into a sex
    pub fn from_code(code: &str) -> Option<Sex> {
        match code {
            "m" => Some(Sex::Male),
            "f" => Some(Sex::Female),
            _ => None,
        }
    }
}

/// A single person record from the data file.
///
/// Records are immutable after load; `slug` is the identity and is assumed
/// unique across the record source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Unique identifier like `carolus-haverbeke-1832`
    pub slug: String,
    /// Display name
    pub name: String,
    /// Recorded sex
    pub sex: Sex,
    /// Birth year
    pub born: i32,
}

impl Person {
    pub fn new(slug: &str, name: &str, sex: Sex, born: i32) -> Self {
        Person {
            slug: slug.to_string(),
            name: name.to_string(),
            sex,
            born,
        }
    }
}
