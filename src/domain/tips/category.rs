//! Demographic keys for health tips.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Gender options offered by the Quick Tips page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn display_name(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }

    /// Catalog key holding this gender's tips.
    pub fn category(&self) -> TipCategory {
        let key = match self {
            Gender::Male => "male",
            Gender::Female => "female",
        };
        TipCategory(key.to_string())
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Gender {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            _ => Err(ValidationError::invalid_input("gender", s)),
        }
    }
}

/// Open-ended key into the tip catalog.
///
/// Lowercase ASCII letters, digits and `-`, 1 to 64 characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TipCategory(String);

impl TipCategory {
    const MAX_LEN: usize = 64;

    /// Builds a category key. Input is trimmed and lowercased first.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, ValidationError> {
        let key = raw.as_ref().trim().to_ascii_lowercase();
        if key.is_empty() {
            return Err(ValidationError::empty_field("category"));
        }
        if key.len() > Self::MAX_LEN {
            return Err(ValidationError::invalid_format(
                "category",
                format!("longer than {} characters", Self::MAX_LEN),
            ));
        }
        if !key
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            return Err(ValidationError::invalid_format(
                "category",
                "only letters, digits and '-' are allowed",
            ));
        }
        Ok(Self(key))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TipCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for TipCategory {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for TipCategory {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TipCategory> for String {
    fn from(category: TipCategory) -> Self {
        category.0
    }
}

impl From<Gender> for TipCategory {
    fn from(gender: Gender) -> Self {
        gender.category()
    }
}
