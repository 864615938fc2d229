//! Closed vocabularies shared across candidates, topics and posts

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A string did not name any variant of a closed vocabulary
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}'")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

impl UnknownVariant {
    pub fn new(kind: &'static str, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

/// Party affiliation of a candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Party {
    Democrat,
    Republican,
    Independent,
}

impl fmt::Display for Party {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Democrat => write!(f, "democrat"),
            Self::Republican => write!(f, "republican"),
            Self::Independent => write!(f, "independent"),
        }
    }
}

/// Direction in which mentions or sentiment are moving
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Up,
    Down,
    Stable,
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Up => write!(f, "up"),
            Self::Down => write!(f, "down"),
            Self::Stable => write!(f, "stable"),
        }
    }
}

/// Social network a post was collected from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Twitter,
    Reddit,
    Facebook,
}

impl Platform {
    /// Every platform, in generation order
    pub const ALL: [Platform; 3] = [Platform::Twitter, Platform::Reddit, Platform::Facebook];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Twitter => "twitter",
            Self::Reddit => "reddit",
            Self::Facebook => "facebook",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|platform| platform.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownVariant::new("platform", s))
    }
}

/// Political leaning inferred for a post's author
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PoliticalLeaning {
    Democrat,
    Republican,
    Independent,
    Unknown,
}

impl PoliticalLeaning {
    /// Every leaning, in generation order
    pub const ALL: [PoliticalLeaning; 4] = [
        PoliticalLeaning::Democrat,
        PoliticalLeaning::Republican,
        PoliticalLeaning::Independent,
        PoliticalLeaning::Unknown,
    ];
}

impl fmt::Display for PoliticalLeaning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Democrat => write!(f, "democrat"),
            Self::Republican => write!(f, "republican"),
            Self::Independent => write!(f, "independent"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}
