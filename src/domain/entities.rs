//! Seeded reference entities: candidates and discussion topics

use crate::domain::{
    political::{Party, TrendDirection},
    sentiment::SentimentScore,
};
use nutype::nutype;
use serde::{Deserialize, Serialize};

/// Approval rating as a percentage (0.0 to 100.0)
#[nutype(
    validate(finite, greater_or_equal = 0.0, less_or_equal = 100.0),
    derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, Display)
)]
pub struct ApprovalRating(f64);

impl ApprovalRating {
    /// No approval (0%)
    pub fn zero() -> Self {
        Self::try_new(0.0).unwrap()
    }

    /// Clamp an arbitrary value into range, mapping NaN to zero
    pub fn saturating(value: f64) -> Self {
        Self::try_new(value.clamp(0.0, 100.0)).unwrap_or_else(|_| Self::zero())
    }
}

/// A political candidate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub id: String,
    pub name: String,
    pub party: Party,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub sentiment_score: SentimentScore,
    pub approval_rating: ApprovalRating,
    pub mentions_count: u64,
    pub trend_direction: TrendDirection,
}

/// A political discussion topic
///
/// `related_topics` are free-form names and need not match any seeded topic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    pub id: String,
    pub name: String,
    pub mentions_count: u64,
    pub sentiment_score: SentimentScore,
    pub trend_direction: TrendDirection,
    pub related_topics: Vec<String>,
}

impl Topic {
    /// Whether mentions of this topic are increasing
    pub fn is_trending(&self) -> bool {
        self.trend_direction == TrendDirection::Up
    }
}
