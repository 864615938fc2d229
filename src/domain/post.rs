//! Synthetic social media posts

use crate::domain::{
    political::{Platform, PoliticalLeaning},
    sentiment::{SentimentCategory, SentimentScore},
};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A synthetic social media mention
///
/// Only the numeric score is stored. The categorical `sentiment` is derived on
/// demand and written alongside the score when serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "PostRecord", try_from = "PostRecord")]
pub struct SocialMediaPost {
    pub id: String,
    pub content: String,
    pub platform: Platform,
    pub timestamp: DateTime<Utc>,
    pub likes: u32,
    pub shares: u32,
    pub sentiment_score: SentimentScore,
    pub topic: String,
    pub author: String,
    pub location: String,
    pub political_leaning: PoliticalLeaning,
}

impl SocialMediaPost {
    /// Category derived from the sentiment score
    pub fn sentiment(&self) -> SentimentCategory {
        self.sentiment_score.category()
    }

    /// Whether the post is no older than `days` before `now`
    pub fn is_within(&self, now: DateTime<Utc>, days: i64) -> bool {
        self.timestamp >= now - Duration::days(days)
    }

    /// Likes plus shares
    pub fn engagement(&self) -> u64 {
        u64::from(self.likes) + u64::from(self.shares)
    }
}

/// Wire representation of [`SocialMediaPost`], carrying the derived label
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostRecord {
    pub id: String,
    pub content: String,
    pub platform: Platform,
    pub timestamp: DateTime<Utc>,
    pub likes: u32,
    pub shares: u32,
    pub sentiment: SentimentCategory,
    pub sentiment_score: SentimentScore,
    pub topic: String,
    pub author: String,
    pub location: String,
    pub political_leaning: PoliticalLeaning,
}

/// A post record whose stated label contradicts its score
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("post {id}: sentiment '{stated}' does not match score category '{derived}'")]
pub struct SentimentMismatch {
    pub id: String,
    pub stated: SentimentCategory,
    pub derived: SentimentCategory,
}

impl From<SocialMediaPost> for PostRecord {
    fn from(post: SocialMediaPost) -> Self {
        Self {
            sentiment: post.sentiment(),
            id: post.id,
            content: post.content,
            platform: post.platform,
            timestamp: post.timestamp,
            likes: post.likes,
            shares: post.shares,
            sentiment_score: post.sentiment_score,
            topic: post.topic,
            author: post.author,
            location: post.location,
            political_leaning: post.political_leaning,
        }
    }
}

impl TryFrom<PostRecord> for SocialMediaPost {
    type Error = SentimentMismatch;

    fn try_from(record: PostRecord) -> Result<Self, Self::Error> {
        let derived = record.sentiment_score.category();
        if derived != record.sentiment {
            return Err(SentimentMismatch {
                id: record.id,
                stated: record.sentiment,
                derived,
            });
        }

        Ok(Self {
            id: record.id,
            content: record.content,
            platform: record.platform,
            timestamp: record.timestamp,
            likes: record.likes,
            shares: record.shares,
            sentiment_score: record.sentiment_score,
            topic: record.topic,
            author: record.author,
            location: record.location,
            political_leaning: record.political_leaning,
        })
    }
}
