//! Headline statistics shown above the dashboard charts

use crate::domain::{
    entities::Topic,
    post::SocialMediaPost,
    sentiment::{round_to_hundredths, SentimentCategory},
};
use serde::{Deserialize, Serialize};

/// Post counts per sentiment category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentBreakdown {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

impl SentimentBreakdown {
    pub fn tally<'a>(posts: impl IntoIterator<Item = &'a SocialMediaPost>) -> Self {
        posts
            .into_iter()
            .fold(Self::default(), |mut breakdown, post| {
                match post.sentiment() {
                    SentimentCategory::Positive => breakdown.positive += 1,
                    SentimentCategory::Negative => breakdown.negative += 1,
                    SentimentCategory::Neutral => breakdown.neutral += 1,
                }
                breakdown
            })
    }

    pub fn total(&self) -> usize {
        self.positive + self.negative + self.neutral
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    /// Mean post score rounded to two decimals; 0 without posts
    pub average_sentiment_score: f64,
    /// Share of positive posts as a whole percentage; 0 without posts
    pub positive_sentiment_percentage: u32,
    /// Likes plus shares across all posts
    pub total_engagement: u64,
    /// Sum of topic mention counts
    pub total_mentions: u64,
    /// Topics whose mentions are trending up
    pub trending_topics: usize,
    /// Distinct topic names in stored order
    pub topic_names: Vec<String>,
    pub sentiment_breakdown: SentimentBreakdown,
}

impl DashboardSummary {
    pub fn compute(posts: &[SocialMediaPost], topics: &[Topic]) -> Self {
        let sentiment_breakdown = SentimentBreakdown::tally(posts);

        let (average_sentiment_score, positive_sentiment_percentage) = if posts.is_empty() {
            (0.0, 0)
        } else {
            let count = posts.len() as f64;
            let score_sum: f64 = posts.iter().map(|p| p.sentiment_score.into_inner()).sum();
            let positive_share = sentiment_breakdown.positive as f64 / count;
            (
                round_to_hundredths(score_sum / count),
                (positive_share * 100.0).round() as u32,
            )
        };

        let mut topic_names: Vec<String> = Vec::with_capacity(topics.len());
        for topic in topics {
            if !topic_names.contains(&topic.name) {
                topic_names.push(topic.name.clone());
            }
        }

        Self {
            average_sentiment_score,
            positive_sentiment_percentage,
            total_engagement: posts.iter().map(SocialMediaPost::engagement).sum(),
            total_mentions: topics.iter().map(|t| t.mentions_count).sum(),
            trending_topics: topics.iter().filter(|t| t.is_trending()).count(),
            topic_names,
            sentiment_breakdown,
        }
    }
}
