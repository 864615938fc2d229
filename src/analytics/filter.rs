//! Post filtering by platform, topic and recency

use crate::domain::{
    political::{Platform, UnknownVariant},
    post::SocialMediaPost,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Selection value meaning "no constraint"
pub const ALL: &str = "all";

/// Recency window for posts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeRange {
    #[serde(rename = "7days")]
    LastWeek,
    #[default]
    #[serde(rename = "30days")]
    LastMonth,
    #[serde(rename = "90days")]
    LastQuarter,
    #[serde(rename = "year")]
    LastYear,
}

impl TimeRange {
    pub const ALL: [TimeRange; 4] = [
        TimeRange::LastWeek,
        TimeRange::LastMonth,
        TimeRange::LastQuarter,
        TimeRange::LastYear,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LastWeek => "7days",
            Self::LastMonth => "30days",
            Self::LastQuarter => "90days",
            Self::LastYear => "year",
        }
    }

    /// Window length in days
    pub fn days(&self) -> i64 {
        match self {
            Self::LastWeek => 7,
            Self::LastMonth => 30,
            Self::LastQuarter => 90,
            Self::LastYear => 365,
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeRange {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|range| range.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownVariant::new("time range", s))
    }
}

/// Conjunction of optional post criteria; `None` matches everything
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostFilter {
    pub platform: Option<Platform>,
    pub topic: Option<String>,
    pub time_range: Option<TimeRange>,
}

impl PostFilter {
    /// Build a filter from raw selections where absent, empty or `"all"` means
    /// no constraint.
    pub fn from_selection(
        platform: Option<&str>,
        topic: Option<&str>,
        time_range: Option<&str>,
    ) -> Result<Self, UnknownVariant> {
        Ok(Self {
            platform: selected(platform).map(str::parse::<Platform>).transpose()?,
            topic: selected(topic).map(str::to_string),
            time_range: selected(time_range).map(str::parse::<TimeRange>).transpose()?,
        })
    }

    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = Some(platform);
        self
    }

    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = Some(topic.into());
        self
    }

    pub fn with_time_range(mut self, time_range: TimeRange) -> Self {
        self.time_range = Some(time_range);
        self
    }

    /// Whether `post` satisfies every set criterion relative to `now`.
    ///
    /// Topics compare case-insensitively.
    pub fn matches(&self, post: &SocialMediaPost, now: DateTime<Utc>) -> bool {
        let platform_match = self.platform.is_none_or(|platform| post.platform == platform);
        let topic_match = self
            .topic
            .as_deref()
            .is_none_or(|topic| post.topic.to_lowercase() == topic.to_lowercase());
        let recency_match = self
            .time_range
            .is_none_or(|range| post.is_within(now, range.days()));

        platform_match && topic_match && recency_match
    }

    /// Matching posts in their original order
    pub fn apply<'a>(
        &self,
        posts: &'a [SocialMediaPost],
        now: DateTime<Utc>,
    ) -> Vec<&'a SocialMediaPost> {
        posts.iter().filter(|post| self.matches(post, now)).collect()
    }
}

fn selected(value: Option<&str>) -> Option<&str> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case(ALL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{political::PoliticalLeaning, sentiment::SentimentScore};
    use chrono::{Duration, TimeZone};
    use rstest::rstest;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 30, 12, 0, 0).unwrap()
    }

    fn post(id: &str, platform: Platform, topic: &str, days_ago: i64) -> SocialMediaPost {
        SocialMediaPost {
            id: id.to_string(),
            content: "content".to_string(),
            platform,
            timestamp: now() - Duration::days(days_ago),
            likes: 1,
            shares: 1,
            sentiment_score: SentimentScore::neutral(),
            topic: topic.to_string(),
            author: "user1".to_string(),
            location: "Ohio".to_string(),
            political_leaning: PoliticalLeaning::Unknown,
        }
    }

    fn fixture() -> Vec<SocialMediaPost> {
        vec![
            post("post-0", Platform::Twitter, "Economy", 1),
            post("post-1", Platform::Reddit, "Healthcare", 10),
            post("post-2", Platform::Twitter, "Healthcare", 45),
            post("post-3", Platform::Facebook, "Economy", 200),
        ]
    }

    fn ids(posts: &[&SocialMediaPost]) -> Vec<String> {
        posts.iter().map(|p| p.id.clone()).collect()
    }

    #[rstest]
    #[case("7days", TimeRange::LastWeek)]
    #[case("30days", TimeRange::LastMonth)]
    #[case("90days", TimeRange::LastQuarter)]
    #[case("year", TimeRange::LastYear)]
    #[case("YEAR", TimeRange::LastYear)]
    fn test_time_range_parses(#[case] input: &str, #[case] expected: TimeRange) {
        assert_eq!(input.parse::<TimeRange>().unwrap(), expected);
    }

    #[test]
    fn test_time_range_rejects_unknown() {
        let err = "fortnight".parse::<TimeRange>().unwrap_err();
        assert_eq!(err.to_string(), "unknown time range 'fortnight'");
    }

    #[test]
    fn test_time_range_serde_names() {
        let json = serde_json::to_string(&TimeRange::LastQuarter).unwrap();
        assert_eq!(json, "\"90days\"");
        let parsed: TimeRange = serde_json::from_str("\"7days\"").unwrap();
        assert_eq!(parsed, TimeRange::LastWeek);
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let posts = fixture();
        assert_eq!(PostFilter::default().apply(&posts, now()).len(), posts.len());
    }

    #[rstest]
    #[case(Some("all"), Some("all"), None, 4)]
    #[case(Some("twitter"), None, None, 2)]
    #[case(None, Some("healthcare"), None, 2)]
    #[case(None, Some("HEALTHCARE"), None, 2)]
    #[case(Some("twitter"), Some("healthcare"), None, 1)]
    #[case(None, None, Some("7days"), 1)]
    #[case(None, None, Some("30days"), 2)]
    #[case(None, None, Some("90days"), 3)]
    #[case(None, None, Some("year"), 4)]
    #[case(Some("facebook"), None, Some("30days"), 0)]
    #[case(None, Some("Unknown Topic"), None, 0)]
    fn test_filter_selection(
        #[case] platform: Option<&str>,
        #[case] topic: Option<&str>,
        #[case] time_range: Option<&str>,
        #[case] expected: usize,
    ) {
        let posts = fixture();
        let filter = PostFilter::from_selection(platform, topic, time_range).unwrap();
        assert_eq!(filter.apply(&posts, now()).len(), expected);
    }

    #[test]
    fn test_apply_preserves_order() {
        let posts = fixture();
        let filter = PostFilter::default().with_topic("economy");
        assert_eq!(ids(&filter.apply(&posts, now())), ["post-0", "post-3"]);
    }

    #[test]
    fn test_from_selection_rejects_unknown_platform() {
        let err = PostFilter::from_selection(Some("myspace"), None, None).unwrap_err();
        assert_eq!(err.kind, "platform");
        assert_eq!(err.value, "myspace");
    }

    #[test]
    fn test_builder_methods() {
        let filter = PostFilter::default()
            .with_platform(Platform::Reddit)
            .with_time_range(TimeRange::LastMonth);
        let posts = fixture();
        assert_eq!(ids(&filter.apply(&posts, now())), ["post-1"]);
    }
}
