//! Static reference data seeded at startup
//!
//! Candidates, topics and the election prediction are fixed. Only their
//! consumers (filters, forecasts) involve randomness.

use crate::domain::{
    entities::{ApprovalRating, Candidate, Topic},
    political::{Party, TrendDirection},
    prediction::{ElectionPrediction, PredictionConfidence},
    sentiment::SentimentScore,
};
use chrono::{DateTime, Utc};

/// Shipped election prediction figures
pub mod election {
    pub const DEMOCRAT_SHARE: f64 = 48.2;
    pub const REPUBLICAN_SHARE: f64 = 46.5;
    pub const INDEPENDENT_SHARE: f64 = 5.3;
    pub const MARGIN: f64 = 1.7;
}

struct CandidateSeed {
    id: &'static str,
    name: &'static str,
    party: Party,
    avatar: u8,
    sentiment: f64,
    approval: f64,
    mentions: u64,
    trend: TrendDirection,
}

const CANDIDATES: [CandidateSeed; 5] = [
    CandidateSeed {
        id: "1",
        name: "Jane Smith",
        party: Party::Democrat,
        avatar: 1,
        sentiment: 0.42,
        approval: 54.0,
        mentions: 12_500,
        trend: TrendDirection::Up,
    },
    CandidateSeed {
        id: "2",
        name: "John Davis",
        party: Party::Republican,
        avatar: 2,
        sentiment: 0.31,
        approval: 48.0,
        mentions: 11_200,
        trend: TrendDirection::Stable,
    },
    CandidateSeed {
        id: "3",
        name: "Alex Johnson",
        party: Party::Independent,
        avatar: 3,
        sentiment: -0.15,
        approval: 32.0,
        mentions: 4_300,
        trend: TrendDirection::Down,
    },
    CandidateSeed {
        id: "4",
        name: "Maria Rodriguez",
        party: Party::Democrat,
        avatar: 4,
        sentiment: 0.25,
        approval: 46.0,
        mentions: 8_700,
        trend: TrendDirection::Stable,
    },
    CandidateSeed {
        id: "5",
        name: "Robert Wilson",
        party: Party::Republican,
        avatar: 5,
        sentiment: -0.23,
        approval: 41.0,
        mentions: 7_600,
        trend: TrendDirection::Down,
    },
];

struct TopicSeed {
    id: &'static str,
    name: &'static str,
    mentions: u64,
    sentiment: f64,
    trend: TrendDirection,
    related: [&'static str; 3],
}

const TOPICS: [TopicSeed; 5] = [
    TopicSeed {
        id: "1",
        name: "Healthcare Reform",
        mentions: 25_600,
        sentiment: -0.15,
        trend: TrendDirection::Up,
        related: ["Insurance", "Medicare", "Prescription Drugs"],
    },
    TopicSeed {
        id: "2",
        name: "Climate Change",
        mentions: 18_700,
        sentiment: 0.22,
        trend: TrendDirection::Up,
        related: ["Green Energy", "Carbon Tax", "Paris Agreement"],
    },
    TopicSeed {
        id: "3",
        name: "Economic Policy",
        mentions: 21_300,
        sentiment: 0.05,
        trend: TrendDirection::Stable,
        related: ["Taxes", "Inflation", "Jobs"],
    },
    TopicSeed {
        id: "4",
        name: "Immigration",
        mentions: 19_200,
        sentiment: -0.38,
        trend: TrendDirection::Up,
        related: ["Border Security", "DACA", "Asylum"],
    },
    TopicSeed {
        id: "5",
        name: "Gun Control",
        mentions: 16_400,
        sentiment: -0.52,
        trend: TrendDirection::Down,
        related: ["Second Amendment", "Background Checks", "Mass Shootings"],
    },
];

/// Seeded candidates, in display order
pub fn candidates() -> Vec<Candidate> {
    CANDIDATES
        .iter()
        .map(|seed| Candidate {
            id: seed.id.to_string(),
            name: seed.name.to_string(),
            party: seed.party,
            image_url: Some(format!("https://i.pravatar.cc/150?img={}", seed.avatar)),
            sentiment_score: SentimentScore::saturating(seed.sentiment),
            approval_rating: ApprovalRating::saturating(seed.approval),
            mentions_count: seed.mentions,
            trend_direction: seed.trend,
        })
        .collect()
}

/// Seeded discussion topics, in display order
pub fn topics() -> Vec<Topic> {
    TOPICS
        .iter()
        .map(|seed| Topic {
            id: seed.id.to_string(),
            name: seed.name.to_string(),
            mentions_count: seed.mentions,
            sentiment_score: SentimentScore::saturating(seed.sentiment),
            trend_direction: seed.trend,
            related_topics: seed.related.iter().map(|name| name.to_string()).collect(),
        })
        .collect()
}

/// Shipped election prediction stamped with `last_updated`
pub fn election_prediction(last_updated: DateTime<Utc>) -> ElectionPrediction {
    ElectionPrediction {
        democrat: election::DEMOCRAT_SHARE,
        republican: election::REPUBLICAN_SHARE,
        independent: election::INDEPENDENT_SHARE,
        margin: election::MARGIN,
        confidence: PredictionConfidence::Moderate,
        last_updated,
    }
}
