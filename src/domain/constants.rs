//! Constants for sentiment categorization and mock dataset generation

/// Thresholds separating positive, neutral and negative sentiment
pub mod sentiment {
    /// Scores strictly above this are positive
    pub const POSITIVE_THRESHOLD: f64 = 0.2;

    /// Scores strictly below this are negative
    pub const NEGATIVE_THRESHOLD: f64 = -0.2;

    /// Lowest representable sentiment score
    pub const MIN_SCORE: f64 = -1.0;

    /// Highest representable sentiment score
    pub const MAX_SCORE: f64 = 1.0;
}

/// Pools and ranges for synthetic social media posts
pub mod posts {
    /// Canned post bodies. Each carries a hashtag, but the hashtag is not
    /// tied to the post's independently drawn `topic`.
    pub const CONTENTS: [&str; 12] = [
        "I think the new healthcare policy will benefit many Americans. #Healthcare",
        "This economic plan is a disaster for small businesses. #Economy",
        "The immigration reforms are long overdue and needed. #Immigration",
        "Climate change policies need to be more aggressive now! #Climate",
        "Education funding is critical for our future generations. #Education",
        "Our foreign policy needs a complete overhaul. #ForeignPolicy",
        "Healthcare costs are still too high despite recent reforms. #Healthcare",
        "The economy is showing strong signs of recovery! #Economy",
        "Immigration system is broken and needs immediate attention. #Immigration",
        "We need to act faster on climate change initiatives. #Climate",
        "Teachers deserve better pay and resources. #Education",
        "Our diplomatic approach has improved our standing globally. #ForeignPolicy",
    ];

    /// Topic labels attached to posts (distinct from the seeded topic set)
    pub const TOPICS: [&str; 6] = [
        "Healthcare",
        "Economy",
        "Immigration",
        "Climate",
        "Education",
        "Foreign Policy",
    ];

    /// US states posts are attributed to
    pub const LOCATIONS: [&str; 5] = ["New York", "California", "Texas", "Florida", "Ohio"];

    /// Posts are dated between 0 and this many days (exclusive) before generation
    pub const MAX_AGE_DAYS: i64 = 30;

    /// Exclusive upper bound for like counts
    pub const LIKES_CEILING: u32 = 1000;

    /// Exclusive upper bound for share counts
    pub const SHARES_CEILING: u32 = 500;

    /// Exclusive upper bound for the numeric suffix of author handles
    pub const AUTHOR_SUFFIX_CEILING: u32 = 1000;

    /// Prefix for post identifiers (`post-{index}`)
    pub const ID_PREFIX: &str = "post-";

    /// Prefix for author handles (`user{n}`)
    pub const AUTHOR_PREFIX: &str = "user";
}

/// Per-topic mention-count random walks
pub mod topic_trends {
    /// Topics that receive a trend series, in output order
    pub const TOPICS: [&str; 5] = ["Healthcare", "Economy", "Immigration", "Climate", "Education"];

    /// Number of days walked back from today (series length is this plus one)
    pub const DAYS: i64 = 30;

    /// Inclusive lower bound of the starting value
    pub const INITIAL_MIN: u32 = 50;

    /// Exclusive upper bound of the starting value
    pub const INITIAL_CEILING: u32 = 150;

    /// Half-width of the per-step delta, drawn from [-MAX_STEP, MAX_STEP)
    pub const MAX_STEP: f64 = 20.0;

    /// Floor applied after every step
    pub const FLOOR: f64 = 10.0;

    /// Ceiling applied after every step
    pub const CEILING: f64 = 500.0;
}

/// Approval forecast perturbation
pub mod approval {
    /// Half-width of the random delta added to the current rating
    pub const MAX_DELTA: f64 = 5.0;

    /// Lowest forecast confidence (inclusive)
    pub const CONFIDENCE_FLOOR: f64 = 65.0;

    /// Width of the confidence range
    pub const CONFIDENCE_SPAN: f64 = 30.0;
}

/// Dataset sizes used when nothing else is configured
pub mod defaults {
    /// Posts generated at startup
    pub const POST_COUNT: usize = 50;

    /// Days covered by the startup sentiment series
    pub const SENTIMENT_DAYS: i64 = 30;
}
