//! Route, header and query constants for the HTTP API

/// Header carrying the request correlation id
pub const X_REQUEST_ID: &str = "x-request-id";

/// Well-known paths
pub mod paths {
    pub const HEALTH: &str = "/health";
    pub const CANDIDATES: &str = "/api/candidates";
    pub const TOPICS: &str = "/api/topics";
    pub const POSTS: &str = "/api/posts";
    pub const SENTIMENT_OVER_TIME: &str = "/api/sentiment-over-time";
    pub const TOPIC_TRENDS: &str = "/api/topic-trends";
    pub const ELECTION_PREDICTION: &str = "/api/election-prediction";
    pub const APPROVAL_PREDICTIONS: &str = "/api/approval-predictions";
    pub const SUMMARY: &str = "/api/summary";
}

/// Query parameter names accepted by the posts endpoint
pub mod query {
    pub const PLATFORM: &str = "platform";
    pub const TOPIC: &str = "topic";
    pub const TIME_RANGE: &str = "timeRange";
    pub const LIMIT: &str = "limit";
}
