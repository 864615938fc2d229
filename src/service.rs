//! The immutable mock dataset served to the dashboard
//!
//! [`MockDataService::initialize`] builds everything once. After that the
//! bundle is read-only and can be shared across request handlers behind an
//! `Arc` without further synchronization.

use crate::analytics::DashboardSummary;
use crate::domain::{
    entities::{Candidate, Topic},
    params::{DaysBack, PostCount},
    post::SocialMediaPost,
    prediction::{forecast_approval, ApprovalPrediction, ElectionPrediction},
    seed_data,
    time_series::{SentimentOverTime, TopicTrend},
};
use crate::generation::MockDataGenerator;
use chrono::{DateTime, Utc};
use rand::{rngs::StdRng, Rng};
use tracing::{info, instrument};

/// Sizes of the generated collections
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatasetShape {
    pub post_count: PostCount,
    pub sentiment_days: DaysBack,
}

impl Default for DatasetShape {
    fn default() -> Self {
        Self {
            post_count: PostCount::standard_batch(),
            sentiment_days: DaysBack::month(),
        }
    }
}

/// Complete mock dataset
#[derive(Debug, Clone, PartialEq)]
pub struct MockDataService {
    candidates: Vec<Candidate>,
    topics: Vec<Topic>,
    social_media_posts: Vec<SocialMediaPost>,
    sentiment_time_data: Vec<SentimentOverTime>,
    topic_trends: Vec<TopicTrend>,
    election_prediction: ElectionPrediction,
    generated_at: DateTime<Utc>,
}

impl MockDataService {
    /// Build the dataset from `generator`.
    ///
    /// Posts are drawn first, then the sentiment series, then topic trends.
    #[instrument(skip(generator))]
    pub fn initialize<R: Rng>(generator: &mut MockDataGenerator<R>, shape: DatasetShape) -> Self {
        let generated_at = generator.now();
        let social_media_posts = generator.generate_posts(shape.post_count);
        let sentiment_time_data = generator.generate_sentiment_over_time(shape.sentiment_days);
        let topic_trends = generator.generate_topic_trends();

        let service = Self {
            candidates: seed_data::candidates(),
            topics: seed_data::topics(),
            social_media_posts,
            sentiment_time_data,
            topic_trends,
            election_prediction: seed_data::election_prediction(generated_at),
            generated_at,
        };

        info!(
            candidates = service.candidates.len(),
            topics = service.topics.len(),
            posts = service.social_media_posts.len(),
            sentiment_points = service.sentiment_time_data.len(),
            topic_trends = service.topic_trends.len(),
            "Mock dataset initialized"
        );

        service
    }

    /// Reproducible dataset for a fixed seed and instant
    pub fn seeded(seed: u64, now: DateTime<Utc>, shape: DatasetShape) -> Self {
        Self::initialize(&mut MockDataGenerator::<StdRng>::seeded(seed, now), shape)
    }

    /// Dataset drawn from operating system entropy at the current time
    pub fn from_entropy(shape: DatasetShape) -> Self {
        Self::initialize(&mut MockDataGenerator::<StdRng>::from_entropy(Utc::now()), shape)
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    pub fn social_media_posts(&self) -> &[SocialMediaPost] {
        &self.social_media_posts
    }

    pub fn sentiment_time_data(&self) -> &[SentimentOverTime] {
        &self.sentiment_time_data
    }

    pub fn topic_trends(&self) -> &[TopicTrend] {
        &self.topic_trends
    }

    pub fn election_prediction(&self) -> &ElectionPrediction {
        &self.election_prediction
    }

    /// Instant the dataset was generated relative to
    pub fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }

    /// Fresh approval forecast for every candidate.
    ///
    /// Two calls with the same source yield different figures.
    pub fn predicted_approval_ratings<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Vec<ApprovalPrediction> {
        forecast_approval(&self.candidates, rng)
    }

    /// Headline statistics over the whole dataset
    pub fn summary(&self) -> DashboardSummary {
        DashboardSummary::compute(&self.social_media_posts, &self.topics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rand::SeedableRng;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 11, 1, 9, 0, 0).unwrap()
    }

    #[test]
    fn test_default_shape() {
        let shape = DatasetShape::default();
        assert_eq!(shape.post_count.into_inner(), 50);
        assert_eq!(shape.sentiment_days.into_inner(), 30);
    }

    #[test]
    fn test_initialize_with_default_shape() {
        let service = MockDataService::seeded(1, fixed_now(), DatasetShape::default());

        assert_eq!(service.candidates().len(), 5);
        assert_eq!(service.topics().len(), 5);
        assert_eq!(service.social_media_posts().len(), 50);
        assert_eq!(service.sentiment_time_data().len(), 31);
        assert_eq!(service.topic_trends().len(), 5);
        assert_eq!(service.election_prediction().last_updated, fixed_now());
        assert_eq!(service.generated_at(), fixed_now());
    }

    #[test]
    fn test_initialize_with_custom_shape() {
        let shape = DatasetShape {
            post_count: PostCount::zero(),
            sentiment_days: DaysBack::today(),
        };
        let service = MockDataService::seeded(2, fixed_now(), shape);

        assert!(service.social_media_posts().is_empty());
        assert_eq!(service.sentiment_time_data().len(), 1);
        assert_eq!(service.topic_trends().len(), 5);
    }

    #[test]
    fn test_seeded_datasets_match() {
        let a = MockDataService::seeded(9, fixed_now(), DatasetShape::default());
        let b = MockDataService::seeded(9, fixed_now(), DatasetShape::default());
        assert_eq!(a, b);
    }

    #[test]
    fn test_approval_predictions_are_recomputed() {
        let service = MockDataService::seeded(3, fixed_now(), DatasetShape::default());
        let mut rng = StdRng::seed_from_u64(3);

        let first = service.predicted_approval_ratings(&mut rng);
        let second = service.predicted_approval_ratings(&mut rng);

        assert_eq!(first.len(), service.candidates().len());
        assert_ne!(first, second);
    }

    #[test]
    fn test_from_entropy_uses_default_sizes() {
        let service = MockDataService::from_entropy(DatasetShape::default());
        assert_eq!(service.social_media_posts().len(), 50);
        assert_eq!(service.sentiment_time_data().len(), 31);
    }
}
