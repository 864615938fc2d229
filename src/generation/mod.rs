//! Mock dataset generation
//!
//! This module produces the synthetic posts and time series behind the
//! dashboard. Randomness and the reference instant are both injected, so a
//! seeded generator reproduces a dataset exactly while production wiring uses
//! an entropy-seeded source and the wall clock.

pub mod waves;

use crate::domain::{
    constants::{posts, topic_trends},
    params::{DaysBack, PostCount},
    political::{Platform, PoliticalLeaning},
    post::SocialMediaPost,
    sentiment::{round_to_hundredths, SentimentScore},
    time_series::{SentimentOverTime, TopicTrend, TrendSample},
};
use chrono::{DateTime, Duration, NaiveDate, Utc};
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Generator for mock sentiment datasets
///
/// Every operation draws from the owned random source in a fixed order, so two
/// generators built from the same seed and instant yield identical output.
#[derive(Debug, Clone)]
pub struct MockDataGenerator<R> {
    rng: R,
    now: DateTime<Utc>,
}

impl MockDataGenerator<StdRng> {
    /// Deterministic generator for tests and reproducible demos
    pub fn seeded(seed: u64, now: DateTime<Utc>) -> Self {
        Self::new(StdRng::seed_from_u64(seed), now)
    }

    /// Generator backed by operating system entropy
    pub fn from_entropy(now: DateTime<Utc>) -> Self {
        Self::new(StdRng::from_entropy(), now)
    }
}

impl<R: Rng> MockDataGenerator<R> {
    pub fn new(rng: R, now: DateTime<Utc>) -> Self {
        Self { rng, now }
    }

    /// Reference instant all generated dates are relative to
    pub fn now(&self) -> DateTime<Utc> {
        self.now
    }

    /// Calendar day of the reference instant (UTC)
    pub fn today(&self) -> NaiveDate {
        self.now.date_naive()
    }

    /// Release the random source, e.g. to keep drawing forecasts from it
    pub fn into_rng(self) -> R {
        self.rng
    }

    /// Uniform score in [-1, 1], rounded to two decimals
    pub fn random_sentiment(&mut self) -> SentimentScore {
        let raw = self.rng.gen::<f64>() * 2.0 - 1.0;
        SentimentScore::saturating(round_to_hundredths(raw))
    }

    /// Generate `count` posts with ids `post-0` .. `post-{count-1}`.
    ///
    /// Ids are local to the batch; two batches both start at `post-0`.
    pub fn generate_posts(&mut self, count: PostCount) -> Vec<SocialMediaPost> {
        let count = count.into_inner();
        let mut batch = Vec::with_capacity(count);

        for index in 0..count {
            batch.push(self.generate_post(index));
        }

        batch
    }

    fn generate_post(&mut self, index: usize) -> SocialMediaPost {
        let sentiment_score = self.random_sentiment();
        let content = self.pick(&posts::CONTENTS).to_string();
        let platform = *self.pick(&Platform::ALL);
        let days_ago = self.rng.gen_range(0..posts::MAX_AGE_DAYS);
        let likes = self.rng.gen_range(0..posts::LIKES_CEILING);
        let shares = self.rng.gen_range(0..posts::SHARES_CEILING);
        let topic = self.pick(&posts::TOPICS).to_string();
        let author_suffix = self.rng.gen_range(0..posts::AUTHOR_SUFFIX_CEILING);
        let location = self.pick(&posts::LOCATIONS).to_string();
        let political_leaning = *self.pick(&PoliticalLeaning::ALL);

        SocialMediaPost {
            id: format!("{}{index}", posts::ID_PREFIX),
            content,
            platform,
            timestamp: self.now - Duration::days(days_ago),
            likes,
            shares,
            sentiment_score,
            topic,
            author: format!("{}{author_suffix}", posts::AUTHOR_PREFIX),
            location,
            political_leaning,
        }
    }

    /// Daily sentiment by affiliation from `days` days ago through today.
    ///
    /// Returns `days + 1` points, oldest first, one calendar day apart.
    pub fn generate_sentiment_over_time(&mut self, days: DaysBack) -> Vec<SentimentOverTime> {
        let today = self.today();
        let mut series = Vec::with_capacity(days.point_count());

        for offset in (0..=days.into_inner()).rev() {
            let x = offset as f64;
            let democrat = waves::DEMOCRAT.sample(self.rng.gen(), x);
            let republican = waves::REPUBLICAN.sample(self.rng.gen(), x);
            let independent = waves::INDEPENDENT.sample(self.rng.gen(), x);

            series.push(SentimentOverTime {
                date: today - Duration::days(offset),
                democrat: round_to_hundredths(democrat),
                republican: round_to_hundredths(republican),
                independent: round_to_hundredths(independent),
            });
        }

        series
    }

    /// Mention-volume random walks for the five trend topics.
    ///
    /// Each topic starts at an integer in [50, 150) and takes 31 clamped steps
    /// of [-20, 20), one per day from 30 days ago through today.
    pub fn generate_topic_trends(&mut self) -> Vec<TopicTrend> {
        let today = self.today();
        let mut trends = Vec::with_capacity(topic_trends::TOPICS.len());

        for topic in topic_trends::TOPICS {
            let mut value = f64::from(
                self.rng
                    .gen_range(topic_trends::INITIAL_MIN..topic_trends::INITIAL_CEILING),
            );
            let mut data = Vec::with_capacity(topic_trends::DAYS as usize + 1);

            for offset in (0..=topic_trends::DAYS).rev() {
                let step = self.rng.gen::<f64>() * (2.0 * topic_trends::MAX_STEP)
                    - topic_trends::MAX_STEP;
                value = (value + step).clamp(topic_trends::FLOOR, topic_trends::CEILING);

                data.push(TrendSample {
                    date: today - Duration::days(offset),
                    value,
                });
            }

            trends.push(TopicTrend {
                topic: topic.to_string(),
                data,
            });
        }

        trends
    }

    fn pick<'a, T>(&mut self, pool: &'a [T]) -> &'a T {
        &pool[self.rng.gen_range(0..pool.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::sentiment::categorize;
    use chrono::TimeZone;
    use std::collections::HashSet;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 14, 30, 0).unwrap()
    }

    fn generator(seed: u64) -> MockDataGenerator<StdRng> {
        MockDataGenerator::seeded(seed, fixed_now())
    }

    #[test]
    fn test_random_sentiment_is_rounded_and_in_range() {
        let mut generator = generator(1);
        for _ in 0..500 {
            let score = generator.random_sentiment().into_inner();
            assert!((-1.0..=1.0).contains(&score));
            assert!((score * 100.0 - (score * 100.0).round()).abs() < 1e-9);
        }
    }

    #[test]
    fn test_generate_posts_count_and_ids() {
        let posts = generator(2).generate_posts(PostCount::standard_batch());

        assert_eq!(posts.len(), 50);
        for (index, post) in posts.iter().enumerate() {
            assert_eq!(post.id, format!("post-{index}"));
        }
        let ids: HashSet<_> = posts.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), posts.len());
    }

    #[test]
    fn test_generate_posts_zero() {
        assert!(generator(3).generate_posts(PostCount::zero()).is_empty());
    }

    #[test]
    fn test_post_ids_are_batch_local() {
        let mut generator = generator(4);
        let one = PostCount::try_new(1).unwrap();

        let first = generator.generate_posts(one);
        let second = generator.generate_posts(one);

        assert_eq!(first[0].id, "post-0");
        assert_eq!(second[0].id, "post-0");
    }

    #[test]
    fn test_post_fields_come_from_pools() {
        let now = fixed_now();
        let batch = generator(5).generate_posts(PostCount::try_new(200).unwrap());

        for post in &batch {
            assert!(posts::CONTENTS.contains(&post.content.as_str()));
            assert!(posts::TOPICS.contains(&post.topic.as_str()));
            assert!(posts::LOCATIONS.contains(&post.location.as_str()));
            assert!(post.likes < 1000);
            assert!(post.shares < 500);
            assert!(post.author.starts_with("user"));
            assert!(post.author["user".len()..].parse::<u32>().unwrap() < 1000);
            assert_eq!(post.sentiment(), categorize(post.sentiment_score.into_inner()));

            let age = now - post.timestamp;
            assert!(age >= Duration::zero());
            assert!(age <= Duration::days(29));
            assert_eq!(age.num_seconds() % 86_400, 0);
        }
    }

    #[test]
    fn test_sentiment_over_time_shape() {
        let series = generator(6).generate_sentiment_over_time(DaysBack::month());

        assert_eq!(series.len(), 31);
        assert_eq!(series.last().unwrap().date, fixed_now().date_naive());
        for pair in series.windows(2) {
            assert_eq!(pair[1].date - pair[0].date, Duration::days(1));
        }
    }

    #[test]
    fn test_sentiment_over_time_today_only() {
        let series = generator(7).generate_sentiment_over_time(DaysBack::today());
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].date, fixed_now().date_naive());
    }

    #[test]
    fn test_topic_trends_shape_and_bounds() {
        let trends = generator(8).generate_topic_trends();

        let names: Vec<_> = trends.iter().map(|t| t.topic.as_str()).collect();
        assert_eq!(names, topic_trends::TOPICS);

        for trend in &trends {
            assert_eq!(trend.data.len(), 31);
            assert_eq!(trend.data.last().unwrap().date, fixed_now().date_naive());
            for sample in &trend.data {
                assert!((10.0..=500.0).contains(&sample.value));
            }
        }
    }

    #[test]
    fn test_same_seed_reproduces_dataset() {
        let mut a = generator(42);
        let mut b = generator(42);

        assert_eq!(
            a.generate_posts(PostCount::standard_batch()),
            b.generate_posts(PostCount::standard_batch())
        );
        assert_eq!(
            a.generate_sentiment_over_time(DaysBack::week()),
            b.generate_sentiment_over_time(DaysBack::week())
        );
        assert_eq!(a.generate_topic_trends(), b.generate_topic_trends());
    }

    #[test]
    fn test_different_seeds_diverge() {
        let a = generator(1).generate_posts(PostCount::standard_batch());
        let b = generator(2).generate_posts(PostCount::standard_batch());
        assert_ne!(a, b);
    }
}
