//! Validated generation parameters
//!
//! Generator entry points only accept these types, so a negative or absurd
//! count is rejected at the boundary instead of being clamped silently.

use crate::domain::constants::defaults;
use nutype::nutype;

/// Number of posts to generate in one batch (0 to 10 000)
#[nutype(
    validate(less_or_equal = 10_000),
    derive(
        Debug,
        Clone,
        Copy,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        Serialize,
        Deserialize,
        Hash,
        Display
    )
)]
pub struct PostCount(usize);

impl PostCount {
    /// Empty batch
    pub fn zero() -> Self {
        Self::try_new(0).unwrap()
    }

    /// Startup batch size (50 posts)
    pub fn standard_batch() -> Self {
        Self::try_new(defaults::POST_COUNT).unwrap()
    }
}

/// Number of days to walk back from today (0 to 3650)
///
/// A series generated for `n` days holds `n + 1` points: today is included.
#[nutype(
    validate(greater_or_equal = 0, less_or_equal = 3650),
    derive(
        Debug,
        Clone,
        Copy,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        Serialize,
        Deserialize,
        Hash,
        Display
    )
)]
pub struct DaysBack(i64);

impl DaysBack {
    /// Today only
    pub fn today() -> Self {
        Self::try_new(0).unwrap()
    }

    /// Last week (7 days)
    pub fn week() -> Self {
        Self::try_new(7).unwrap()
    }

    /// Last month (30 days), the startup series length
    pub fn month() -> Self {
        Self::try_new(defaults::SENTIMENT_DAYS).unwrap()
    }

    /// Last quarter (90 days)
    pub fn quarter() -> Self {
        Self::try_new(90).unwrap()
    }

    /// Number of points a series covering this many days contains
    pub fn point_count(&self) -> usize {
        self.into_inner() as usize + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_count_validation() {
        assert!(PostCount::try_new(0).is_ok());
        assert!(PostCount::try_new(50).is_ok());
        assert!(PostCount::try_new(10_000).is_ok());
        assert!(PostCount::try_new(10_001).is_err());
    }

    #[test]
    fn test_days_back_validation() {
        assert!(DaysBack::try_new(0).is_ok());
        assert!(DaysBack::try_new(30).is_ok());
        assert!(DaysBack::try_new(3650).is_ok());
        assert!(DaysBack::try_new(-1).is_err());
        assert!(DaysBack::try_new(3651).is_err());
    }

    #[test]
    fn test_presets() {
        assert_eq!(PostCount::standard_batch().into_inner(), 50);
        assert_eq!(PostCount::zero().into_inner(), 0);
        assert_eq!(DaysBack::month().into_inner(), 30);
        assert_eq!(DaysBack::week().point_count(), 8);
        assert_eq!(DaysBack::today().point_count(), 1);
        assert_eq!(DaysBack::quarter().point_count(), 91);
    }
}
