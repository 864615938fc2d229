//! Daily time-series records for the trend charts

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Sentiment by affiliation on one calendar day
///
/// Values are rounded to two decimals but not clamped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentOverTime {
    pub date: NaiveDate,
    pub democrat: f64,
    pub republican: f64,
    pub independent: f64,
}

/// One day of a topic's mention volume
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendSample {
    pub date: NaiveDate,
    pub value: f64,
}

/// Mention-volume series for one topic, oldest first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicTrend {
    pub topic: String,
    pub data: Vec<TrendSample>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, day).unwrap()
    }

    #[test]
    fn test_dates_serialize_as_calendar_dates() {
        let point = SentimentOverTime {
            date: date(5),
            democrat: 0.42,
            republican: -0.1,
            independent: 0.0,
        };
        let json = serde_json::to_value(&point).unwrap();
        assert_eq!(json["date"], "2024-03-05");
        assert_eq!(json["democrat"], 0.42);
    }
}
