//! Request handlers over the shared dataset

use crate::analytics::{DashboardSummary, PostFilter};
use crate::api::{constants::query, error_response::ApiError, ApiState};
use crate::domain::{
    entities::{Candidate, Topic},
    post::SocialMediaPost,
    prediction::{ApprovalPrediction, ElectionPrediction},
    time_series::{SentimentOverTime, TopicTrend},
};
use crate::error::Error;
use axum::{
    extract::{Query, State},
    http::HeaderMap,
    Json,
};
use serde::Deserialize;

/// Raw query of the posts endpoint; values are validated by the handler
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostsQuery {
    pub platform: Option<String>,
    pub topic: Option<String>,
    pub time_range: Option<String>,
    pub limit: Option<String>,
}

impl PostsQuery {
    fn filter(&self) -> Result<PostFilter, Error> {
        let platform = self.platform.as_deref();
        let topic = self.topic.as_deref();
        let time_range = self.time_range.as_deref();

        PostFilter::from_selection(platform, topic, time_range).map_err(|e| {
            let field = if e.kind == "platform" {
                query::PLATFORM
            } else {
                query::TIME_RANGE
            };
            Error::unknown_variant(field, e)
        })
    }

    fn limit(&self) -> Result<Option<usize>, Error> {
        self.limit
            .as_deref()
            .map(|raw| {
                raw.trim().parse::<usize>().map_err(|_| {
                    Error::invalid_input(
                        query::LIMIT,
                        format!("'{raw}' is not a non-negative integer"),
                    )
                })
            })
            .transpose()
    }
}

pub async fn health() -> &'static str {
    "OK"
}

pub async fn candidates(State(state): State<ApiState>) -> Json<Vec<Candidate>> {
    Json(state.dataset.candidates().to_vec())
}

pub async fn topics(State(state): State<ApiState>) -> Json<Vec<Topic>> {
    Json(state.dataset.topics().to_vec())
}

/// Posts matching the query, in generation order, truncated to `limit`
pub async fn posts(
    State(state): State<ApiState>,
    headers: HeaderMap,
    Query(params): Query<PostsQuery>,
) -> Result<Json<Vec<SocialMediaPost>>, ApiError> {
    let filter = params.filter().map_err(|e| ApiError::new(e, &headers))?;
    let limit = params.limit().map_err(|e| ApiError::new(e, &headers))?;

    let dataset = &state.dataset;
    let matching = filter.apply(dataset.social_media_posts(), dataset.generated_at());
    let take = limit.unwrap_or(matching.len());

    Ok(Json(matching.into_iter().take(take).cloned().collect()))
}

pub async fn sentiment_over_time(State(state): State<ApiState>) -> Json<Vec<SentimentOverTime>> {
    Json(state.dataset.sentiment_time_data().to_vec())
}

pub async fn topic_trends(State(state): State<ApiState>) -> Json<Vec<TopicTrend>> {
    Json(state.dataset.topic_trends().to_vec())
}

pub async fn election_prediction(State(state): State<ApiState>) -> Json<ElectionPrediction> {
    Json(state.dataset.election_prediction().clone())
}

/// Fresh forecast on every call
pub async fn approval_predictions(State(state): State<ApiState>) -> Json<Vec<ApprovalPrediction>> {
    let forecast = {
        let mut rng = state.forecast_rng.lock();
        state.dataset.predicted_approval_ratings(&mut *rng)
    };
    Json(forecast)
}

pub async fn summary(State(state): State<ApiState>) -> Json<DashboardSummary> {
    Json(state.dataset.summary())
}
