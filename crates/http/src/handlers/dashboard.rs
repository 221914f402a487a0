use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};

use hubstats_core::{
    ContentTypeStats, DashboardOverview, GroupActivityStats, TimeBucketStats, UserStorageStats,
};

use crate::AppState;
use crate::api_error::ApiError;
use crate::query_types::{ListingQuery, TimeSeriesQuery};

pub async fn overview(
    State(state): State<Arc<AppState>>,
) -> Result<Json<DashboardOverview>, ApiError> {
    let overview = state
        .dashboard
        .overview()
        .await
        .map_err(|e| ApiError::op("dashboard overview", e))?;
    Ok(Json(overview))
}

pub async fn users_storage(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListingQuery>,
) -> Result<Json<Vec<UserStorageStats>>, ApiError> {
    let stats = state
        .dashboard
        .users_storage(Some(query.capped_limit()))
        .await
        .map_err(|e| ApiError::op("users storage listing", e))?;
    Ok(Json(stats))
}

pub async fn groups_activity(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListingQuery>,
) -> Result<Json<Vec<GroupActivityStats>>, ApiError> {
    let stats = state
        .dashboard
        .groups_activity(Some(query.capped_limit()))
        .await
        .map_err(|e| ApiError::op("groups activity listing", e))?;
    Ok(Json(stats))
}

pub async fn content_types(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ContentTypeStats>>, ApiError> {
    let stats = state
        .dashboard
        .content_types()
        .await
        .map_err(|e| ApiError::op("content type breakdown", e))?;
    Ok(Json(stats))
}

pub async fn time_series(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TimeSeriesQuery>,
) -> Result<Json<Vec<TimeBucketStats>>, ApiError> {
    let buckets = state
        .dashboard
        .time_series(&query.period)
        .await
        .map_err(|e| ApiError::op("time series", e))?;
    Ok(Json(buckets))
}
