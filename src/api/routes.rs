//! HTTP route handlers for Axum.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    Json,
};
use tracing::{debug, warn};

use crate::{
    api::types::{
        ErrorBody, MetricsRequest, MetricsResponse, SampleSizeQuery, SampleSizeResponse,
    },
    metrics::{compute_metrics, required_sample_size, ContingencyTable},
};

use super::AppState;

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<ErrorBody>)>;

fn reject(status: StatusCode, message: String) -> (StatusCode, Json<ErrorBody>) {
    warn!(%status, %message, "rejecting request");
    (status, Json(ErrorBody { error: message }))
}

pub async fn health() -> &'static str {
    "ok"
}

pub async fn compute(
    State(state): State<AppState>,
    body: Result<Json<MetricsRequest>, JsonRejection>,
) -> ApiResult<MetricsResponse> {
    let Json(request) = body.map_err(|e| reject(e.status(), e.body_text()))?;
    let table = ContingencyTable::new(request.a, request.b, request.c, request.d);
    let design = request.design.unwrap_or(state.settings.default_design);
    let goal = request.goal.unwrap_or(state.settings.default_goal);
    debug!(?table, %design, %goal, "computing metrics");
    let metrics = compute_metrics(&table, design, goal);
    Ok(Json(MetricsResponse {
        table,
        design,
        goal,
        metrics,
    }))
}

pub async fn sample_size(
    query: Result<Query<SampleSizeQuery>, QueryRejection>,
) -> ApiResult<SampleSizeResponse> {
    let Query(query) = query.map_err(|e| reject(StatusCode::BAD_REQUEST, e.body_text()))?;
    Ok(Json(SampleSizeResponse {
        per_group: required_sample_size(query.p1, query.p2),
    }))
}
