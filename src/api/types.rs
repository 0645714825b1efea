//! Request and response DTOs for the JSON API.

use serde::{Deserialize, Serialize};

use crate::metrics::{ContingencyTable, MetricsResult, StudyDesign, StudyGoal};

/// Body of `POST /metrics`. Unsigned cells reject negative or fractional counts.
#[derive(Debug, Clone, Deserialize)]
pub struct MetricsRequest {
    pub a: u64,
    pub b: u64,
    pub c: u64,
    pub d: u64,
    #[serde(default)]
    pub design: Option<StudyDesign>,
    #[serde(default)]
    pub goal: Option<StudyGoal>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MetricsResponse {
    pub table: ContingencyTable,
    pub design: StudyDesign,
    pub goal: StudyGoal,
    pub metrics: MetricsResult,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SampleSizeQuery {
    pub p1: f64,
    pub p2: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleSizeResponse {
    pub per_group: Option<u64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub error: String,
}
