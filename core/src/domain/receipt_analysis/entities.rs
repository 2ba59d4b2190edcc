use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::receipt_analysis::value_objects::ScoreBand;

/// Fields the model must always return; everything else is optional.
pub const REQUIRED_FIELDS: &[&str] = &["score", "dominant_category"];

/// Carbon-footprint assessment recovered from one model reply.
///
/// Deserialization is deliberately lenient: beyond the required fields the
/// model may omit anything, and unknown extra fields are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AnalysisRecord {
    pub score: f64,
    pub dominant_category: String,
    #[serde(default)]
    pub item_detail: Option<String>,
    #[serde(default)]
    pub score_breakdown: Option<ScoreBreakdown>,
    #[serde(default)]
    pub insights: Vec<String>,
    #[serde(default)]
    pub alternatives: Vec<Alternative>,
    #[serde(default)]
    pub environmental_fact: Option<String>,
    #[serde(default)]
    pub estimated_emission_kg_co2: Option<f64>,
    #[serde(default)]
    pub comparison: Option<String>,
}

/// Per-category score contributions, fixed category set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ScoreBreakdown {
    #[serde(default)]
    pub red_meat: f64,
    #[serde(default)]
    pub white_meat: f64,
    #[serde(default)]
    pub dairy: f64,
    #[serde(default)]
    pub processed_food: f64,
    #[serde(default)]
    pub plastic_packaging: f64,
    #[serde(default)]
    pub produce: f64,
    #[serde(default)]
    pub organic: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Alternative {
    #[serde(default)]
    pub item: String,
    #[serde(default)]
    pub replacement: String,
    #[serde(default)]
    pub reason: String,
}

/// One analysis exchange: the validated record plus presentation metadata.
/// Never persisted; discarded once rendered by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ReceiptAnalysisOutcome {
    pub record: AnalysisRecord,
    pub band: ScoreBand,
    pub model: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_response: Option<String>,
    pub analyzed_at: DateTime<Utc>,
}
