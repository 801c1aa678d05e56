use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One completed survey submission. Constructed from validated form
/// state, persisted as an atomic unit, never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Response {
    pub id: Uuid,
    pub survey_id: String,
    pub team_name: String,
    /// 1-based sequence number, unique within a survey, assigned in
    /// submission order. Never reused, even across failed submissions.
    pub response_number: u32,
    /// Question key (or effectiveness sub-question key) to raw rating.
    pub ratings: BTreeMap<String, f64>,
    pub created_at: DateTime<Utc>,
}
