//! JSON-file survey store: one record file per survey under a store
//! root. Writes go through a temp file and rename so a record is always
//! either the old or the new version, never a partial one.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::catalog::Catalog;
use crate::error::{Result, ScorecardError};
use crate::model::response::Response;
use crate::scoring::validate::validate_ratings;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurveyRecord {
    pub survey_id: String,
    pub team_name: String,
    /// High-water mark for response numbering. Bumped and persisted
    /// before the response itself is appended, so an interrupted
    /// submission leaves a gap in the sequence but never a reuse.
    pub last_response_number: u32,
    pub responses: Vec<Response>,
}

#[derive(Debug, Clone)]
pub struct SurveyListing {
    pub survey_id: String,
    pub team_name: String,
    pub n_responses: usize,
}

#[derive(Debug, Clone)]
pub struct Store {
    root: PathBuf,
}

impl Store {
    pub fn open(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn survey_path(&self, survey_id: &str) -> PathBuf {
        self.root.join(format!("{survey_id}.json"))
    }

    pub fn create_survey(&self, team_name: &str) -> Result<SurveyRecord> {
        let record = SurveyRecord {
            survey_id: Uuid::new_v4().to_string(),
            team_name: team_name.to_string(),
            last_response_number: 0,
            responses: Vec::new(),
        };
        let path = self.survey_path(&record.survey_id);
        if path.exists() {
            return Err(ScorecardError::SurveyExists {
                survey_id: record.survey_id.clone(),
            });
        }
        self.write_record(&record)?;
        debug!(survey_id = %record.survey_id, team = %record.team_name, "survey created");
        Ok(record)
    }

    /// Validate, number, and persist one submission as an atomic unit.
    /// The response number is reserved in a first write and the response
    /// body appended in a second, honoring the never-reuse contract.
    pub fn insert_response(
        &self,
        catalog: &Catalog,
        survey_id: &str,
        ratings: BTreeMap<String, f64>,
    ) -> Result<Response> {
        validate_ratings(catalog, &ratings)?;

        let mut record = self.load_survey(survey_id)?;
        record.last_response_number += 1;
        let response_number = record.last_response_number;
        self.write_record(&record)?;

        let response = Response {
            id: Uuid::new_v4(),
            survey_id: record.survey_id.clone(),
            team_name: record.team_name.clone(),
            response_number,
            ratings,
            created_at: Utc::now(),
        };
        record.responses.push(response.clone());
        self.write_record(&record)?;

        debug!(survey_id, response_number, "response inserted");
        Ok(response)
    }

    /// Load a survey with responses ordered by response number ascending.
    pub fn load_survey(&self, survey_id: &str) -> Result<SurveyRecord> {
        let path = self.survey_path(survey_id);
        if !path.exists() {
            return Err(ScorecardError::SurveyNotFound {
                survey_id: survey_id.to_string(),
            });
        }
        let contents = fs::read_to_string(&path)?;
        let mut record: SurveyRecord = serde_json::from_str(&contents)?;
        record
            .responses
            .sort_by_key(|r| r.response_number);
        Ok(record)
    }

    pub fn list_surveys(&self) -> Result<Vec<SurveyListing>> {
        let mut out = Vec::new();
        if !self.root.exists() {
            return Ok(out);
        }
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let contents = fs::read_to_string(&path)?;
            let record: SurveyRecord = serde_json::from_str(&contents)?;
            out.push(SurveyListing {
                survey_id: record.survey_id,
                team_name: record.team_name,
                n_responses: record.responses.len(),
            });
        }
        out.sort_by(|a, b| a.survey_id.cmp(&b.survey_id));
        Ok(out)
    }

    fn write_record(&self, record: &SurveyRecord) -> Result<()> {
        fs::create_dir_all(&self.root)?;
        let path = self.survey_path(&record.survey_id);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_string_pretty(record)?)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/store/tests.rs"]
mod tests;
