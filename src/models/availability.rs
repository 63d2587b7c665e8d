use serde::Serialize;

use crate::models::slot::ConsolidatedRange;

// Outcome of a single rule submission within one save operation
#[derive(Debug, Clone, Serialize)]
pub struct RuleSubmissionResult {
    pub range: ConsolidatedRange,
    pub status: RuleSubmissionStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RuleSubmissionStatus {
    /// The backend persisted the rule and returned its id.
    Created { rule_id: String },
    /// The submission was attempted and rejected or failed in transit.
    Failed { error: String },
    /// Never sent: the save was cancelled before this range's turn.
    Skipped,
}

// Aggregate result of saving a selection: one entry per consolidated range,
// in submission order
#[derive(Debug, Serialize)]
pub struct SaveOutcome {
    pub success: bool,
    pub message: String,
    pub rules_count: usize,
    pub rules: Vec<RuleSubmissionResult>,
}

impl SaveOutcome {
    pub fn created_count(&self) -> usize {
        self.rules
            .iter()
            .filter(|r| matches!(r.status, RuleSubmissionStatus::Created { .. }))
            .count()
    }

    pub fn failed_count(&self) -> usize {
        self.rules
            .iter()
            .filter(|r| matches!(r.status, RuleSubmissionStatus::Failed { .. }))
            .count()
    }

    pub fn skipped_count(&self) -> usize {
        self.rules
            .iter()
            .filter(|r| r.status == RuleSubmissionStatus::Skipped)
            .count()
    }
}
