use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::client::{AvailabilityApi, AvailabilityType, CreateAvailabilityRequest, RulePriority};
use crate::models::availability::{RuleSubmissionResult, RuleSubmissionStatus, SaveOutcome};
use crate::models::slot::ConsolidatedRange;
use crate::services::consolidate::consolidate;
use crate::services::selection::SlotSelection;

/// Handle for abandoning a save in progress.
///
/// Checked before each submission; a request already in flight completes
/// regardless, and every range not yet submitted is reported as skipped.
#[derive(Debug, Clone, Default)]
pub struct SaveCancellation(Arc<AtomicBool>);

impl SaveCancellation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Build the creation payload for one consolidated range.
///
/// The rule is always recurring with the default priority; `day_of_week`
/// uses the backend's fixed 0=Sunday..6=Saturday numbering.
pub fn build_rule_request(range: &ConsolidatedRange, worker_id: &str) -> CreateAvailabilityRequest {
    CreateAvailabilityRequest {
        worker_id: worker_id.to_string(),
        availability_type: AvailabilityType::Recurring,
        day_of_week: range.day_of_week(),
        start_time: range.start_time(),
        end_time: range.end_time(),
        priority: RulePriority::Preferred,
    }
}

/// Build one creation payload per range, in the ranges' order.
pub fn build_rule_requests(
    ranges: &[ConsolidatedRange],
    worker_id: &str,
) -> Vec<CreateAvailabilityRequest> {
    ranges
        .iter()
        .map(|range| build_rule_request(range, worker_id))
        .collect()
}

/// Submit one rule per range, serially, in range order.
///
/// Submissions are best-effort: a failed submission is recorded in the
/// outcome and the remaining ranges are still attempted. There is no
/// rollback; the outcome lists exactly which rules were persisted so the
/// caller can report partial failure.
pub async fn submit_rules(
    api: &impl AvailabilityApi,
    ranges: &[ConsolidatedRange],
    worker_id: &str,
    cancel: &SaveCancellation,
) -> SaveOutcome {
    let mut results = Vec::with_capacity(ranges.len());

    for range in ranges {
        if cancel.is_cancelled() {
            warn!(
                "Save cancelled; skipping remaining submission for {} {}-{}",
                range.date,
                range.start_time(),
                range.end_time()
            );
            results.push(RuleSubmissionResult {
                range: *range,
                status: RuleSubmissionStatus::Skipped,
            });
            continue;
        }

        let request = build_rule_request(range, worker_id);

        info!(
            "Submitting availability rule for worker {} on {}: {}-{}",
            worker_id,
            range.date,
            request.start_time,
            request.end_time
        );

        match api.create_availability(&request).await {
            Ok(record) => {
                info!("Successfully created availability rule {}", record.id);
                results.push(RuleSubmissionResult {
                    range: *range,
                    status: RuleSubmissionStatus::Created { rule_id: record.id },
                });
            }
            Err(err) => {
                error!("Failed to create availability rule: {}", err);
                results.push(RuleSubmissionResult {
                    range: *range,
                    status: RuleSubmissionStatus::Failed {
                        error: err.to_string(),
                    },
                });
            }
        }
    }

    let outcome = SaveOutcome {
        success: false,
        message: String::new(),
        rules_count: results.len(),
        rules: results,
    };
    finish_outcome(outcome, ranges.len())
}

fn finish_outcome(mut outcome: SaveOutcome, total: usize) -> SaveOutcome {
    let created = outcome.created_count();
    let skipped = outcome.skipped_count();

    outcome.success = created == total;
    outcome.message = if skipped > 0 {
        format!(
            "Saved {} of {} availability rules ({} skipped after cancellation)",
            created, total, skipped
        )
    } else {
        format!("Saved {} of {} availability rules", created, total)
    };

    outcome
}

/// Full save pipeline: consolidate the selection, build one rule per range,
/// submit serially. The caller clears the selection on success.
pub async fn save_selection(
    api: &impl AvailabilityApi,
    selection: &SlotSelection,
    worker_id: &str,
    cancel: &SaveCancellation,
) -> SaveOutcome {
    let ranges = consolidate(selection);

    info!(
        "Saving selection of {} cells as {} availability rules",
        selection.len(),
        ranges.len()
    );

    submit_rules(api, &ranges, worker_id, cancel).await
}
