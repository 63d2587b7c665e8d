//! ScheduleHub Availability Core
//!
//! This library implements the slot-selection and range-consolidation logic
//! behind the ScheduleHub availability calendar, plus the client for the
//! availability API it persists to. A selection of 30-minute grid cells is
//! consolidated into minimal contiguous time ranges, each of which becomes
//! one recurring availability rule submission.
//!
//! # Modules
//!
//! - `services::selection`: in-progress slot selection and drag gestures
//! - `services::consolidate`: merging selected slots into maximal ranges
//! - `services::rules`: building and serially submitting availability rules
//! - `services::overlay`: mapping persisted rules back onto grid cells
//! - `client`: ScheduleHubClient for availability API operations
//! - `auth`: request signing for the ScheduleHub platform API
//!
//! # Authentication
//!
//! API requests are signed with HMAC-SHA256 over the method, canonical
//! headers, URI, and body, using a key id/secret pair from the environment.
//! The signing logic is encapsulated in the `auth` module.

pub mod auth;
pub mod client;
pub mod models;
pub mod services;

#[cfg(test)]
pub mod client_mock;
#[cfg(test)]
pub(crate) mod test_utils;

// Re-export the main API types for ease of use
pub use auth::ScheduleHubAuth;
pub use client::{
    ApiError, AvailabilityApi, AvailabilityListResponse, AvailabilityRecord,
    CreateAvailabilityRequest, ScheduleHubClient,
};
pub use models::availability::{RuleSubmissionResult, RuleSubmissionStatus, SaveOutcome};
pub use models::slot::{ConsolidatedRange, DaySlotIndex, TimeSlot};
pub use services::consolidate::consolidate;
pub use services::rules::{save_selection, SaveCancellation};
pub use services::selection::{DragGesture, SlotSelection};
