use async_trait::async_trait;
use chrono::NaiveDate;
use mockall::mock;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::client::{
    ApiError, AvailabilityApi, AvailabilityListResponse, AvailabilityRecord,
    AvailabilityType, CreateAvailabilityRequest, RulePriority,
};

// Define a mock client for the availability API
mock! {
    pub ScheduleHubClient {}

    #[async_trait]
    impl AvailabilityApi for ScheduleHubClient {
        async fn create_availability(
            &self,
            request: &CreateAvailabilityRequest,
        ) -> Result<AvailabilityRecord, ApiError>;

        async fn list_availability(
            &self,
            worker_id: &str,
            start_date: NaiveDate,
            end_date: NaiveDate,
        ) -> Result<AvailabilityListResponse, ApiError>;
    }
}

// A simple in-memory store backing the mock client
pub struct MockRuleStore {
    rules: Mutex<HashMap<String, AvailabilityRecord>>,
}

impl MockRuleStore {
    pub fn new() -> Self {
        Self {
            rules: Mutex::new(HashMap::new()),
        }
    }

    pub fn store_rule(&self, rule: AvailabilityRecord) {
        let mut rules = self.rules.lock().unwrap();
        rules.insert(rule.id.clone(), rule);
    }

    pub fn rule_count(&self) -> usize {
        self.rules.lock().unwrap().len()
    }

    pub fn rules_for_worker(&self, worker_id: &str) -> Vec<AvailabilityRecord> {
        let rules = self.rules.lock().unwrap();
        let mut matching: Vec<AvailabilityRecord> = rules
            .values()
            .filter(|r| r.worker_id == worker_id)
            .cloned()
            .collect();
        matching.sort_by(|a, b| a.id.cmp(&b.id));
        matching
    }
}

fn wire_availability_type(value: AvailabilityType) -> String {
    match value {
        AvailabilityType::Recurring => "recurring".to_string(),
        AvailabilityType::OneTime => "one_time".to_string(),
    }
}

fn wire_priority(value: RulePriority) -> String {
    match value {
        RulePriority::Preferred => "preferred".to_string(),
        RulePriority::Required => "required".to_string(),
    }
}

// Helper function to set up a mock client with predefined behavior
pub fn setup_mock_api() -> (MockScheduleHubClient, Arc<MockRuleStore>) {
    let store = Arc::new(MockRuleStore::new());
    let store_clone = Arc::clone(&store);

    let mut mock_client = MockScheduleHubClient::default();

    // Mock create_availability: persist the rule and echo it back with an id
    let store_ref1 = Arc::clone(&store);
    mock_client
        .expect_create_availability()
        .returning(move |request| {
            let rule_id = format!("rule_{}", rand::random::<u32>());

            let record = AvailabilityRecord {
                id: rule_id.clone(),
                worker_id: request.worker_id.clone(),
                availability_type: wire_availability_type(request.availability_type),
                day_of_week: Some(request.day_of_week),
                specific_date: None,
                start_time: request.start_time.clone(),
                end_time: request.end_time.clone(),
                priority: wire_priority(request.priority),
            };

            store_ref1.store_rule(record.clone());
            Ok(record)
        });

    // Mock list_availability: return whatever the store holds for the worker
    let store_ref2 = Arc::clone(&store);
    mock_client
        .expect_list_availability()
        .returning(move |worker_id, _start_date, _end_date| {
            let rules = store_ref2.rules_for_worker(worker_id);
            Ok(AvailabilityListResponse {
                total_count: rules.len() as i32,
                rules,
            })
        });

    (mock_client, store_clone)
}
