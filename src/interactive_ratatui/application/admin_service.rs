use crate::api::{AdminApi, ApiError};
use crate::interactive_ratatui::domain::models::{ApiCall, ApiOutcome, ApiRequest, ApiResponse};
use std::sync::Arc;

/// Runs queued API calls and turns their results into UI outcomes.
///
/// Failures are logged here and reduced to their message; the screens only
/// ever see text for a notification.
pub struct AdminService {
    api: Arc<dyn AdminApi>,
}

impl AdminService {
    pub fn new(api: Arc<dyn AdminApi>) -> Self {
        Self { api }
    }

    pub fn handle(&self, request: ApiRequest) -> ApiResponse {
        let call_name = request.call.name();
        let outcome = match request.call {
            ApiCall::Create(record) => match self.api.create_record(&record) {
                Ok(()) => ApiOutcome::Created,
                Err(e) => ApiOutcome::CreateFailed(log_failure(call_name, &e)),
            },
            ApiCall::List => match self.api.list_records() {
                Ok(records) => {
                    tracing::info!(count = records.len(), "fetched learning records");
                    ApiOutcome::Listed(records)
                }
                Err(e) => ApiOutcome::ListFailed(log_failure(call_name, &e)),
            },
            ApiCall::Update { id, record } => match self.api.update_record(&id, &record) {
                Ok(()) => ApiOutcome::Updated,
                Err(e) => ApiOutcome::UpdateFailed(log_failure(call_name, &e)),
            },
            ApiCall::Delete { id } => match self.api.delete_record(&id) {
                Ok(()) => ApiOutcome::Deleted,
                Err(e) => ApiOutcome::DeleteFailed(log_failure(call_name, &e)),
            },
        };

        if !is_failure(&outcome) {
            tracing::info!(request_id = request.id, call = call_name, "request completed");
        }

        ApiResponse {
            id: request.id,
            outcome,
        }
    }
}

fn log_failure(call: &str, error: &ApiError) -> String {
    tracing::error!(call, %error, "request failed");
    error.to_string()
}

fn is_failure(outcome: &ApiOutcome) -> bool {
    matches!(
        outcome,
        ApiOutcome::CreateFailed(_)
            | ApiOutcome::ListFailed(_)
            | ApiOutcome::UpdateFailed(_)
            | ApiOutcome::DeleteFailed(_)
    )
}
