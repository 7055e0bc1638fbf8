#[cfg(test)]
mod tests {
    use super::super::admin_service::AdminService;
    use super::super::fake_api::FakeApi;
    use crate::interactive_ratatui::domain::models::{ApiCall, ApiOutcome, ApiRequest};
    use crate::schemas::PatternRecord;
    use std::sync::Arc;

    fn record(id: &str, name: &str) -> PatternRecord {
        PatternRecord {
            id: Some(id.to_string()),
            pattern_name: name.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_list_returns_records_with_request_id() {
        let api = Arc::new(FakeApi::with_records(vec![record("a", "Flag")]));
        let service = AdminService::new(api.clone());

        let response = service.handle(ApiRequest {
            id: 9,
            call: ApiCall::List,
        });

        assert_eq!(response.id, 9);
        assert_eq!(response.outcome, ApiOutcome::Listed(vec![record("a", "Flag")]));
        assert_eq!(api.calls(), vec!["list"]);
    }

    #[test]
    fn test_create_then_list() {
        let api = Arc::new(FakeApi::default());
        let service = AdminService::new(api.clone());

        let created = service.handle(ApiRequest {
            id: 1,
            call: ApiCall::Create(PatternRecord {
                pattern_name: "Wedge".to_string(),
                ..Default::default()
            }),
        });
        assert_eq!(created.outcome, ApiOutcome::Created);
        assert_eq!(api.records()[0].pattern_name, "Wedge");
    }

    #[test]
    fn test_failures_become_messages() {
        let api = Arc::new(FakeApi::with_records(vec![record("a", "Flag")]));
        api.fail_with(503);
        let service = AdminService::new(api.clone());

        let outcomes: Vec<ApiOutcome> = [
            ApiCall::Create(PatternRecord::default()),
            ApiCall::List,
            ApiCall::Update {
                id: "a".to_string(),
                record: PatternRecord::default(),
            },
            ApiCall::Delete {
                id: "a".to_string(),
            },
        ]
        .into_iter()
        .enumerate()
        .map(|(i, call)| {
            service
                .handle(ApiRequest {
                    id: i as u64,
                    call,
                })
                .outcome
        })
        .collect();

        let message = "Request failed with status code 503".to_string();
        assert_eq!(
            outcomes,
            vec![
                ApiOutcome::CreateFailed(message.clone()),
                ApiOutcome::ListFailed(message.clone()),
                ApiOutcome::UpdateFailed(message.clone()),
                ApiOutcome::DeleteFailed(message),
            ]
        );
        // Nothing was deleted
        assert_eq!(api.records().len(), 1);
    }

    #[test]
    fn test_update_unknown_id_reports_server_message() {
        let api = Arc::new(FakeApi::default());
        let service = AdminService::new(api);

        let response = service.handle(ApiRequest {
            id: 3,
            call: ApiCall::Update {
                id: "missing".to_string(),
                record: PatternRecord::default(),
            },
        });

        assert_eq!(
            response.outcome,
            ApiOutcome::UpdateFailed("Request failed with status code 404: Not found".to_string())
        );
    }

    #[test]
    fn test_delete_removes_record() {
        let api = Arc::new(FakeApi::with_records(vec![record("a", "Flag"), record("b", "Cup")]));
        let service = AdminService::new(api.clone());

        let response = service.handle(ApiRequest {
            id: 4,
            call: ApiCall::Delete {
                id: "a".to_string(),
            },
        });

        assert_eq!(response.outcome, ApiOutcome::Deleted);
        assert_eq!(api.records(), vec![record("b", "Cup")]);
    }
}
