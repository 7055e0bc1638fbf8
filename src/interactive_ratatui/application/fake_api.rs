//! In-memory `AdminApi` used by the console and service tests.

use crate::api::{AdminApi, ApiError, ApiResult};
use crate::schemas::PatternRecord;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Condvar, Mutex};

#[derive(Default)]
pub struct FakeApi {
    records: Mutex<Vec<PatternRecord>>,
    calls: Mutex<Vec<String>>,
    next_id: AtomicUsize,
    fail_with_status: Mutex<Option<u16>>,
    held: AtomicBool,
    held_call: Mutex<Option<String>>,
    gate: (Mutex<bool>, Condvar),
}

impl FakeApi {
    pub fn with_records(records: Vec<PatternRecord>) -> Self {
        let api = Self::default();
        *api.records.lock().unwrap() = records;
        api
    }

    /// Make every following call fail with this HTTP status.
    pub fn fail_with(&self, status: u16) {
        *self.fail_with_status.lock().unwrap() = Some(status);
    }

    pub fn succeed(&self) {
        *self.fail_with_status.lock().unwrap() = None;
    }

    /// Park calls until `release` is called.
    pub fn hold(&self) {
        self.held.store(true, Ordering::SeqCst);
        *self.gate.0.lock().unwrap() = false;
    }

    /// Park only calls named `call` until `release` is called.
    pub fn hold_call(&self, call: &str) {
        *self.held_call.lock().unwrap() = Some(call.to_string());
        *self.gate.0.lock().unwrap() = false;
    }

    pub fn release(&self) {
        self.held.store(false, Ordering::SeqCst);
        *self.held_call.lock().unwrap() = None;
        *self.gate.0.lock().unwrap() = true;
        self.gate.1.notify_all();
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, call: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.as_str() == call)
            .count()
    }

    pub fn records(&self) -> Vec<PatternRecord> {
        self.records.lock().unwrap().clone()
    }

    fn enter(&self, call: &str) -> ApiResult<()> {
        self.calls.lock().unwrap().push(call.to_string());

        let held = self.held.load(Ordering::SeqCst)
            || self.held_call.lock().unwrap().as_deref() == Some(call);
        if held {
            let mut open = self.gate.0.lock().unwrap();
            while !*open {
                open = self.gate.1.wait(open).unwrap();
            }
        }

        match *self.fail_with_status.lock().unwrap() {
            Some(status) => Err(ApiError::Status {
                status,
                message: None,
            }),
            None => Ok(()),
        }
    }
}

impl AdminApi for FakeApi {
    fn create_record(&self, record: &PatternRecord) -> ApiResult<()> {
        self.enter("create")?;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let mut stored = record.clone();
        stored.id = Some(format!("fake-{id}"));
        self.records.lock().unwrap().push(stored);
        Ok(())
    }

    fn list_records(&self) -> ApiResult<Vec<PatternRecord>> {
        self.enter("list")?;
        Ok(self.records())
    }

    fn update_record(&self, id: &str, record: &PatternRecord) -> ApiResult<()> {
        self.enter("update")?;
        let mut records = self.records.lock().unwrap();
        match records.iter_mut().find(|r| r.id.as_deref() == Some(id)) {
            Some(existing) => {
                *existing = record.clone();
                existing.id = Some(id.to_string());
                Ok(())
            }
            None => Err(ApiError::Status {
                status: 404,
                message: Some("Not found".to_string()),
            }),
        }
    }

    fn delete_record(&self, id: &str) -> ApiResult<()> {
        self.enter("delete")?;
        self.records
            .lock()
            .unwrap()
            .retain(|r| r.id.as_deref() != Some(id));
        Ok(())
    }
}
