use crate::schemas::PatternRecord;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Mode {
    Landing,
    Create,
    Manage,
    EditModal,
    DeleteModal,
    Help,
}

/// Which of the two pattern forms an edit belongs to.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FormTarget {
    Create,
    Edit,
}

/// Lifecycle of the create form's submit control.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SubmitStatus {
    Idle,
    Submitting,
    /// Save succeeded; the control stays disabled for the display window.
    Saved,
}

impl SubmitStatus {
    pub fn accepts_submit(self) -> bool {
        self == SubmitStatus::Idle
    }
}

// Request and response for the background API worker
#[derive(Clone, Debug, PartialEq)]
pub enum ApiCall {
    Create(PatternRecord),
    List,
    Update { id: String, record: PatternRecord },
    Delete { id: String },
}

impl ApiCall {
    pub fn name(&self) -> &'static str {
        match self {
            ApiCall::Create(_) => "create",
            ApiCall::List => "list",
            ApiCall::Update { .. } => "update",
            ApiCall::Delete { .. } => "delete",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub id: u64,
    pub call: ApiCall,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ApiOutcome {
    Created,
    Listed(Vec<PatternRecord>),
    Updated,
    Deleted,
    CreateFailed(String),
    ListFailed(String),
    UpdateFailed(String),
    DeleteFailed(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ApiResponse {
    pub id: u64,
    pub outcome: ApiOutcome,
}
