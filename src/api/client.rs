use super::error::{ApiError, ApiResult};
use crate::schemas::{ListEnvelope, PatternRecord};
use reqwest::Url;
use reqwest::blocking::{Client, Response};
use serde_json::Value;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://stage.api.tradexpert.ai";

const ADMIN_LEARNING_PATH: &str = "/api/v1/admin/learning";
const USER_LEARNING_PATH: &str = "/api/v1/user/learning";

/// The four calls the console makes against the learning admin API.
///
/// Implementations block the calling thread; the console only ever calls
/// them from its request worker.
pub trait AdminApi: Send + Sync {
    fn create_record(&self, record: &PatternRecord) -> ApiResult<()>;
    fn list_records(&self) -> ApiResult<Vec<PatternRecord>>;
    /// Full replace: `record` is sent whole, never as a patch.
    fn update_record(&self, id: &str, record: &PatternRecord) -> ApiResult<()>;
    fn delete_record(&self, id: &str) -> ApiResult<()>;
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    /// `None` waits for the server indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: None,
        }
    }
}

pub struct HttpAdminApi {
    base_url: String,
    client: Client,
}

impl HttpAdminApi {
    pub fn new(config: &ApiConfig) -> ApiResult<Self> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        Url::parse(&base_url).map_err(|e| ApiError::InvalidUrl(format!("{base_url}: {e}")))?;

        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self, path: &str) -> ApiResult<Url> {
        Url::parse(&format!("{}{}", self.base_url, path))
            .map_err(|e| ApiError::InvalidUrl(e.to_string()))
    }

    fn item_url(&self, id: &str) -> ApiResult<Url> {
        if id.trim().is_empty() {
            return Err(ApiError::MissingId);
        }

        let mut url = self.collection_url(ADMIN_LEARNING_PATH)?;
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(self.base_url.clone()))?
            .push(id);
        Ok(url)
    }
}

impl AdminApi for HttpAdminApi {
    fn create_record(&self, record: &PatternRecord) -> ApiResult<()> {
        let url = self.collection_url(ADMIN_LEARNING_PATH)?;
        tracing::debug!(%url, pattern = %record.pattern_name, "POST learning record");

        let response = self.client.post(url).json(record).send()?;
        read_success_body(response)?;
        Ok(())
    }

    fn list_records(&self) -> ApiResult<Vec<PatternRecord>> {
        let url = self.collection_url(USER_LEARNING_PATH)?;
        tracing::debug!(%url, "GET learning records");

        let response = self.client.get(url).send()?;
        let body = read_success_body(response)?;
        let envelope: ListEnvelope = serde_json::from_str(&body)?;
        Ok(envelope.data)
    }

    fn update_record(&self, id: &str, record: &PatternRecord) -> ApiResult<()> {
        let url = self.item_url(id)?;
        tracing::debug!(%url, "PUT learning record");

        let response = self.client.put(url).json(record).send()?;
        read_success_body(response)?;
        Ok(())
    }

    fn delete_record(&self, id: &str) -> ApiResult<()> {
        let url = self.item_url(id)?;
        tracing::debug!(%url, "DELETE learning record");

        let response = self.client.delete(url).send()?;
        read_success_body(response)?;
        Ok(())
    }
}

fn read_success_body(response: Response) -> ApiResult<String> {
    let status = response.status();
    let body = response.text()?;

    if status.is_success() {
        Ok(body)
    } else {
        Err(ApiError::Status {
            status: status.as_u16(),
            message: server_message(&body),
        })
    }
}

/// Pull the `message` field out of an error envelope, if the body has one.
fn server_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
}
