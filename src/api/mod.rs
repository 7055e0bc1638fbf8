//! Blocking client for the learning admin API.

pub mod client;
pub mod error;


pub use client::{AdminApi, ApiConfig, DEFAULT_API_URL, HttpAdminApi};
pub use error::{ApiError, ApiResult};
