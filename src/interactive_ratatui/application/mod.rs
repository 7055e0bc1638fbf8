pub mod admin_service;
pub mod notifier;

#[cfg(test)]
pub(crate) mod fake_api;

#[cfg(test)]
mod admin_service_test;
