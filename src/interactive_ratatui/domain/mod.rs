pub mod models;
pub mod pattern_form;
