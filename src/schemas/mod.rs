pub mod pattern_record;

#[cfg(test)]
mod pattern_record_test;

pub use pattern_record::{
    ListEnvelope, PatternRecord, PracticeQuestion, RichTextField, ScalarField, join_options,
    split_options,
};
