use crate::schemas::{
    PatternRecord, PracticeQuestion, RichTextField, ScalarField, join_options, split_options,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PracticeField {
    Question,
    Options,
    CorrectAnswer,
    Explanation,
}

impl PracticeField {
    pub const ALL: [PracticeField; 4] = [
        PracticeField::Question,
        PracticeField::Options,
        PracticeField::CorrectAnswer,
        PracticeField::Explanation,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PracticeField::Question => "Question",
            PracticeField::Options => "Options (comma-separated)",
            PracticeField::CorrectAnswer => "Correct Answer",
            PracticeField::Explanation => "Explanation",
        }
    }
}

/// Addresses one editable input of the pattern form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldId {
    Scalar(ScalarField),
    RichText(RichTextField),
    Practice(usize, PracticeField),
}

impl FieldId {
    pub fn label(self) -> &'static str {
        match self {
            FieldId::Scalar(field) => field.label(),
            FieldId::RichText(field) => field.label(),
            FieldId::Practice(_, field) => field.label(),
        }
    }

    pub fn practice_index(self) -> Option<usize> {
        match self {
            FieldId::Practice(index, _) => Some(index),
            _ => None,
        }
    }
}

/// Editing state shared by the create screen and the edit modal.
///
/// Wraps the record being built; `practices` is the ordered list the
/// add/remove actions operate on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatternForm {
    record: PatternRecord,
}

impl Default for PatternForm {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternForm {
    /// Blank form holding one empty practice question.
    pub fn new() -> Self {
        Self {
            record: PatternRecord {
                practices: vec![PracticeQuestion::default()],
                ..Default::default()
            },
        }
    }

    /// Seed a form from a fetched record. A record without practice questions
    /// gets one blank question so there is always something to edit.
    pub fn from_record(record: &PatternRecord) -> Self {
        let mut record = record.clone();
        if record.practices.is_empty() {
            record.practices.push(PracticeQuestion::default());
        }
        Self { record }
    }

    pub fn record(&self) -> &PatternRecord {
        &self.record
    }

    /// The complete record to send; includes the identifier when editing.
    pub fn to_record(&self) -> PatternRecord {
        self.record.clone()
    }

    pub fn practices(&self) -> &[PracticeQuestion] {
        &self.record.practices
    }

    pub fn value(&self, field: FieldId) -> String {
        match field {
            FieldId::Scalar(field) => self.record.scalar(field).to_string(),
            FieldId::RichText(field) => self.record.rich_text(field).to_string(),
            FieldId::Practice(index, field) => self
                .record
                .practices
                .get(index)
                .map(|practice| match field {
                    PracticeField::Question => practice.question.clone(),
                    PracticeField::Options => join_options(&practice.options),
                    PracticeField::CorrectAnswer => practice.correct_answer.clone(),
                    PracticeField::Explanation => practice.explanation.clone(),
                })
                .unwrap_or_default(),
        }
    }

    /// Store a new value. Options text is re-split on every change.
    /// Returns false when the field does not exist (stale practice index).
    pub fn set_value(&mut self, field: FieldId, value: String) -> bool {
        match field {
            FieldId::Scalar(field) => *self.record.scalar_mut(field) = value,
            FieldId::RichText(field) => *self.record.rich_text_mut(field) = value,
            FieldId::Practice(index, field) => {
                let Some(practice) = self.record.practices.get_mut(index) else {
                    return false;
                };
                match field {
                    PracticeField::Question => practice.question = value,
                    PracticeField::Options => practice.options = split_options(&value),
                    PracticeField::CorrectAnswer => practice.correct_answer = value,
                    PracticeField::Explanation => practice.explanation = value,
                }
            }
        }
        true
    }

    pub fn add_practice(&mut self) -> usize {
        self.record.practices.push(PracticeQuestion::default());
        self.record.practices.len() - 1
    }

    /// Remove the question at `index`; later questions shift down by one.
    pub fn remove_practice(&mut self, index: usize) -> Option<PracticeQuestion> {
        if index < self.record.practices.len() {
            Some(self.record.practices.remove(index))
        } else {
            None
        }
    }

    /// Every input in display order: scalars, rich text, then each question.
    pub fn field_ids(&self) -> Vec<FieldId> {
        let mut ids: Vec<FieldId> = ScalarField::ALL.into_iter().map(FieldId::Scalar).collect();
        ids.extend(RichTextField::ALL.into_iter().map(FieldId::RichText));
        for index in 0..self.record.practices.len() {
            ids.extend(
                PracticeField::ALL
                    .into_iter()
                    .map(|field| FieldId::Practice(index, field)),
            );
        }
        ids
    }

    /// Scalar fields left empty, in display order.
    pub fn missing_required(&self) -> Vec<ScalarField> {
        ScalarField::ALL
            .into_iter()
            .filter(|field| self.record.scalar(*field).is_empty())
            .collect()
    }
}
