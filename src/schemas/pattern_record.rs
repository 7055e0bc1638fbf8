use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One learning entry describing a chart pattern, as exchanged with the admin API.
///
/// Every field decodes to its empty default when the server omits it or sends
/// `null`, so a partially filled record can still be edited and written back in full.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternRecord {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    // Scalar attributes
    #[serde(deserialize_with = "string_or_number")]
    pub pattern_name: String,
    #[serde(deserialize_with = "string_or_number")]
    pub pattern_type: String,
    #[serde(deserialize_with = "string_or_number")]
    pub reliability_score: String,
    #[serde(deserialize_with = "string_or_number")]
    pub experience: String,
    #[serde(deserialize_with = "string_or_number")]
    pub best_used: String,

    // Rich-text (HTML) attributes
    #[serde(deserialize_with = "null_as_default")]
    pub introduction: String,
    #[serde(deserialize_with = "null_as_default")]
    pub what_is_it: String,
    #[serde(deserialize_with = "null_as_default")]
    pub what_does_it_matter: String,
    #[serde(deserialize_with = "null_as_default")]
    pub types_of_pattern: String,
    #[serde(deserialize_with = "null_as_default")]
    pub market_psychology: String,
    #[serde(deserialize_with = "null_as_default")]
    pub why_is_it_named: String,
    #[serde(deserialize_with = "null_as_default")]
    pub how_strong_is_this_pattern: String,
    #[serde(deserialize_with = "null_as_default")]
    pub indicators: String,
    #[serde(deserialize_with = "null_as_default")]
    pub mistakes_to_avoid: String,
    #[serde(deserialize_with = "null_as_default")]
    pub final_tips: String,
    #[serde(deserialize_with = "null_as_default")]
    pub example_work: String,
    #[serde(deserialize_with = "null_as_default")]
    pub example_fail: String,
    #[serde(deserialize_with = "null_as_default")]
    pub strategy: String,

    #[serde(deserialize_with = "null_as_default")]
    pub practices: Vec<PracticeQuestion>,
}

/// A quiz item attached to a pattern record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PracticeQuestion {
    #[serde(deserialize_with = "null_as_default")]
    pub question: String,
    #[serde(deserialize_with = "null_as_default")]
    pub options: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub correct_answer: String,
    #[serde(deserialize_with = "null_as_default")]
    pub explanation: String,
}

impl Default for PracticeQuestion {
    /// The blank question the forms seed: a single empty option.
    fn default() -> Self {
        Self {
            question: String::new(),
            options: vec![String::new()],
            correct_answer: String::new(),
            explanation: String::new(),
        }
    }
}

/// Response body of the list endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListEnvelope {
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: Vec<PatternRecord>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScalarField {
    PatternName,
    PatternType,
    ReliabilityScore,
    Experience,
    BestUsed,
}

impl ScalarField {
    pub const ALL: [ScalarField; 5] = [
        ScalarField::PatternName,
        ScalarField::PatternType,
        ScalarField::ReliabilityScore,
        ScalarField::Experience,
        ScalarField::BestUsed,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ScalarField::PatternName => "Pattern Name",
            ScalarField::PatternType => "Pattern Type",
            ScalarField::ReliabilityScore => "Reliability Score",
            ScalarField::Experience => "Experience",
            ScalarField::BestUsed => "Best Used",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RichTextField {
    Introduction,
    WhatIsIt,
    WhatDoesItMatter,
    TypesOfPattern,
    MarketPsychology,
    WhyIsItNamed,
    HowStrongIsThisPattern,
    Indicators,
    MistakesToAvoid,
    FinalTips,
    ExampleWork,
    ExampleFail,
    Strategy,
}

impl RichTextField {
    pub const ALL: [RichTextField; 13] = [
        RichTextField::Introduction,
        RichTextField::WhatIsIt,
        RichTextField::WhatDoesItMatter,
        RichTextField::TypesOfPattern,
        RichTextField::MarketPsychology,
        RichTextField::WhyIsItNamed,
        RichTextField::HowStrongIsThisPattern,
        RichTextField::Indicators,
        RichTextField::MistakesToAvoid,
        RichTextField::FinalTips,
        RichTextField::ExampleWork,
        RichTextField::ExampleFail,
        RichTextField::Strategy,
    ];

    pub fn label(self) -> &'static str {
        match self {
            RichTextField::Introduction => "Introduction",
            RichTextField::WhatIsIt => "What Is It?",
            RichTextField::WhatDoesItMatter => "Why Does It Matter?",
            RichTextField::TypesOfPattern => "Types of Pattern",
            RichTextField::MarketPsychology => "Market Psychology",
            RichTextField::WhyIsItNamed => "Why Is It Named?",
            RichTextField::HowStrongIsThisPattern => "How Strong Is This Pattern?",
            RichTextField::Indicators => "Indicators",
            RichTextField::MistakesToAvoid => "Mistakes to Avoid",
            RichTextField::FinalTips => "Final Tips",
            RichTextField::ExampleWork => "Example Work",
            RichTextField::ExampleFail => "Example Fail",
            RichTextField::Strategy => "Strategy",
        }
    }
}

impl PatternRecord {
    pub fn scalar(&self, field: ScalarField) -> &str {
        match field {
            ScalarField::PatternName => &self.pattern_name,
            ScalarField::PatternType => &self.pattern_type,
            ScalarField::ReliabilityScore => &self.reliability_score,
            ScalarField::Experience => &self.experience,
            ScalarField::BestUsed => &self.best_used,
        }
    }

    pub fn scalar_mut(&mut self, field: ScalarField) -> &mut String {
        match field {
            ScalarField::PatternName => &mut self.pattern_name,
            ScalarField::PatternType => &mut self.pattern_type,
            ScalarField::ReliabilityScore => &mut self.reliability_score,
            ScalarField::Experience => &mut self.experience,
            ScalarField::BestUsed => &mut self.best_used,
        }
    }

    pub fn rich_text(&self, field: RichTextField) -> &str {
        match field {
            RichTextField::Introduction => &self.introduction,
            RichTextField::WhatIsIt => &self.what_is_it,
            RichTextField::WhatDoesItMatter => &self.what_does_it_matter,
            RichTextField::TypesOfPattern => &self.types_of_pattern,
            RichTextField::MarketPsychology => &self.market_psychology,
            RichTextField::WhyIsItNamed => &self.why_is_it_named,
            RichTextField::HowStrongIsThisPattern => &self.how_strong_is_this_pattern,
            RichTextField::Indicators => &self.indicators,
            RichTextField::MistakesToAvoid => &self.mistakes_to_avoid,
            RichTextField::FinalTips => &self.final_tips,
            RichTextField::ExampleWork => &self.example_work,
            RichTextField::ExampleFail => &self.example_fail,
            RichTextField::Strategy => &self.strategy,
        }
    }

    pub fn rich_text_mut(&mut self, field: RichTextField) -> &mut String {
        match field {
            RichTextField::Introduction => &mut self.introduction,
            RichTextField::WhatIsIt => &mut self.what_is_it,
            RichTextField::WhatDoesItMatter => &mut self.what_does_it_matter,
            RichTextField::TypesOfPattern => &mut self.types_of_pattern,
            RichTextField::MarketPsychology => &mut self.market_psychology,
            RichTextField::WhyIsItNamed => &mut self.why_is_it_named,
            RichTextField::HowStrongIsThisPattern => &mut self.how_strong_is_this_pattern,
            RichTextField::Indicators => &mut self.indicators,
            RichTextField::MistakesToAvoid => &mut self.mistakes_to_avoid,
            RichTextField::FinalTips => &mut self.final_tips,
            RichTextField::ExampleWork => &mut self.example_work,
            RichTextField::ExampleFail => &mut self.example_fail,
            RichTextField::Strategy => &mut self.strategy,
        }
    }

    /// Identifier usable in a request path; blank ids count as missing.
    pub fn usable_id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.trim().is_empty())
    }
}

/// Split the comma-joined options text the forms edit.
///
/// There is no escaping: an option cannot contain a literal comma.
pub fn split_options(text: &str) -> Vec<String> {
    text.split(',').map(str::to_string).collect()
}

pub fn join_options(options: &[String]) -> String {
    options.join(",")
}

// Scalars occasionally come back as JSON numbers (e.g. a numeric reliability score).
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Null => String::new(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    })
}

// `null` reads the same as an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
