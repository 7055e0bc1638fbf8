#[cfg(test)]
mod tests {
    use super::super::pattern_record::*;
    use serde_json::json;

    #[test]
    fn test_split_options() {
        assert_eq!(split_options("A,B,C"), vec!["A", "B", "C"]);
        assert_eq!(split_options(""), vec![""]);
        assert_eq!(split_options("A,,B"), vec!["A", "", "B"]);
        // Whitespace is kept as typed
        assert_eq!(split_options(" A , B"), vec![" A ", " B"]);
    }

    #[test]
    fn test_join_inverts_split() {
        for text in ["A,B,C", "", ",", "one", "x,,y,"] {
            assert_eq!(join_options(&split_options(text)), text);
        }
    }

    #[test]
    fn test_default_practice_has_one_empty_option() {
        let practice = PracticeQuestion::default();
        assert_eq!(practice.options, vec![String::new()]);
        assert!(practice.question.is_empty());
    }

    #[test]
    fn test_serialize_uses_wire_names() {
        let record = PatternRecord {
            pattern_name: "Head and Shoulders".to_string(),
            practices: vec![PracticeQuestion {
                question: "Which way?".to_string(),
                options: vec!["Up".to_string(), "Down".to_string()],
                correct_answer: "Down".to_string(),
                explanation: "Reversal".to_string(),
            }],
            ..Default::default()
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["pattern_name"], "Head and Shoulders");
        assert_eq!(value["practices"][0]["correctAnswer"], "Down");
        assert_eq!(value["practices"][0]["options"], json!(["Up", "Down"]));
        // No identifier before creation
        assert!(value.get("_id").is_none());
        assert_eq!(value["how_strong_is_this_pattern"], "");
    }

    #[test]
    fn test_serialize_includes_id_when_present() {
        let record = PatternRecord {
            id: Some("abc123".to_string()),
            ..Default::default()
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["_id"], "abc123");
    }

    #[test]
    fn test_deserialize_fills_missing_fields() {
        let record: PatternRecord = serde_json::from_value(json!({
            "_id": "66f1",
            "pattern_name": "Flag",
            "introduction": "<p>Hi</p>"
        }))
        .unwrap();

        assert_eq!(record.id.as_deref(), Some("66f1"));
        assert_eq!(record.pattern_name, "Flag");
        assert_eq!(record.introduction, "<p>Hi</p>");
        assert_eq!(record.strategy, "");
        assert!(record.practices.is_empty());
    }

    #[test]
    fn test_deserialize_numeric_scalars() {
        let record: PatternRecord = serde_json::from_value(json!({
            "pattern_name": "Wedge",
            "reliability_score": 4,
            "experience": null
        }))
        .unwrap();

        assert_eq!(record.reliability_score, "4");
        assert_eq!(record.experience, "");
    }

    #[test]
    fn test_deserialize_ignores_unknown_fields() {
        let record: PatternRecord = serde_json::from_value(json!({
            "pattern_name": "Cup",
            "__v": 0,
            "createdAt": "2024-01-01T00:00:00Z"
        }))
        .unwrap();
        assert_eq!(record.pattern_name, "Cup");
    }

    #[test]
    fn test_list_envelope() {
        let envelope: ListEnvelope = serde_json::from_str(
            r#"{"success":true,"data":[{"_id":"1","pattern_name":"A"},{"_id":"2","pattern_name":"B"}]}"#,
        )
        .unwrap();
        assert_eq!(envelope.data.len(), 2);
        assert_eq!(envelope.data[1].pattern_name, "B");

        let empty: ListEnvelope = serde_json::from_str("{}").unwrap();
        assert!(empty.data.is_empty());
    }

    #[test]
    fn test_field_accessors_cover_every_field() {
        let mut record = PatternRecord::default();
        for field in ScalarField::ALL {
            *record.scalar_mut(field) = field.label().to_string();
        }
        for field in RichTextField::ALL {
            *record.rich_text_mut(field) = field.label().to_string();
        }

        assert_eq!(record.best_used, "Best Used");
        assert_eq!(record.how_strong_is_this_pattern, "How Strong Is This Pattern?");
        for field in ScalarField::ALL {
            assert_eq!(record.scalar(field), field.label());
        }
        for field in RichTextField::ALL {
            assert_eq!(record.rich_text(field), field.label());
        }
    }

    #[test]
    fn test_usable_id() {
        let mut record = PatternRecord::default();
        assert_eq!(record.usable_id(), None);
        record.id = Some("  ".to_string());
        assert_eq!(record.usable_id(), None);
        record.id = Some("66f1".to_string());
        assert_eq!(record.usable_id(), Some("66f1"));
    }

    #[test]
    fn test_deserialize_null_fields_as_empty() {
        let body = r#"{"data":[{"_id":"1","pattern_name":"Flag","pattern_type":null,"introduction":null,"practices":null},{"_id":"2","pattern_name":"Cup","practices":[{"question":"Q","options":null,"correctAnswer":null,"explanation":null}]}]}"#;

        let envelope: ListEnvelope = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.data.len(), 2);

        let flag = &envelope.data[0];
        assert_eq!(flag.pattern_name, "Flag");
        assert_eq!(flag.pattern_type, "");
        assert_eq!(flag.introduction, "");
        assert!(flag.practices.is_empty());

        let practice = &envelope.data[1].practices[0];
        assert_eq!(practice.question, "Q");
        assert!(practice.options.is_empty());
        assert_eq!(practice.correct_answer, "");
        assert_eq!(practice.explanation, "");
    }

    #[test]
    fn test_list_envelope_null_data_is_empty() {
        let envelope: ListEnvelope = serde_json::from_str(r#"{"data":null}"#).unwrap();
        assert!(envelope.data.is_empty());
    }
}
