use crate::formatters::rich_text::{html_to_plain, single_line_preview};
use crate::schemas::{PatternRecord, RichTextField};

/// Width of the introduction excerpt in text listings
pub const EXCERPT_CHARS: usize = 100;

/// Format one record for `--list` text output.
///
/// First line: name, type, reliability and experience; second line: the
/// plain-text introduction excerpt. The identifier trails the first line.
pub fn format_record(record: &PatternRecord, use_color: bool) -> String {
    use colored::Colorize;

    let id = record.usable_id().unwrap_or("-");
    let name = display_or_dash(&record.pattern_name);
    let excerpt = single_line_preview(
        &html_to_plain(record.rich_text(RichTextField::Introduction)),
        EXCERPT_CHARS,
    );

    let header = if use_color {
        format!(
            "{} [{}] reliability {} | {} {}",
            name.bright_green().bold(),
            display_or_dash(&record.pattern_type).bright_yellow(),
            display_or_dash(&record.reliability_score).bright_blue(),
            display_or_dash(&record.experience),
            id.dimmed()
        )
    } else {
        format!(
            "{} [{}] reliability {} | {} {}",
            name,
            display_or_dash(&record.pattern_type),
            display_or_dash(&record.reliability_score),
            display_or_dash(&record.experience),
            id
        )
    };

    if excerpt.is_empty() {
        header
    } else {
        format!("{header}\n  {excerpt}")
    }
}

fn display_or_dash(value: &str) -> &str {
    if value.trim().is_empty() { "-" } else { value }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_record() -> PatternRecord {
        PatternRecord {
            id: Some("64f0c2".to_string()),
            pattern_name: "Cup and Handle".to_string(),
            pattern_type: "Continuation".to_string(),
            reliability_score: "75".to_string(),
            experience: "Intermediate".to_string(),
            introduction: "<p>A <strong>bullish</strong> pattern &amp; more</p>".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_format_record_plain() {
        let formatted = format_record(&create_test_record(), false);
        assert_eq!(
            formatted,
            "Cup and Handle [Continuation] reliability 75 | Intermediate 64f0c2\n  A bullish pattern & more"
        );
    }

    #[test]
    fn test_format_record_missing_fields() {
        let formatted = format_record(&PatternRecord::default(), false);
        assert_eq!(formatted, "- [-] reliability - | - -");
    }

    #[test]
    fn test_format_record_colored_keeps_content() {
        colored::control::set_override(true);
        let formatted = format_record(&create_test_record(), true);
        colored::control::unset_override();

        assert!(formatted.contains("Cup and Handle"));
        assert!(formatted.contains("\u{1b}["));
    }
}
