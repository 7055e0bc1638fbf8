/// Marker appended when a preview is cut short
pub const TRUNCATION_MARKER: &str = "…";

/// Render an HTML fragment as plain text.
///
/// Tags are dropped, block-level closings (`</p>`, `<br>`, `</li>`, ...) become
/// line breaks and named or numeric character references are decoded, with
/// `&nbsp;` read as a plain space. Runs of blank lines collapse to one.
pub fn html_to_plain(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut rest = html;

    while let Some(open) = rest.find('<') {
        text.push_str(&rest[..open]);
        match rest[open..].find('>') {
            Some(close) => {
                let tag = &rest[open + 1..open + close];
                if is_line_break(tag) {
                    text.push('\n');
                }
                rest = &rest[open + close + 1..];
            }
            None => {
                // Unterminated tag: keep the remainder as text
                text.push_str(&rest[open..]);
                rest = "";
            }
        }
    }
    text.push_str(rest);

    let decoded = html_escape::decode_html_entities(&text).replace('\u{a0}', " ");
    let mut lines: Vec<&str> = Vec::new();
    for line in decoded.lines().map(str::trim) {
        if line.is_empty() && lines.last().is_none_or(|last| last.is_empty()) {
            continue;
        }
        lines.push(line);
    }
    while lines.last().is_some_and(|last| last.is_empty()) {
        lines.pop();
    }
    lines.join("\n")
}

fn is_line_break(tag: &str) -> bool {
    let name = tag
        .trim_start_matches('/')
        .split(|c: char| c.is_whitespace() || c == '/')
        .next()
        .unwrap_or("")
        .to_ascii_lowercase();

    match name.as_str() {
        "br" => true,
        "p" | "div" | "li" | "ul" | "ol" | "h1" | "h2" | "h3" | "h4" | "h5" | "h6"
        | "blockquote" | "pre" => tag.starts_with('/'),
        _ => false,
    }
}

/// Collapse `text` onto one line and cut it to `max_chars` characters
pub fn single_line_preview(text: &str, max_chars: usize) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= max_chars {
        return flat;
    }

    let kept: String = flat.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{kept}{TRUNCATION_MARKER}")
}
