use std::fmt::Write;
use std::sync::LazyLock;

use html_escape::decode_html_entities;
use ordbok_core::Note;
use regex::Regex;

static LIST_ITEM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<li[^>]*>").unwrap());
static LINE_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<br\s*/?>").unwrap());
static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());

/// Plain text from an HTML fragment, list items on their own lines
pub fn strip_html(fragment: &str) -> String {
    let text = LIST_ITEM.replace_all(fragment, "\n- ");
    let text = LINE_BREAK.replace_all(&text, " / ");
    let text = TAG.replace_all(&text, "");
    decode_html_entities(&text)
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_text(notes: &[Note]) -> String {
    let mut out = String::new();

    for note in notes {
        let _ = write!(out, "{}", note.expression);
        if !note.reading.is_empty() {
            let _ = write!(out, "  {}", note.reading);
        }
        let extra = strip_html(&note.extrainfo);
        if !extra.is_empty() {
            let _ = write!(out, "  [{extra}]");
        }
        out.push('\n');

        for (i, definition) in note.definitions.iter().enumerate() {
            let stripped = strip_html(definition);
            let mut lines = stripped.lines();
            if let Some(first) = lines.next() {
                let _ = writeln!(out, "  {}. {first}", i + 1);
            }
            for line in lines {
                let _ = writeln!(out, "     {line}");
            }
        }

        for audio in &note.audios {
            let _ = writeln!(out, "  audio: {audio}");
        }
        out.push('\n');
    }

    out
}

pub fn render_json(notes: &[Note]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(notes)
}
