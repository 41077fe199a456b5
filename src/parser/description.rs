//! Leading description segmenter.

use super::tags::tag_keyword;
use crate::model::Description;

/// Split the text before the first tag line into full text and summary.
///
/// Returns `None` when there is no non-blank text before the first tag.
pub fn segment(text: &str) -> Option<Description> {
    let lines: Vec<&str> = text
        .lines()
        .take_while(|line| tag_keyword(line).is_none())
        .collect();

    let full = lines.join("\n").trim().to_string();
    if full.is_empty() {
        return None;
    }

    let summary = summarize(&full);
    Some(Description { full, summary })
}

/// Cut at the first `.` anywhere in the text; fall back to the first line
/// when that cut would keep everything.
fn summarize(full: &str) -> String {
    let sentence = match full.find('.') {
        Some(pos) => &full[..=pos],
        None => full,
    };

    if sentence == full {
        full.lines().next().unwrap_or(full).trim().to_string()
    } else {
        sentence.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_sentence() {
        let desc = segment("Adds two numbers.\n@param {number} a").unwrap();
        assert_eq!(desc.full, "Adds two numbers.");
        assert_eq!(desc.summary, "Adds two numbers.");
    }

    #[test]
    fn summary_is_first_sentence() {
        let desc = segment("Validates input. Then returns.\n\nMore detail here.").unwrap();
        assert_eq!(desc.summary, "Validates input.");
        assert_eq!(desc.full, "Validates input. Then returns.\n\nMore detail here.");
    }

    #[test]
    fn no_period_uses_first_line() {
        let desc = segment("First line\nsecond line").unwrap();
        assert_eq!(desc.summary, "First line");
    }

    #[test]
    fn period_on_later_line_still_cuts() {
        let desc = segment("Spans\nseveral lines. Done\nend").unwrap();
        assert_eq!(desc.summary, "Spans\nseveral lines.");
    }

    #[test]
    fn only_tags_yields_none() {
        assert!(segment("@typedef {object} User\n@property {string} id").is_none());
        assert!(segment("").is_none());
        assert!(segment("\n\n@returns {number} n").is_none());
    }

    #[test]
    fn unknown_tag_ends_description() {
        let desc = segment("Summary.\n@deprecated use other\ntrailing").unwrap();
        assert_eq!(desc.full, "Summary.");
    }

    #[test]
    fn inline_at_sign_does_not_end_description() {
        let desc = segment("Mail user@example.com today.\nSecond.").unwrap();
        assert_eq!(desc.full, "Mail user@example.com today.\nSecond.");
        assert_eq!(desc.summary, "Mail user@example.");
    }
}
