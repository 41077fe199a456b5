//! Comment decoration stripping.
//!
//! Turns the interior of a `/** ... */` block into plain logical lines:
//!
//! ```text
//!  * Adds two numbers.          Adds two numbers.
//!  * @param {number} a    ->    @param {number} a
//!  */
//! ```

/// Normalize the raw interior of one comment block.
///
/// Each line is trimmed and loses one leading `*` decoration, then is trimmed
/// again so a second pass finds nothing left to strip. Blank lines before the
/// first content line and after the last one are dropped.
pub fn normalize(raw: &str) -> String {
    let mut lines: Vec<&str> = Vec::new();

    for line in raw.split('\n') {
        let line = strip_decoration(line.trim()).trim();
        if !line.is_empty() || !lines.is_empty() {
            lines.push(line);
        }
    }

    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }

    lines.join("\n")
}

/// De-decorate one raw line without touching indentation past the decoration.
///
/// `   *     return x;` becomes `    return x;`. Undecorated lines only lose
/// trailing whitespace.
pub fn dedecorate(line: &str) -> &str {
    let line = line.trim_end();
    let rest = line.trim_start();
    if rest.starts_with('*') {
        strip_decoration(rest)
    } else {
        line
    }
}

/// Drop fully blank lines from both ends.
pub fn trim_blank_edges(lines: &mut Vec<String>) {
    let start = lines
        .iter()
        .position(|l| !l.trim().is_empty())
        .unwrap_or(lines.len());
    lines.drain(..start);
    while lines.last().is_some_and(|l| l.trim().is_empty()) {
        lines.pop();
    }
}

/// Remove a single `*` and at most one space after it.
fn strip_decoration(line: &str) -> &str {
    match line.strip_prefix('*') {
        Some(rest) => rest.strip_prefix(' ').unwrap_or(rest),
        None => line,
    }
}
