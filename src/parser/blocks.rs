//! Comment block location.

use regex::Regex;
use std::sync::LazyLock;

static RE_BLOCK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)/\*\*(.*?)\*/").unwrap());

/// One `/** ... */` region of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block<'a> {
    /// Text between the delimiters, decoration still in place.
    pub body: &'a str,
    /// Byte offset just past the closing `*/`.
    pub end: usize,
}

/// All comment blocks in source order.
pub fn locate(input: &str) -> Vec<Block<'_>> {
    RE_BLOCK
        .captures_iter(input)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let body = caps.get(1)?;
            Some(Block {
                body: body.as_str(),
                end: whole.end(),
            })
        })
        .collect()
}

/// Undelimited input is still accepted when it starts with decoration.
pub fn is_bare_block(input: &str) -> bool {
    input.trim_start().starts_with('*')
}

/// Source text after the last block, trimmed; `None` when blank.
pub fn trailing<'a>(input: &'a str, blocks: &[Block<'a>]) -> Option<&'a str> {
    let end = blocks.last()?.end;
    let rest = input[end..].trim();
    (!rest.is_empty()).then_some(rest)
}
