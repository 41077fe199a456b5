//! Function name heuristics for the code that follows a comment.
//!
//! This is text matching, not a JavaScript grammar. Each shape is tried in
//! priority order over the whole trailing code; the first shape that
//! matches anywhere wins.

use regex::Regex;
use std::sync::LazyLock;

// function foo(  /  export async function foo(  /  export default function* foo(
static RE_FUNCTION_DECL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?m)^[ \t]*(?:export[ \t]+)?(?:default[ \t]+)?(?:async[ \t]+)?function\b[ \t]*\*?[ \t]*([A-Za-z_$][\w$]*)\s*\(",
    )
    .unwrap()
});

// const foo = (...) =>  /  let foo = x =>  /  var foo = async function(
static RE_BOUND_FUNCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?m)^[ \t]*(?:export[ \t]+)?(?:const|let|var)[ \t]+([A-Za-z_$][\w$]*)\s*=\s*",
        r"(?:async\b\s*)?",
        r"(?:function\b|\([^)]*\)\s*=>|[A-Za-z_$][\w$]*\s*=>)",
    ))
    .unwrap()
});

// foo() {  /  static async foo(a) {  /  foo: function() {  /  foo: async function() {
static RE_METHOD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^(?:static\s+)?(?:async\s+)?([A-Za-z_$][\w$]*)\s*",
        r"(?::\s*(?:async\s+)?function\b\s*\*?\s*)?",
        r"\([^)]*\)\s*\{",
    ))
    .unwrap()
});

/// Words that look like `name(...) {` but are control flow.
const NOT_METHOD_NAMES: &[&str] = &[
    "if", "for", "while", "switch", "catch", "with", "function", "return",
];

/// Extract the declared function or method name from trailing code.
pub fn function_name(code: &str) -> Option<String> {
    let code = code.trim();

    if let Some(caps) = RE_FUNCTION_DECL.captures(code) {
        return Some(caps[1].to_string());
    }

    if let Some(caps) = RE_BOUND_FUNCTION.captures(code) {
        return Some(caps[1].to_string());
    }

    RE_METHOD
        .captures(code)
        .map(|caps| caps[1].to_string())
        .filter(|name| !NOT_METHOD_NAMES.contains(&name.as_str()))
}
