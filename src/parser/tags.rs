//! Tag extractors — one independent scanner per tag kind.
//!
//! Each extractor reads normalized block text and returns its records in
//! source order. Extractors never fail: an occurrence that does not have the
//! expected shape (e.g. no `{type}`) is skipped.

use super::normalize::{dedecorate, trim_blank_edges};
use crate::model::*;
use regex::Regex;
use std::sync::LazyLock;

// -- Regex patterns -----------------------------------------------------------

static RE_TAG_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^@(\w+)").unwrap());

// `@param {type} name - description` / `[name]` / `[name=default]`
static RE_PARAM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"@param[ \t]+\{([^}]+)\}[ \t]+(\[?[^\[\]\s-]+(?:=[^\[\]\n]*)?\]?)[ \t]*-?[ \t]*(.*)")
        .unwrap()
});

static RE_PROPERTY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"@property[ \t]+\{([^}]+)\}[ \t]+(\[?[^\[\]\s-]+(?:=[^\[\]\n]*)?\]?)[ \t]*-?[ \t]*(.*)")
        .unwrap()
});

static RE_RETURNS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"@returns?[ \t]+\{([^}]+)\}[ \t]*-?[ \t]*(.*)").unwrap()
});

static RE_THROWS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"@throws[ \t]+\{([^}]+)\}[ \t]*-?[ \t]*(.*)").unwrap()
});

// Description runs up to the next `@`, across lines.
static RE_TYPEDEF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"@typedef[ \t]+\{([^}]+)\}[ \t]+(\S+)(?:[ \t]*-?[ \t]*([^@]*))?").unwrap()
});

static RE_CAPTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*<caption>(.*?)</caption>(.*)$").unwrap());

// -- Shared pieces ------------------------------------------------------------

/// Keyword of a line that opens a tag (`@word ...`), if any.
pub fn tag_keyword(line: &str) -> Option<&str> {
    RE_TAG_LINE
        .captures(line.trim_start())
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Split a `{a|b|c}` body into its union members.
pub fn split_types(raw: &str) -> Vec<String> {
    raw.split('|')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Resolve a name token into `(name, optional)`.
///
/// Optionality comes only from enclosing brackets; a `=default` suffix is cut.
fn split_name(token: &str) -> (String, bool) {
    let optional = token.starts_with('[') && token.ends_with(']');
    let bare = token.trim_start_matches('[').trim_end_matches(']');
    let name = match bare.split_once('=') {
        Some((name, _default)) => name,
        None => bare,
    };
    (name.to_string(), optional)
}

/// `(types, name, description, optional)` for every match of a name-bearing tag.
fn named_entries<'a>(
    re: &'a Regex,
    text: &'a str,
) -> impl Iterator<Item = (Vec<String>, String, String, bool)> + 'a {
    re.captures_iter(text).map(|caps| {
        let (name, optional) = split_name(&caps[2]);
        (split_types(&caps[1]), name, caps[3].trim().to_string(), optional)
    })
}

// -- Extractors ---------------------------------------------------------------

/// `@param` records.
pub fn params(text: &str) -> Vec<Parameter> {
    named_entries(&RE_PARAM, text)
        .map(|(types, name, description, optional)| Parameter {
            types,
            name,
            description,
            optional,
        })
        .collect()
}

/// `@property` records.
pub fn properties(text: &str) -> Vec<Property> {
    named_entries(&RE_PROPERTY, text)
        .map(|(types, name, description, optional)| Property {
            types,
            name,
            description,
            optional,
        })
        .collect()
}

/// `@returns` / `@return` records.
pub fn returns(text: &str) -> Vec<ReturnValue> {
    RE_RETURNS
        .captures_iter(text)
        .map(|caps| ReturnValue {
            types: split_types(&caps[1]),
            description: caps[2].trim().to_string(),
        })
        .collect()
}

/// `@throws` records.
pub fn throws(text: &str) -> Vec<Throws> {
    RE_THROWS
        .captures_iter(text)
        .map(|caps| Throws {
            types: split_types(&caps[1]),
            description: caps[2].trim().to_string(),
        })
        .collect()
}

/// `@typedef` records, without properties attached.
pub fn typedefs(text: &str) -> Vec<TypeDef> {
    RE_TYPEDEF
        .captures_iter(text)
        .map(|caps| {
            let description = caps
                .get(3)
                .map(|m| m.as_str().trim())
                .filter(|d| !d.is_empty())
                .map(str::to_string);
            TypeDef {
                types: split_types(&caps[1]),
                name: caps[2].to_string(),
                description,
                properties: Vec::new(),
            }
        })
        .collect()
}

/// `@example` records.
///
/// Reads the raw (still decorated) block interior so code indentation
/// survives. A span runs from the tag to the next `@word` line.
pub fn examples(raw: &str) -> Vec<Example> {
    let mut spans: Vec<Vec<String>> = Vec::new();
    let mut current: Option<Vec<String>> = None;

    for line in raw.split('\n') {
        let line = dedecorate(line);
        let content = line.trim_start();

        if let Some(keyword) = tag_keyword(content) {
            spans.extend(current.take());
            if keyword == "example" {
                let inline = content["@example".len()..].trim();
                current = Some(vec![inline.to_string()]);
            }
            continue;
        }

        if let Some(span) = current.as_mut() {
            span.push(line.to_string());
        }
    }
    spans.extend(current);

    spans.into_iter().filter_map(build_example).collect()
}

fn build_example(mut lines: Vec<String>) -> Option<Example> {
    trim_blank_edges(&mut lines);

    let mut description = None;
    if let Some(caps) = lines.first().and_then(|first| RE_CAPTION.captures(first)) {
        let caption = caps[1].trim().to_string();
        let rest = caps[2].trim().to_string();
        description = (!caption.is_empty()).then_some(caption);
        if rest.is_empty() {
            lines.remove(0);
        } else {
            lines[0] = rest;
        }
        trim_blank_edges(&mut lines);
    }

    if lines.is_empty() {
        return None;
    }

    Some(Example {
        code: lines.join("\n"),
        description,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn param_required_and_described() {
        let p = params("@param {number} a - The first number");
        assert_eq!(p.len(), 1);
        assert_eq!(p[0].name, "a");
        assert_eq!(p[0].types, vec!["number"]);
        assert_eq!(p[0].description, "The first number");
        assert!(!p[0].optional);
    }

    #[test]
    fn param_optional_forms() {
        let text = "@param {number} [age] - User's age\n@param {string} [email=user@example.com] - Mail";
        let p = params(text);
        assert_eq!(p.len(), 2);
        assert_eq!(p[0].name, "age");
        assert!(p[0].optional);
        assert_eq!(p[1].name, "email");
        assert!(p[1].optional);
        assert_eq!(p[1].description, "Mail");
    }

    #[test]
    fn param_default_without_brackets_is_required() {
        let p = params("@param {number} x=1 the count");
        assert_eq!(p[0].name, "x");
        assert!(!p[0].optional);
    }

    #[test]
    fn param_without_dash_or_description() {
        let p = params("@param {string} a\n@param {string} b plain words");
        assert_eq!(p.len(), 2);
        assert_eq!(p[0].description, "");
        assert_eq!(p[1].name, "b");
        assert_eq!(p[1].description, "plain words");
    }

    #[test]
    fn param_without_type_is_skipped() {
        let p = params("@param a - no type\n@param {string} b - typed");
        assert_eq!(p.len(), 1);
        assert_eq!(p[0].name, "b");
    }

    #[test]
    fn union_types_keep_order() {
        let p = params("@param {string|number|null} v - value");
        assert_eq!(p[0].types, vec!["string", "number", "null"]);
    }

    #[test]
    fn split_types_drops_empty_members() {
        assert_eq!(split_types(" string | | number |"), vec!["string", "number"]);
    }

    #[test]
    fn return_synonyms() {
        assert_eq!(returns("@returns {number} A number")[0].types, vec!["number"]);
        let r = returns("@return {string} - A string");
        assert_eq!(r[0].types, vec!["string"]);
        assert_eq!(r[0].description, "A string");
    }

    #[test]
    fn throws_in_order() {
        let t = throws("@throws {Error} If input is invalid\n@throws {ValidationError} If rules fail");
        assert_eq!(t.len(), 2);
        assert_eq!(t[0].types, vec!["Error"]);
        assert_eq!(t[0].description, "If input is invalid");
        assert_eq!(t[1].types, vec!["ValidationError"]);
    }

    #[test]
    fn property_shape_matches_param() {
        let p = properties("@property {string|null} url - The URL of the listing.");
        assert_eq!(p[0].name, "url");
        assert_eq!(p[0].types, vec!["string", "null"]);
        assert_eq!(p[0].description, "The URL of the listing.");
    }

    #[test]
    fn typedef_with_and_without_description() {
        let text = "@typedef {object} User\n@property {string} id - x\n\n@typedef {string} Status - User status (active, inactive)";
        let t = typedefs(text);
        assert_eq!(t.len(), 2);
        assert_eq!(t[0].name, "User");
        assert_eq!(t[0].description, None);
        assert_eq!(t[1].name, "Status");
        assert_eq!(t[1].types, vec!["string"]);
        assert_eq!(t[1].description.as_deref(), Some("User status (active, inactive)"));
    }

    #[test]
    fn typedef_description_spans_lines() {
        let t = typedefs("@typedef {object} Point A point\non the plane.\n@property {number} x");
        assert_eq!(t[0].description.as_deref(), Some("A point\non the plane."));
    }

    #[test]
    fn examples_are_separate_spans() {
        let raw = "\n * A utility.\n * @example\n * // Basic usage\n * doSomething(123);\n *\n * @example\n * // Advanced usage\n * doSomething(456);\n ";
        let ex = examples(raw);
        assert_eq!(ex.len(), 2);
        assert_eq!(ex[0].code, "// Basic usage\ndoSomething(123);");
        assert_eq!(ex[1].code, "// Advanced usage\ndoSomething(456);");
        assert!(ex[0].description.is_none());
    }

    #[test]
    fn example_keeps_indentation() {
        let raw = " * @example\n * [\n *   {\n *     \"a\": 1\n *   }\n * ]\n ";
        let ex = examples(raw);
        assert_eq!(ex[0].code, "[\n  {\n    \"a\": 1\n  }\n]");
    }

    #[test]
    fn example_ends_at_unknown_tag() {
        let ex = examples(" * @example\n * run();\n * @since 1.0\n * not code");
        assert_eq!(ex.len(), 1);
        assert_eq!(ex[0].code, "run();");
    }

    #[test]
    fn blank_example_is_dropped() {
        assert!(examples(" * @example\n *\n * @returns {number} n").is_empty());
    }

    #[test]
    fn example_caption_becomes_description() {
        let ex = examples(" * @example <caption>Basic call</caption>\n * add(1, 2);");
        assert_eq!(ex[0].description.as_deref(), Some("Basic call"));
        assert_eq!(ex[0].code, "add(1, 2);");
    }

    #[test]
    fn example_inline_code_on_tag_line() {
        let ex = examples(" * @example add(1, 2); // 3");
        assert_eq!(ex[0].code, "add(1, 2); // 3");
    }

    #[test]
    fn tag_keyword_detection() {
        assert_eq!(tag_keyword("  @param {x} y"), Some("param"));
        assert_eq!(tag_keyword("user@example.com"), None);
        assert_eq!(tag_keyword("@ alone"), None);
    }
}
