//! Data model for a parsed JSDoc comment.
//!
//! Every record is built once per `parse` call and never mutated afterwards.
//! Field names serialize the way JSON consumers expect (`functionName`,
//! `rawComment`).

use serde::{Deserialize, Serialize};

/// Leading free text of the main block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Description {
    /// Everything before the first tag, trimmed.
    pub full: String,
    /// First sentence, or the first line when there is nothing to cut.
    pub summary: String,
}

/// `@param {type} name - description`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub types: Vec<String>,
    pub name: String,
    pub description: String,
    /// Name was written as `[name]` or `[name=default]`.
    pub optional: bool,
}

/// `@property {type} name - description`
///
/// Same shape as [`Parameter`]; owned by a [`TypeDef`] or listed at the top level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    pub types: Vec<String>,
    pub name: String,
    pub description: String,
    pub optional: bool,
}

/// `@returns {type} description` (or `@return`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnValue {
    pub types: Vec<String>,
    pub description: String,
}

/// `@throws {type} description`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Throws {
    pub types: Vec<String>,
    pub description: String,
}

/// Body of one `@example` tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    pub code: String,
    /// `<caption>` text, when the example carries one.
    pub description: Option<String>,
}

/// `@typedef {type} Name description` plus the properties it owns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDef {
    pub types: Vec<String>,
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub properties: Vec<Property>,
}

/// Complete result of parsing one input string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedComment {
    pub description: Option<Description>,
    #[serde(default)]
    pub params: Vec<Parameter>,
    #[serde(default)]
    pub returns: Vec<ReturnValue>,
    /// Typedefs from every block, in block order.
    #[serde(default)]
    pub typedefs: Vec<TypeDef>,
    /// Properties of the main block.
    #[serde(default)]
    pub properties: Vec<Property>,
    #[serde(default)]
    pub examples: Vec<Example>,
    #[serde(default)]
    pub throws: Vec<Throws>,
    /// Source text after the last comment block.
    pub code: Option<String>,
    pub function_name: Option<String>,
    /// The input, verbatim.
    pub raw_comment: String,
}

impl ParsedComment {
    /// Returns `true` when neither a description nor any tag record was found.
    pub fn is_empty(&self) -> bool {
        self.description.is_none()
            && self.params.is_empty()
            && self.returns.is_empty()
            && self.typedefs.is_empty()
            && self.properties.is_empty()
            && self.examples.is_empty()
            && self.throws.is_empty()
    }

    /// Best display name: the declared function, else the first typedef.
    pub fn title(&self) -> Option<&str> {
        self.function_name
            .as_deref()
            .or_else(|| self.typedefs.first().map(|t| t.name.as_str()))
    }
}
