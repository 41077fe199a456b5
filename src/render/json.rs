//! JSON renderer — structured output for tooling integration.
//!
//! Serializes the ParsedComment model directly.

use crate::model::ParsedComment;
use crate::render::Renderer;
use anyhow::{Context, Result};

pub struct JsonRenderer {
    pub pretty: bool,
}

impl Renderer for JsonRenderer {
    fn render(&self, doc: &ParsedComment) -> Result<String> {
        let mut out = if self.pretty {
            serde_json::to_string_pretty(doc)
        } else {
            serde_json::to_string(doc)
        }
        .context("failed to serialize parsed comment")?;
        out.push('\n');
        Ok(out)
    }

    fn file_extension(&self) -> &str {
        "json"
    }
}
