//! GitHub-flavored markdown renderer.

use crate::model::*;
use crate::render::Renderer;
use crate::toc;
use anyhow::Result;

pub struct MarkdownRenderer;

impl Renderer for MarkdownRenderer {
    fn render(&self, doc: &ParsedComment) -> Result<String> {
        let mut lines: Vec<String> = Vec::new();

        lines.push(format!("## {}\n", doc.title().unwrap_or("Documentation")));

        if let Some(ref desc) = doc.description {
            lines.push(desc.full.clone());
            lines.push(String::new());
        }

        if !doc.params.is_empty() {
            lines.push("### Parameters\n".to_string());
            for param in &doc.params {
                lines.push(render_named(
                    &param.name,
                    &param.types,
                    param.optional,
                    &param.description,
                ));
            }
            lines.push(String::new());
        }

        if !doc.returns.is_empty() {
            lines.push("### Returns\n".to_string());
            for ret in &doc.returns {
                lines.push(render_typed(&ret.types, &ret.description));
            }
            lines.push(String::new());
        }

        if !doc.throws.is_empty() {
            lines.push("### Throws\n".to_string());
            for throws in &doc.throws {
                lines.push(render_typed(&throws.types, &throws.description));
            }
            lines.push(String::new());
        }

        if !doc.examples.is_empty() {
            lines.push("### Examples\n".to_string());
            for example in &doc.examples {
                if let Some(ref caption) = example.description {
                    lines.push(format!("_{}_\n", caption));
                }
                lines.push("```js".to_string());
                lines.push(example.code.clone());
                lines.push("```".to_string());
                lines.push(String::new());
            }
        }

        // Main-block properties already listed under their typedef are not repeated.
        let owned = doc.typedefs.iter().any(|t| t.properties == doc.properties);
        if !doc.properties.is_empty() && !owned {
            lines.push("### Properties\n".to_string());
            render_properties(&mut lines, &doc.properties);
            lines.push(String::new());
        }

        if !doc.typedefs.is_empty() {
            lines.push("### Type definitions\n".to_string());
            for typedef in &doc.typedefs {
                lines.push(toc::render_toc_item(&typedef.name));
            }
            lines.push(String::new());
            for typedef in &doc.typedefs {
                render_typedef(&mut lines, typedef);
            }
        }

        let mut out = lines.join("\n");
        while out.ends_with("\n\n") {
            out.pop();
        }
        if !out.ends_with('\n') {
            out.push('\n');
        }
        Ok(out)
    }

    fn file_extension(&self) -> &str {
        "md"
    }
}

fn render_typedef(lines: &mut Vec<String>, typedef: &TypeDef) {
    lines.push(format!("#### {}\n", typedef.name));
    lines.push(format!("Type: {}\n", render_types(&typedef.types)));
    if let Some(ref desc) = typedef.description {
        lines.push(desc.clone());
        lines.push(String::new());
    }
    if !typedef.properties.is_empty() {
        render_properties(lines, &typedef.properties);
        lines.push(String::new());
    }
}

fn render_properties(lines: &mut Vec<String>, properties: &[Property]) {
    for prop in properties {
        lines.push(render_named(
            &prop.name,
            &prop.types,
            prop.optional,
            &prop.description,
        ));
    }
}

/// `**name** (string | null, optional): description`
fn render_named(name: &str, types: &[String], optional: bool, description: &str) -> String {
    let mut meta = render_types(types);
    if optional {
        meta.push_str(", optional");
    }
    if description.is_empty() {
        format!("* **{}** ({})", name, meta)
    } else {
        format!("* **{}** ({}): {}", name, meta, description)
    }
}

/// `(string | null): description`
fn render_typed(types: &[String], description: &str) -> String {
    if description.is_empty() {
        format!("* ({})", render_types(types))
    } else {
        format!("* ({}): {}", render_types(types), description)
    }
}

fn render_types(types: &[String]) -> String {
    types
        .iter()
        .map(|t| format!("`{}`", t))
        .collect::<Vec<_>>()
        .join(" | ")
}
