//! Parser module — block selection and assembly.
//!
//! Every comment block is normalized and run through all tag extractors.
//! The first block that documents a function (params, returns, examples or
//! throws) becomes the main block; typedefs are gathered from all blocks.

pub mod blocks;
pub mod code;
pub mod description;
pub mod normalize;
pub mod tags;

use crate::error::{ParseError, Result};
use crate::model::*;
use tracing::debug;

/// Knobs for [`parse_with`].
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Attach the source that follows the last comment block as `code`.
    pub include_code: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self { include_code: true }
    }
}

/// Everything extracted from a single comment block.
#[derive(Debug)]
struct BlockDoc {
    text: String,
    params: Vec<Parameter>,
    returns: Vec<ReturnValue>,
    properties: Vec<Property>,
    typedefs: Vec<TypeDef>,
    examples: Vec<Example>,
    throws: Vec<Throws>,
}

impl BlockDoc {
    fn extract(raw: &str) -> Self {
        let text = normalize::normalize(raw);
        BlockDoc {
            params: tags::params(&text),
            returns: tags::returns(&text),
            properties: tags::properties(&text),
            typedefs: tags::typedefs(&text),
            examples: tags::examples(raw),
            throws: tags::throws(&text),
            text,
        }
    }

    fn documents_function(&self) -> bool {
        !self.params.is_empty()
            || !self.returns.is_empty()
            || !self.examples.is_empty()
            || !self.throws.is_empty()
    }

    /// Typedefs with their properties attached.
    ///
    /// Properties belong to the typedef only when it is alone in the block;
    /// with several typedefs each one gets an empty list.
    fn owned_typedefs(&self) -> Vec<TypeDef> {
        let single = self.typedefs.len() == 1;
        self.typedefs
            .iter()
            .map(|typedef| TypeDef {
                properties: if single {
                    self.properties.clone()
                } else {
                    Vec::new()
                },
                ..typedef.clone()
            })
            .collect()
    }
}

/// Parse a JSDoc comment (and optionally the code after it) with default options.
pub fn parse(input: &str) -> Result<ParsedComment> {
    parse_with(input, &ParseOptions::default())
}

/// Parse a JSDoc comment string into a [`ParsedComment`].
///
/// Fails only on empty input or input that is not a doc comment at all.
pub fn parse_with(input: &str, options: &ParseOptions) -> Result<ParsedComment> {
    if input.trim().is_empty() {
        return Err(ParseError::Empty);
    }

    let located = blocks::locate(input);
    let (mut docs, trailing_code) = if located.is_empty() {
        if !blocks::is_bare_block(input) {
            return Err(ParseError::InvalidFormat);
        }
        debug!("no delimited block; treating input as one bare block");
        (vec![BlockDoc::extract(input)], None)
    } else {
        let trailing_code = if options.include_code {
            blocks::trailing(input, &located).map(str::to_string)
        } else {
            None
        };
        let docs = located
            .iter()
            .map(|block| BlockDoc::extract(block.body))
            .collect::<Vec<_>>();
        (docs, trailing_code)
    };

    let typedefs: Vec<TypeDef> = docs.iter().flat_map(BlockDoc::owned_typedefs).collect();

    let main_index = docs
        .iter()
        .position(BlockDoc::documents_function)
        .unwrap_or(0);
    debug!(
        blocks = docs.len(),
        main = main_index,
        typedefs = typedefs.len(),
        "selected main block"
    );
    let main = docs.swap_remove(main_index);

    let function_name = trailing_code.as_deref().and_then(code::function_name);

    Ok(ParsedComment {
        description: description::segment(&main.text),
        params: main.params,
        returns: main.returns,
        typedefs,
        properties: main.properties,
        examples: main.examples,
        throws: main.throws,
        code: trailing_code,
        function_name,
        raw_comment: input.to_string(),
    })
}
