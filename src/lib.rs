//! jsdoc — parse JSDoc comment blocks into structured records.
//!
//! ```
//! let doc = jsdoc::parse(
//!     "/**\n * Adds two numbers.\n * @param {number} a - first\n * @returns {number} sum\n */\nfunction add(a) {}",
//! )
//! .unwrap();
//! assert_eq!(doc.params[0].name, "a");
//! assert_eq!(doc.function_name.as_deref(), Some("add"));
//! ```

pub mod error;
pub mod model;
pub mod parser;
pub mod render;
mod toc;

pub use error::{ParseError, Result};
pub use model::*;
pub use parser::{parse, parse_with, ParseOptions};
