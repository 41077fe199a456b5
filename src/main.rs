//! jsdoc — extract JSDoc comments from JavaScript/TypeScript sources.
//!
//! Two modes:
//!
//! - **stdin mode**: `jsdoc < snippet.js` prints the parsed comment
//! - **file mode**: `jsdoc -o docs/api -f markdown src/*.js` writes one output per input

mod logger;

use anyhow::{Context, Result};
use clap::Parser;
use jsdoc::render::{self, Renderer};
use jsdoc::ParseOptions;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Parser)]
#[command(
    name = "jsdoc",
    about = "Parse JSDoc comment blocks into structured JSON or markdown"
)]
struct Cli {
    /// Input files (glob patterns supported). If omitted, reads from stdin.
    files: Vec<String>,

    /// Output directory (required when files are given)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Output format: json (default), markdown
    #[arg(short = 'f', long, default_value = "json")]
    format: String,

    /// Do not attach the code that follows the comment
    #[arg(long)]
    no_code: bool,

    /// Emit single-line JSON
    #[arg(long)]
    compact: bool,

    /// Debug logging on stderr
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Only log errors
    #[arg(short = 'q', long, conflicts_with = "verbose")]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init_logger(cli.verbose, cli.quiet);

    let options = ParseOptions {
        include_code: !cli.no_code,
    };
    let renderer = render::create_renderer(&cli.format, cli.compact)?;

    if cli.files.is_empty() {
        return stdin_mode(renderer.as_ref(), &options);
    }

    file_mode(&cli, renderer.as_ref(), &options)
}

/// stdin mode: parse the whole of stdin as one input and print it.
fn stdin_mode(renderer: &dyn Renderer, options: &ParseOptions) -> Result<()> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;

    let doc = jsdoc::parse_with(&input, options).context("failed to parse stdin")?;
    print!("{}", renderer.render(&doc)?);
    Ok(())
}

/// file mode: parse every input file and write one rendered file per input.
fn file_mode(cli: &Cli, renderer: &dyn Renderer, options: &ParseOptions) -> Result<()> {
    let output_dir = cli
        .output
        .as_deref()
        .context("--output is required when files are given")?;

    fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create output directory: {}", output_dir.display()))?;

    let input_files = expand_globs(&cli.files)?;
    let ext = renderer.file_extension();

    for path in &input_files {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;

        let doc = match jsdoc::parse_with(&content, options) {
            Ok(doc) => doc,
            Err(e) => {
                warn!("skipping {}: {}", path.display(), e);
                continue;
            }
        };

        let out_path = output_dir.join(format!("{}.{}", derive_output_name(path), ext));
        debug!("writing {}", out_path.display());
        fs::write(&out_path, renderer.render(&doc)?)
            .with_context(|| format!("failed to write {}", out_path.display()))?;
    }

    Ok(())
}

/// File extensions recognized as source files.
const SUPPORTED_EXTENSIONS: &[&str] = &["js", "mjs", "cjs", "jsx", "ts", "tsx"];

/// Declaration files carry types only, no implementations to document.
const DECLARATION_SUFFIXES: &[&str] = &[".d.ts", ".d.mts", ".d.cts"];

/// Whether a discovered path is worth parsing: a JS/TS source that is not a
/// type declaration and does not live under `node_modules`.
fn is_source_file(path: &Path) -> bool {
    let supported = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext));
    let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
    let declaration = DECLARATION_SUFFIXES.iter().any(|s| name.ends_with(s));
    let vendored = path.components().any(|c| c.as_os_str() == "node_modules");
    supported && !declaration && !vendored
}

/// Resolve CLI inputs to files.
///
/// Explicit file paths are taken as given. Directories (non-recursive) and
/// glob matches are filtered through [`is_source_file`].
fn expand_globs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        let path = Path::new(pattern);
        if path.is_file() {
            files.push(path.to_path_buf());
        } else if path.is_dir() {
            let entries = fs::read_dir(path)
                .with_context(|| format!("failed to read directory: {}", path.display()))?;
            files.extend(
                entries
                    .flatten()
                    .map(|entry| entry.path())
                    .filter(|p| p.is_file() && is_source_file(p)),
            );
        } else {
            let before = files.len();
            for found in glob::glob(pattern)
                .with_context(|| format!("invalid glob pattern: {}", pattern))?
                .flatten()
            {
                if found.is_file() && is_source_file(&found) {
                    files.push(found);
                }
            }
            if files.len() == before {
                warn!("no files matched: {}", pattern);
            }
        }
    }
    files.sort();
    files.dedup();
    Ok(files)
}

/// Output file name (without extension): "src/math/add.js" → "add"
fn derive_output_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "comment".to_string())
}
