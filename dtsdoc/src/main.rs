//! dtsdoc: generate API documentation from TypeScript declaration files.
//!
//! Two modes:
//!
//! - **stdin mode**: `dtsdoc < immutable.d.ts` prints one document
//! - **file mode**: `dtsdoc -o docs -f html type-definitions/*.d.ts`

use anyhow::{Context, Result};
use clap::Parser;
use dtsdoc::highlight::PrismHighlighter;
use dtsdoc::markup::{MarkdownRenderer, MarkupOptions};
use dtsdoc::merge;
use dtsdoc::render;
use dtsdoc::DocumentNode;
use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "dtsdoc",
    about = "Generate API documentation from TypeScript declaration files"
)]
struct Cli {
    /// Input files (glob patterns and directories supported). If omitted, reads from stdin.
    files: Vec<String>,

    /// Output directory (required when files are given)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Output format: json (default), html
    #[arg(short = 'f', long, default_value = "json")]
    format: String,

    /// Merge every input into a single NAME.<ext> instead of one output per module
    #[arg(long, value_name = "NAME")]
    bundle: Option<String>,

    /// Abort on the first file that fails to parse or extract
    #[arg(long)]
    strict: bool,

    /// Disable syntax highlighting of code blocks
    #[arg(long)]
    no_highlight: bool,

    /// Class of the <code> element wrapping code blocks
    #[arg(long, default_value = "codeBlock")]
    code_class: String,

    /// Language assumed for code fences without an info string
    #[arg(long, default_value = "javascript")]
    language: String,

    /// Log extraction progress to stderr
    #[arg(short = 'v', long)]
    verbose: bool,
}

/// Environment variable holding the log filter.
const LOG_ENV: &str = "DTSDOC_LOG";

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let markup = MarkdownRenderer::new(markup_options(&cli));

    if cli.files.is_empty() {
        return stdin_mode(&cli, &markup);
    }

    file_mode(&cli, &markup)
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .init();
}

fn markup_options(cli: &Cli) -> MarkupOptions {
    MarkupOptions {
        code_class: cli.code_class.clone(),
        default_language: cli.language.clone(),
        highlighter: if cli.no_highlight {
            None
        } else {
            Some(Box::new(PrismHighlighter))
        },
    }
}

/// stdin mode: read one declaration file from stdin, write the rendered document to stdout.
fn stdin_mode(cli: &Cli, markup: &MarkdownRenderer) -> Result<()> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;

    let doc = dtsdoc::extract(&input, markup).context("failed to extract stdin")?;
    let renderer = render::create_renderer(&cli.format, markup)?;
    print!("{}", renderer.render("stdin", &doc)?);
    Ok(())
}

/// file mode: extract every input, merge by module name, write to the output directory.
fn file_mode(cli: &Cli, markup: &MarkdownRenderer) -> Result<()> {
    let output_dir = cli
        .output
        .as_deref()
        .context("--output is required when files are given")?;

    // Fail on a bad format before any work is done
    let renderer = render::create_renderer(&cli.format, markup)?;
    let ext = renderer.file_extension();

    fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create output directory: {}", output_dir.display()))?;

    let input_files = expand_globs(&cli.files)?;

    let mut extracted: Vec<(String, DocumentNode)> = Vec::new();
    for path in &input_files {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        match dtsdoc::extract(&content, markup) {
            Ok(doc) => {
                debug!(file = %path.display(), entries = doc.len(), "extracted");
                extracted.push((path.to_string_lossy().to_string(), doc));
            }
            Err(e) if cli.strict => {
                return Err(e).with_context(|| format!("failed to extract {}", path.display()));
            }
            Err(e) => {
                warn!("skipping {}: {}", path.display(), e);
            }
        }
    }

    let outputs = match &cli.bundle {
        Some(name) => vec![(
            name.clone(),
            merge::merge_all(extracted.into_iter().map(|(_, doc)| doc)),
        )],
        None => merge::merge(extracted),
    };

    for (name, doc) in outputs {
        // Nothing documented (e.g. a file of type aliases only)
        if doc.is_empty() {
            debug!(module = %name, "nothing documented, no output written");
            continue;
        }

        let out_path = output_dir.join(format!("{}.{}", name, ext));
        let output = renderer.render(&name, &doc)?;
        fs::write(&out_path, &output)
            .with_context(|| format!("failed to write {}", out_path.display()))?;
        info!("wrote {}", out_path.display());
    }

    Ok(())
}

/// Extension of scanned files; covers `.d.ts`.
const SUPPORTED_EXTENSIONS: &[&str] = &["ts"];

/// Expand glob patterns into a list of real file paths.
/// Bare directories are scanned (non-recursively) for declaration files.
fn expand_globs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        let path = Path::new(pattern);
        if path.is_file() {
            files.push(path.to_path_buf());
            continue;
        }
        if path.is_dir() {
            let entries = fs::read_dir(path)
                .with_context(|| format!("failed to read directory: {}", path.display()))?;
            for entry in entries.flatten() {
                let p = entry.path();
                if p.is_file() && is_supported(&p) {
                    files.push(p);
                }
            }
            continue;
        }
        let matches: Vec<_> = glob::glob(pattern)
            .with_context(|| format!("invalid glob pattern: {}", pattern))?
            .filter_map(|r| r.ok())
            .filter(|p| p.is_file())
            .collect();
        if matches.is_empty() {
            warn!("no files matched: {}", pattern);
        }
        files.extend(matches);
    }
    // Sorted for deterministic merge order
    files.sort();
    files.dedup();
    Ok(files)
}

fn is_supported(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext))
}
