//! Dump-ast command implementation.

use anyhow::{Context, Result};
use std::path::Path;

/// Runs the dump-ast command.
///
/// Prints the tree exactly as rules see it, which helps when a declaration is
/// reported (or missed) unexpectedly.
pub fn run(file: &Path) -> Result<()> {
    let frontend = naming_lint_ts::frontend_for(file)
        .with_context(|| format!("No frontend handles {}", file.display()))?;

    let source = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;

    let tree = frontend
        .parse(&source)
        .with_context(|| format!("Failed to parse {}", file.display()))?;

    print!("{tree}");
    Ok(())
}
