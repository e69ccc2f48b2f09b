//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# naming-lint configuration

# Exit with status 1 when a violation at or above this severity is found
fail_on = "error"

[analyzer]
# Root directory to analyze (default: current directory)
# root = "./app/src"

# Glob patterns to exclude from analysis
exclude = [
    "**/build/**",
    "**/target/**",
    "**/.gradle/**",
]

# Respect .gitignore files
respect_gitignore = true

# Worker threads for file analysis (default: one per CPU)
# parallelism = 4

# Rule configurations
# Each rule can be enabled/disabled and have its severity overridden

[rules.naming-convention]
enabled = true
# severity = "warning"  # fatal | error | warning | info | ignore
# Report names starting with a/z/A/Z too
inclusive_bounds = false
"#;

/// Name of the file written by `init`.
const CONFIG_FILE: &str = "naming-lint.toml";

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    write_config(Path::new(CONFIG_FILE), force)?;

    println!("Created {CONFIG_FILE}");
    println!("\nNext steps:");
    println!("  1. Edit {CONFIG_FILE} to configure rules");
    println!("  2. Run: naming-lint check");

    Ok(())
}

fn write_config(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(config_path, DEFAULT_CONFIG)?;
    Ok(())
}
