//! Check command implementation.

use anyhow::{bail, Context, Result};
use naming_lint_core::{Analyzer, Config, RuleBox};
use naming_lint_rules::configured_rules;
use naming_lint_ts::default_frontends;
use std::path::Path;

use crate::config_resolver::ConfigSource;
use crate::OutputFormat;

/// Runs the check command.
pub fn run(
    path: &Path,
    format: OutputFormat,
    rules_filter: Option<String>,
    exclude: Vec<String>,
    source: &ConfigSource,
) -> Result<()> {
    let config = source.load()?;
    let fail_on = config.fail_on();

    let rules = select_rules(&config, rules_filter.as_deref())?;

    // A single file is checked against its own directory.
    let (root, only_file) = if path.is_file() {
        let parent = path.parent().filter(|p| !p.as_os_str().is_empty());
        (parent.unwrap_or(Path::new(".")), Some(path))
    } else {
        (path, None)
    };

    let mut builder = Analyzer::builder().root(root).config(config).excludes(exclude);
    for frontend in default_frontends() {
        builder = builder.frontend_box(frontend);
    }
    for rule in rules {
        builder = builder.rule_box(rule);
    }

    let analyzer = builder.build().context("Failed to build analyzer")?;

    tracing::info!("Analyzing {:?} with {} rules", path, analyzer.rule_count());

    let result = match only_file {
        Some(file) => {
            // Reported paths are relative to the root, and `pretty` re-reads
            // the source through it.
            let file = file
                .file_name()
                .map_or_else(|| file.to_path_buf(), |name| analyzer.root().join(name));
            let file = file.as_path();
            let content = std::fs::read_to_string(file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let mut result = naming_lint_core::LintResult::new();
            result.violations = analyzer
                .check_source(file, &content)
                .with_context(|| format!("Failed to check {}", file.display()))?;
            result.files_checked = 1;
            result.sort();
            result
        }
        None => analyzer.analyze().context("Analysis failed")?,
    };

    super::output::print(&result, format, analyzer.root())?;

    if result.has_violations_at(fail_on) {
        std::process::exit(1);
    }

    Ok(())
}

/// Selects the rules to run, honoring `--rules` when given.
fn select_rules(config: &Config, filter: Option<&str>) -> Result<Vec<RuleBox>> {
    let available = configured_rules(config);
    let Some(filter) = filter else {
        return Ok(available);
    };

    let wanted: Vec<&str> = filter
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    for name in &wanted {
        if !available
            .iter()
            .any(|r| r.name() == *name || r.code() == *name)
        {
            tracing::warn!("Unknown rule: {}", name);
        }
    }

    let selected: Vec<RuleBox> = available
        .into_iter()
        .filter(|r| wanted.contains(&r.name()) || wanted.contains(&r.code()))
        .collect();

    if selected.is_empty() {
        bail!("No known rules in --rules {filter}; run `naming-lint list-rules`");
    }
    Ok(selected)
}
