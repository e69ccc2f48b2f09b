//! Core analyzer for orchestrating lint execution.
//!
//! The analyzer is the host side of the rule contract: it discovers source
//! files, hands each one to the matching [`LanguageFrontend`], dispatches the
//! outermost applicable nodes to every enabled [`Rule`] and post-processes the
//! reported violations (allow directives, severity overrides, sorting).

use crate::config::{Config, RuleConfig};
use crate::context::FileContext;
use crate::frontend::{FrontendBox, LanguageFrontend};
use crate::rule::{Rule, RuleBox};
use crate::syntax::SyntaxNode;
use crate::types::{LintResult, Severity, Suggestion, Violation};
use crate::utils::allowance::check_allow_with_reason;

use rayon::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, trace, warn};

/// Errors that can occur during analysis.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// IO error reading files.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error walking the source tree.
    #[error("Failed to walk source tree: {0}")]
    Walk(#[from] ignore::Error),

    /// Error parsing a source file.
    #[error("Parse error in {path}: {message}")]
    Parse {
        /// Path to the file that failed to parse.
        path: PathBuf,
        /// Parse error message.
        message: String,
    },

    /// No registered frontend handles the file.
    #[error("No frontend handles {0}")]
    UnsupportedFile(PathBuf),

    /// Glob pattern error.
    #[error("Invalid glob pattern: {0}")]
    Glob(#[from] glob::PatternError),

    /// Worker pool could not be created.
    #[error("Failed to start worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

/// Builder for configuring an [`Analyzer`].
#[derive(Default)]
pub struct AnalyzerBuilder {
    root: Option<PathBuf>,
    rules: Vec<RuleBox>,
    frontends: Vec<FrontendBox>,
    exclude_patterns: Vec<String>,
    include_patterns: Vec<String>,
    config: Option<Config>,
    fail_on_parse_error: bool,
}

impl AnalyzerBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the root directory to analyze.
    #[must_use]
    pub fn root(mut self, path: impl Into<PathBuf>) -> Self {
        self.root = Some(path.into());
        self
    }

    /// Adds a rule to the analyzer.
    #[must_use]
    pub fn rule<R: Rule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Adds a boxed rule to the analyzer.
    #[must_use]
    pub fn rule_box(mut self, rule: RuleBox) -> Self {
        self.rules.push(rule);
        self
    }

    /// Adds a language frontend.
    #[must_use]
    pub fn frontend<F: LanguageFrontend + 'static>(mut self, frontend: F) -> Self {
        self.frontends.push(Box::new(frontend));
        self
    }

    /// Adds a boxed language frontend.
    #[must_use]
    pub fn frontend_box(mut self, frontend: FrontendBox) -> Self {
        self.frontends.push(frontend);
        self
    }

    /// Adds an exclude glob pattern.
    #[must_use]
    pub fn exclude(mut self, pattern: impl Into<String>) -> Self {
        self.exclude_patterns.push(pattern.into());
        self
    }

    /// Adds multiple exclude glob patterns.
    #[must_use]
    pub fn excludes<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_patterns
            .extend(patterns.into_iter().map(Into::into));
        self
    }

    /// Adds an include glob pattern.
    #[must_use]
    pub fn include(mut self, pattern: impl Into<String>) -> Self {
        self.include_patterns.push(pattern.into());
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Sets whether to fail on parse errors (default: false).
    #[must_use]
    pub fn fail_on_parse_error(mut self, fail: bool) -> Self {
        self.fail_on_parse_error = fail;
        self
    }

    /// Builds the analyzer.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be read or a glob
    /// pattern is invalid.
    pub fn build(self) -> Result<Analyzer, AnalyzerError> {
        let root = self
            .root
            .or_else(|| self.config.as_ref().map(|c| c.analyzer.root.clone()))
            .unwrap_or_else(|| PathBuf::from("."));

        let root = if root.is_absolute() {
            root
        } else {
            std::env::current_dir()?.join(&root)
        };

        let config = self.config.unwrap_or_default();

        let mut exclude_patterns = self.exclude_patterns;
        exclude_patterns.extend(config.analyzer.exclude.iter().cloned());
        if exclude_patterns.is_empty() {
            exclude_patterns = crate::config::default_excludes();
        }

        let mut include_patterns = self.include_patterns;
        include_patterns.extend(config.analyzer.include.iter().cloned());

        let exclude = compile_patterns(&exclude_patterns)?;
        let include = compile_patterns(&include_patterns)?;

        Ok(Analyzer {
            root,
            rules: self.rules,
            frontends: self.frontends,
            exclude_patterns,
            exclude,
            include,
            config,
            fail_on_parse_error: self.fail_on_parse_error,
        })
    }
}

fn compile_patterns(patterns: &[String]) -> Result<Vec<glob::Pattern>, AnalyzerError> {
    patterns
        .iter()
        .map(|p| glob::Pattern::new(p).map_err(AnalyzerError::from))
        .collect()
}

/// The main analyzer that orchestrates lint execution.
///
/// Use [`Analyzer::builder()`] to construct an instance.
pub struct Analyzer {
    root: PathBuf,
    rules: Vec<RuleBox>,
    frontends: Vec<FrontendBox>,
    exclude_patterns: Vec<String>,
    exclude: Vec<glob::Pattern>,
    include: Vec<glob::Pattern>,
    config: Config,
    fail_on_parse_error: bool,
}

impl Analyzer {
    /// Creates a new builder for configuring an analyzer.
    #[must_use]
    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::new()
    }

    /// Returns the root directory being analyzed.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the number of registered rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Returns the severity threshold that makes a run fail.
    #[must_use]
    pub fn fail_on(&self) -> Severity {
        self.config.fail_on()
    }

    /// Analyzes all files and returns the results.
    ///
    /// Files are analyzed in parallel; the returned violations are sorted by
    /// file, line and column.
    ///
    /// # Errors
    ///
    /// Returns an error if file discovery or reading fails, or if a file fails
    /// to parse while `fail_on_parse_error` is set.
    pub fn analyze(&self) -> Result<LintResult, AnalyzerError> {
        info!("Starting analysis at {:?}", self.root);

        let files = self.discover_files()?;
        info!("Found {} files to analyze", files.len());

        let outcomes = self.in_pool(|| {
            files
                .par_iter()
                .map(|path| self.analyze_file(path))
                .collect::<Vec<_>>()
        })?;

        let mut result = LintResult::new();
        for outcome in outcomes {
            match outcome {
                Ok(violations) => {
                    result.violations.extend(violations);
                    result.files_checked += 1;
                }
                Err(AnalyzerError::Parse { path, message }) => {
                    warn!("Failed to parse {}: {}", path.display(), message);
                    if self.fail_on_parse_error {
                        return Err(AnalyzerError::Parse { path, message });
                    }
                }
                Err(e) => return Err(e),
            }
        }

        result.sort();

        info!(
            "Analysis complete: {} violations in {} files",
            result.violations.len(),
            result.files_checked
        );

        Ok(result)
    }

    /// Runs `op` on the configured worker pool, or rayon's global pool.
    fn in_pool<T, F>(&self, op: F) -> Result<T, AnalyzerError>
    where
        T: Send,
        F: FnOnce() -> T + Send,
    {
        match self.config.analyzer.parallelism {
            Some(threads) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()?;
                Ok(pool.install(op))
            }
            None => Ok(op()),
        }
    }

    /// Reads and analyzes a single file.
    fn analyze_file(&self, path: &Path) -> Result<Vec<Violation>, AnalyzerError> {
        debug!("Analyzing: {}", path.display());
        let content = std::fs::read_to_string(path)?;
        self.check_source(path, &content)
    }

    /// Analyzes source text that is already in memory.
    ///
    /// `path` selects the frontend by extension and is reported relative to
    /// the analyzer root. Violations are returned in the order rules reported
    /// them.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyzerError::UnsupportedFile`] if no frontend handles
    /// `path`, or [`AnalyzerError::Parse`] if the frontend fails.
    pub fn check_source(
        &self,
        path: &Path,
        source: &str,
    ) -> Result<Vec<Violation>, AnalyzerError> {
        let frontend = self
            .frontend_for(path)
            .ok_or_else(|| AnalyzerError::UnsupportedFile(path.to_path_buf()))?;

        let tree = frontend
            .parse(source)
            .map_err(|e| AnalyzerError::Parse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        let ctx = FileContext::new(path, source, frontend.language_id(), &self.root);
        Ok(self.check_tree(&ctx, &tree))
    }

    /// Runs every enabled rule over an already lowered tree.
    ///
    /// Each rule gets a fresh sink per file and is called once for every
    /// outermost node of a kind it applies to, in document order.
    #[must_use]
    pub fn check_tree(&self, ctx: &FileContext, tree: &SyntaxNode) -> Vec<Violation> {
        let mut violations = Vec::new();

        for rule in &self.rules {
            if !self.config.is_rule_enabled(rule.name()) {
                debug!("Skipping disabled rule: {}", rule.name());
                continue;
            }

            let mut sink: Vec<Violation> = Vec::new();
            for node in tree.outermost(rule.meta().applies_to) {
                trace!(
                    "Dispatching {} `{}` to {}",
                    node.kind.tag(),
                    node.name_text().unwrap_or("<anonymous>"),
                    rule.name()
                );
                rule.visit(ctx, node, &mut sink);
            }

            let sink = Self::apply_allowances(rule.as_ref(), ctx, sink);
            violations.extend(self.apply_severity_override(rule.name(), sink));
        }

        violations
    }

    /// Drops violations suppressed by an allow directive.
    fn apply_allowances(
        rule: &dyn Rule,
        ctx: &FileContext,
        violations: Vec<Violation>,
    ) -> Vec<Violation> {
        let keys = [rule.name(), rule.code()];
        let mut kept = Vec::with_capacity(violations.len());

        for violation in violations {
            let check = check_allow_with_reason(ctx.content, violation.location.line, &keys);
            if !check.is_allowed() {
                kept.push(violation);
                continue;
            }

            debug!(
                "Allowed {} at {}:{}",
                rule.name(),
                violation.location.file.display(),
                violation.location.line
            );

            if rule.requires_allow_reason() && check.reason().is_none() {
                let name = rule.name();
                kept.push(
                    Violation::new(
                        rule.code(),
                        name,
                        Severity::Warning,
                        violation.location,
                        format!("Allow directive for '{name}' is missing required reason"),
                    )
                    .with_suggestion(Suggestion::new(
                        "Add reason=\"...\" to explain why this exception is necessary",
                    )),
                );
            }
        }

        kept
    }

    /// Applies severity overrides from configuration and drops ignored ones.
    fn apply_severity_override(
        &self,
        rule_name: &str,
        mut violations: Vec<Violation>,
    ) -> Vec<Violation> {
        if let Some(severity) = self.config.rule_severity(rule_name) {
            for v in &mut violations {
                v.severity = severity;
            }
        }
        violations.retain(|v| v.severity != Severity::Ignore);
        violations
    }

    /// Returns the first frontend that handles `path`.
    fn frontend_for(&self, path: &Path) -> Option<&dyn LanguageFrontend> {
        self.frontends
            .iter()
            .find(|f| f.handles(path))
            .map(|f| f.as_ref())
    }

    /// Discovers all source files some frontend handles.
    fn discover_files(&self) -> Result<Vec<PathBuf>, AnalyzerError> {
        let mut builder = ignore::WalkBuilder::new(&self.root);
        builder
            .hidden(false)
            .git_ignore(self.config.analyzer.respect_gitignore);

        let mut files = Vec::new();
        for entry in builder.build() {
            let entry = entry?;
            let path = entry.path();

            if !path.is_file() || self.frontend_for(path).is_none() {
                continue;
            }

            if self.should_exclude(path) {
                debug!("Excluding: {}", path.display());
                continue;
            }

            if !self.is_included(path) {
                continue;
            }

            files.push(path.to_path_buf());
        }

        files.sort();
        Ok(files)
    }

    /// Checks if a path should be excluded.
    ///
    /// Patterns are matched against the path relative to the root, so a root
    /// that itself lives under `build/` is still analyzed.
    fn should_exclude(&self, path: &Path) -> bool {
        let relative = path.strip_prefix(&self.root).unwrap_or(path);
        let path_str = format!("/{}", relative.to_string_lossy().replace('\\', "/"));

        if self
            .exclude
            .iter()
            .any(|p| p.matches_path(relative) || p.matches(&path_str))
        {
            return true;
        }

        // Directory patterns like "**/build/**" also match as a whole path
        // segment anywhere below the root.
        self.exclude_patterns.iter().any(|pattern| {
            pattern.strip_suffix("/**").is_some_and(|dir| {
                let dir = dir.replace("**", "");
                let dir = dir.trim_matches('/');
                !dir.is_empty() && path_str.contains(&format!("/{dir}/"))
            })
        })
    }

    /// Checks a path against the include allow-list (empty means everything).
    fn is_included(&self, path: &Path) -> bool {
        if self.include.is_empty() {
            return true;
        }
        let relative = path.strip_prefix(&self.root).unwrap_or(path);
        self.include
            .iter()
            .any(|p| p.matches_path(relative) || p.matches_path(path))
    }

    /// Gets the rule configuration for a specific rule.
    #[must_use]
    pub fn rule_config(&self, rule_name: &str) -> Option<&RuleConfig> {
        self.config.rule(rule_name)
    }
}
