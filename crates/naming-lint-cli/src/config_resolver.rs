//! Configuration lookup for the `check` command.
//!
//! Sources, first match wins:
//!
//! 1. `--config` flag (or `NAMING_LINT_CONFIG`)
//! 2. `naming-lint.toml` or `.naming-lint.toml` in the checked directory or
//!    any of its ancestors, nearest first
//! 3. `$NAMING_LINT_CONFIG_DIR/config.toml`, else `~/.naming-lint/config.toml`
//! 4. Built-in defaults

use anyhow::{Context, Result};
use naming_lint_core::Config;
use std::path::{Path, PathBuf};

/// Where the configuration was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Explicitly specified via `--config` flag.
    Explicit(PathBuf),
    /// Found next to the checked sources or in an ancestor directory.
    Project(PathBuf),
    /// Loaded from the user-wide config directory.
    Global(PathBuf),
    /// No config found; defaults will be used.
    Default,
}

impl ConfigSource {
    /// Returns the resolved path, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Explicit(p) | Self::Project(p) | Self::Global(p) => Some(p),
            Self::Default => None,
        }
    }

    /// Loads the configuration this source points at.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML.
    pub fn load(&self) -> Result<Config> {
        let Some(path) = self.path() else {
            return Ok(Config::default());
        };
        if matches!(self, Self::Global(_)) {
            tracing::info!("Using global config: {}", path.display());
        }
        Config::from_file(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))
    }
}

/// Project-level config file names, checked in order within each directory.
const PROJECT_CONFIG_NAMES: &[&str] = &["naming-lint.toml", ".naming-lint.toml"];

/// Config file name within the global config directory.
const GLOBAL_CONFIG_NAME: &str = "config.toml";

/// Resolves the configuration for `target`, a directory or a single file.
#[must_use]
pub fn resolve(target: &Path, explicit: Option<&Path>) -> ConfigSource {
    resolve_inner(target, explicit, global_config_dir())
}

/// Same as [`resolve`] with the global directory injected, so tests do not
/// race on environment variables.
fn resolve_inner(target: &Path, explicit: Option<&Path>, global_dir: Option<PathBuf>) -> ConfigSource {
    if let Some(p) = explicit {
        return ConfigSource::Explicit(p.to_path_buf());
    }

    if let Some(found) = find_project_config(target) {
        tracing::debug!("Found project config: {}", found.display());
        return ConfigSource::Project(found);
    }

    if let Some(dir) = global_dir {
        let candidate = dir.join(GLOBAL_CONFIG_NAME);
        if candidate.is_file() {
            tracing::debug!("Found global config: {}", candidate.display());
            return ConfigSource::Global(candidate);
        }
    }

    ConfigSource::Default
}

fn find_project_config(target: &Path) -> Option<PathBuf> {
    let start = if target.is_file() {
        target.parent()?.to_path_buf()
    } else {
        target.to_path_buf()
    };
    let start = std::fs::canonicalize(&start).unwrap_or(start);

    start.ancestors().find_map(|dir| {
        PROJECT_CONFIG_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|candidate| candidate.is_file())
    })
}

/// Returns the user-wide config directory.
///
/// `$NAMING_LINT_CONFIG_DIR` wins over `~/.naming-lint/`.
#[must_use]
pub fn global_config_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var("NAMING_LINT_CONFIG_DIR") {
        return Some(PathBuf::from(dir));
    }
    home::home_dir().map(|h| h.join(".naming-lint"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use naming_lint_core::Severity;
    use std::fs;
    use tempfile::TempDir;

    fn canonical(path: &Path) -> PathBuf {
        fs::canonicalize(path).unwrap()
    }

    #[test]
    fn explicit_takes_priority_over_project() {
        let tmp = TempDir::new().unwrap();
        let explicit = tmp.path().join("custom.toml");
        fs::write(&explicit, "").unwrap();

        let project = tmp.path().join("project");
        fs::create_dir(&project).unwrap();
        fs::write(project.join("naming-lint.toml"), "").unwrap();

        let result = resolve_inner(&project, Some(&explicit), None);
        assert_eq!(result, ConfigSource::Explicit(explicit));
    }

    #[test]
    fn explicit_does_not_check_existence() {
        let result = resolve_inner(
            Path::new("/tmp"),
            Some(Path::new("/nonexistent.toml")),
            None,
        );
        assert_eq!(
            result,
            ConfigSource::Explicit(PathBuf::from("/nonexistent.toml"))
        );
        assert!(result.load().is_err());
    }

    #[test]
    fn project_config_found() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("naming-lint.toml"), "").unwrap();

        let result = resolve_inner(tmp.path(), None, None);
        assert_eq!(
            result,
            ConfigSource::Project(canonical(tmp.path()).join("naming-lint.toml"))
        );
    }

    #[test]
    fn plain_name_preferred_over_dot_prefix() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("naming-lint.toml"), "").unwrap();
        fs::write(tmp.path().join(".naming-lint.toml"), "").unwrap();

        let result = resolve_inner(tmp.path(), None, None);
        assert_eq!(
            result,
            ConfigSource::Project(canonical(tmp.path()).join("naming-lint.toml"))
        );
    }

    #[test]
    fn nearest_ancestor_config_wins() {
        let tmp = TempDir::new().unwrap();
        let module = tmp.path().join("app/src/main");
        fs::create_dir_all(&module).unwrap();
        fs::write(tmp.path().join("naming-lint.toml"), "").unwrap();
        fs::write(tmp.path().join("app/.naming-lint.toml"), "").unwrap();

        let result = resolve_inner(&module, None, None);
        assert_eq!(
            result,
            ConfigSource::Project(canonical(tmp.path()).join("app/.naming-lint.toml"))
        );
    }

    #[test]
    fn single_file_target_uses_its_directory() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("Main.java");
        fs::write(&file, "class Main {}").unwrap();
        fs::write(tmp.path().join(".naming-lint.toml"), "").unwrap();

        let result = resolve_inner(&file, None, None);
        assert!(matches!(result, ConfigSource::Project(_)));
    }

    #[test]
    fn global_fallback_when_no_project_config() {
        let project = TempDir::new().unwrap();
        let global = TempDir::new().unwrap();
        fs::write(global.path().join("config.toml"), "fail_on = \"warning\"\n").unwrap();

        let result = resolve_inner(project.path(), None, Some(global.path().to_path_buf()));
        assert_eq!(
            result,
            ConfigSource::Global(global.path().join("config.toml"))
        );
        assert_eq!(result.load().unwrap().fail_on(), Severity::Warning);
    }

    #[test]
    fn global_dir_missing_config_file_returns_default() {
        let project = TempDir::new().unwrap();
        let global = TempDir::new().unwrap();

        let result = resolve_inner(project.path(), None, Some(global.path().to_path_buf()));
        assert_eq!(result, ConfigSource::Default);
    }

    #[test]
    fn default_loads_builtin_config() {
        let config = ConfigSource::Default.load().unwrap();
        assert_eq!(config.fail_on(), Severity::Error);
        assert!(config.is_rule_enabled("naming-convention"));
    }

    #[test]
    fn invalid_project_config_is_reported_with_path() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("naming-lint.toml"), "fail_on = 3\n").unwrap();

        let err = resolve_inner(tmp.path(), None, None).load().unwrap_err();
        assert!(err.to_string().contains("naming-lint.toml"), "{err}");
    }

    #[test]
    fn config_source_path_returns_some_for_all_others() {
        let p = PathBuf::from("/tmp/test.toml");
        assert!(ConfigSource::Default.path().is_none());
        assert_eq!(ConfigSource::Explicit(p.clone()).path(), Some(p.as_path()));
        assert_eq!(ConfigSource::Project(p.clone()).path(), Some(p.as_path()));
        assert_eq!(ConfigSource::Global(p.clone()).path(), Some(p.as_path()));
    }
}
