//! End-to-end checks of the naming-convention rule over real Java and Kotlin
//! sources.

use std::path::{Path, PathBuf};

use naming_lint_core::{Analyzer, Config, LintResult, Severity};
use naming_lint_rules::NamingConvention;
use naming_lint_ts::{JavaFrontend, KotlinFrontend};

fn fixtures() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn analyzer(root: &Path, config: Config) -> Analyzer {
    let rule = NamingConvention::from_config(config.rule("naming-convention"));
    Analyzer::builder()
        .root(root)
        .frontend(JavaFrontend::new())
        .frontend(KotlinFrontend::new())
        .rule(rule)
        .config(config)
        .build()
        .unwrap()
}

fn lines(result: &LintResult) -> String {
    result
        .violations
        .iter()
        .map(|v| v.to_string().replace('\\', "/"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn reports_fixture_violations_in_order() {
    let result = analyzer(&fixtures(), Config::default()).analyze().unwrap();

    assert_eq!(result.files_checked, 4);
    insta::assert_snapshot!(lines(&result), @r"
    java/Scenarios.java:7:10: warning [NamingConventionWarning] the method must start with lowercase: DoWork
    java/Scenarios.java:19:18: warning [NamingConventionWarning] the name of class must start with uppercase: inner
    java/Scenarios.java:20:14: warning [NamingConventionWarning] the method must start with lowercase: Run
    java/Scenarios.java:26:21: warning [NamingConventionWarning] the method must start with lowercase: Call
    java/Scenarios.java:31:7: warning [NamingConventionWarning] the name of class must start with uppercase: myClass
    kotlin/Scenarios.kt:6:9: warning [NamingConventionWarning] the method must start with lowercase: DoWork
    kotlin/Scenarios.kt:11:13: warning [NamingConventionWarning] the method must start with lowercase: Create
    kotlin/Scenarios.kt:15:8: warning [NamingConventionWarning] the name of class must start with uppercase: registry
    kotlin/Scenarios.kt:19:12: warning [NamingConventionWarning] the name of class must start with uppercase: userDto
    ");
}

#[test]
fn inclusive_bounds_add_boundary_letters() {
    let config = Config::parse("[rules.naming-convention]\ninclusive_bounds = true\n").unwrap();
    let result = analyzer(&fixtures(), config).analyze().unwrap();

    let messages: Vec<_> = result
        .violations
        .iter()
        .filter(|v| v.location.file.ends_with("Scenarios.java"))
        .map(|v| v.message.as_str())
        .collect();
    for expected in [
        "the method must start with lowercase: Apply",
        "the method must start with lowercase: Zip",
        "the name of class must start with uppercase: aClass",
        "the name of class must start with uppercase: zebra",
    ] {
        assert!(messages.contains(&expected), "missing {expected}");
    }
}

#[test]
fn nested_violations_point_at_enclosing_type() {
    let result = analyzer(&fixtures(), Config::default()).analyze().unwrap();
    let run = result
        .violations
        .iter()
        .find(|v| v.message.ends_with(": Run"))
        .unwrap();
    assert_eq!(run.labels.len(), 1);
    assert_eq!(run.labels[0].message, "declared in `inner`");
    assert_eq!(run.labels[0].location.line, 19);
}

#[test]
fn severity_override_and_ignore() {
    let config = Config::parse("[rules.naming-convention]\nseverity = \"error\"\n").unwrap();
    let result = analyzer(&fixtures(), config).analyze().unwrap();
    assert!(result.has_errors());

    let config = Config::parse("[rules.naming-convention]\nseverity = \"ignore\"\n").unwrap();
    let result = analyzer(&fixtures(), config).analyze().unwrap();
    assert!(result.violations.is_empty());
}

#[test]
fn check_source_is_idempotent() {
    let source = "class foo { void Bar() {} }\n";
    let analyzer = analyzer(Path::new("/"), Config::default());
    let first = analyzer.check_source(Path::new("/Foo.java"), source).unwrap();
    let second = analyzer.check_source(Path::new("/Foo.java"), source).unwrap();
    assert_eq!(first.len(), 2);
    assert_eq!(first, second);
}

#[test]
fn reading_from_a_temporary_tree() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("src")).unwrap();
    std::fs::create_dir_all(dir.path().join("build/generated")).unwrap();
    std::fs::write(dir.path().join("src/Main.kt"), "class main\n").unwrap();
    std::fs::write(dir.path().join("build/generated/Gen.java"), "class gen {}\n").unwrap();
    std::fs::write(dir.path().join("README.md"), "# readme\n").unwrap();

    let result = analyzer(dir.path(), Config::default()).analyze().unwrap();
    assert_eq!(result.files_checked, 1);
    assert_eq!(result.violations.len(), 1);
    assert_eq!(result.violations[0].severity, Severity::Warning);
}

#[test]
fn long_expression_chain_does_not_exhaust_worker_stack() {
    let terms = vec!["\"a\""; 20_000].join(" + ");
    let source = format!("class Gen {{\n    String s = {terms};\n    void Bad() {{}}\n}}\n");

    // Same stack size as a default std or rayon worker thread.
    let handle = std::thread::Builder::new()
        .stack_size(2 * 1024 * 1024)
        .spawn(move || {
            let root = fixtures();
            analyzer(&root, Config::default())
                .check_source(&root.join("Gen.java"), &source)
                .unwrap()
        })
        .unwrap();
    let violations = handle.join().unwrap();

    let messages: Vec<_> = violations.iter().map(|v| v.message.as_str()).collect();
    assert_eq!(messages, ["the method must start with lowercase: Bad"]);
    assert_eq!(violations[0].location.line, 3);
}
