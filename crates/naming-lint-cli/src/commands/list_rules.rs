//! List rules command implementation.

use naming_lint_rules::all_rules;

/// Runs the list-rules command.
pub fn run() {
    println!("Available rules:\n");
    println!(
        "{:<26} {:<20} {:<9} {:<10} {:<4} Description",
        "Id", "Name", "Severity", "Category", "Prio"
    );
    println!("{}", "-".repeat(110));

    for rule in all_rules() {
        let meta = rule.meta();
        println!(
            "{:<26} {:<20} {:<9} {:<10} {:<4} {}",
            meta.id,
            meta.name,
            meta.severity.to_string(),
            meta.category.to_string(),
            meta.priority.to_string(),
            meta.brief
        );
    }

    println!("\nPresets:");
    println!("  recommended  - exclusive letter bounds, warnings (default)");
    println!("  strict       - inclusive letter bounds, errors");

    println!("\nUse --rules to filter specific rules, e.g.:");
    println!("  naming-lint check --rules naming-convention");
    println!("  naming-lint check --rules NamingConventionWarning");
}
