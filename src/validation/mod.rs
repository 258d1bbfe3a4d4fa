//! Checks run against a collected catalog.
//!
//! Generation never fails on odd asset or group names: it repairs them,
//! substitutes placeholders and adds suffixes. These checks surface what was
//! changed so the CLI can report it. Only a bad top-level type name is an
//! error. Used by `validate` and by `generate`.

mod checks;
mod diagnostic;

pub use diagnostic::{Diagnostic, Severity, ValidationResult};

use crate::catalog::GroupTree;
use crate::codegen::ResolvedTree;

/// Run all checks against a tree and its resolved names.
pub fn validate_tree(tree: &GroupTree, resolved: &ResolvedTree) -> ValidationResult {
    let mut result = ValidationResult::new();

    result.merge(checks::check_type_name(resolved));
    result.merge(checks::check_empty_catalog(tree));
    result.merge(checks::check_names(resolved));

    result
}

/// Print diagnostics to stderr.
pub fn print_diagnostics(result: &ValidationResult) {
    for d in result.iter() {
        eprintln!("  {}[{}]: {}", d.severity, d.code, d.message);
        if let Some(help) = &d.help {
            eprintln!("    help: {}", help);
        }
    }

    let errors = result.error_count();
    let warnings = result.warning_count();

    if errors > 0 {
        eprintln!(
            "Validation failed: {} error(s), {} warning(s)",
            errors, warnings
        );
    } else if warnings > 0 {
        eprintln!("Validation passed ({} warning(s))", warnings);
    } else {
        eprintln!("Validation passed.");
    }
}
