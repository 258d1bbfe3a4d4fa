//! Individual catalog checks.

use crate::catalog::GroupTree;
use crate::codegen::{NameIssue, NameNote, ResolvedTree};
use crate::naming::{escape_keyword, is_valid_identifier};

use super::diagnostic::{Diagnostic, ValidationResult};

/// Warn when the catalog holds no image sets at all.
pub fn check_empty_catalog(tree: &GroupTree) -> ValidationResult {
    let mut result = ValidationResult::new();

    if tree.is_empty() {
        result.push(
            Diagnostic::warning(
                "imageset::validate::empty-catalog",
                "No image sets found; the generated enum will have no cases",
            )
            .with_help("Check that the path points at an .xcassets folder containing .imageset entries"),
        );
    }

    result
}

/// The configured top-level name is used verbatim, so it has to be a plain
/// identifier.
pub fn check_type_name(resolved: &ResolvedTree) -> ValidationResult {
    let mut result = ValidationResult::new();
    let name = &resolved.root().type_name;

    if !is_valid_identifier(name) || escape_keyword(name) != *name {
        result.push(
            Diagnostic::error(
                "imageset::validate::invalid-type-name",
                format!("Top-level type name '{}' is not a usable Swift identifier", name),
            )
            .with_help("Pass a name such as ImageAsset via --type-name or `type_name`"),
        );
    }

    result
}

/// Report every name that could not be used as-is.
pub fn check_names(resolved: &ResolvedTree) -> ValidationResult {
    let mut result = ValidationResult::new();

    for note in resolved.notes() {
        result.push(name_diagnostic(note));
    }

    result
}

fn name_diagnostic(note: &NameNote) -> Diagnostic {
    match note.issue {
        NameIssue::Unrepresentable => Diagnostic::warning(
            "imageset::validate::unrepresentable-name",
            format!(
                "{} '{}' in {} has no usable identifier characters; generated as '{}'",
                note.kind, note.original, note.scope, note.identifier
            ),
        )
        .with_help("Rename it to include letters or digits"),

        NameIssue::Collision => Diagnostic::warning(
            "imageset::validate::identifier-collision",
            format!(
                "{} '{}' in {} collides with a sibling; generated as '{}'",
                note.kind, note.original, note.scope, note.identifier
            ),
        )
        .with_help("Rename one of the entries so they differ after removing '-', '_' and spaces"),

        NameIssue::InvalidCharacters => Diagnostic::warning(
            "imageset::validate::invalid-identifier",
            format!(
                "{} '{}' in {} has characters Swift rejects; generated as '{}'",
                note.kind, note.original, note.scope, note.identifier
            ),
        )
        .with_help("Use only letters, digits, '-', '_' and spaces in asset and group names"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::GroupId;
    use crate::validation::Severity;

    #[test]
    fn test_empty_catalog_warns() {
        let result = check_empty_catalog(&GroupTree::new());
        assert_eq!(result.warning_count(), 1);

        let mut tree = GroupTree::new();
        tree.push_image(GroupId::ROOT, "logo");
        assert!(check_empty_catalog(&tree).is_ok());
    }

    #[test]
    fn test_type_name_must_be_an_identifier() {
        let tree = GroupTree::new();
        assert!(check_type_name(&ResolvedTree::new(&tree, "Asset")).is_ok());

        for bad in ["My Assets", "2Assets", "Type", ""] {
            let result = check_type_name(&ResolvedTree::new(&tree, bad));
            assert_eq!(result.error_count(), 1, "{}", bad);
        }
    }

    #[test]
    fn test_name_issues_map_to_diagnostics() {
        let mut tree = GroupTree::new();
        tree.push_image(GroupId::ROOT, "a-b");
        tree.push_image(GroupId::ROOT, "a_b");
        tree.push_image(GroupId::ROOT, "___");
        tree.push_image(GroupId::ROOT, "icon.fill");

        let result = check_names(&ResolvedTree::new(&tree, "ImageAsset"));
        let codes: Vec<&str> = result.iter().map(|d| d.code.as_str()).collect();

        assert_eq!(
            codes,
            vec![
                "imageset::validate::unrepresentable-name",
                "imageset::validate::identifier-collision",
                "imageset::validate::invalid-identifier",
            ]
        );
        assert!(!result.has_errors());
        let invalid = result.iter().last().unwrap();
        assert_eq!(invalid.severity, Severity::Warning);
        assert!(invalid.message.contains("'icon.fill'"));
        assert!(invalid.message.contains("'icon_fill'"));
    }
}
