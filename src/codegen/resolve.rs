//! Identifier and raw value resolution.
//!
//! Before any Swift text is written, every group and image in the tree gets
//! its final identifier and raw value. Doing this once keeps the base enum and
//! the wrapper bindings in agreement about type paths, and gives validation a
//! record of every name that had to be changed.

use std::collections::HashSet;
use std::fmt;

use crate::catalog::{GroupId, GroupTree};
use crate::naming::{
    escape_keyword, is_valid_identifier, replace_invalid_characters, to_type_identifier,
    to_value_identifier,
};

/// Stand-in for an image whose name sanitizes to nothing.
pub const IMAGE_PLACEHOLDER: &str = "unnamedImage";

/// Stand-in for a group whose name sanitizes to nothing.
pub const GROUP_PLACEHOLDER: &str = "UnnamedGroup";

/// One `case` of a generated enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumCase {
    /// Image name as found in the catalog.
    pub image: String,
    /// Identifier as written in Swift (keywords escaped).
    pub identifier: String,
    /// Asset name the case resolves to at runtime.
    pub raw_value: String,
}

/// A group with everything needed to render it.
#[derive(Debug, Clone, Default)]
pub struct ResolvedGroup {
    /// Bare type name as written in Swift. The root carries the top-level name.
    pub type_name: String,
    /// Fully qualified type path, e.g. `ImageAsset.Icons.Navigation`.
    pub type_path: String,
    /// Cases sorted by original image name.
    pub cases: Vec<EnumCase>,
    /// Child groups sorted by group name.
    pub children: Vec<GroupId>,
}

/// Why a generated identifier differs from the plain sanitized name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameIssue {
    /// Sanitizing produced nothing usable; a placeholder was used.
    Unrepresentable,
    /// Another entry in the same enum already claimed the identifier.
    Collision,
    /// Characters Swift rejects were replaced with `_`.
    InvalidCharacters,
}

/// Which kind of entry a [`NameNote`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameKind {
    Image,
    Group,
}

impl fmt::Display for NameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameKind::Image => write!(f, "image"),
            NameKind::Group => write!(f, "group"),
        }
    }
}

/// A name that could not be used verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameNote {
    pub issue: NameIssue,
    pub kind: NameKind,
    /// Type path of the enum the entry lives in.
    pub scope: String,
    /// Name as found in the catalog.
    pub original: String,
    /// Identifier that ended up in the output.
    pub identifier: String,
}

/// Hands out unique identifiers within one enum.
#[derive(Debug, Default)]
struct Scope {
    used: HashSet<String>,
}

impl Scope {
    /// Claim `candidate`, appending 2, 3, ... until it is free.
    /// Returns the identifier and whether a suffix was needed.
    fn claim(&mut self, candidate: &str) -> (String, bool) {
        if self.used.insert(candidate.to_string()) {
            return (candidate.to_string(), false);
        }

        let mut n = 2;
        loop {
            let suffixed = format!("{}{}", candidate, n);
            if self.used.insert(suffixed.clone()) {
                return (suffixed, true);
            }
            n += 1;
        }
    }
}

/// The tree with identifiers, raw values and type paths filled in.
#[derive(Debug, Clone)]
pub struct ResolvedTree {
    groups: Vec<ResolvedGroup>,
    notes: Vec<NameNote>,
}

impl ResolvedTree {
    /// Resolve every group of `tree`, naming the top-level enum `type_name`.
    pub fn new(tree: &GroupTree, type_name: &str) -> Self {
        let mut resolved = Self {
            groups: vec![ResolvedGroup::default(); tree.group_count() + 1],
            notes: Vec::new(),
        };

        let mut resolver = Resolver {
            tree,
            out: &mut resolved,
        };
        resolver.resolve_group(GroupId::ROOT, type_name.to_string(), type_name.to_string(), "");

        resolved
    }

    /// The resolved root (top-level enum).
    pub fn root(&self) -> &ResolvedGroup {
        self.group(GroupId::ROOT)
    }

    pub fn group(&self, id: GroupId) -> &ResolvedGroup {
        &self.groups[id.index()]
    }

    /// Names that were substituted, suffixed or repaired.
    pub fn notes(&self) -> &[NameNote] {
        &self.notes
    }
}

struct Resolver<'a> {
    tree: &'a GroupTree,
    out: &'a mut ResolvedTree,
}

impl Resolver<'_> {
    /// `prefix` is the namespace path accumulated by the ancestors of `id`.
    fn resolve_group(&mut self, id: GroupId, type_name: String, type_path: String, prefix: &str) {
        let tree = self.tree;
        let node = tree.node(id);
        let contributes = !node.is_root && node.provides_namespace;

        let own_path = if contributes {
            join_path(prefix, &node.name)
        } else {
            prefix.to_string()
        };

        let mut case_scope = Scope::default();
        let mut cases = Vec::with_capacity(node.images.len());
        for image in tree.sorted_images(id) {
            let identifier = self.claim(
                &mut case_scope,
                NameKind::Image,
                &type_path,
                image,
                to_value_identifier(image),
                IMAGE_PLACEHOLDER,
            );
            let raw_value = if contributes {
                join_path(&own_path, image)
            } else {
                image.to_string()
            };
            cases.push(EnumCase {
                image: image.to_string(),
                identifier,
                raw_value,
            });
        }

        let children = tree.sorted_children(id);
        let mut type_scope = Scope::default();
        let mut child_names = Vec::with_capacity(children.len());
        for &child in &children {
            let name = &tree.node(child).name;
            let child_type = self.claim(
                &mut type_scope,
                NameKind::Group,
                &type_path,
                name,
                to_type_identifier(name),
                GROUP_PLACEHOLDER,
            );
            child_names.push(child_type);
        }

        for (&child, child_type) in children.iter().zip(child_names) {
            let child_path = format!("{}.{}", type_path, child_type);
            self.resolve_group(child, child_type, child_path, &own_path);
        }

        self.out.groups[id.index()] = ResolvedGroup {
            type_name,
            type_path,
            cases,
            children,
        };
    }

    fn claim(
        &mut self,
        scope: &mut Scope,
        kind: NameKind,
        scope_path: &str,
        original: &str,
        sanitized: String,
        placeholder: &str,
    ) -> String {
        let mut issue = None;
        let mut candidate = sanitized;

        if !candidate.is_empty() && !is_valid_identifier(&candidate) {
            candidate = replace_invalid_characters(&candidate);
            issue = Some(NameIssue::InvalidCharacters);
        }
        // Empty, or nothing left but the `_` wildcard
        if !is_valid_identifier(&candidate) {
            candidate = placeholder.to_string();
            issue = Some(NameIssue::Unrepresentable);
        }

        let (identifier, collided) = scope.claim(&candidate);
        if collided && issue.is_none() {
            issue = Some(NameIssue::Collision);
        }

        let identifier = escape_keyword(&identifier);
        if let Some(issue) = issue {
            self.out.notes.push(NameNote {
                issue,
                kind,
                scope: scope_path.to_string(),
                original: original.to_string(),
                identifier: identifier.clone(),
            });
        }
        identifier
    }
}

fn join_path(prefix: &str, segment: &str) -> String {
    if prefix.is_empty() {
        segment.to_string()
    } else {
        format!("{}/{}", prefix, segment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(tree: &mut GroupTree, parent: GroupId, name: &str, ns: bool) -> GroupId {
        tree.child_or_insert(parent, name, ns)
    }

    fn raw_values(resolved: &ResolvedTree, id: GroupId) -> Vec<&str> {
        resolved.group(id).cases.iter().map(|c| c.raw_value.as_str()).collect()
    }

    #[test]
    fn test_namespace_composition() {
        let mut tree = GroupTree::new();
        let g = group(&mut tree, GroupId::ROOT, "G", true);
        let h = group(&mut tree, g, "H", true);
        tree.push_image(g, "x");
        tree.push_image(h, "y");

        let resolved = ResolvedTree::new(&tree, "ImageAsset");

        assert_eq!(raw_values(&resolved, g), vec!["G/x"]);
        assert_eq!(raw_values(&resolved, h), vec!["G/H/y"]);
        assert_eq!(resolved.group(h).type_path, "ImageAsset.G.H");
    }

    #[test]
    fn test_non_namespace_group_drops_its_segment() {
        let mut tree = GroupTree::new();
        let g = group(&mut tree, GroupId::ROOT, "G", false);
        let h = group(&mut tree, g, "H", true);
        tree.push_image(g, "x");
        tree.push_image(h, "y");

        let resolved = ResolvedTree::new(&tree, "ImageAsset");

        assert_eq!(raw_values(&resolved, g), vec!["x"]);
        assert_eq!(raw_values(&resolved, h), vec!["H/y"]);
    }

    #[test]
    fn test_suppression_cascades_through_consecutive_groups() {
        let mut tree = GroupTree::new();
        let a = group(&mut tree, GroupId::ROOT, "A", true);
        let b = group(&mut tree, a, "B", false);
        let c = group(&mut tree, b, "C", false);
        let d = group(&mut tree, c, "D", true);
        tree.push_image(b, "b1");
        tree.push_image(c, "c1");
        tree.push_image(d, "d1");

        let resolved = ResolvedTree::new(&tree, "ImageAsset");

        assert_eq!(raw_values(&resolved, b), vec!["b1"]);
        assert_eq!(raw_values(&resolved, c), vec!["c1"]);
        // A's prefix passes through B and C untouched
        assert_eq!(raw_values(&resolved, d), vec!["A/D/d1"]);
    }

    #[test]
    fn test_cases_sorted_by_original_name() {
        let mut tree = GroupTree::new();
        tree.push_image(GroupId::ROOT, "zebra");
        tree.push_image(GroupId::ROOT, "Apple");
        tree.push_image(GroupId::ROOT, "apple_pie");

        let resolved = ResolvedTree::new(&tree, "ImageAsset");
        let images: Vec<&str> = resolved.root().cases.iter().map(|c| c.image.as_str()).collect();

        assert_eq!(images, vec!["Apple", "apple_pie", "zebra"]);
    }

    #[test]
    fn test_collisions_get_suffixes() {
        let mut tree = GroupTree::new();
        tree.push_image(GroupId::ROOT, "app_logo");
        tree.push_image(GroupId::ROOT, "app-logo");
        tree.push_image(GroupId::ROOT, "app logo");

        let resolved = ResolvedTree::new(&tree, "ImageAsset");
        let idents: Vec<&str> = resolved
            .root()
            .cases
            .iter()
            .map(|c| c.identifier.as_str())
            .collect();

        // Sorted: "app logo" < "app-logo" < "app_logo"
        assert_eq!(idents, vec!["appLogo", "appLogo2", "appLogo3"]);
        assert_eq!(resolved.notes().len(), 2);
        assert!(resolved.notes().iter().all(|n| n.issue == NameIssue::Collision));
    }

    #[test]
    fn test_group_type_collisions() {
        let mut tree = GroupTree::new();
        let first = group(&mut tree, GroupId::ROOT, "tab-bar", true);
        let second = group(&mut tree, GroupId::ROOT, "tab bar", true);

        let resolved = ResolvedTree::new(&tree, "ImageAsset");

        assert_eq!(resolved.group(second).type_name, "Tab_bar");
        assert_eq!(resolved.group(first).type_name, "Tab_bar2");
        assert_eq!(resolved.group(first).type_path, "ImageAsset.Tab_bar2");
    }

    #[test]
    fn test_placeholders_for_empty_identifiers() {
        let mut tree = GroupTree::new();
        let g = group(&mut tree, GroupId::ROOT, "", true);
        tree.push_image(g, "___");
        tree.push_image(g, "--");

        let resolved = ResolvedTree::new(&tree, "ImageAsset");

        assert_eq!(resolved.group(g).type_name, GROUP_PLACEHOLDER);
        let idents: Vec<&str> = resolved.group(g).cases.iter().map(|c| c.identifier.as_str()).collect();
        assert_eq!(idents, vec!["unnamedImage", "unnamedImage2"]);
        // Raw values still point at the real asset names
        assert_eq!(raw_values(&resolved, g), vec!["--", "___"]);
        assert!(resolved
            .notes()
            .iter()
            .all(|n| n.issue == NameIssue::Unrepresentable));
        assert_eq!(resolved.notes().len(), 3);
    }

    #[test]
    fn test_keywords_are_escaped() {
        let mut tree = GroupTree::new();
        let g = group(&mut tree, GroupId::ROOT, "Type", true);
        tree.push_image(g, "default");

        let resolved = ResolvedTree::new(&tree, "ImageAsset");

        assert_eq!(resolved.group(g).type_path, "ImageAsset.`Type`");
        assert_eq!(resolved.group(g).cases[0].identifier, "`default`");
        assert!(resolved.notes().is_empty());
    }

    #[test]
    fn test_invalid_characters_are_replaced() {
        let mut tree = GroupTree::new();
        let symbols = group(&mut tree, GroupId::ROOT, "Symbols", true);
        tree.push_image(symbols, "star.fill");
        tree.push_image(symbols, "star_fill");
        tree.push_image(GroupId::ROOT, "!!!");

        let resolved = ResolvedTree::new(&tree, "ImageAsset");

        assert_eq!(resolved.root().cases[0].identifier, "image___");
        let idents: Vec<&str> = resolved
            .group(symbols)
            .cases
            .iter()
            .map(|c| c.identifier.as_str())
            .collect();
        // "star.fill" sorts first and keeps the repaired name
        assert_eq!(idents, vec!["star_fill", "starFill"]);
        assert_eq!(raw_values(&resolved, symbols), vec!["Symbols/star.fill", "Symbols/star_fill"]);

        let issues: Vec<NameIssue> = resolved.notes().iter().map(|n| n.issue).collect();
        assert_eq!(issues, vec![NameIssue::InvalidCharacters, NameIssue::InvalidCharacters]);
    }

    #[test]
    fn test_wildcard_type_name_gets_placeholder() {
        let mut tree = GroupTree::new();
        let dash = group(&mut tree, GroupId::ROOT, "-", true);
        let dot = group(&mut tree, GroupId::ROOT, ".", true);
        tree.push_image(dash, "x");

        let resolved = ResolvedTree::new(&tree, "ImageAsset");

        assert_eq!(resolved.group(dash).type_name, GROUP_PLACEHOLDER);
        assert_eq!(resolved.group(dot).type_name, "UnnamedGroup2");
        assert_eq!(raw_values(&resolved, dash), vec!["-/x"]);
        assert!(resolved
            .notes()
            .iter()
            .all(|n| n.issue == NameIssue::Unrepresentable && n.kind == NameKind::Group));
        assert_eq!(resolved.notes().len(), 2);
    }
}
