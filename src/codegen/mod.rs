//! Swift source generation from a collected [`GroupTree`].
//!
//! Produces three files' worth of text:
//!
//! - the base `ImageAsset` enum, one nested enum per catalog group, whose
//!   raw values are the asset names `UIImage(named:)` expects
//! - `UIImage(asset:)` initializers for every enum type
//! - SwiftUI `Image(asset:)` initializers for every enum type
//!
//! Output depends only on the tree: children and images are always visited
//! in name order, so regenerating an unchanged catalog is byte-identical.

mod enums;
mod resolve;
mod wrapper;

use crate::catalog::GroupTree;

pub use enums::render_base_enum;
pub use resolve::{
    EnumCase, NameIssue, NameKind, NameNote, ResolvedGroup, ResolvedTree, GROUP_PLACEHOLDER,
    IMAGE_PLACEHOLDER,
};
pub use wrapper::WrapperKind;

/// First line of every generated file.
pub const GENERATED_HEADER: &str = "// Auto-generated by generate-image-assets. Do not edit.\n";

/// Name of the top-level enum unless configured otherwise.
pub const DEFAULT_TYPE_NAME: &str = "ImageAsset";

/// A nested enum type, as referenced from the wrapper files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumTypeInfo {
    /// Fully qualified path, e.g. `ImageAsset.Icons.Navigation`.
    pub enum_path: String,
    /// Bare type name, e.g. `Navigation`.
    pub enum_name: String,
}

/// Settings for a generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Name of the top-level enum.
    pub type_name: String,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            type_name: DEFAULT_TYPE_NAME.to_string(),
        }
    }
}

/// The three generated sources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedCode {
    pub base_enum: String,
    pub uikit: String,
    pub swiftui: String,
}

impl GeneratedCode {
    /// Wrapper source for a given host API.
    pub fn wrapper(&self, kind: WrapperKind) -> &str {
        match kind {
            WrapperKind::UiKit => &self.uikit,
            WrapperKind::SwiftUi => &self.swiftui,
        }
    }
}

/// Turns a group tree into Swift source.
#[derive(Debug)]
pub struct CodeGenerator<'a> {
    tree: &'a GroupTree,
    resolved: ResolvedTree,
}

impl<'a> CodeGenerator<'a> {
    pub fn new(tree: &'a GroupTree, options: &GeneratorOptions) -> Self {
        Self {
            tree,
            resolved: ResolvedTree::new(tree, &options.type_name),
        }
    }

    /// Identifiers and raw values chosen for the tree.
    pub fn resolved(&self) -> &ResolvedTree {
        &self.resolved
    }

    /// Every nested enum type in pre-order, siblings sorted by group name.
    pub fn enum_types(&self) -> Vec<EnumTypeInfo> {
        self.tree
            .iter_pre_order()
            .into_iter()
            .map(|id| {
                let group = self.resolved.group(id);
                EnumTypeInfo {
                    enum_path: group.type_path.clone(),
                    enum_name: group.type_name.clone(),
                }
            })
            .collect()
    }

    pub fn base_enum(&self) -> String {
        render_base_enum(&self.resolved)
    }

    pub fn wrapper(&self, kind: WrapperKind, enum_types: &[EnumTypeInfo]) -> String {
        kind.render(&self.resolved.root().type_path, enum_types)
    }

    /// Render all three sources.
    pub fn generate(&self) -> GeneratedCode {
        let enum_types = self.enum_types();

        GeneratedCode {
            base_enum: self.base_enum(),
            uikit: self.wrapper(WrapperKind::UiKit, &enum_types),
            swiftui: self.wrapper(WrapperKind::SwiftUi, &enum_types),
        }
    }
}

/// Generate Swift sources for `tree` with default options.
pub fn generate_code(tree: &GroupTree) -> GeneratedCode {
    CodeGenerator::new(tree, &GeneratorOptions::default()).generate()
}
