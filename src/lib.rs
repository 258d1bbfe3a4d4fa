//! imageset-gen - Swift image asset enums from Xcode asset catalogs
//!
//! Scans an `.xcassets` folder, builds a tree of its groups and image sets,
//! and turns it into a nested `ImageAsset` enum plus UIKit and SwiftUI
//! initializers, so image names are checked at compile time.

pub mod catalog;
pub mod cli;
pub mod codegen;
pub mod error;
pub mod logging;
pub mod manifest;
pub mod naming;
pub mod output;
pub mod validation;

pub use catalog::{
    collect_image_assets, collect_with, CollectOptions, GroupId, GroupNode, GroupTree,
    NamespaceResolver,
};
pub use codegen::{
    generate_code, CodeGenerator, EnumTypeInfo, GeneratedCode, GeneratorOptions, WrapperKind,
};
pub use error::{GenError, Result};
pub use manifest::{Manifest, OutputFiles};
pub use naming::{to_type_identifier, to_value_identifier};
pub use validation::{validate_tree, Diagnostic, Severity, ValidationResult};

/// Collect the catalog at `path` and generate its Swift sources.
pub fn generate_from_catalog(path: impl AsRef<std::path::Path>) -> GeneratedCode {
    generate_code(&collect_image_assets(path))
}
