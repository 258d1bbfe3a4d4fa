//! Asset catalog discovery.
//!
//! Walks an `.xcassets` directory, finds every `.imageset` entry and arranges
//! them into a [`GroupTree`] that mirrors the catalog's folder groups. Each
//! group's `Contents.json` decides whether the group provides a namespace.
//!
//! # Example
//!
//! ```ignore
//! use imageset_gen::catalog::collect_image_assets;
//!
//! let tree = collect_image_assets("App/Assets.xcassets");
//! println!("Found {} image sets", tree.image_count());
//! ```

mod collector;
mod namespace;
mod tree;

pub use collector::{collect_image_assets, collect_with, CollectOptions};
pub use namespace::NamespaceResolver;
pub use tree::{GroupId, GroupNode, GroupTree};

/// Directory suffix marking a single image resource.
pub const IMAGESET_SUFFIX: &str = ".imageset";

/// Metadata file found in groups and asset entries.
pub const CONTENTS_FILENAME: &str = "Contents.json";

/// Directory suffix of an asset catalog.
pub const CATALOG_SUFFIX: &str = ".xcassets";
