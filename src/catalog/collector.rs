//! Walks an asset catalog and builds the [`GroupTree`].

use std::collections::HashMap;
use std::path::Path;

use walkdir::{DirEntry, WalkDir};

use super::namespace::NamespaceResolver;
use super::tree::{GroupId, GroupTree};
use super::{CONTENTS_FILENAME, IMAGESET_SUFFIX};

/// Knobs for a collection run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectOptions {
    /// Resolver consulted for groups that carry a `Contents.json`.
    pub resolver: NamespaceResolver,
    /// Flag for groups without any sidecar.
    pub default_namespace: bool,
}

impl Default for CollectOptions {
    fn default() -> Self {
        Self {
            resolver: NamespaceResolver::default(),
            default_namespace: true,
        }
    }
}

/// What a single walk over the catalog found, before the tree is built.
#[derive(Debug, Default)]
struct CatalogScan {
    /// Namespace flag per group path, only for groups that have a sidecar.
    namespaces: HashMap<String, bool>,
    /// Asset paths relative to the root with the marker suffix removed.
    assets: Vec<String>,
}

/// Collect every image set under `root` with default options.
pub fn collect_image_assets(root: impl AsRef<Path>) -> GroupTree {
    collect_with(root, &CollectOptions::default())
}

/// Collect every image set under `root`.
///
/// A root that cannot be read yields a tree with only the synthetic root.
pub fn collect_with(root: impl AsRef<Path>, options: &CollectOptions) -> GroupTree {
    let root = root.as_ref();

    if let Err(e) = std::fs::read_dir(root) {
        tracing::warn!("Cannot enumerate catalog {}: {}", root.display(), e);
        return GroupTree::new();
    }

    let scan = scan_catalog(root, options);
    tracing::debug!(
        "Scanned {}: {} image set(s), {} group sidecar(s)",
        root.display(),
        scan.assets.len(),
        scan.namespaces.len()
    );

    build_tree(&scan, options)
}

fn scan_catalog(root: &Path, options: &CollectOptions) -> CatalogScan {
    let mut scan = CatalogScan::default();
    let mut walker = WalkDir::new(root)
        .min_depth(1)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter();

    while let Some(entry) = walker.next() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("Skipping unreadable catalog entry: {}", e);
                continue;
            }
        };

        let Some(relative) = relative_path(root, &entry) else {
            continue;
        };

        if relative.ends_with(IMAGESET_SUFFIX) {
            let trimmed = &relative[..relative.len() - IMAGESET_SUFFIX.len()];
            scan.assets.push(trimmed.to_string());
            if entry.file_type().is_dir() {
                walker.skip_current_dir();
            }
            continue;
        }

        if entry.file_type().is_dir() && entry.path().join(CONTENTS_FILENAME).is_file() {
            let provides = options.resolver.resolve(root, &relative);
            tracing::debug!("Group {} provides-namespace = {}", relative, provides);
            scan.namespaces.insert(relative, provides);
        }
    }

    scan
}

/// Relative path of an entry with `/` separators.
fn relative_path(root: &Path, entry: &DirEntry) -> Option<String> {
    let relative = entry.path().strip_prefix(root).ok()?;
    let segments: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    Some(segments.join("/"))
}

fn build_tree(scan: &CatalogScan, options: &CollectOptions) -> GroupTree {
    let mut tree = GroupTree::new();

    for asset in &scan.assets {
        let segments: Vec<&str> = asset.split('/').collect();
        let Some((image, groups)) = segments.split_last() else {
            continue;
        };

        if image.is_empty() {
            tracing::warn!("Skipping image set with an empty name: {}{}", asset, IMAGESET_SUFFIX);
            continue;
        }

        let mut current = GroupId::ROOT;
        for (depth, group) in groups.iter().enumerate() {
            let group_path = groups[..=depth].join("/");
            let provides = scan
                .namespaces
                .get(&group_path)
                .copied()
                .unwrap_or(options.default_namespace);
            current = tree.child_or_insert(current, group, provides);
        }

        tree.push_image(current, image);
    }

    tree
}
