//! Group namespace resolution from `Contents.json` sidecars.

use std::path::Path;

use serde::Deserialize;

use super::CONTENTS_FILENAME;

/// Shape of a group's `Contents.json`; everything but the flag is ignored.
#[derive(Debug, Deserialize)]
struct GroupContents {
    properties: Option<GroupProperties>,
}

#[derive(Debug, Deserialize)]
struct GroupProperties {
    #[serde(rename = "provides-namespace")]
    provides_namespace: Option<bool>,
}

/// Decides whether a group directory provides a namespace.
///
/// Missing, unreadable or malformed sidecars never fail; they resolve to
/// `fallback`, which is `false` unless overridden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NamespaceResolver {
    pub fallback: bool,
}

impl NamespaceResolver {
    pub fn with_fallback(fallback: bool) -> Self {
        Self { fallback }
    }

    /// Resolve the flag for `group` (relative to `catalog_root`).
    pub fn resolve(&self, catalog_root: &Path, group: &str) -> bool {
        let contents_path = catalog_root.join(group).join(CONTENTS_FILENAME);

        let source = match std::fs::read_to_string(&contents_path) {
            Ok(source) => source,
            Err(e) => {
                tracing::debug!("No readable metadata at {}: {}", contents_path.display(), e);
                return self.fallback;
            }
        };

        match self.parse(&source) {
            Some(flag) => flag,
            None => {
                tracing::warn!(
                    "Malformed group metadata at {}, using provides-namespace = {}",
                    contents_path.display(),
                    self.fallback
                );
                self.fallback
            }
        }
    }

    /// Parse a sidecar document. `None` when it is not valid JSON, has the
    /// wrong shape, or lacks the flag.
    pub fn parse(&self, source: &str) -> Option<bool> {
        let contents: GroupContents = serde_json::from_str(source).ok()?;
        contents.properties?.provides_namespace
    }
}
