//! Project manifest (`image-assets.yaml`) parsing.
//!
//! The manifest stores the options a project would otherwise pass on every
//! run: where the catalog lives, where generated files go and what they are
//! called. Command-line flags win over manifest values.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::codegen::{WrapperKind, DEFAULT_TYPE_NAME};
use crate::error::{GenError, Result};

/// The name of the manifest file.
pub const MANIFEST_FILENAME: &str = "image-assets.yaml";

/// File names for the three generated sources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputFiles {
    pub base: String,
    pub uikit: String,
    pub swiftui: String,
}

impl Default for OutputFiles {
    fn default() -> Self {
        Self {
            base: "ImageAsset.swift".to_string(),
            uikit: "UIImage+ImageAsset.swift".to_string(),
            swiftui: "Image+ImageAsset.swift".to_string(),
        }
    }
}

impl OutputFiles {
    /// File name for the wrapper of `kind`.
    pub fn wrapper(&self, kind: WrapperKind) -> &str {
        match kind {
            WrapperKind::UiKit => &self.uikit,
            WrapperKind::SwiftUi => &self.swiftui,
        }
    }
}

/// Project manifest loaded from image-assets.yaml.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Path to the `.xcassets` catalog.
    pub assets: Option<PathBuf>,

    /// Output directory for generated sources.
    pub output: Option<PathBuf>,

    /// Name of the top-level enum.
    pub type_name: String,

    /// Generated file names.
    pub files: OutputFiles,

    /// provides-namespace value for groups whose Contents.json cannot be read.
    pub namespace_fallback: bool,
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            assets: None,
            output: None,
            type_name: DEFAULT_TYPE_NAME.to_string(),
            files: OutputFiles::default(),
            namespace_fallback: false,
        }
    }
}

impl Manifest {
    /// Load manifest from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| GenError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Load `image-assets.yaml` from `dir` if present, defaults otherwise.
    pub fn discover(dir: &Path) -> Result<Self> {
        let path = dir.join(MANIFEST_FILENAME);
        if path.is_file() {
            tracing::debug!("Using manifest {}", path.display());
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| GenError::Config {
            message: format!("Invalid manifest: {}", e),
            help: Some(format!("Check {} syntax", MANIFEST_FILENAME)),
        })
    }
}
