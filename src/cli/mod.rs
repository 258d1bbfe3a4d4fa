pub mod completions;
pub mod generate;
pub mod list;
pub mod validate;

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};

use crate::catalog::{CollectOptions, NamespaceResolver, CATALOG_SUFFIX};
use crate::error::{GenError, Result};
use crate::manifest::{Manifest, MANIFEST_FILENAME};

/// generate-image-assets - Swift enums for the image sets in an .xcassets folder
#[derive(Parser, Debug)]
#[command(name = "generate-image-assets")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the enum and image wrapper sources
    Generate(generate::GenerateArgs),

    /// Print the group tree of a catalog
    List(list::ListArgs),

    /// Check asset and group names without writing anything
    Validate(validate::ValidateArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Catalog selection shared by every command that reads one.
#[derive(Args, Debug, Clone, Default)]
pub struct CatalogArgs {
    /// Path to your .xcassets folder
    #[arg(long, short)]
    pub assets: Option<PathBuf>,

    /// Manifest to read instead of ./image-assets.yaml
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl CatalogArgs {
    /// Load the manifest named by `--config`, or the one in the working directory.
    pub fn manifest(&self) -> Result<Manifest> {
        match &self.config {
            Some(path) => Manifest::load(path),
            None => Manifest::discover(Path::new(".")),
        }
    }

    /// The catalog to scan: `--assets`, else the manifest's `assets`.
    ///
    /// The path must exist and end in `.xcassets`.
    pub fn catalog_path(&self, manifest: &Manifest) -> Result<PathBuf> {
        let path = self
            .assets
            .clone()
            .or_else(|| manifest.assets.clone())
            .ok_or_else(|| GenError::Config {
                message: "No asset catalog given".to_string(),
                help: Some(format!(
                    "Pass --assets or set `assets` in {}",
                    MANIFEST_FILENAME
                )),
            })?;

        if !path.exists() {
            return Err(GenError::Validation {
                message: format!("Assets path does not exist: {}", path.display()),
                help: None,
            });
        }

        let is_catalog = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.ends_with(CATALOG_SUFFIX));
        if !is_catalog {
            return Err(GenError::Validation {
                message: format!("Not an asset catalog: {}", path.display()),
                help: Some(format!("Provide a folder ending in {}", CATALOG_SUFFIX)),
            });
        }

        Ok(path)
    }
}

/// Collection options derived from the manifest.
pub fn collect_options(manifest: &Manifest) -> CollectOptions {
    CollectOptions {
        resolver: NamespaceResolver::with_fallback(manifest.namespace_fallback),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_catalog_path_prefers_flag() {
        let dir = tempdir().unwrap();
        let flag = dir.path().join("Flag.xcassets");
        let configured = dir.path().join("Config.xcassets");
        fs::create_dir_all(&flag).unwrap();
        fs::create_dir_all(&configured).unwrap();

        let args = CatalogArgs {
            assets: Some(flag.clone()),
            config: None,
        };
        let manifest = Manifest {
            assets: Some(configured.clone()),
            ..Default::default()
        };

        assert_eq!(args.catalog_path(&manifest).unwrap(), flag);
        assert_eq!(
            CatalogArgs::default().catalog_path(&manifest).unwrap(),
            configured
        );
    }

    #[test]
    fn test_catalog_path_errors() {
        let dir = tempdir().unwrap();
        let not_catalog = dir.path().join("Assets");
        fs::create_dir_all(&not_catalog).unwrap();

        let missing = CatalogArgs::default().catalog_path(&Manifest::default());
        assert!(matches!(missing, Err(GenError::Config { .. })));

        let args = CatalogArgs {
            assets: Some(dir.path().join("Nope.xcassets")),
            config: None,
        };
        assert!(matches!(
            args.catalog_path(&Manifest::default()),
            Err(GenError::Validation { .. })
        ));

        let args = CatalogArgs {
            assets: Some(not_catalog),
            config: None,
        };
        assert!(matches!(
            args.catalog_path(&Manifest::default()),
            Err(GenError::Validation { .. })
        ));
    }

    #[test]
    fn test_collect_options_follow_manifest() {
        let manifest = Manifest {
            namespace_fallback: true,
            ..Default::default()
        };

        let options = collect_options(&manifest);
        assert!(options.resolver.fallback);
        assert!(options.default_namespace);
    }

    #[test]
    fn test_cli_parses_generate() {
        let cli = Cli::parse_from([
            "generate-image-assets",
            "generate",
            "--assets",
            "Assets.xcassets",
            "-o",
            "Generated",
            "-v",
        ]);

        assert!(cli.verbose);
        match cli.command {
            Commands::Generate(args) => {
                assert_eq!(args.catalog.assets, Some(PathBuf::from("Assets.xcassets")));
                assert_eq!(args.output, Some(PathBuf::from("Generated")));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
