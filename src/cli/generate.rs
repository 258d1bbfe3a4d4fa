//! Generate command implementation.
//!
//! Scans a catalog and writes the base enum plus the UIKit and SwiftUI
//! wrapper files.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::catalog::collect_with;
use crate::codegen::{CodeGenerator, GeneratedCode, GeneratorOptions, WrapperKind};
use crate::error::{GenError, Result};
use crate::manifest::{OutputFiles, MANIFEST_FILENAME};
use crate::output::{display_path, plural, Printer};
use crate::validation::{print_diagnostics, validate_tree};

use super::{collect_options, list, CatalogArgs};

/// Generate the enum and image wrapper sources
#[derive(Args, Debug)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub catalog: CatalogArgs,

    /// Output directory for generated .swift files
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Name of the top-level enum
    #[arg(long)]
    pub type_name: Option<String>,
}

pub fn run(args: GenerateArgs, verbose: bool, printer: &Printer) -> Result<()> {
    let manifest = args.catalog.manifest()?;
    let assets = args.catalog.catalog_path(&manifest)?;

    let output = args
        .output
        .clone()
        .or_else(|| manifest.output.clone())
        .ok_or_else(|| GenError::Config {
            message: "No output directory given".to_string(),
            help: Some(format!(
                "Pass --output or set `output` in {}",
                MANIFEST_FILENAME
            )),
        })?;
    check_output_parent(&output)?;

    let options = GeneratorOptions {
        type_name: args.type_name.unwrap_or_else(|| manifest.type_name.clone()),
    };

    printer.status("Scanning", &display_path(&assets));
    let tree = collect_with(&assets, &collect_options(&manifest));

    if verbose {
        print!("{}", list::format_tree(&tree, printer));
    }

    let generator = CodeGenerator::new(&tree, &options);
    let validation = validate_tree(&tree, generator.resolved());
    if !validation.is_ok() {
        print_diagnostics(&validation);
    }
    if validation.has_errors() {
        return Err(GenError::Validation {
            message: format!(
                "{} found, nothing written",
                plural(validation.error_count(), "error", "errors")
            ),
            help: None,
        });
    }

    let code = generator.generate();
    let written = write_files(&code, &output, &manifest.files)?;

    if verbose {
        for path in &written {
            printer.info("Wrote", &printer.cyan(&display_path(path)));
        }
    }

    if tree.is_empty() {
        printer.warning("Warning", "no image sets found, generated an empty enum");
    }

    printer.status(
        "Finished",
        &format!(
            "{} in {} to {}",
            plural(tree.image_count(), "image set", "image sets"),
            plural(tree.group_count(), "group", "groups"),
            display_path(&output)
        ),
    );

    Ok(())
}

/// The output directory may be created, but its parent has to exist.
fn check_output_parent(output: &Path) -> Result<()> {
    match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && !parent.exists() => {
            Err(GenError::Validation {
                message: format!("Output parent folder does not exist: {}", parent.display()),
                help: None,
            })
        }
        _ => Ok(()),
    }
}

/// Write the three sources into `dir`, creating it if needed.
pub fn write_files(code: &GeneratedCode, dir: &Path, files: &OutputFiles) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir).map_err(|e| GenError::Io {
        path: dir.to_path_buf(),
        message: format!("Failed to create output directory: {}", e),
    })?;

    let mut outputs = vec![("base", files.base.as_str(), code.base_enum.as_str())];
    for kind in WrapperKind::ALL {
        outputs.push((kind.name(), files.wrapper(kind), code.wrapper(kind)));
    }

    let mut written = Vec::with_capacity(outputs.len());
    for (label, name, content) in outputs {
        let path = dir.join(name);
        fs::write(&path, content).map_err(|e| GenError::Io {
            path: path.clone(),
            message: format!("Failed to write file: {}", e),
        })?;
        tracing::debug!("Wrote {} source {} ({} bytes)", label, path.display(), content.len());
        written.push(path);
    }

    Ok(written)
}
