//! Validate command implementation.

use clap::Args;

use crate::catalog::collect_with;
use crate::codegen::ResolvedTree;
use crate::error::{GenError, Result};
use crate::output::{display_path, plural, Printer};
use crate::validation::{print_diagnostics, validate_tree};

use super::{collect_options, CatalogArgs};

/// Check asset and group names without writing anything
#[derive(Args, Debug)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub catalog: CatalogArgs,
}

pub fn run(args: ValidateArgs, printer: &Printer) -> Result<()> {
    let manifest = args.catalog.manifest()?;
    let assets = args.catalog.catalog_path(&manifest)?;

    printer.status("Checking", &display_path(&assets));
    let tree = collect_with(&assets, &collect_options(&manifest));
    let resolved = ResolvedTree::new(&tree, &manifest.type_name);

    let result = validate_tree(&tree, &resolved);
    print_diagnostics(&result);

    if result.has_errors() {
        return Err(GenError::Validation {
            message: format!(
                "{} found",
                plural(result.error_count(), "error", "errors")
            ),
            help: None,
        });
    }

    Ok(())
}
