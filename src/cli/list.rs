//! List command implementation.
//!
//! Prints the group tree of a catalog, groups and images sorted by name.

use clap::Args;

use crate::catalog::{collect_with, GroupId, GroupTree};
use crate::error::Result;
use crate::output::{display_path, plural, Printer};

use super::{collect_options, CatalogArgs};

/// Print the group tree of a catalog
#[derive(Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub catalog: CatalogArgs,
}

pub fn run(args: ListArgs, printer: &Printer) -> Result<()> {
    let manifest = args.catalog.manifest()?;
    let assets = args.catalog.catalog_path(&manifest)?;

    let tree = collect_with(&assets, &collect_options(&manifest));

    print!("{}", format_tree(&tree, printer));
    printer.info(
        "Found",
        &format!(
            "{} in {} under {}",
            plural(tree.image_count(), "image set", "image sets"),
            plural(tree.group_count(), "group", "groups"),
            display_path(&assets)
        ),
    );

    Ok(())
}

/// Render the tree as an indented outline.
pub fn format_tree(tree: &GroupTree, printer: &Printer) -> String {
    let mut out = String::new();
    format_group(tree, GroupId::ROOT, "", printer, &mut out);
    out
}

fn format_group(tree: &GroupTree, id: GroupId, indent: &str, printer: &Printer, out: &mut String) {
    let node = tree.node(id);

    if node.is_root {
        out.push_str(&format!("{}\n", node.display_name()));
    } else {
        let marker = if node.provides_namespace {
            String::new()
        } else {
            format!(" {}", printer.dim("(no namespace)"))
        };
        out.push_str(&format!("{}{}/{}\n", indent, node.name, marker));
    }

    let nested = format!("{}  ", indent);
    for image in tree.sorted_images(id) {
        out.push_str(&format!("{}{}\n", nested, image));
    }
    for child in tree.sorted_children(id) {
        format_group(tree, child, &nested, printer, out);
    }
}
