//! Base `ImageAsset` enum rendering.

use crate::catalog::GroupId;

use super::resolve::{EnumCase, ResolvedTree};
use super::GENERATED_HEADER;

const INDENT: &str = "    ";

/// Render the nested enum declaration for a resolved tree.
pub fn render_base_enum(resolved: &ResolvedTree) -> String {
    let root = resolved.root();

    let mut code = String::new();
    code.push_str(GENERATED_HEADER);
    code.push_str("import Foundation\n\n");
    code.push_str(&format!("enum {}: String {{\n", root.type_name));
    render_body(resolved, GroupId::ROOT, INDENT, &mut code);
    code.push_str("}\n");
    code
}

/// Cases first, then nested enums, with a blank line between sections and
/// between sibling enums.
fn render_body(resolved: &ResolvedTree, id: GroupId, indent: &str, code: &mut String) {
    let group = resolved.group(id);

    for case in &group.cases {
        render_case(case, indent, code);
    }

    if !group.cases.is_empty() && !group.children.is_empty() {
        code.push('\n');
    }

    let nested_indent = format!("{}{}", indent, INDENT);
    for (i, &child) in group.children.iter().enumerate() {
        if i > 0 {
            code.push('\n');
        }
        code.push_str(&format!(
            "{}enum {}: String {{\n",
            indent,
            resolved.group(child).type_name
        ));
        render_body(resolved, child, &nested_indent, code);
        code.push_str(&format!("{}}}\n", indent));
    }
}

fn render_case(case: &EnumCase, indent: &str, code: &mut String) {
    code.push_str(&format!(
        "{}case {} = {}\n",
        indent,
        case.identifier,
        string_literal(&case.raw_value)
    ));
}

/// Quote `value` as a Swift string literal.
fn string_literal(value: &str) -> String {
    let mut literal = String::with_capacity(value.len() + 2);
    literal.push('"');
    for c in value.chars() {
        match c {
            '"' => literal.push_str("\\\""),
            '\\' => literal.push_str("\\\\"),
            '\n' => literal.push_str("\\n"),
            '\r' => literal.push_str("\\r"),
            '\t' => literal.push_str("\\t"),
            _ => literal.push(c),
        }
    }
    literal.push('"');
    literal
}
