use super::ast::{Annotation, NodeKind, NodeRef};

/// Renders the tree below `node` one node per line, indented with `..` per
/// depth level. Annotated nodes get ` - TYPE - Lvalue/Rvalue` appended.
pub fn dump<A: Annotation>(node: NodeRef<'_, A>) -> String {
    let mut out = String::new();
    dump_into(&mut out, node, 0);
    out
}

fn dump_into<A: Annotation>(out: &mut String, node: NodeRef<'_, A>, depth: usize) {
    out.push_str(&"..".repeat(depth));
    match (node.kind(), node.payload()) {
        (NodeKind::Id | NodeKind::IntLit | NodeKind::At, Some(payload)) => {
            out.push_str(&format!("{}({})", node.kind(), payload));
        }
        (kind, _) => out.push_str(&kind.to_string()),
    }

    if let Some(annotation) = node.annotation().and_then(|info| info.describe()) {
        out.push_str(&annotation);
    }
    out.push('\n');

    for child in node.children() {
        dump_into(out, child, depth + 1);
    }
}
