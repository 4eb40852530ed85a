//! Child flattening

use weft_dom::{HostTree, NodeId};

use crate::attributes::format_number;
use crate::{BuildResult, Child};

/// Materialize a children description into a fresh fragment.
///
/// Leaves are emitted depth-first, left to right, with no nesting kept.
/// Existing nodes are moved into the fragment; a fragment given as a leaf
/// hands over its children and is left empty.
pub fn create_fragment<H: HostTree>(host: &mut H, children: &Child) -> BuildResult<NodeId> {
    let fragment = host.create_fragment();
    append_flattened(host, fragment, children)?;
    Ok(fragment)
}

fn append_flattened<H: HostTree>(host: &mut H, fragment: NodeId, child: &Child) -> BuildResult<()> {
    match child {
        Child::Empty | Child::Bool(_) => {}
        Child::Number(n) => {
            let text = host.create_text(&format_number(*n));
            host.append_child(fragment, text)?;
        }
        Child::Text(s) => {
            let text = host.create_text(s);
            host.append_child(fragment, text)?;
        }
        Child::Node(node) => host.append_child(fragment, *node)?,
        Child::List(items) => {
            for item in items {
                append_flattened(host, fragment, item)?;
            }
        }
    }
    Ok(())
}
