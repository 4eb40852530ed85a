//! DOM Node Operations
//!
//! Error type for tree mutations and the `HostTree` trait: the set of
//! primitives an element factory needs from whatever tree it builds into.

use crate::NodeId;

/// Result type for DOM operations
pub type DomResult<T> = Result<T, DomError>;

/// DOM operation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    #[error("Node not found: {0}")]
    NotFound(NodeId),

    #[error("Hierarchy request error: cannot insert {child} into {parent}")]
    HierarchyRequest { parent: NodeId, child: NodeId },

    #[error("Invalid node type for this operation: {0}")]
    InvalidNodeType(NodeId),

    #[error("Node {child} is not a child of {parent}")]
    NotAChild { parent: NodeId, child: NodeId },
}

/// Tree primitives consumed by element construction
pub trait HostTree {
    /// Create a detached element
    fn create_element(&mut self, tag_name: &str) -> NodeId;

    /// Create a detached text node
    fn create_text(&mut self, content: &str) -> NodeId;

    /// Create an empty fragment
    fn create_fragment(&mut self) -> NodeId;

    /// Whether `node` still exists
    fn contains(&self, node: NodeId) -> bool;

    /// Lower-case tag name, `None` for non-elements
    fn tag_name(&self, node: NodeId) -> Option<&str>;

    /// Attribute names in insertion order (empty for non-elements)
    fn attribute_names(&self, node: NodeId) -> Vec<String>;

    fn get_attribute(&self, node: NodeId, name: &str) -> Option<&str>;

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) -> DomResult<()>;

    fn remove_attribute(&mut self, node: NodeId, name: &str) -> DomResult<()>;

    /// Connected elements whose `name` attribute equals `value`, in document order
    fn query_by_attribute(&self, name: &str, value: &str) -> Vec<NodeId>;

    /// Append `child` to `parent`, detaching it first; fragments splice their children
    fn append_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<()>;

    /// Remove every child of `parent`, then append `content`
    fn replace_children(&mut self, parent: NodeId, content: NodeId) -> DomResult<()>;
}
