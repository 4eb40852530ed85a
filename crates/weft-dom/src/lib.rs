//! weft DOM - Host tree
//!
//! Arena-backed DOM tree that the weft element factories build into.
//! Node ids are generational, so an id held past its node's destruction
//! stops resolving instead of aliasing whatever reuses the slot.

mod attributes;
mod document;
mod node;
mod operations;
mod serializer;
mod tree;

pub use attributes::{Attr, NamedNodeMap};
pub use document::Document;
pub use node::{ElementData, Node, NodeData};
pub use operations::{DomError, DomResult, HostTree};
pub use serializer::HtmlSerializer;
pub use tree::{Children, DomTree};

/// Node identifier (arena index plus slot generation)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    pub(crate) index: u32,
    pub(crate) generation: u32,
}

impl NodeId {
    /// Document root node ID
    pub const ROOT: NodeId = NodeId { index: 0, generation: 0 };

    /// Sentinel for "no node"
    pub const NONE: NodeId = NodeId { index: u32::MAX, generation: 0 };

    /// Check if this id refers to a slot at all
    #[inline]
    pub fn is_valid(self) -> bool {
        self.index != u32::MAX
    }

    /// Arena slot index
    #[inline]
    pub fn index(self) -> u32 {
        self.index
    }

    /// Slot generation this id was issued for
    #[inline]
    pub fn generation(self) -> u32 {
        self.generation
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}v{}", self.index, self.generation)
    }
}
