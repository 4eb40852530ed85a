//! Document - High-level document API

use crate::{DomError, DomResult, DomTree, HostTree, NodeId};

/// HTML Document
#[derive(Debug)]
pub struct Document {
    /// The DOM tree
    pub tree: DomTree,
    /// Cached reference to <html> element
    html_element: NodeId,
    /// Cached reference to <head> element
    head_element: NodeId,
    /// Cached reference to <body> element
    body_element: NodeId,
}

impl Document {
    /// Create a document with the basic html/head/body skeleton
    pub fn new() -> Self {
        let mut tree = DomTree::new();

        let html = tree.create_element("html");
        let head = tree.create_element("head");
        let body = tree.create_element("body");

        tree.link_last(tree.root(), html);
        tree.link_last(html, head);
        tree.link_last(html, body);

        Self {
            tree,
            html_element: html,
            head_element: head,
            body_element: body,
        }
    }

    /// Create an empty document (no structure)
    pub fn empty() -> Self {
        Self {
            tree: DomTree::new(),
            html_element: NodeId::NONE,
            head_element: NodeId::NONE,
            body_element: NodeId::NONE,
        }
    }

    /// Get <html> element
    pub fn document_element(&self) -> NodeId {
        self.html_element
    }

    /// Get <head> element
    pub fn head(&self) -> NodeId {
        self.head_element
    }

    /// Get <body> element (the root for an empty document)
    pub fn body(&self) -> NodeId {
        if self.body_element.is_valid() {
            self.body_element
        } else {
            self.tree.root()
        }
    }

    /// Access the DOM tree
    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    /// Access the DOM tree mutably
    pub fn tree_mut(&mut self) -> &mut DomTree {
        &mut self.tree
    }

    /// Detach a node from wherever it sits
    pub fn remove(&mut self, node: NodeId) {
        self.tree.detach(node);
    }

    fn element_mut(&mut self, node: NodeId) -> DomResult<&mut crate::ElementData> {
        self.tree
            .get_mut(node)
            .ok_or(DomError::NotFound(node))?
            .as_element_mut()
            .ok_or(DomError::InvalidNodeType(node))
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl HostTree for Document {
    fn create_element(&mut self, tag_name: &str) -> NodeId {
        self.tree.create_element(tag_name)
    }

    fn create_text(&mut self, content: &str) -> NodeId {
        self.tree.create_text(content)
    }

    fn create_fragment(&mut self) -> NodeId {
        self.tree.create_fragment()
    }

    fn contains(&self, node: NodeId) -> bool {
        self.tree.contains(node)
    }

    fn tag_name(&self, node: NodeId) -> Option<&str> {
        self.tree
            .get(node)
            .and_then(|n| n.as_element())
            .map(|e| e.tag_name.as_str())
    }

    fn attribute_names(&self, node: NodeId) -> Vec<String> {
        self.tree
            .get(node)
            .and_then(|n| n.as_element())
            .map(|e| e.attrs.get_attribute_names().into_iter().map(String::from).collect())
            .unwrap_or_default()
    }

    fn get_attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.tree.get(node)?.as_element()?.get_attr(name)
    }

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) -> DomResult<()> {
        self.element_mut(node)?.set_attr(name, value);
        Ok(())
    }

    fn remove_attribute(&mut self, node: NodeId, name: &str) -> DomResult<()> {
        self.element_mut(node)?.attrs.remove_named_item(name);
        Ok(())
    }

    fn query_by_attribute(&self, name: &str, value: &str) -> Vec<NodeId> {
        self.tree
            .descendants(self.tree.root())
            .into_iter()
            .filter(|&id| {
                self.tree
                    .get(id)
                    .and_then(|n| n.as_element())
                    .and_then(|e| e.get_attr(name))
                    == Some(value)
            })
            .collect()
    }

    fn append_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<()> {
        self.tree.append_child(parent, child)
    }

    fn replace_children(&mut self, parent: NodeId, content: NodeId) -> DomResult<()> {
        self.tree.replace_children(parent, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skeleton() {
        let doc = Document::new();
        assert_eq!(doc.tag_name(doc.document_element()), Some("html"));
        assert_eq!(doc.tag_name(doc.head()), Some("head"));
        assert_eq!(doc.tag_name(doc.body()), Some("body"));
        assert_eq!(doc.tree().len(), 4);
        assert_eq!(doc.tree().child_ids(doc.tree().root()), vec![doc.document_element()]);
        assert_eq!(doc.tree().child_ids(doc.document_element()), vec![doc.head(), doc.body()]);
        assert!(doc.tree().is_connected(doc.body()));
    }

    #[test]
    fn test_query_skips_detached() {
        let mut doc = Document::new();
        let attached = doc.create_element("a");
        let detached = doc.create_element("a");
        doc.set_attribute(attached, "data-k", "x").unwrap();
        doc.set_attribute(detached, "data-k", "x").unwrap();
        doc.append_child(doc.body(), attached).unwrap();

        assert_eq!(doc.query_by_attribute("data-k", "x"), vec![attached]);
        doc.remove(attached);
        assert!(doc.query_by_attribute("data-k", "x").is_empty());
    }

    #[test]
    fn test_attribute_on_text_fails() {
        let mut doc = Document::empty();
        let text = doc.create_text("x");
        assert_eq!(
            doc.set_attribute(text, "a", "b"),
            Err(DomError::InvalidNodeType(text))
        );
        assert!(doc.attribute_names(text).is_empty());
    }
}
