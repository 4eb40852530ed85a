//! Element factories
//!
//! A factory is bound to one tag, one attribute format and one hook that
//! decides what to do with the freshly flattened children.

use std::fmt;
use std::rc::Rc;

use weft_dom::{HostTree, NodeId};

use crate::attributes::{replace_attributes, Format};
use crate::fragment::create_fragment;
use crate::{BuildResult, ElementKey, Props, Scope};

/// Hook run with `(host, node, children_fragment)` at the end of a build
pub type BuiltHook<H> = dyn Fn(&mut H, NodeId, NodeId) -> BuildResult<()>;

/// Anything that turns props into a node: factories and user components
pub trait Construct<H: HostTree> {
    fn construct(&self, scope: &mut Scope<'_, H>, props: Props) -> BuildResult<NodeId>;
}

impl<H, F> Construct<H> for F
where
    H: HostTree,
    F: Fn(&mut Scope<'_, H>, Props) -> BuildResult<NodeId>,
{
    fn construct(&self, scope: &mut Scope<'_, H>, props: Props) -> BuildResult<NodeId> {
        self(scope, props)
    }
}

/// Reusable construction function for one tag
pub struct ElementFactory<H: HostTree> {
    tag_name: String,
    format: Format,
    on_built: Rc<BuiltHook<H>>,
}

impl<H: HostTree + 'static> ElementFactory<H> {
    pub fn new<F>(tag_name: impl Into<String>, format: Format, on_built: F) -> Self
    where
        F: Fn(&mut H, NodeId, NodeId) -> BuildResult<()> + 'static,
    {
        Self {
            tag_name: tag_name.into(),
            format,
            on_built: Rc::new(on_built),
        }
    }

    /// Factory whose hook swaps the node's children for the new ones
    pub fn replacing(tag_name: impl Into<String>, format: Format) -> Self {
        Self::new(tag_name, format, replace_children::<H>)
    }
}

impl<H: HostTree> ElementFactory<H> {
    pub fn tag_name(&self) -> &str {
        &self.tag_name
    }

    pub fn format(&self) -> Format {
        self.format
    }

    /// Run one construction call.
    ///
    /// Resolves the target through the scope's cache, replaces its
    /// attributes, stamps the key's string marker, flattens the children and
    /// hands them to the hook. Attributes are always replaced before the
    /// hook runs.
    pub fn build(&self, scope: &mut Scope<'_, H>, props: Props) -> BuildResult<NodeId> {
        let key = props.key();
        let node = scope.cache.resolve(scope.host, &self.tag_name, key)?;

        replace_attributes(scope.host, node, self.format, &props)?;
        if let Some(marker) = key.and_then(ElementKey::string) {
            scope
                .host
                .set_attribute(node, &scope.cache.config().key_attribute, marker)?;
        }

        let fragment = create_fragment(scope.host, props.children())?;
        (self.on_built)(&mut *scope.host, node, fragment)?;

        tracing::trace!(tag = %self.tag_name, %node, keyed = key.is_some(), "built element");
        Ok(node)
    }
}

impl<H: HostTree> Construct<H> for ElementFactory<H> {
    fn construct(&self, scope: &mut Scope<'_, H>, props: Props) -> BuildResult<NodeId> {
        self.build(scope, props)
    }
}

impl<H: HostTree> Clone for ElementFactory<H> {
    fn clone(&self) -> Self {
        Self {
            tag_name: self.tag_name.clone(),
            format: self.format,
            on_built: Rc::clone(&self.on_built),
        }
    }
}

impl<H: HostTree> fmt::Debug for ElementFactory<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElementFactory")
            .field("tag_name", &self.tag_name)
            .field("format", &self.format)
            .finish_non_exhaustive()
    }
}

/// Default hook: the node's children become exactly the fragment's contents
pub fn replace_children<H: HostTree>(host: &mut H, node: NodeId, fragment: NodeId) -> BuildResult<()> {
    host.replace_children(node, fragment)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BuildError, Child, ElementCache};
    use std::cell::RefCell;
    use weft_dom::Document;

    const KEY_ATTR: &str = "data-weft-key";

    type Calls = Rc<RefCell<Vec<(NodeId, NodeId)>>>;

    fn spy_factory(tag: &str, format: Format) -> (ElementFactory<Document>, Calls) {
        let calls: Calls = Rc::default();
        let recorded = Rc::clone(&calls);
        let factory = ElementFactory::new(tag, format, move |_host: &mut Document, node, fragment| {
            recorded.borrow_mut().push((node, fragment));
            Ok(())
        });
        (factory, calls)
    }

    fn texts(doc: &Document, fragment: NodeId) -> Vec<String> {
        doc.tree()
            .children(fragment)
            .map(|(id, _)| doc.tree().text_content(id))
            .collect()
    }

    #[test]
    fn test_builds_tagged_element() {
        let mut doc = Document::new();
        let mut cache = ElementCache::new();
        let mut scope = Scope::new(&mut doc, &mut cache);
        let (html, _) = spy_factory("a", Format::Html);
        let (json, _) = spy_factory("x-test", Format::Json);

        let a = html.build(&mut scope, Props::new()).unwrap();
        let x = json.build(&mut scope, Props::new()).unwrap();
        assert_eq!(scope.host.tag_name(a), Some("a"));
        assert_eq!(scope.host.tag_name(x), Some("x-test"));
    }

    #[test]
    fn test_key_without_string() {
        let mut doc = Document::new();
        let mut cache = ElementCache::new();
        let mut scope = Scope::new(&mut doc, &mut cache);
        let (factory, _) = spy_factory("x-test", Format::Json);
        let key = ElementKey::new();

        let node = factory.build(&mut scope, Props::new().with_key(&key)).unwrap();
        assert_eq!(factory.build(&mut scope, Props::new().with_key(&key)).unwrap(), node);
        assert_eq!(scope.host.get_attribute(node, "key"), None);
        assert_eq!(scope.host.get_attribute(node, KEY_ATTR), None);
    }

    #[test]
    fn test_key_with_string() {
        let mut doc = Document::new();
        let mut cache = ElementCache::new();
        let mut scope = Scope::new(&mut doc, &mut cache);
        let (factory, _) = spy_factory("x-test", Format::Json);
        let key = ElementKey::with_string("foo");

        let node = factory.build(&mut scope, Props::new().with_key(&key)).unwrap();
        assert_eq!(factory.build(&mut scope, Props::new().with_key(&key)).unwrap(), node);
        assert_eq!(scope.host.get_attribute(node, "key"), None);
        assert_eq!(scope.host.get_attribute(node, KEY_ATTR), Some("foo"));
    }

    #[test]
    fn test_hook_receives_materialized_children() {
        let mut doc = Document::new();
        let mut cache = ElementCache::new();
        let mut scope = Scope::new(&mut doc, &mut cache);
        let (factory, calls) = spy_factory("x-test", Format::Json);

        let cases: [(Child, Vec<&str>); 3] = [
            (Child::Empty, vec![]),
            ("foo".into(), vec!["foo"]),
            (vec!["foo", "bar"].into(), vec!["foo", "bar"]),
        ];
        for (children, expected) in cases {
            calls.borrow_mut().clear();
            let node = factory.build(&mut scope, Props::new().with_children(children)).unwrap();

            // The spy does not attach anything
            assert!(scope.host.tree().child_ids(node).is_empty());
            let recorded = calls.borrow().clone();
            assert_eq!(recorded.len(), 1);
            assert_eq!(recorded[0].0, node);
            assert_eq!(texts(scope.host, recorded[0].1), expected);
        }
    }

    #[test]
    fn test_replace_html_attributes() {
        let mut doc = Document::new();
        let mut cache = ElementCache::new();
        let mut scope = Scope::new(&mut doc, &mut cache);
        let (factory, _) = spy_factory("a", Format::Html);
        let key = ElementKey::with_string("foo");

        let node = factory
            .build(&mut scope, Props::new().with_key(&key).attr("href", "example.com"))
            .unwrap();
        assert_eq!(scope.host.get_attribute(node, "href"), Some("example.com"));
        assert_eq!(scope.host.get_attribute(node, KEY_ATTR), Some("foo"));

        factory.build(&mut scope, Props::new().with_key(&key)).unwrap();
        assert_eq!(scope.host.get_attribute(node, "href"), None);
        assert_eq!(scope.host.get_attribute(node, "key"), None);
        assert_eq!(scope.host.get_attribute(node, KEY_ATTR), Some("foo"));
    }

    #[test]
    fn test_replace_json_attributes() {
        let mut doc = Document::new();
        let mut cache = ElementCache::new();
        let mut scope = Scope::new(&mut doc, &mut cache);
        let (factory, _) = spy_factory("x-test", Format::Json);
        let key = ElementKey::with_string("foo");

        let node = factory
            .build(&mut scope, Props::new().with_key(&key).attr("a", "bar"))
            .unwrap();
        assert_eq!(scope.host.get_attribute(node, "a"), Some("\"bar\""));

        factory.build(&mut scope, Props::new().with_key(&key)).unwrap();
        assert_eq!(scope.host.get_attribute(node, "a"), None);
        assert_eq!(scope.host.get_attribute(node, KEY_ATTR), Some("foo"));
    }

    #[test]
    fn test_replacing_hook_swaps_children() {
        let mut doc = Document::new();
        let mut cache = ElementCache::new();
        let mut scope = Scope::new(&mut doc, &mut cache);
        let factory = ElementFactory::replacing("p", Format::Html);
        let key = ElementKey::new();

        let node = factory
            .build(&mut scope, Props::new().with_key(&key).with_children(vec!["a", "b"]))
            .unwrap();
        assert_eq!(scope.host.tree().text_content(node), "ab");

        factory
            .build(&mut scope, Props::new().with_key(&key).with_children("c"))
            .unwrap();
        assert_eq!(scope.host.tree().child_ids(node).len(), 1);
        assert_eq!(scope.host.tree().text_content(node), "c");
    }

    #[test]
    fn test_failed_build_keeps_replaced_attributes() {
        let mut doc = Document::new();
        let mut cache = ElementCache::new();
        let mut scope = Scope::new(&mut doc, &mut cache);
        let factory = ElementFactory::replacing("a", Format::Html);
        let key = ElementKey::new();

        let node = factory
            .build(&mut scope, Props::new().with_key(&key).attr("old", "1"))
            .unwrap();
        let err = factory
            .build(
                &mut scope,
                Props::new().with_key(&key).attr("fresh", "1").attr("bad", f64::NAN),
            )
            .unwrap_err();

        assert_eq!(err, BuildError::NonFiniteValue { name: "bad".into() });
        assert_eq!(scope.host.get_attribute(node, "old"), None);
        assert_eq!(scope.host.get_attribute(node, "fresh"), Some("1"));
    }

    #[test]
    fn test_hook_errors_propagate() {
        let mut doc = Document::new();
        let mut cache = ElementCache::new();
        let outer = ElementFactory::replacing("div", Format::Html);
        let mut scope = Scope::new(&mut doc, &mut cache);
        let key = ElementKey::new();

        let parent = outer.build(&mut scope, Props::new().with_key(&key)).unwrap();
        let child = outer.build(&mut scope, Props::new().with_children(parent)).unwrap();
        // Putting the child back under its own content is a cycle
        let err = outer
            .build(&mut scope, Props::new().with_key(&key).with_children(child))
            .unwrap_err();
        assert!(matches!(err, BuildError::Dom(weft_dom::DomError::HierarchyRequest { .. })));
    }
}
