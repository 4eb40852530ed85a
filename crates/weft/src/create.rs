//! Construction entry point

use weft_dom::{HostTree, NodeId};

use crate::attributes::Format;
use crate::factory::{Construct, ElementFactory};
use crate::{BuildResult, Child, Props, Scope};

/// What to construct: a built-in tag or a user construction function
pub enum Tag<'t, H: HostTree> {
    Name(&'t str),
    Component(&'t dyn Construct<H>),
}

impl<'t, H: HostTree> From<&'t str> for Tag<'t, H> {
    fn from(name: &'t str) -> Self {
        Self::Name(name)
    }
}

impl<'t, H: HostTree> From<&'t String> for Tag<'t, H> {
    fn from(name: &'t String) -> Self {
        Self::Name(name)
    }
}

impl<'t, H: HostTree> From<&'t ElementFactory<H>> for Tag<'t, H> {
    fn from(factory: &'t ElementFactory<H>) -> Self {
        Self::Component(factory)
    }
}

/// Build a tagged element or invoke a component with variadic children.
///
/// The variadic children always replace the props' own children: one child
/// is passed through as-is, several become a `Child::List`, none clears them.
///
/// Tags get a fresh HTML-format factory that replaces the node's children.
/// Components receive the props untouched apart from the children and are
/// responsible for their own attributes and identity.
pub fn create_element<'t, H: HostTree + 'static>(
    scope: &mut Scope<'_, H>,
    tag: impl Into<Tag<'t, H>>,
    mut props: Props,
    mut children: Vec<Child>,
) -> BuildResult<NodeId> {
    let children = match children.len() {
        0 => Child::Empty,
        1 => children.remove(0),
        _ => Child::List(children),
    };
    props.set_children(children);

    match tag.into() {
        Tag::Name(name) => ElementFactory::replacing(name, Format::Html).build(scope, props),
        Tag::Component(component) => component.construct(scope, props),
    }
}

/// `create_element` with children as trailing arguments
///
/// ```rust,ignore
/// let link = element!(&mut scope, "a", Props::new().attr("href", "/"), "home", 1)?;
/// ```
#[macro_export]
macro_rules! element {
    ($scope:expr, $tag:expr, $props:expr $(, $child:expr)* $(,)?) => {
        $crate::create_element(
            $scope,
            $tag,
            $props,
            ::std::vec![$($crate::Child::from($child)),*],
        )
    };
}
