//! weft
//!
//! Element construction without a virtual DOM. Construction calls build
//! real host nodes directly; an identity key makes repeated calls update the
//! same node in place instead of creating a new one.
//!
//! # Example
//! ```rust,ignore
//! use weft::{element, ElementCache, ElementKey, Props, Scope};
//! use weft::dom::Document;
//!
//! let mut doc = Document::new();
//! let mut cache = ElementCache::new();
//! let mut scope = Scope::new(&mut doc, &mut cache);
//! let key = ElementKey::with_string("greeting");
//!
//! let p = element!(&mut scope, "p", Props::new().with_key(&key), "hello")?;
//! let same = element!(&mut scope, "p", Props::new().with_key(&key), "bye")?;
//! assert_eq!(p, same);
//! ```

mod attributes;
mod cache;
mod child;
mod config;
mod create;
mod error;
mod factory;
mod fragment;
mod key;
mod props;
mod scope;

pub use attributes::{format_number, replace_attributes, Format};
pub use cache::ElementCache;
pub use child::Child;
pub use config::{Config, DEFAULT_KEY_ATTRIBUTE};
pub use create::{create_element, Tag};
pub use error::{BuildError, BuildResult};
pub use factory::{replace_children, BuiltHook, Construct, ElementFactory};
pub use fragment::create_fragment;
pub use key::ElementKey;
pub use props::{PropValue, Props, RESERVED_PROPS};
pub use scope::Scope;

// Re-export the host tree for callers that only depend on weft
pub use weft_dom as dom;
pub use weft_dom::NodeId;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
