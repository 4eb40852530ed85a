//! Construction scope: the host tree plus the identity cache it is built with

use weft_dom::HostTree;

use crate::ElementCache;

/// Everything a construction call touches.
///
/// Fields are public so factories can borrow the host and the cache at the
/// same time.
pub struct Scope<'a, H: HostTree> {
    pub host: &'a mut H,
    pub cache: &'a mut ElementCache,
}

impl<'a, H: HostTree> Scope<'a, H> {
    /// Scope over an isolated cache (one per render root or test)
    pub fn new(host: &'a mut H, cache: &'a mut ElementCache) -> Self {
        Self { host, cache }
    }

    /// Run `f` with a scope over this thread's default cache
    pub fn with_default<R>(host: &mut H, f: impl FnOnce(&mut Scope<'_, H>) -> R) -> R {
        ElementCache::with_default(|cache| f(&mut Scope::new(host, cache)))
    }
}
