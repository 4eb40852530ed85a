//! Identity cache
//!
//! Maps identity keys to the nodes built for them. Entries hold keys
//! weakly: dropping the last clone of a key retires its entry on the next
//! prune. String markers stay claimed until `reset()`.

use std::cell::RefCell;
use std::collections::HashMap;

use weft_dom::{HostTree, NodeId};

use crate::key::{KeyId, WeakKey};
use crate::{BuildError, BuildResult, Config, ElementKey};

#[derive(Debug)]
struct Entry {
    key: WeakKey,
    node: NodeId,
}

/// Key to node associations for one identity epoch
#[derive(Debug, Default)]
pub struct ElementCache {
    config: Config,
    entries: HashMap<KeyId, Entry>,
    markers: HashMap<String, WeakKey>,
    insertions: usize,
}

thread_local! {
    static DEFAULT_CACHE: RefCell<ElementCache> = RefCell::new(ElementCache::new());
}

impl ElementCache {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            config,
            entries: HashMap::new(),
            markers: HashMap::new(),
            insertions: 0,
        }
    }

    /// Run `f` against this thread's shared cache.
    ///
    /// Panics if called from inside another `with_default` on the same thread.
    pub fn with_default<R>(f: impl FnOnce(&mut ElementCache) -> R) -> R {
        DEFAULT_CACHE.with(|cache| f(&mut cache.borrow_mut()))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Number of tracked keys, dropped-but-unpruned ones included
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Node currently associated with `key`, if any
    pub fn get(&self, key: &ElementKey) -> Option<NodeId> {
        self.entries.get(&key.id()).map(|e| e.node)
    }

    /// Resolve the node a construction call for `tag_name` should target.
    ///
    /// Without a key a fresh element is created and nothing is cached. A key
    /// seen before returns its node. A cold key carrying a string marker
    /// first looks for a connected element already marked with it; that
    /// scan only runs until the key is associated.
    pub fn resolve<H: HostTree>(
        &mut self,
        host: &mut H,
        tag_name: &str,
        key: Option<&ElementKey>,
    ) -> BuildResult<NodeId> {
        let Some(key) = key else {
            return Ok(host.create_element(tag_name));
        };

        let id = key.id();
        // A node destroyed by the host no longer counts as an association
        let mut node = self.get(key).filter(|&n| host.contains(n));

        if node.is_none() {
            if let Some(marker) = key.string() {
                node = self.scan(host, id, marker)?;
            }
        }

        if let Some(existing) = node {
            let found = host.tag_name(existing).unwrap_or_default();
            if !found.eq_ignore_ascii_case(tag_name) {
                return Err(BuildError::Conflict {
                    expected: tag_name.to_string(),
                    found: found.to_string(),
                });
            }
        }

        let node = match node {
            Some(node) => node,
            None => host.create_element(tag_name),
        };
        self.associate(key, node);
        Ok(node)
    }

    fn scan<H: HostTree>(&self, host: &H, id: KeyId, marker: &str) -> BuildResult<Option<NodeId>> {
        if self.marker_owner(marker).is_some_and(|owner| owner != id) {
            return Err(BuildError::DuplicateMarker {
                marker: marker.to_string(),
            });
        }

        let matches = host.query_by_attribute(&self.config.key_attribute, marker);
        tracing::debug!(marker, matches = matches.len(), "scanned for key string");
        match matches.as_slice() {
            [] => Ok(None),
            [node] => Ok(Some(*node)),
            many => Err(BuildError::AmbiguousMatch {
                marker: marker.to_string(),
                count: many.len(),
            }),
        }
    }

    /// Key that claimed `marker`, whether or not the caller still holds it
    fn marker_owner(&self, marker: &str) -> Option<KeyId> {
        self.markers.get(marker).map(WeakKey::id)
    }

    fn associate(&mut self, key: &ElementKey, node: NodeId) {
        let id = key.id();
        let previous = self.entries.insert(
            id,
            Entry {
                key: key.downgrade(),
                node,
            },
        );
        if let Some(marker) = key.string() {
            self.markers
                .entry(marker.to_string())
                .or_insert_with(|| key.downgrade());
        }

        if previous.is_none() {
            self.insertions += 1;
            let interval = self.config.prune_interval;
            if interval > 0 && self.insertions % interval == 0 {
                self.prune();
            }
        }
    }

    /// Drop entries whose keys are gone. Returns how many were removed.
    ///
    /// Markers are left claimed; only `reset()` releases them.
    pub fn prune(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, e| e.key.is_alive());
        let removed = before - self.entries.len();
        if removed > 0 {
            tracing::debug!(removed, remaining = self.entries.len(), "pruned identity cache");
        }
        removed
    }

    /// Forget every association and marker, starting a new identity epoch
    pub fn reset(&mut self) {
        tracing::debug!(entries = self.entries.len(), "reset identity cache");
        self.entries.clear();
        self.markers.clear();
        self.insertions = 0;
    }
}
