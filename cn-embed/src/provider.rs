//! Process-wide memoizing provider for named embedding spaces.
//!
//! Loading a vector table is expensive; independently configured players must
//! never load the same space twice. The provider serializes first access
//! behind a mutex: the first caller for a name runs the loader, everyone
//! after gets the cached `Arc`.

use std::sync::{Arc, Mutex};

use rustc_hash::FxHashMap;

use crate::store::EmbeddingSpace;

#[derive(Debug, Default)]
pub struct SpaceProvider {
    slots: Mutex<FxHashMap<String, Arc<EmbeddingSpace>>>,
}

impl SpaceProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached space for `name`, or run `load` and cache its
    /// result. The map lock is held across `load`, so concurrent first
    /// access for the same name loads exactly once; a failed load caches
    /// nothing and the next caller retries.
    pub fn get_or_load<E>(
        &self,
        name: &str,
        load: impl FnOnce() -> Result<EmbeddingSpace, E>,
    ) -> Result<Arc<EmbeddingSpace>, E> {
        let mut slots = self.slots.lock().unwrap();
        if let Some(space) = slots.get(name) {
            return Ok(Arc::clone(space));
        }
        let space = Arc::new(load()?);
        slots.insert(name.to_string(), Arc::clone(&space));
        Ok(space)
    }

    /// Number of cached spaces.
    pub fn len(&self) -> usize {
        self.slots.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
