use core::ops::Range;
use std::collections::HashMap;

/// Maps real indexes to view handles owned by the host.
///
/// The engine only coordinates addressing: handles are produced and refreshed through the
/// data source and are dropped once their slot leaves the bound window.
#[derive(Clone, Debug)]
pub struct ViewMapper<H> {
    views: HashMap<usize, H>,
}

impl<H> Default for ViewMapper<H> {
    fn default() -> Self {
        Self {
            views: HashMap::new(),
        }
    }
}

impl<H> ViewMapper<H> {
    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    pub fn get(&self, real_index: usize) -> Option<&H> {
        self.views.get(&real_index)
    }

    pub(crate) fn get_mut(&mut self, real_index: usize) -> Option<&mut H> {
        self.views.get_mut(&real_index)
    }

    pub(crate) fn insert(&mut self, real_index: usize, view: H) {
        self.views.insert(real_index, view);
    }

    /// Drops handles outside `range`.
    pub(crate) fn retain_range(&mut self, range: Range<usize>) {
        self.views.retain(|i, _| range.contains(i));
    }

    pub(crate) fn clear(&mut self) {
        self.views.clear();
    }

    /// Iterates over bound `(real_index, handle)` pairs in ascending index order.
    pub fn for_each(&self, mut f: impl FnMut(usize, &H)) {
        let mut keys: Vec<usize> = self.views.keys().copied().collect();
        keys.sort_unstable();
        for k in keys {
            if let Some(v) = self.views.get(&k) {
                f(k, v);
            }
        }
    }
}
