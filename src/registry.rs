use alloc::vec::Vec;

use crate::key::{NodeKey, NodeMap};
use crate::types::{Rect, VisibilityToggle};

/// One tracked scene node: the cached geometry snapshot plus the last-applied visibility state.
#[derive(Clone, Copy, Debug)]
pub struct ManagedItem<N> {
    /// Handle to the underlying scene node. Shared with the scene graph; the engine only ever
    /// toggles its visibility attributes.
    pub node: N,
    /// Bounding rectangle in the scroll content's local space, cached at registration time.
    pub rect: Rect,
    /// The last visibility actually applied to the node. Invariant: mirrors the last side
    /// effect, so unchanged visibility never produces a redundant toggle.
    pub is_visible: bool,
    /// Opacity the node is restored to when it re-enters the viewport. Captured once per handle
    /// lifetime; toggling never drifts it.
    pub baseline_opacity: f32,
    /// How visibility is expressed for this node.
    pub toggle: VisibilityToggle,
}

/// Insertion-ordered set of managed items, one entry per node handle.
///
/// A handle-keyed index map gives O(1) upsert during rebuilds; removal preserves order and
/// repairs the map. Entries for destroyed nodes are pruned lazily by the evaluator, not here.
#[derive(Clone, Debug)]
pub(crate) struct Registry<N: NodeKey> {
    entries: Vec<ManagedItem<N>>,
    index: NodeMap<N, usize>,
}

impl<N: NodeKey> Registry<N> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: NodeMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
    }

    pub fn position(&self, node: N) -> Option<usize> {
        self.index.get(&node).copied()
    }

    pub fn get(&self, k: usize) -> Option<&ManagedItem<N>> {
        self.entries.get(k)
    }

    pub fn get_mut(&mut self, k: usize) -> Option<&mut ManagedItem<N>> {
        self.entries.get_mut(k)
    }

    pub fn find(&self, node: N) -> Option<&ManagedItem<N>> {
        self.position(node).and_then(|k| self.entries.get(k))
    }

    pub fn push(&mut self, item: ManagedItem<N>) {
        debug_assert!(
            !self.index.contains_key(&item.node),
            "push of an already-registered node"
        );
        self.index.insert(item.node, self.entries.len());
        self.entries.push(item);
    }

    /// Removes the entry at `k`, preserving insertion order of the rest.
    pub fn remove(&mut self, k: usize) -> ManagedItem<N> {
        let item = self.entries.remove(k);
        self.index.remove(&item.node);
        for v in self.index.values_mut() {
            if *v > k {
                *v -= 1;
            }
        }
        item
    }
}
