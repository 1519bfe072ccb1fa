use alloc::vec::Vec;

use crate::key::{NodeKey, NodeMap};
use crate::options::RecyclerOptions;
use crate::registry::{ManagedItem, Registry};
use crate::scene::{SceneEvent, ScrollContainer};
use crate::throttle::{MIN_REFRESH_INTERVAL_MS, Throttle};
use crate::types::{Axis, Point, Rect, Size, ViewportWindow, VisibilityToggle};

/// A headless scroll-view recycler.
///
/// One instance manages one scroll container. It keeps a registry of candidate nodes across a
/// depth-bounded subtree of the scroll content (plus any explicitly tracked nodes), caches each
/// node's content-space rectangle, and toggles visibility when a node's rectangle crosses the
/// viewport window on the active scroll axis.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold scene objects, only opaque handles.
/// - The host routes collaborator notifications into [`on_event`](Self::on_event) and calls
///   [`tick`](Self::tick) once per frame.
/// - All side effects go through the [`ScrollContainer`] trait and are confined to toggling
///   opacity/active on managed nodes; the engine never mutates layout or structure.
///
/// Everything runs synchronously inside the triggering call: a structural notification marks
/// the registry dirty before returning, and a forced refresh rebuilds before it evaluates, so a
/// caller observing visibility right after [`force_refresh`](Self::force_refresh) sees a result
/// consistent with the current structure.
#[derive(Clone, Debug)]
pub struct Recycler<N: NodeKey> {
    options: RecyclerOptions<N>,
    registry: Registry<N>,
    /// Baseline opacity per handle, captured on first registration and never auto-cleared, so a
    /// node that leaves and re-enters the registry keeps its original designed opacity.
    baselines: NodeMap<N, f32>,
    /// Nodes registered via [`add_tracked_node`](Self::add_tracked_node), re-applied after
    /// every rebuild so their toggle policy survives.
    tracked: Vec<(N, VisibilityToggle)>,
    throttle: Throttle,
    window: ViewportWindow,
    /// Container size, cached here and refreshed on [`SceneEvent::ContainerResized`].
    view_size: Size,
    dirty: bool,
    enabled: bool,
    /// Deadline of the single pending delayed refresh, consumed by [`tick`](Self::tick).
    pending_refresh_ms: Option<u64>,
}

impl<N: NodeKey> Recycler<N> {
    pub fn new(options: RecyclerOptions<N>) -> Self {
        let mut options = options;
        options.refresh_interval_ms = options.refresh_interval_ms.max(MIN_REFRESH_INTERVAL_MS);
        Self {
            options,
            registry: Registry::new(),
            baselines: NodeMap::new(),
            tracked: Vec::new(),
            throttle: Throttle::new(),
            window: ViewportWindow::default(),
            view_size: Size::ZERO,
            dirty: false,
            enabled: false,
            pending_refresh_ms: None,
        }
    }

    /// Binds the engine to its container and schedules the initial registry build after the
    /// warmup delay.
    ///
    /// A missing or invalid container disables the engine (every operation becomes a no-op)
    /// rather than failing the host. Returns whether the engine is enabled.
    pub fn attach<S: ScrollContainer<NodeId = N>>(&mut self, scene: &S, now_ms: u64) -> bool {
        let valid = match (scene.view_node(), scene.content_node()) {
            (Some(view), Some(content)) => scene.is_valid(view) && scene.is_valid(content),
            _ => false,
        };
        if !valid {
            rwarn!("attach: missing or invalid scroll container, recycler disabled");
            self.enabled = false;
            return false;
        }

        self.enabled = true;
        if let Some(view) = scene.view_node() {
            self.view_size = scene.bounding_size(view);
        }
        self.throttle.seed(now_ms, scene.content_position());
        self.registry.clear();
        self.dirty = true;
        self.pending_refresh_ms = Some(now_ms.saturating_add(self.options.warmup_delay_ms));
        true
    }

    /// Releases the container binding: cancels the pending delayed refresh and disables the
    /// engine. Baseline opacities are kept so a later re-attach restores the same values.
    pub fn detach(&mut self) {
        self.pending_refresh_ms = None;
        self.registry.clear();
        self.dirty = false;
        self.enabled = false;
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn options(&self) -> &RecyclerOptions<N> {
        &self.options
    }

    pub fn set_depth(&mut self, depth: i32) {
        self.options.depth = depth;
        self.dirty = true;
    }

    /// Sets the refresh floor in seconds, clamped to 1/60 s.
    pub fn set_refresh_interval(&mut self, seconds: f64) {
        self.options.refresh_interval_ms = (seconds * 1000.0).max(MIN_REFRESH_INTERVAL_MS);
    }

    /// Number of managed items currently in the registry.
    pub fn managed_len(&self) -> usize {
        self.registry.len()
    }

    /// The viewport window computed by the last refresh.
    pub fn window(&self) -> ViewportWindow {
        self.window
    }

    /// Whether a structural change is waiting for the next refresh to rebuild the registry.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Deadline of the pending delayed refresh, if one is scheduled.
    pub fn pending_refresh_at(&self) -> Option<u64> {
        self.pending_refresh_ms
    }

    /// Scroll speed observed at the last accepted refresh, in content-units per second.
    pub fn scroll_speed(&self) -> f64 {
        self.throttle.speed()
    }

    /// Adaptive interval derived at the last accepted refresh, in milliseconds.
    pub fn adaptive_interval_ms(&self) -> f64 {
        self.throttle.interval_ms()
    }

    /// The registry entry for `node`, if it is currently managed.
    pub fn item(&self, node: N) -> Option<&ManagedItem<N>> {
        self.registry.find(node)
    }

    /// The baseline opacity captured for `node`, if it was ever registered.
    pub fn baseline_opacity(&self, node: N) -> Option<f32> {
        self.baselines.get(&node).copied()
    }

    /// Tracks one extra node outside the normal traversal roots (e.g. a persistent header).
    ///
    /// Idempotent per handle: a repeated call updates the toggle policy and the cached rect
    /// without resetting the baseline opacity.
    pub fn add_tracked_node<S: ScrollContainer<NodeId = N>>(
        &mut self,
        scene: &mut S,
        node: N,
        toggle: VisibilityToggle,
    ) {
        if !self.enabled {
            return;
        }
        match self.tracked.iter_mut().find(|(n, _)| *n == node) {
            Some(entry) => entry.1 = toggle,
            None => self.tracked.push((node, toggle)),
        }
        self.register_node(scene, node, toggle);
    }

    /// Routes a collaborator notification into the engine.
    pub fn on_event<S: ScrollContainer<NodeId = N>>(
        &mut self,
        scene: &mut S,
        event: SceneEvent,
        now_ms: u64,
    ) {
        if !self.enabled {
            return;
        }
        match event {
            SceneEvent::ChildAdded | SceneEvent::ChildRemoved | SceneEvent::ChildReordered => {
                self.dirty = true;
                self.force_refresh(scene, now_ms);
            }
            SceneEvent::ContainerResized => {
                if let Some(view) = scene.view_node() {
                    self.view_size = scene.bounding_size(view);
                }
            }
            SceneEvent::ContentResized => {
                self.dirty = true;
                self.force_refresh(scene, now_ms);
                // A late second pass catches positions that settle after the resize burst.
                self.schedule_refresh(now_ms.saturating_add(self.options.settle_delay_ms));
            }
            SceneEvent::ContentMoved => self.refresh(scene, now_ms),
            SceneEvent::ScrollEnded => self.force_refresh(scene, now_ms),
        }
    }

    /// Advances the engine's clock, consuming at most one due pending refresh.
    pub fn tick<S: ScrollContainer<NodeId = N>>(&mut self, scene: &mut S, now_ms: u64) {
        if !self.enabled {
            return;
        }
        if let Some(at) = self.pending_refresh_ms {
            if now_ms >= at {
                self.pending_refresh_ms = None;
                self.force_refresh(scene, now_ms);
            }
        }
    }

    /// Runs a refresh gated by the throttle controller.
    pub fn refresh<S: ScrollContainer<NodeId = N>>(&mut self, scene: &mut S, now_ms: u64) {
        self.run(scene, now_ms, false);
    }

    /// Runs a refresh unconditionally: rebuilds the registry if dirty, recomputes the viewport
    /// window, and evaluates visibility.
    pub fn force_refresh<S: ScrollContainer<NodeId = N>>(&mut self, scene: &mut S, now_ms: u64) {
        self.run(scene, now_ms, true);
    }

    fn run<S: ScrollContainer<NodeId = N>>(&mut self, scene: &mut S, now_ms: u64, force: bool) {
        if !self.enabled {
            return;
        }
        let horizontal = scene.horizontal();
        if !self.throttle.gate(
            now_ms,
            scene.content_position(),
            horizontal,
            self.options.refresh_interval_ms,
            force,
        ) {
            return;
        }

        if self.dirty {
            self.rebuild(scene);
            self.dirty = false;
        }
        self.window = self.compute_window(scene);
        let axis = if horizontal {
            Axis::Horizontal
        } else {
            Axis::Vertical
        };
        self.evaluate(scene, axis);
    }

    /// Supersedes any earlier deadline; at most one delayed pass is ever pending.
    fn schedule_refresh(&mut self, at_ms: u64) {
        self.pending_refresh_ms = Some(at_ms);
    }

    /// Clears the registry and repopulates it from the scroll content, the configured extra
    /// roots, and the manually tracked nodes, in that order.
    fn rebuild<S: ScrollContainer<NodeId = N>>(&mut self, scene: &mut S) {
        self.registry.clear();
        if let Some(content) = scene.content_node() {
            self.collect(scene, content);
        }
        let roots = self.options.extra_roots.clone();
        for root in roots {
            self.collect(scene, root);
        }
        let tracked = self.tracked.clone();
        for (node, toggle) in tracked {
            self.register_node(scene, node, toggle);
        }
        rdebug!(total = self.registry.len(), "registry rebuilt");
    }

    /// Depth-bounded worklist traversal below `root`. The root's own children count as depth 1;
    /// a non-positive depth registers nothing. Inactive nodes are neither registered nor
    /// descended into; destroyed nodes are skipped silently.
    fn collect<S: ScrollContainer<NodeId = N>>(&mut self, scene: &mut S, root: N) {
        let max_depth = self.options.depth;
        let mut stack: Vec<(N, i32)> = alloc::vec![(root, 1)];
        while let Some((parent, depth)) = stack.pop() {
            if depth > max_depth {
                continue;
            }
            for i in 0..scene.child_count(parent) {
                let Some(child) = scene.child_at(parent, i) else {
                    continue;
                };
                if !scene.is_valid(child) {
                    continue;
                }
                self.register_node(scene, child, VisibilityToggle::default());
                if scene.is_active(child) {
                    stack.push((child, depth + 1));
                }
            }
        }
    }

    /// Inserts or updates one registry entry for `node`.
    ///
    /// The cached rect is the node's bounding box converted into the scroll content's local
    /// space (world-position round trip). The baseline opacity is established exactly once per
    /// handle lifetime; re-registration updates rect and policy in place without touching it.
    /// As a side effect the node's opacity is forced to its baseline (a no-op when already
    /// there), so visible items never start partially faded from a previous session.
    fn register_node<S: ScrollContainer<NodeId = N>>(
        &mut self,
        scene: &mut S,
        node: N,
        toggle: VisibilityToggle,
    ) {
        if !scene.is_valid(node) || !scene.is_active(node) {
            return;
        }
        let Some(content) = scene.content_node() else {
            return;
        };

        let world = scene.to_world(node, Point::ZERO);
        let pos = scene.to_local(content, world);
        let size = scene.bounding_size(node);
        let anchor = scene.anchor(node);
        let rect = Rect::anchored(pos, size, anchor);

        if let Some(k) = self.registry.position(node) {
            if let Some(item) = self.registry.get_mut(k) {
                item.rect = rect;
                item.toggle = toggle;
                let baseline = item.baseline_opacity;
                scene.set_opacity(node, baseline);
            }
            return;
        }

        let baseline = match self.baselines.get(&node) {
            Some(&b) => b,
            None => {
                let observed = scene.opacity(node);
                // A node observed fully transparent was hidden by an earlier session; restore
                // it to opaque rather than pinning it invisible forever.
                let b = if observed == 0.0 { 1.0 } else { observed };
                self.baselines.insert(node, b);
                b
            }
        };
        scene.set_opacity(node, baseline);
        self.registry.push(ManagedItem {
            node,
            rect,
            is_visible: true,
            baseline_opacity: baseline,
            toggle,
        });
    }

    /// Converts the container's world origin into content space and expands it by the cached
    /// container size scaled by the anchor point. Pure function of current state, O(1).
    fn compute_window<S: ScrollContainer<NodeId = N>>(&self, scene: &S) -> ViewportWindow {
        let (Some(view), Some(content)) = (scene.view_node(), scene.content_node()) else {
            return ViewportWindow::default();
        };
        let world = scene.to_world(view, Point::ZERO);
        let rel = scene.to_local(content, world);
        let anchor = scene.anchor(view);
        let size = self.view_size;
        ViewportWindow {
            top: rel.y + size.height * (1.0 - anchor.y),
            bottom: rel.y - size.height * anchor.y,
            left: rel.x - size.width * anchor.x,
            right: rel.x + size.width * (1.0 - anchor.x),
        }
    }

    /// Walks the registry in reverse insertion order (so in-place removals cannot skip
    /// entries), prunes stale handles, and toggles visibility on state transitions only:
    /// toggling cost is proportional to transitions, not to registry size.
    fn evaluate<S: ScrollContainer<NodeId = N>>(&mut self, scene: &mut S, axis: Axis) {
        let window = self.window;
        let mut visible = 0usize;
        let mut k = self.registry.len();
        while k > 0 {
            k -= 1;
            let Some(item) = self.registry.get(k) else {
                continue;
            };
            let node = item.node;
            if !scene.is_valid(node) {
                self.registry.remove(k);
                continue;
            }
            let in_view = window.contains(&item.rect, axis);
            if let Some(item) = self.registry.get_mut(k) {
                if in_view != item.is_visible {
                    match item.toggle {
                        VisibilityToggle::Opacity => {
                            let target = if in_view { item.baseline_opacity } else { 0.0 };
                            scene.set_opacity(node, target);
                        }
                        VisibilityToggle::Active => scene.set_active(node, in_view),
                    }
                    item.is_visible = in_view;
                }
            }
            if in_view {
                visible += 1;
            }
        }
        rtrace!(visible, total = self.registry.len(), "visibility pass");
    }
}
