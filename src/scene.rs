use crate::key::NodeKey;
use crate::types::{Point, Size};

/// The scene-graph collaborator.
///
/// The engine never owns scene nodes; it holds opaque `NodeId` handles and reads/toggles node
/// state through this trait. Implementations are expected to be cheap per call; the engine
/// caches geometry precisely so that it does not have to walk the scene every frame.
///
/// A handle may become invalid (node destroyed) at any time between calls; the engine always
/// checks [`is_valid`](Self::is_valid) before touching a node and silently drops stale entries.
pub trait SceneGraph {
    /// Opaque node handle. Identity-keyed: two handles are the same node iff they compare equal.
    type NodeId: NodeKey;

    /// Whether the handle still refers to a live node.
    fn is_valid(&self, node: Self::NodeId) -> bool;

    fn is_active(&self, node: Self::NodeId) -> bool;

    fn set_active(&mut self, node: Self::NodeId, active: bool);

    /// Current opacity in `0.0..=1.0`.
    fn opacity(&self, node: Self::NodeId) -> f32;

    fn set_opacity(&mut self, node: Self::NodeId, opacity: f32);

    fn child_count(&self, node: Self::NodeId) -> usize;

    /// Child at `index` in the node's current child order, if any.
    fn child_at(&self, node: Self::NodeId, index: usize) -> Option<Self::NodeId>;

    /// The node's bounding size in its own local space.
    fn bounding_size(&self, node: Self::NodeId) -> Size;

    /// The node's anchor point, per-axis in `0.0..=1.0` of the bounding size.
    fn anchor(&self, node: Self::NodeId) -> Point;

    /// Converts a point in the node's anchor-relative local space to world space.
    fn to_world(&self, node: Self::NodeId, local: Point) -> Point;

    /// Converts a world-space point into the node's anchor-relative local space.
    fn to_local(&self, node: Self::NodeId, world: Point) -> Point;
}

/// The scrollable-container collaborator.
///
/// A scroll view is a clipped `view` node with a larger `content` child that moves as the user
/// scrolls. Both accessors return `None` when the container is missing or destroyed, which the
/// engine treats as "disable myself" rather than an error.
pub trait ScrollContainer: SceneGraph {
    /// The clipping viewport node.
    fn view_node(&self) -> Option<Self::NodeId>;

    /// The moving content node whose subtree is managed.
    fn content_node(&self) -> Option<Self::NodeId>;

    /// Whether the container scrolls horizontally (otherwise vertically).
    fn horizontal(&self) -> bool;

    /// The content node's current position in its parent, used to derive scroll speed.
    fn content_position(&self) -> Point;
}

/// Collaborator notifications routed into [`Recycler::on_event`](crate::Recycler::on_event).
///
/// Structural variants (`ChildAdded`/`ChildRemoved`/`ChildReordered`/`ContentResized`) mark the
/// registry dirty; `ContentMoved` drives throttled refreshes; `ScrollEnded` forces one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SceneEvent {
    /// A node was added somewhere in the managed subtree.
    ChildAdded,
    /// A node was removed from the managed subtree.
    ChildRemoved,
    /// Children of a managed node were reordered.
    ChildReordered,
    /// The container (view) node was resized.
    ContainerResized,
    /// The content node was resized (e.g. after a relayout).
    ContentResized,
    /// The content node moved, i.e. the user scrolled.
    ContentMoved,
    /// The container reported the end of a scroll gesture.
    ScrollEnded,
}
