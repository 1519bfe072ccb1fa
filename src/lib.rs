//! A headless viewport-culling engine for scrollable scene trees.
//!
//! Large scrollable content trees are expensive to keep fully rendered. This crate tracks the
//! nodes of such a tree, caches their content-space rectangles, and toggles their visibility
//! (opacity or active flag) as they enter and leave the viewport, without re-querying the scene
//! graph every frame and with a refresh cadence that adapts to scroll speed.
//!
//! It is UI-agnostic. A host scene graph is expected to provide, via the [`SceneGraph`] and
//! [`ScrollContainer`] traits:
//! - node validity, active flag, opacity, bounding size, anchor point
//! - world ↔ local coordinate conversion
//! - the scroll container's view/content nodes, axis, and content position
//!
//! The host routes structural notifications into [`Recycler::on_event`] and drives
//! [`Recycler::tick`] from its frame loop; all side effects are confined to toggling
//! opacity/active on managed nodes.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod key;
mod options;
mod recycler;
mod registry;
mod scene;
mod throttle;
mod types;


pub use options::RecyclerOptions;
pub use recycler::Recycler;
pub use registry::ManagedItem;
pub use scene::{SceneEvent, SceneGraph, ScrollContainer};
pub use throttle::{MAX_REFRESH_INTERVAL_MS, MIN_REFRESH_INTERVAL_MS};
pub use types::{Axis, Point, Rect, Size, ViewportWindow, VisibilityToggle};

#[doc(hidden)]
pub use key::NodeKey;
