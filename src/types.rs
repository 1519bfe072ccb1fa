/// A point (or vector) in 2D space, y-up.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A width/height pair.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned rectangle in the scroll content's local space (y-up).
///
/// `x`/`y` are the min corner; `top`/`right` are the max edges.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Builds a rect from an anchored position: `pos` is where the anchor point sits.
    pub fn anchored(pos: Point, size: Size, anchor: Point) -> Self {
        Self {
            x: pos.x - size.width * anchor.x,
            y: pos.y - size.height * anchor.y,
            width: size.width,
            height: size.height,
        }
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y
    }

    pub fn top(&self) -> f32 {
        self.y + self.height
    }
}

/// The scroll axis a container is configured for.
///
/// Only one axis is scrollable at a time; visibility is tested on this axis only, the cross axis
/// is assumed already bounded by layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// How a managed item expresses visibility.
///
/// Policy is fixed per item at registration. `Active` requires that the parent's layout does not
/// resize around deactivated children, otherwise toggling would cause relayout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VisibilityToggle {
    /// Set opacity to the baseline when visible, to zero when not.
    #[default]
    Opacity,
    /// Flip the node's active flag.
    Active,
}

/// The viewport's rectangle expressed in the scroll content's local space.
///
/// Recomputed from the container's world position, cached size, and anchor on every refresh;
/// never cached across refreshes.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportWindow {
    pub top: f32,
    pub bottom: f32,
    pub left: f32,
    pub right: f32,
}

impl ViewportWindow {
    /// Tests a cached rect against the window on the active scroll axis only.
    pub fn contains(&self, rect: &Rect, axis: Axis) -> bool {
        match axis {
            Axis::Horizontal => rect.left() < self.right && rect.right() > self.left,
            Axis::Vertical => rect.top() > self.bottom && rect.bottom() < self.top,
        }
    }
}
