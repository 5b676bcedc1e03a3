use core::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

/// A 2D point or displacement in CSS pixels.
///
/// Used for native scroll offsets, the virtual origin, the easing target and pointer
/// positions alike; the meaning comes from where the value is stored.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    pub fn axis(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    pub fn axis_mut(&mut self, axis: Axis) -> &mut f64 {
        match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
        }
    }
}

impl Add for Vec2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Vec2 {
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Mul<f64> for Vec2 {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Vec2 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    pub const BOTH: [Axis; 2] = [Axis::X, Axis::Y];
}

/// Pixel dimensions of the scroll container's visible area.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    /// Used until the container has been measured.
    pub const FALLBACK: Self = Self {
        width: 1200.0,
        height: 800.0,
    };

    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// `true` when both dimensions are finite and strictly positive.
    pub fn is_measurable(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::FALLBACK
    }
}

/// The scroll container's bounding rect in client coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContainerRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ContainerRect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn from_viewport(viewport: Viewport) -> Self {
        Self::new(0.0, 0.0, viewport.width, viewport.height)
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width, self.height)
    }

    pub fn center_y(&self) -> f64 {
        self.y + self.height / 2.0
    }

    pub fn is_measurable(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.viewport().is_measurable()
    }
}

impl Default for ContainerRect {
    fn default() -> Self {
        Self::from_viewport(Viewport::FALLBACK)
    }
}

/// Unit of a wheel event's deltas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DeltaMode {
    #[default]
    Pixel,
    Line,
    Page,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WheelInput {
    pub delta: Vec2,
    pub mode: DeltaMode,
    /// Held modifier that hands the wheel back to the host (pinch-zoom).
    pub ctrl_key: bool,
}

impl WheelInput {
    pub const fn pixels(dx: f64, dy: f64) -> Self {
        Self {
            delta: Vec2::new(dx, dy),
            mode: DeltaMode::Pixel,
            ctrl_key: false,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PointerKind {
    #[default]
    Mouse,
    Touch,
    Pen,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointerInput {
    /// Client coordinates.
    pub position: Vec2,
    /// `0` is the primary button.
    pub button: i16,
    pub kind: PointerKind,
}

impl PointerInput {
    pub const fn primary_mouse(x: f64, y: f64) -> Self {
        Self {
            position: Vec2::new(x, y),
            button: 0,
            kind: PointerKind::Mouse,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    PageUp,
    PageDown,
    Home,
    End,
    Other,
}

/// Data-layer flags consumed by the pagination trigger.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageStatus {
    pub has_more: bool,
    pub is_loading: bool,
}

/// Outcome of a silent recenter.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Recenter {
    /// Amount added to the origin (zero on axes that did not trip the guard).
    pub delta: Vec2,
    /// The native scroll offset the host must apply.
    pub scroll_to: Vec2,
    pub x: bool,
    pub y: bool,
}

impl Recenter {
    pub fn tripped(&self, axis: Axis) -> bool {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }
}

/// One tile instance the renderer must draw.
///
/// `(column, repetition, tile_index)` uniquely identifies an instance within a frame.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TilePlacement {
    /// Index into the tile list.
    pub tile_index: usize,
    /// Unbounded column index in the virtual plane.
    pub column: i64,
    /// The bucket the column repeats (`column rem_euclid layout_columns`).
    pub base_column: usize,
    pub repetition: i64,
    /// Position inside the native plane (already corrected by the origin).
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}
