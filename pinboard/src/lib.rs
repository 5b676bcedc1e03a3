//! A headless engine for an infinite, virtualized pinboard.
//!
//! For a driver that wires these pieces to a scroll container, see the `pinboard-adapter`
//! crate.
//!
//! The pinboard maps an unbounded 2D scroll space onto a finite, periodically repeating
//! tile pattern:
//! - [`InfinitePlane`] keeps the native scroll offset inside a large plane and silently
//!   recenters it, accumulating the shift in an origin so virtual coordinates never jump.
//! - [`InputController`] folds wheel, touch, drag, press-and-hold and keyboard input into a
//!   single target and eases the native offset toward it every frame.
//! - [`PatternLayout`] buckets tiles into staggered columns that repeat seamlessly in both
//!   directions and enumerates the tile instances a renderer must draw.
//! - [`PaginationTrigger`] asks the data layer for more tiles, debounced.
//!
//! It is UI-agnostic. A host is expected to provide:
//! - the container's rect and native scroll offsets
//! - input events and `now_ms` timestamps
//! - animation frames / timer wakeups when the components ask for them
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod easing;
mod error;
mod input;
mod key;
mod layout;
mod math;
mod options;
mod pagination;
mod plane;
mod scroll;
mod state;
mod transition;
mod types;
mod viewport;


pub use easing::{EaseStep, ease_axis, ease_step};
pub use error::OptionsError;
pub use input::InputController;
pub use key::{HeightMap, TileKey};
pub use layout::{
    ColumnLayout, PatternLayout, TileMetrics, bucketize, column_count_for_width, column_stagger,
    layout_columns, resolve_heights,
};
pub use options::PinboardOptions;
pub use pagination::PaginationTrigger;
pub use plane::InfinitePlane;
pub use scroll::ScrollStateReader;
pub use state::PinboardState;
pub use transition::ColumnTransition;
pub use types::{
    Axis, ContainerRect, DeltaMode, Key, PageStatus, PointerInput, PointerKind, Recenter,
    TilePlacement, Vec2, Viewport, WheelInput,
};
pub use viewport::ViewportTracker;
