//! Framework-neutral driver for the `pinboard` crate.
//!
//! The `pinboard` crate is UI-agnostic and only holds state and math. This crate composes
//! its components into one [`Pinboard`] driver and sequences the per-frame pipeline:
//!
//! - scroll container contract ([`ScrollContainer`])
//! - data layer contract ([`TileSource`]) and a stable-pattern helper ([`TileFeed`])
//! - render contract (virtual position, origin, tile placements)
//!
//! This crate is intentionally framework-agnostic (no DOM/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod feed;

#[cfg(test)]
mod tests;

pub use controller::{FrameReport, Pinboard, ScrollContainer};
pub use feed::{TileFeed, TileSource};
