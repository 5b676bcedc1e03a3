#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

/// Measured tile heights keyed by tile id.
#[cfg(feature = "std")]
pub type HeightMap<K> = HashMap<K, f64>;
#[cfg(not(feature = "std"))]
pub type HeightMap<K> = BTreeMap<K, f64>;

/// Bound for tile ids used as map keys.
#[cfg(feature = "std")]
pub trait TileKey: core::hash::Hash + Eq {}
#[cfg(feature = "std")]
impl<K: core::hash::Hash + Eq> TileKey for K {}

#[cfg(not(feature = "std"))]
pub trait TileKey: Ord {}
#[cfg(not(feature = "std"))]
impl<K: Ord> TileKey for K {}
