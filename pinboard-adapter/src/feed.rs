use alloc::vec::Vec;

use pinboard::PageStatus;

/// The data layer behind a pinboard.
///
/// `len` is the number of tiles in the repeating pattern. Sources backed by a filtered list
/// usually report the length of a [`TileFeed`] so a temporarily empty filter result does not
/// collapse the board.
pub trait TileSource {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn status(&self) -> PageStatus;

    /// Starts loading the next page. Called at most once per debounce window.
    fn request_more(&mut self);
}

/// Keeps the last non-empty tile list as the pattern.
///
/// Filtering can briefly produce an empty list (e.g. while a new page loads); the board keeps
/// repeating the previous tiles instead of going blank.
#[derive(Clone, Debug)]
pub struct TileFeed<T> {
    stable: Vec<T>,
}

impl<T> TileFeed<T> {
    pub fn new() -> Self {
        Self { stable: Vec::new() }
    }

    /// Offers the current tile list. An empty list keeps the previous pattern.
    ///
    /// Returns the pattern to render.
    pub fn observe(&mut self, tiles: Vec<T>) -> &[T] {
        if !tiles.is_empty() {
            self.stable = tiles;
        }
        &self.stable
    }

    pub fn pattern(&self) -> &[T] {
        &self.stable
    }

    pub fn len(&self) -> usize {
        self.stable.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stable.is_empty()
    }

    /// Forgets the pattern (e.g. the user switched boards).
    pub fn clear(&mut self) {
        self.stable.clear();
    }
}

impl<T> Default for TileFeed<T> {
    fn default() -> Self {
        Self::new()
    }
}
