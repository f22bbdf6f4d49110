//! # Corridors
//!
//! L-shaped tile paths between two room centers. The horizontal leg always
//! runs along the start row and the vertical leg along the end column, so a
//! given pair of endpoints always produces the same shape.

use crate::region::TilePos;

/// A corridor between two tiles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Corridor {
    /// Anchor in the first room.
    pub start: TilePos,
    /// Anchor in the second room.
    pub end: TilePos,
    /// Side length of the square carved around each path tile.
    pub width: i32,
    /// Tiles along the corridor center line.
    pub path: Vec<TilePos>,
}

impl Corridor {
    /// Builds the corridor and materializes its path.
    ///
    /// The path is a horizontal run at `start.y` covering
    /// `min(start.x, end.x)..=max(start.x, end.x)`, followed by a vertical
    /// run at `end.x` covering `min(start.y, end.y)..=max(start.y, end.y)`.
    /// The corner tile appears in both runs.
    #[must_use]
    pub fn build(start: TilePos, end: TilePos, width: i32) -> Self {
        let horizontal = (start.x.min(end.x)..=start.x.max(end.x)).map(|x| TilePos::new(x, start.y));
        let vertical = (start.y.min(end.y)..=start.y.max(end.y)).map(|y| TilePos::new(end.x, y));

        Self {
            start,
            end,
            width,
            path: horizontal.chain(vertical).collect(),
        }
    }

    /// Offsets covered around a path tile on each axis.
    ///
    /// For width `w` this is `-(w / 2) .. -(w / 2) + w`, so width 1 covers
    /// only the path tile itself.
    #[inline]
    #[must_use]
    pub fn pad_range(&self) -> std::ops::Range<i32> {
        let low = -(self.width.max(1) / 2);
        low..low + self.width.max(1)
    }

    /// Iterates over every tile carved by this corridor, path tile by path
    /// tile. Tiles may repeat and are not clamped to any floor.
    pub fn footprint(&self) -> impl Iterator<Item = TilePos> + '_ {
        let pad = self.pad_range();
        self.path.iter().flat_map(move |tile| {
            let pad_x = pad.clone();
            pad.clone()
                .flat_map(move |dy| pad_x.clone().map(move |dx| TilePos::new(tile.x + dx, tile.y + dy)))
        })
    }

    /// Number of tiles on the center line.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// Returns true if the path has no tiles.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }
}
