//! # Tile Geometry
//!
//! Integer tile coordinates and the axis-aligned rectangles the partition
//! tree subdivides. `x` grows to the right, `y` grows downward.

/// A tile coordinate on a floor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TilePos {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl TilePos {
    /// Creates a new tile coordinate.
    #[inline]
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for TilePos {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl From<TilePos> for (i32, i32) {
    #[inline]
    fn from(pos: TilePos) -> Self {
        (pos.x, pos.y)
    }
}

/// Which way a region is cut in two.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SplitAxis {
    /// Cut along a horizontal line: top and bottom halves.
    Horizontal,
    /// Cut along a vertical line: left and right halves.
    Vertical,
}

/// An axis-aligned rectangle in tile units.
///
/// Immutable once created; splitting produces two new regions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SpatialRegion {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Width in tiles.
    pub width: i32,
    /// Height in tiles.
    pub height: i32,
}

impl SpatialRegion {
    /// Creates a new region.
    #[inline]
    #[must_use]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Returns true if the region covers no tiles.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Number of tiles covered.
    #[inline]
    #[must_use]
    pub const fn area(&self) -> i64 {
        if self.is_empty() {
            0
        } else {
            self.width as i64 * self.height as i64
        }
    }

    /// Returns the side length cut by `axis`.
    #[inline]
    #[must_use]
    pub const fn extent(&self, axis: SplitAxis) -> i32 {
        match axis {
            SplitAxis::Horizontal => self.height,
            SplitAxis::Vertical => self.width,
        }
    }

    /// Returns true if the tile lies inside the region.
    #[inline]
    #[must_use]
    pub const fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }

    /// Returns true if `other` lies entirely inside this region.
    #[must_use]
    pub const fn contains_region(&self, other: &Self) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.x + other.width <= self.x + self.width
            && other.y + other.height <= self.y + self.height
    }

    /// Cuts the region in two at `offset` tiles from its top (horizontal)
    /// or left (vertical) edge.
    ///
    /// The halves exactly partition the region.
    #[must_use]
    pub const fn split_at(&self, axis: SplitAxis, offset: i32) -> (Self, Self) {
        match axis {
            SplitAxis::Horizontal => (
                Self::new(self.x, self.y, self.width, offset),
                Self::new(self.x, self.y + offset, self.width, self.height - offset),
            ),
            SplitAxis::Vertical => (
                Self::new(self.x, self.y, offset, self.height),
                Self::new(self.x + offset, self.y, self.width - offset, self.height),
            ),
        }
    }
}
