//! # Collision Grid
//!
//! Per-floor walkability map. Starts fully blocked; generation carves
//! walkable tiles into it. Reads outside the grid report blocked.

/// State of one grid cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Cell {
    /// Open floor.
    Walkable = 0,
    /// Solid rock.
    #[default]
    Blocked = 1,
}

impl Cell {
    /// Returns true for [`Cell::Blocked`].
    #[inline]
    #[must_use]
    pub const fn is_blocked(self) -> bool {
        matches!(self, Self::Blocked)
    }
}

/// A `height × width` grid of cells, stored row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CollisionGrid {
    width: i32,
    height: i32,
    cells: Vec<Cell>,
}

impl CollisionGrid {
    /// Creates a fully blocked grid.
    ///
    /// Non-positive dimensions produce an empty grid where every read is blocked.
    #[must_use]
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        let len = usize::try_from(i64::from(width) * i64::from(height)).unwrap_or(0);
        Self {
            width,
            height,
            cells: vec![Cell::Blocked; len],
        }
    }

    /// Grid width in tiles.
    #[inline]
    #[must_use]
    pub const fn width(&self) -> i32 {
        self.width
    }

    /// Grid height in tiles.
    #[inline]
    #[must_use]
    pub const fn height(&self) -> i32 {
        self.height
    }

    /// Returns true if the tile lies on the grid.
    #[inline]
    #[must_use]
    pub const fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.width && y < self.height
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if !self.in_bounds(x, y) {
            return None;
        }
        usize::try_from(y * self.width + x).ok()
    }

    /// Cell at `(x, y)`, or `None` off the grid.
    #[inline]
    #[must_use]
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// Returns true if the tile is blocked or off the grid.
    #[inline]
    #[must_use]
    pub fn is_blocked(&self, x: i32, y: i32) -> bool {
        !matches!(self.get(x, y), Some(Cell::Walkable))
    }

    /// Sets a cell. Writes off the grid are ignored.
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = cell;
        }
    }

    /// Marks a tile walkable. Writes off the grid are ignored.
    #[inline]
    pub fn carve(&mut self, x: i32, y: i32) {
        self.set(x, y, Cell::Walkable);
    }

    /// Number of walkable cells.
    #[must_use]
    pub fn walkable_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_blocked()).count()
    }

    /// Iterates over rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        // chunks_exact panics on 0; an empty grid has no rows anyway
        let row_len = usize::try_from(self.width).unwrap_or(0).max(1);
        self.cells.chunks_exact(row_len)
    }
}
