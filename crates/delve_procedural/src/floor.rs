//! # Floors
//!
//! One level of the dungeon: its rooms, corridors, stairs, spawn point and
//! the collision grid they are carved into. Adding a room, corridor or
//! stair both records it and carves it.

use crate::corridor::Corridor;
use crate::grid::{Cell, CollisionGrid};
use crate::partition::PartitionNode;
use crate::region::TilePos;
use crate::room::Room;

/// Direction of a staircase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StairDirection {
    /// Leads to the previous floor index.
    Up,
    /// Leads to the next floor index.
    Down,
}

/// A single generated level.
#[derive(Clone, Debug)]
pub struct Floor {
    /// Index of this floor; 0 is the entry floor.
    pub floor_number: usize,
    /// Width in tiles.
    pub width: i32,
    /// Height in tiles.
    pub height: i32,
    /// Rooms in partition-tree pre-order.
    pub rooms: Vec<Room>,
    /// Corridors in the order they were carved.
    pub corridors: Vec<Corridor>,
    /// Walkability of every tile.
    pub collision_grid: CollisionGrid,
    /// Stairs leading to the previous floor.
    pub stairs_up: Vec<TilePos>,
    /// Stairs leading to the next floor.
    pub stairs_down: Vec<TilePos>,
    /// Where the player enters; center of the spawn room.
    pub spawn_point: Option<TilePos>,
    /// Partition tree the floor was built from.
    pub(crate) partition: Option<PartitionNode>,
}

impl Floor {
    /// Creates an empty, fully blocked floor.
    #[must_use]
    pub fn new(width: i32, height: i32, floor_number: usize) -> Self {
        Self {
            floor_number,
            width,
            height,
            rooms: Vec::new(),
            corridors: Vec::new(),
            collision_grid: CollisionGrid::new(width, height),
            stairs_up: Vec::new(),
            stairs_down: Vec::new(),
            spawn_point: None,
            partition: None,
        }
    }

    /// The partition tree this floor was generated from.
    ///
    /// `None` for floors assembled by hand.
    #[must_use]
    pub const fn partition_tree(&self) -> Option<&PartitionNode> {
        self.partition.as_ref()
    }

    /// Records a room and carves every tile it covers.
    pub fn add_room(&mut self, room: Room) {
        for tile in room.tiles() {
            self.collision_grid.carve(tile.x, tile.y);
        }
        self.rooms.push(room);
    }

    /// Records a corridor and carves its padded path.
    pub fn add_corridor(&mut self, corridor: Corridor) {
        for tile in corridor.footprint() {
            self.collision_grid.carve(tile.x, tile.y);
        }
        self.corridors.push(corridor);
    }

    /// Records a staircase and makes its tile walkable.
    pub fn add_stairs(&mut self, pos: TilePos, direction: StairDirection) {
        match direction {
            StairDirection::Up => self.stairs_up.push(pos),
            StairDirection::Down => self.stairs_down.push(pos),
        }
        self.collision_grid.carve(pos.x, pos.y);
    }

    /// Cell at `(x, y)`, or `None` off the floor.
    #[inline]
    #[must_use]
    pub fn cell(&self, x: i32, y: i32) -> Option<Cell> {
        self.collision_grid.get(x, y)
    }

    /// Returns true if the tile is blocked or off the floor.
    #[inline]
    #[must_use]
    pub fn is_wall(&self, x: i32, y: i32) -> bool {
        self.collision_grid.is_blocked(x, y)
    }

    /// Returns true if the tile is on the floor and open.
    #[inline]
    #[must_use]
    pub fn is_walkable(&self, x: i32, y: i32) -> bool {
        !self.is_wall(x, y)
    }

    /// Number of walkable tiles.
    #[must_use]
    pub fn walkable_count(&self) -> usize {
        self.collision_grid.walkable_count()
    }

    /// Renders the floor as text, one line per row.
    ///
    /// `#` blocked, `.` walkable, `<` stairs up, `>` stairs down, `@` spawn.
    #[must_use]
    pub fn render_ascii(&self) -> String {
        let mut out = String::new();
        for y in 0..self.collision_grid.height() {
            for x in 0..self.collision_grid.width() {
                let pos = TilePos::new(x, y);
                let glyph = if self.stairs_up.contains(&pos) {
                    '<'
                } else if self.stairs_down.contains(&pos) {
                    '>'
                } else if self.spawn_point == Some(pos) {
                    '@'
                } else if self.is_wall(x, y) {
                    '#'
                } else {
                    '.'
                };
                out.push(glyph);
            }
            out.push('\n');
        }
        out
    }
}
