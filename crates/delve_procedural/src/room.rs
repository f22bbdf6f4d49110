//! # Rooms
//!
//! A room is a rectangle placed strictly inside a leaf region of the
//! partition tree, tagged with the role it plays on its floor.

use crate::region::TilePos;

/// What a room is used for by gameplay systems.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RoomRole {
    /// Player entry room. Exactly one per non-empty floor.
    Spawn,
    /// Ordinary room.
    #[default]
    Normal,
    /// Holds loot.
    Treasure,
    /// Holds a boss encounter.
    Boss,
}

impl RoomRole {
    /// Lowercase name, as used by content tables.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Spawn => "spawn",
            Self::Normal => "normal",
            Self::Treasure => "treasure",
            Self::Boss => "boss",
        }
    }

    /// Maps a uniform roll in `[0, 1)` to a role for a non-spawn room.
    #[must_use]
    pub fn from_roll(roll: f64, boss_chance: f64, treasure_chance: f64) -> Self {
        if roll < boss_chance {
            Self::Boss
        } else if roll < boss_chance + treasure_chance {
            Self::Treasure
        } else {
            Self::Normal
        }
    }
}

/// A placed room.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Room {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Width in tiles.
    pub width: i32,
    /// Height in tiles.
    pub height: i32,
    /// Role assigned after placement.
    pub role: RoomRole,
}

impl Room {
    /// Creates a normal room.
    #[inline]
    #[must_use]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            role: RoomRole::Normal,
        }
    }

    /// Center tile, used as the corridor anchor.
    #[inline]
    #[must_use]
    pub const fn center(&self) -> TilePos {
        TilePos::new(self.x + self.width / 2, self.y + self.height / 2)
    }

    /// `(x1, y1, x2, y2)` with an exclusive far corner.
    #[inline]
    #[must_use]
    pub const fn bounds(&self) -> (i32, i32, i32, i32) {
        (self.x, self.y, self.x + self.width, self.y + self.height)
    }

    /// Returns true if the tile is inside the room.
    #[inline]
    #[must_use]
    pub const fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }

    /// Returns true if the two rooms share at least one tile.
    #[must_use]
    pub const fn intersects(&self, other: &Self) -> bool {
        self.x < other.x + other.width
            && other.x < self.x + self.width
            && self.y < other.y + other.height
            && other.y < self.y + self.height
    }

    /// Iterates over every tile the room covers, row by row.
    pub fn tiles(&self) -> impl Iterator<Item = TilePos> {
        let (x1, y1, x2, y2) = self.bounds();
        (y1..y2).flat_map(move |y| (x1..x2).map(move |x| TilePos::new(x, y)))
    }
}
