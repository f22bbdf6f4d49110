//! # DELVE Procedural Generation
//!
//! Deterministic multi-floor dungeon generation using binary space
//! partitioning.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: Same seed and parameters always produce the same dungeon
//! 2. **Explicit randomness**: One RNG, passed by hand, consumed in a fixed order
//! 3. **Best effort**: Degenerate inputs produce sparse floors, never errors
//! 4. **Read-only output**: Floors are built once, then only queried
//!
//! ## Core Components
//!
//! - `PartitionNode`: BSP tree that cuts a floor into disjoint regions
//! - `Room`: Rectangle inset in a leaf region, tagged with a `RoomRole`
//! - `Corridor`: L-shaped path between two room centers
//! - `Floor`: Rooms, corridors, stairs and the `CollisionGrid` for one level
//! - `DungeonGenerator`: Builds every floor and answers walkability queries
//!
//! ## Example
//!
//! ```rust
//! use delve_procedural::{DungeonGenerator, RoomRole};
//!
//! let dungeon = DungeonGenerator::new(50, 50, 3, Some(42));
//!
//! let entry = dungeon.get_floor(0).expect("three floors");
//! assert!(entry.stairs_up.is_empty());
//! assert!(entry.rooms.iter().any(|room| room.role == RoomRole::Spawn));
//!
//! let spawn = dungeon.get_spawn_point(0).expect("entry floor has rooms");
//! assert!(dungeon.is_walkable(0, spawn.x, spawn.y));
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod corridor;
pub mod error;
pub mod floor;
pub mod generator;
pub mod grid;
pub mod partition;
pub mod region;
pub mod room;

pub use config::GeneratorConfig;
pub use corridor::Corridor;
pub use error::{DungeonError, DungeonResult};
pub use floor::{Floor, StairDirection};
pub use generator::DungeonGenerator;
pub use grid::{Cell, CollisionGrid};
pub use partition::PartitionNode;
pub use region::{SpatialRegion, SplitAxis, TilePos};
pub use room::{Room, RoomRole};
