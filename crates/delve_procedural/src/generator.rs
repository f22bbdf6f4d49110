//! # Dungeon Generator
//!
//! Builds every floor of a dungeon up front from a single seeded RNG and
//! then serves read-only queries.
//!
//! ## Draw Order
//!
//! Per floor, in floor-index order:
//!
//! 1. Partition splits (one pass of the tree per split iteration)
//! 2. Room sizes and positions (tree pre-order)
//! 3. Role rolls for every room after the first
//! 4. Corridor anchor coin flips (tree post-order)
//! 5. Stairs-up room, then stairs-down room
//!
//! Changing this order changes the dungeon a seed produces.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::GeneratorConfig;
use crate::corridor::Corridor;
use crate::error::DungeonResult;
use crate::floor::{Floor, StairDirection};
use crate::partition::PartitionNode;
use crate::region::{SpatialRegion, TilePos};
use crate::room::{Room, RoomRole};

/// Multi-floor BSP dungeon.
///
/// # Example
///
/// ```rust
/// use delve_procedural::DungeonGenerator;
///
/// let dungeon = DungeonGenerator::new(50, 50, 3, Some(42));
/// let spawn = dungeon.get_spawn_point(0).expect("entry floor has rooms");
/// assert!(dungeon.is_walkable(0, spawn.x, spawn.y));
/// ```
#[derive(Clone, Debug)]
pub struct DungeonGenerator {
    /// Floor width in tiles.
    width: i32,
    /// Floor height in tiles.
    height: i32,
    /// Number of floors requested.
    num_floors: usize,
    /// Seed the RNG was created from.
    seed: u64,
    /// Generation parameters.
    config: GeneratorConfig,
    /// The single random source, left in its post-generation state.
    rng: ChaCha8Rng,
    /// Generated floors, index 0 first.
    floors: Vec<Floor>,
}

impl DungeonGenerator {
    /// Generates a dungeon with the default parameters.
    ///
    /// Without a seed, one is drawn from the thread RNG; [`seed`](Self::seed)
    /// reports it so the layout can still be reproduced.
    ///
    /// Non-positive dimensions are not rejected; they produce floors with
    /// no rooms.
    #[must_use]
    pub fn new(width: i32, height: i32, num_floors: usize, seed: Option<u64>) -> Self {
        Self::build(width, height, num_floors, seed, GeneratorConfig::default())
    }

    /// Generates a dungeon with custom parameters.
    ///
    /// # Errors
    ///
    /// Returns [`DungeonError::InvalidConfig`](crate::DungeonError::InvalidConfig)
    /// if `config` fails validation.
    pub fn with_config(
        width: i32,
        height: i32,
        num_floors: usize,
        seed: Option<u64>,
        config: GeneratorConfig,
    ) -> DungeonResult<Self> {
        config.validate()?;
        Ok(Self::build(width, height, num_floors, seed, config))
    }

    fn build(
        width: i32,
        height: i32,
        num_floors: usize,
        seed: Option<u64>,
        config: GeneratorConfig,
    ) -> Self {
        let seed = seed.unwrap_or_else(rand::random);
        let mut dungeon = Self {
            width,
            height,
            num_floors,
            seed,
            config,
            rng: ChaCha8Rng::seed_from_u64(seed),
            floors: Vec::with_capacity(num_floors),
        };
        dungeon.generate();
        dungeon
    }

    fn generate(&mut self) {
        tracing::info!(
            "Generating {} floor(s) of {}x{} tiles (seed {})",
            self.num_floors,
            self.width,
            self.height,
            self.seed
        );

        for floor_number in 0..self.num_floors {
            let floor = self.generate_floor(floor_number);
            self.floors.push(floor);
        }
    }

    fn generate_floor(&mut self, floor_number: usize) -> Floor {
        let mut floor = Floor::new(self.width, self.height, floor_number);
        let config = &self.config;
        let rng = &mut self.rng;

        // Partition
        let mut root = PartitionNode::new(SpatialRegion::new(0, 0, self.width, self.height));
        for _ in 0..config.split_iterations {
            root.split(config.min_split_size, rng);
        }

        // Room placement
        root.create_rooms(config.min_room_size, config.max_room_size, rng);

        // Role assignment: first room in pre-order is the spawn room
        let mut index = 0usize;
        root.for_each_room_mut(&mut |room: &mut Room| {
            room.role = if index == 0 {
                RoomRole::Spawn
            } else {
                RoomRole::from_roll(rng.gen::<f64>(), config.boss_chance, config.treasure_chance)
            };
            index += 1;
        });

        let rooms = root.get_all_rooms();
        floor.spawn_point = rooms.first().map(Room::center);
        for room in &rooms {
            floor.add_room(*room);
        }

        connect_rooms(&root, &mut floor, config.corridor_width, rng);

        // Stairs
        if rooms.is_empty() {
            tracing::warn!("Floor {} has no rooms; no spawn point or stairs", floor_number);
        } else {
            let half = rooms.len() / 2;
            if floor_number > 0 {
                if let Some(room) = rooms[..half.max(1)].choose(rng) {
                    floor.add_stairs(room.center(), StairDirection::Up);
                }
            }
            if floor_number + 1 < self.num_floors {
                if let Some(room) = rooms[half..].choose(rng) {
                    floor.add_stairs(room.center(), StairDirection::Down);
                }
            }
        }

        tracing::debug!(
            "Floor {}: {} leaves, {} rooms, {} corridors, {} walkable tiles",
            floor_number,
            root.leaf_count(),
            floor.rooms.len(),
            floor.corridors.len(),
            floor.walkable_count()
        );

        floor.partition = Some(root);
        floor
    }

    /// Floor by index, or `None` if out of range.
    #[must_use]
    pub fn get_floor(&self, floor_index: usize) -> Option<&Floor> {
        self.floors.get(floor_index)
    }

    /// Returns true if the tile is blocked, off the floor, or the floor
    /// does not exist.
    #[must_use]
    pub fn is_wall(&self, floor_index: usize, x: i32, y: i32) -> bool {
        !self
            .get_floor(floor_index)
            .is_some_and(|floor| floor.is_walkable(x, y))
    }

    /// Logical negation of [`is_wall`](Self::is_wall).
    #[must_use]
    pub fn is_walkable(&self, floor_index: usize, x: i32, y: i32) -> bool {
        !self.is_wall(floor_index, x, y)
    }

    /// Spawn point of a floor, if the floor exists and has rooms.
    #[must_use]
    pub fn get_spawn_point(&self, floor_index: usize) -> Option<TilePos> {
        self.get_floor(floor_index).and_then(|floor| floor.spawn_point)
    }

    /// All floors, entry floor first.
    #[must_use]
    pub fn floors(&self) -> &[Floor] {
        &self.floors
    }

    /// Number of generated floors.
    #[must_use]
    pub fn floor_count(&self) -> usize {
        self.floors.len()
    }

    /// Floor width in tiles.
    #[must_use]
    pub const fn width(&self) -> i32 {
        self.width
    }

    /// Floor height in tiles.
    #[must_use]
    pub const fn height(&self) -> i32 {
        self.height
    }

    /// The seed the dungeon was generated from.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Generation parameters in effect.
    #[must_use]
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }
}

/// Connects sibling subtrees bottom-up.
///
/// Children are connected before their parent. At each interior node one
/// representative room is drawn from each side; if both sides have one, a
/// corridor joins their centers. A subtree without any room is skipped,
/// which can leave part of the floor unreachable.
fn connect_rooms<R: Rng + ?Sized>(
    node: &PartitionNode,
    floor: &mut Floor,
    corridor_width: i32,
    rng: &mut R,
) {
    let Some((left, right)) = node.children() else {
        return;
    };

    connect_rooms(left, floor, corridor_width, rng);
    connect_rooms(right, floor, corridor_width, rng);

    let left_room = left.get_room(rng);
    let right_room = right.get_room(rng);
    if let (Some(a), Some(b)) = (left_room, right_room) {
        let corridor = Corridor::build(a.center(), b.center(), corridor_width);
        tracing::trace!(
            "Corridor ({}, {}) -> ({}, {}), {} tiles",
            corridor.start.x,
            corridor.start.y,
            corridor.end.x,
            corridor.end.y,
            corridor.len()
        );
        floor.add_corridor(corridor);
    }
}
