//! # Binary Space Partition Tree
//!
//! Recursively cuts a floor into disjoint rectangular regions. Each leaf
//! region may hold one room, inset by at least one tile on every side, so
//! rooms in different leaves can never overlap.
//!
//! ## Randomness
//!
//! Every operation takes the RNG explicitly. Draws happen in tree order
//! (node before children, left before right), which is what makes a seed
//! reproduce the same layout.

use rand::Rng;

use crate::region::{SpatialRegion, SplitAxis};
use crate::room::Room;

/// A node of the partition tree.
///
/// Either a leaf (no children, may hold a room) or an interior node with
/// exactly two children that exactly partition its region.
#[derive(Clone, Debug)]
pub struct PartitionNode {
    /// The region this node covers.
    region: SpatialRegion,
    /// Left/top and right/bottom children, present together or not at all.
    children: Option<Box<(PartitionNode, PartitionNode)>>,
    /// Room carved in this region (leaves only).
    room: Option<Room>,
}

impl PartitionNode {
    /// Creates a leaf covering `region`.
    #[must_use]
    pub const fn new(region: SpatialRegion) -> Self {
        Self {
            region,
            children: None,
            room: None,
        }
    }

    /// The region this node covers.
    #[inline]
    #[must_use]
    pub const fn region(&self) -> SpatialRegion {
        self.region
    }

    /// Returns true if the node has no children.
    #[inline]
    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// The room held by this node, if it is a leaf with a room.
    #[inline]
    #[must_use]
    pub const fn room(&self) -> Option<&Room> {
        self.room.as_ref()
    }

    /// Both children, or `None` for a leaf.
    #[inline]
    #[must_use]
    pub fn children(&self) -> Option<(&Self, &Self)> {
        self.children.as_deref().map(|(left, right)| (left, right))
    }

    /// Splits every leaf of this subtree once.
    ///
    /// An interior node forwards the call to both children and returns
    /// true, so calling this repeatedly on the root deepens the tree by one
    /// level per call. A leaf that cannot fit two halves of at least
    /// `min_leaf_size` (clamped to 1) stays a leaf and returns false.
    ///
    /// Draws one orientation coin per non-empty leaf visited, plus the
    /// split offset when the split succeeds. Empty leaves draw nothing.
    pub fn split<R: Rng + ?Sized>(&mut self, min_leaf_size: i32, rng: &mut R) -> bool {
        if let Some(children) = self.children.as_deref_mut() {
            let (left, right) = children;
            left.split(min_leaf_size, rng);
            right.split(min_leaf_size, rng);
            return true;
        }
        if self.region.is_empty() {
            return false;
        }

        let min_leaf_size = min_leaf_size.max(1);
        let axis = choose_axis(self.region, rng);
        let max_offset = self.region.extent(axis) - min_leaf_size;
        if max_offset <= min_leaf_size {
            return false;
        }

        let offset = rng.gen_range(min_leaf_size..=max_offset);
        let (first, second) = self.region.split_at(axis, offset);
        self.room = None;
        self.children = Some(Box::new((Self::new(first), Self::new(second))));
        true
    }

    /// Places one room in every leaf large enough to hold one.
    ///
    /// Room sides are drawn from `[min_room_size, min(max_room_size, side - 2)]`
    /// (width, then height), then the position leaving at least one tile of
    /// margin (x, then y). Leaves too small for a minimum room stay empty
    /// and consume no draws.
    pub fn create_rooms<R: Rng + ?Sized>(
        &mut self,
        min_room_size: i32,
        max_room_size: i32,
        rng: &mut R,
    ) {
        if let Some(children) = self.children.as_deref_mut() {
            let (left, right) = children;
            left.create_rooms(min_room_size, max_room_size, rng);
            right.create_rooms(min_room_size, max_room_size, rng);
            return;
        }
        if self.region.is_empty() {
            return;
        }

        let region = self.region;
        let min_size = min_room_size.max(1);
        let max_width = max_room_size.min(region.width - 2);
        let max_height = max_room_size.min(region.height - 2);
        if max_width < min_size || max_height < min_size {
            return;
        }

        let width = rng.gen_range(min_size..=max_width);
        let height = rng.gen_range(min_size..=max_height);
        let x = region.x + rng.gen_range(1..=region.width - width - 1);
        let y = region.y + rng.gen_range(1..=region.height - height - 1);

        self.room = Some(Room::new(x, y, width, height));
    }

    /// Picks a representative room from this subtree for corridor anchoring.
    ///
    /// When both children can offer a room, a fair coin decides which one,
    /// so the draw is part of the seeded sequence.
    pub fn get_room<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Room> {
        let Some((left, right)) = self.children() else {
            return self.room;
        };

        let left_room = left.get_room(rng);
        let right_room = right.get_room(rng);
        match (left_room, right_room) {
            (Some(l), Some(r)) => Some(if rng.gen_bool(0.5) { l } else { r }),
            (l, r) => l.or(r),
        }
    }

    /// Collects every room of the subtree in pre-order.
    #[must_use]
    pub fn get_all_rooms(&self) -> Vec<Room> {
        let mut rooms = Vec::new();
        self.collect_rooms(&mut rooms);
        rooms
    }

    fn collect_rooms(&self, rooms: &mut Vec<Room>) {
        if let Some(room) = self.room {
            rooms.push(room);
        }
        if let Some((left, right)) = self.children() {
            left.collect_rooms(rooms);
            right.collect_rooms(rooms);
        }
    }

    /// Visits every room of the subtree mutably, in the same order as
    /// [`get_all_rooms`](Self::get_all_rooms).
    pub fn for_each_room_mut<F: FnMut(&mut Room)>(&mut self, f: &mut F) {
        if let Some(room) = self.room.as_mut() {
            f(room);
        }
        if let Some(children) = self.children.as_deref_mut() {
            let (left, right) = children;
            left.for_each_room_mut(f);
            right.for_each_room_mut(f);
        }
    }

    /// Number of leaves in the subtree.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        match self.children() {
            None => 1,
            Some((left, right)) => left.leaf_count() + right.leaf_count(),
        }
    }

    /// Depth of the subtree; a lone leaf has depth 0.
    #[must_use]
    pub fn depth(&self) -> usize {
        match self.children() {
            None => 0,
            Some((left, right)) => 1 + left.depth().max(right.depth()),
        }
    }
}

/// Picks the split orientation for a region.
///
/// The coin is always drawn, then overridden when one side is at least
/// 1.25 times the other (the longer side gets cut).
fn choose_axis<R: Rng + ?Sized>(region: SpatialRegion, rng: &mut R) -> SplitAxis {
    let coin = rng.gen_bool(0.5);
    let width = i64::from(region.width);
    let height = i64::from(region.height);

    if width > height && width * 4 >= height * 5 {
        SplitAxis::Vertical
    } else if height > width && height * 4 >= width * 5 {
        SplitAxis::Horizontal
    } else if coin {
        SplitAxis::Horizontal
    } else {
        SplitAxis::Vertical
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn split_root(width: i32, height: i32, iterations: u32, seed: u64) -> PartitionNode {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut root = PartitionNode::new(SpatialRegion::new(0, 0, width, height));
        for _ in 0..iterations {
            root.split(12, &mut rng);
        }
        root
    }

    fn leaves(node: &PartitionNode) -> Vec<SpatialRegion> {
        match node.children() {
            None => vec![node.region()],
            Some((left, right)) => {
                let mut out = leaves(left);
                out.extend(leaves(right));
                out
            }
        }
    }

    #[test]
    fn test_small_region_refuses_split() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut node = PartitionNode::new(SpatialRegion::new(0, 0, 24, 24));

        // 24 - 12 = 12, which is not greater than 12
        assert!(!node.split(12, &mut rng));
        assert!(node.is_leaf());
    }

    #[test]
    fn test_leaves_partition_root() {
        for seed in 0..20 {
            let root = split_root(100, 80, 8, seed);
            let regions = leaves(&root);
            let total: i64 = regions.iter().map(SpatialRegion::area).sum();

            assert_eq!(total, root.region().area(), "leaves must tile the root exactly");
            for region in &regions {
                assert!(root.region().contains_region(region));
                assert!(region.width >= 12 && region.height >= 12, "leaf too small: {region:?}");
            }
            assert_eq!(regions.len(), root.leaf_count());
        }
    }

    #[test]
    fn test_split_iterations_bound_depth() {
        let root = split_root(400, 400, 3, 7);
        assert!(root.depth() <= 3);
        assert!(root.leaf_count() <= 8);
        assert!(!root.is_leaf());
    }

    #[test]
    fn test_split_on_interior_node_recurses() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut root = PartitionNode::new(SpatialRegion::new(0, 0, 200, 200));

        assert!(root.split(12, &mut rng));
        let before = root.leaf_count();
        assert!(root.split(12, &mut rng), "interior nodes always report success");
        assert!(root.leaf_count() > before);
    }

    #[test]
    fn test_long_side_gets_cut() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for _ in 0..50 {
            let mut wide = PartitionNode::new(SpatialRegion::new(0, 0, 100, 40));
            assert!(wide.split(12, &mut rng));
            let (left, _) = wide.children().expect("split");
            assert_eq!(left.region().height, 40, "wide regions split vertically");

            let mut tall = PartitionNode::new(SpatialRegion::new(0, 0, 40, 100));
            assert!(tall.split(12, &mut rng));
            let (top, _) = tall.children().expect("split");
            assert_eq!(top.region().width, 40, "tall regions split horizontally");
        }
    }

    #[test]
    fn test_rooms_are_inset_in_leaves() {
        for seed in 0..20 {
            let mut root = split_root(80, 80, 8, seed);
            let mut rng = ChaCha8Rng::seed_from_u64(seed + 1000);
            root.create_rooms(5, 15, &mut rng);

            let regions = leaves(&root);
            let rooms = root.get_all_rooms();
            assert_eq!(rooms.len(), regions.len(), "every 12+ leaf fits a 5x5 room");

            for room in &rooms {
                assert!(room.width >= 5 && room.width <= 15);
                assert!(room.height >= 5 && room.height <= 15);
                let leaf = regions
                    .iter()
                    .find(|r| r.contains(room.x, room.y))
                    .expect("room lies in a leaf");
                assert!(room.x > leaf.x && room.y > leaf.y);
                assert!(room.x + room.width < leaf.x + leaf.width);
                assert!(room.y + room.height < leaf.y + leaf.height);
            }
        }
    }

    #[test]
    fn test_too_small_leaf_gets_no_room() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut leaf = PartitionNode::new(SpatialRegion::new(0, 0, 6, 30));
        leaf.create_rooms(5, 15, &mut rng);

        assert!(leaf.room().is_none());
        assert!(leaf.get_room(&mut rng).is_none());
        assert!(leaf.get_all_rooms().is_empty());
    }

    #[test]
    fn test_empty_region_never_splits_or_draws() {
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let untouched = rng.clone();

        for (width, height) in [(i32::MIN, i32::MIN), (i32::MIN, 5), (5, i32::MIN), (0, 40)] {
            let mut node = PartitionNode::new(SpatialRegion::new(0, 0, width, height));
            assert!(!node.split(12, &mut rng));
            node.create_rooms(5, 15, &mut rng);
            assert!(node.is_leaf());
            assert!(node.room().is_none());
        }
        assert_eq!(rng, untouched, "empty regions consume no draws");
    }

    #[test]
    fn test_non_positive_leaf_size_keeps_leaves_non_empty() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let mut root = PartitionNode::new(SpatialRegion::new(0, 0, 3, 3));
        for _ in 0..20 {
            root.split(0, &mut rng);
        }
        let mut negative = PartitionNode::new(SpatialRegion::new(0, 0, 9, 2));
        for _ in 0..20 {
            negative.split(-7, &mut rng);
        }

        for tree in [&root, &negative] {
            let regions = leaves(tree);
            assert!(regions.iter().all(|r| !r.is_empty()), "empty leaf in {regions:?}");
            let total: i64 = regions.iter().map(SpatialRegion::area).sum();
            assert_eq!(total, tree.region().area());
        }
    }

    #[test]
    fn test_get_all_rooms_is_pre_order() {
        let root = {
            let mut root = split_root(120, 120, 4, 21);
            let mut rng = ChaCha8Rng::seed_from_u64(22);
            root.create_rooms(5, 15, &mut rng);
            root
        };

        let mut visited = Vec::new();
        let mut copy = root.clone();
        copy.for_each_room_mut(&mut |room: &mut Room| visited.push(*room));
        assert_eq!(visited, root.get_all_rooms());

        // Left subtree rooms come before right subtree rooms
        let (left, right) = root.children().expect("split");
        let mut expected = left.get_all_rooms();
        expected.extend(right.get_all_rooms());
        assert_eq!(root.get_all_rooms(), expected);
    }

    #[test]
    fn test_get_room_comes_from_subtree() {
        let mut root = split_root(120, 120, 5, 9);
        let mut rng = ChaCha8Rng::seed_from_u64(10);
        root.create_rooms(5, 15, &mut rng);

        let all = root.get_all_rooms();
        for _ in 0..20 {
            let picked = root.get_room(&mut rng).expect("tree has rooms");
            assert!(all.contains(&picked));
        }
    }
}
