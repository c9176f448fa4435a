//! Tick-scoped block lookup cache.

use std::collections::HashMap;

use bevy::prelude::*;

use crate::types::{BlockState, DimensionId, SpatialError};
use crate::world::VoxelWorld;

/// Memoized block lookups for one simulation tick.
///
/// Lifetime is exactly one tick: the flight engine constructs a fresh cache
/// at the top of every tick and drops it at the end. It must never be stored
/// in a resource or otherwise reused across ticks — its tick-scoped lifetime
/// is the concurrency boundary.
///
/// Keyed by dimension and floored voxel coordinates, so any two samples in
/// the same unit voxel of the same dimension — across all projectiles of the
/// tick — share a single adapter query. An "unavailable" report (`None`) is
/// cached like any other; spatial faults are propagated, not cached.
#[derive(Default)]
pub struct BlockCache {
    entries: HashMap<(DimensionId, IVec3), Option<BlockState>>,
}

impl BlockCache {
    /// Fresh, empty cache for one tick.
    pub fn new() -> Self {
        Self::default()
    }

    /// Floored voxel coordinates of a sampled point.
    pub fn voxel_of(point: Vec3) -> IVec3 {
        point.floor().as_ivec3()
    }

    /// Block report for the voxel containing `point`, querying the adapter
    /// at most once per distinct voxel for this cache's lifetime.
    pub fn block_at(
        &mut self,
        world: &dyn VoxelWorld,
        dimension: DimensionId,
        point: Vec3,
    ) -> Result<Option<BlockState>, SpatialError> {
        let voxel = Self::voxel_of(point);
        if let Some(cached) = self.entries.get(&(dimension, voxel)) {
            return Ok(*cached);
        }
        let block = world.block_at(dimension, point)?;
        self.entries.insert((dimension, voxel), block);
        Ok(block)
    }

    /// Number of distinct voxels resolved so far this tick.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether any voxel has been resolved yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
