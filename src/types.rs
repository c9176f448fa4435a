//! Common types and enums for the voxel projectile simulation.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Opaque handle to a spatial context (a "dimension") projectiles travel
/// through.
///
/// The simulation never dereferences this itself; it is passed back to the
/// [`VoxelWorld`](crate::world::VoxelWorld) adapter on every query, so the
/// host decides what it names.
///
/// # Example
/// ```
/// use bevy_voxel_projectiles::types::DimensionId;
///
/// let overworld = DimensionId(0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Reflect, Serialize, Deserialize)]
pub struct DimensionId(pub u64);

/// Opaque handle to a host-side actor (the entity whose action triggers a
/// launch). Resolved through the adapter's actor queries, never inspected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Reflect, Serialize, Deserialize)]
pub struct ActorId(pub u64);

/// Block-occupancy report for one voxel, as classified by the host world.
///
/// The two flags are intentionally independent: some block taxonomies report
/// waterlogged or otherwise hybrid blocks with surprising combinations, which
/// is exactly why the blocking predicate is a swappable [`BlockingPolicy`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Reflect, Serialize, Deserialize)]
pub struct BlockState {
    /// The voxel is passable empty space.
    pub is_air: bool,
    /// The voxel is filled with a liquid.
    pub is_liquid: bool,
}

impl BlockState {
    /// Plain empty space.
    pub const AIR: Self = Self {
        is_air: true,
        is_liquid: false,
    };
    /// A liquid-filled voxel.
    pub const LIQUID: Self = Self {
        is_air: false,
        is_liquid: true,
    };
    /// A fully solid voxel.
    pub const SOLID: Self = Self {
        is_air: false,
        is_liquid: false,
    };
}

/// Visual feedback kinds the engine asks the adapter to render.
///
/// The host maps each kind to whatever effect its renderer knows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Reflect, Serialize, Deserialize)]
pub enum ParticleKind {
    /// Rendered at every sampled point of the lookahead collision scan.
    TrailScan,
    /// Rendered at every sub-step a projectile actually advances through.
    Flight,
}

/// Named, swappable predicate deciding whether a sampled block stops a
/// projectile.
///
/// # Example
/// ```
/// use bevy_voxel_projectiles::types::{BlockState, BlockingPolicy};
///
/// assert!(!BlockingPolicy::SolidOnly.is_blocking(BlockState::AIR));
/// assert!(BlockingPolicy::SolidOnly.is_blocking(BlockState::SOLID));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Reflect, Serialize, Deserialize)]
pub enum BlockingPolicy {
    /// A sample blocks only when the block is neither air nor liquid.
    #[default]
    SolidOnly,
    /// A sample blocks unless the block reports as air and liquid at once
    /// (`!is_air || !is_liquid`). Kept switchable for hosts whose block
    /// taxonomy reports the two flags unreliably.
    NonAirOrNonLiquid,
}

impl BlockingPolicy {
    /// Classify a sampled block as blocking or passable.
    pub fn is_blocking(self, block: BlockState) -> bool {
        match self {
            Self::SolidOnly => !block.is_air && !block.is_liquid,
            Self::NonAirOrNonLiquid => !block.is_air || !block.is_liquid,
        }
    }
}

/// Fault reported by the world adapter for a spatial query.
///
/// Faults travel as data, not panics: the engine maps them onto a
/// per-projectile [`TickOutcome`] so one projectile's failure never disturbs
/// its neighbors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SpatialError {
    /// The queried location is outside the world build limits.
    #[error("location {0} is outside the world build limits")]
    OutOfBounds(Vec3),
    /// The queried location falls in a region that is not loaded.
    #[error("location {0} is in an unloaded region")]
    Unloaded(Vec3),
    /// Any other adapter failure.
    #[error("world adapter failure: {0}")]
    Adapter(String),
}

impl SpatialError {
    /// Whether this is an expected spatial condition that retires a
    /// projectile without surfacing an error log.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::OutOfBounds(_) | Self::Unloaded(_))
    }
}

/// How one projectile's processing ended for one tick.
#[derive(Debug, Clone, PartialEq)]
pub enum TickOutcome {
    /// Still live; resumes next tick from its persisted location.
    Flying,
    /// Reached the age limit this tick.
    Expired,
    /// Crossed the blocking point recorded by the lookahead scan; carries
    /// that point.
    Impact(Vec3),
    /// Retired by a spatial query fault.
    Faulted(SpatialError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solid_only_policy_blocks_solids_alone() {
        let policy = BlockingPolicy::SolidOnly;
        assert!(policy.is_blocking(BlockState::SOLID));
        assert!(!policy.is_blocking(BlockState::AIR));
        assert!(!policy.is_blocking(BlockState::LIQUID));
        assert!(!policy.is_blocking(BlockState {
            is_air: true,
            is_liquid: true,
        }));
    }

    #[test]
    fn non_air_or_non_liquid_blocks_everything_but_the_degenerate_case() {
        let policy = BlockingPolicy::NonAirOrNonLiquid;
        assert!(policy.is_blocking(BlockState::SOLID));
        assert!(policy.is_blocking(BlockState::AIR));
        assert!(policy.is_blocking(BlockState::LIQUID));
        // The one combination the predicate lets through.
        assert!(!policy.is_blocking(BlockState {
            is_air: true,
            is_liquid: true,
        }));
    }

    #[test]
    fn out_of_bounds_and_unloaded_are_recoverable() {
        assert!(SpatialError::OutOfBounds(Vec3::ZERO).is_recoverable());
        assert!(SpatialError::Unloaded(Vec3::ZERO).is_recoverable());
        assert!(!SpatialError::Adapter("boom".into()).is_recoverable());
    }
}
