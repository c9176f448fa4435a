//! World adapter boundary - block queries, particle rendering, actor queries.
//!
//! The simulation talks to the host world exclusively through [`VoxelWorld`],
//! so the engine never names a concrete world type and tests can script the
//! world freely.

use std::sync::Arc;

use bevy::prelude::*;

use crate::types::{ActorId, BlockState, DimensionId, ParticleKind, SpatialError};

/// Host world abstraction consumed by the simulation.
///
/// Every method is fallible: the two recoverable spatial faults
/// ([`SpatialError::OutOfBounds`] and [`SpatialError::Unloaded`]) retire the
/// affected projectile silently, anything else is logged and retires it too.
pub trait VoxelWorld: Send + Sync {
    /// Block-occupancy report for the voxel containing `point`, or `None`
    /// when the world has no block information there.
    fn block_at(
        &self,
        dimension: DimensionId,
        point: Vec3,
    ) -> Result<Option<BlockState>, SpatialError>;

    /// Render one particle of `kind` at `point`.
    fn spawn_particle(
        &self,
        dimension: DimensionId,
        kind: ParticleKind,
        point: Vec3,
    ) -> Result<(), SpatialError>;

    /// The direction the actor is looking. Not required to be unit length;
    /// the launch handler normalizes it.
    fn view_direction(&self, actor: ActorId) -> Result<Vec3, SpatialError>;

    /// The actor's head/eye position, used as the spawn origin.
    fn head_location(&self, actor: ActorId) -> Result<Vec3, SpatialError>;

    /// The dimension the actor currently occupies.
    fn actor_dimension(&self, actor: ActorId) -> Result<DimensionId, SpatialError>;
}

/// Resource wrapper injecting a host [`VoxelWorld`] into the simulation.
///
/// The simulation systems are gated on this resource existing, so an `App`
/// without a world simply idles.
///
/// # Example
/// ```no_run
/// use bevy::prelude::*;
/// use bevy_voxel_projectiles::prelude::*;
/// # struct MyWorld;
/// # impl VoxelWorld for MyWorld {
/// #     fn block_at(&self, _: DimensionId, _: Vec3) -> Result<Option<BlockState>, SpatialError> { Ok(Some(BlockState::AIR)) }
/// #     fn spawn_particle(&self, _: DimensionId, _: ParticleKind, _: Vec3) -> Result<(), SpatialError> { Ok(()) }
/// #     fn view_direction(&self, _: ActorId) -> Result<Vec3, SpatialError> { Ok(Vec3::Z) }
/// #     fn head_location(&self, _: ActorId) -> Result<Vec3, SpatialError> { Ok(Vec3::ZERO) }
/// #     fn actor_dimension(&self, _: ActorId) -> Result<DimensionId, SpatialError> { Ok(DimensionId(0)) }
/// # }
///
/// App::new().insert_resource(VoxelWorldHandle::new(MyWorld));
/// ```
#[derive(Resource, Clone)]
pub struct VoxelWorldHandle(Arc<dyn VoxelWorld>);

impl VoxelWorldHandle {
    /// Wrap a host world implementation.
    pub fn new(world: impl VoxelWorld + 'static) -> Self {
        Self(Arc::new(world))
    }

    /// Wrap an already-shared host world.
    pub fn from_arc(world: Arc<dyn VoxelWorld>) -> Self {
        Self(world)
    }
}

impl std::ops::Deref for VoxelWorldHandle {
    type Target = dyn VoxelWorld;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}
