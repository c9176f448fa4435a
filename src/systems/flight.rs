//! Flight engine - per-tick lookahead scanning, sub-step advancement, and
//! projectile retirement.

use std::time::Instant;

use bevy::ecs::message::MessageWriter;
use bevy::log::{error, warn};
use bevy::prelude::*;

use crate::cache::BlockCache;
use crate::components::Projectile;
use crate::events::ImpactEvent;
use crate::math::sample_line;
use crate::resources::ProjectileConfig;
use crate::types::{ParticleKind, SpatialError, TickOutcome};
use crate::world::{VoxelWorld, VoxelWorldHandle};

/// Advance every live projectile by one simulation tick.
///
/// Runs once per `FixedUpdate`. Builds one fresh [`BlockCache`] for the
/// tick, steps each projectile through [`step_projectile`], and retires the
/// dead ones by identity through deferred commands after the full iteration
/// — a fault or impact on one projectile never disturbs the others.
///
/// Crossing a blocking point additionally writes an [`ImpactEvent`] for
/// downstream consumers.
///
/// The wall-clock duration of the whole run is measured; exceeding the
/// configured budget emits a warning with the measured duration.
pub fn advance_projectiles(
    mut commands: Commands,
    world: Res<VoxelWorldHandle>,
    config: Res<ProjectileConfig>,
    mut impacts: MessageWriter<ImpactEvent>,
    mut projectiles: Query<(Entity, &mut Transform, &mut Projectile)>,
) {
    let started = Instant::now();
    let mut processed = 0usize;

    // One cache per tick; dropped before the next tick runs.
    let mut cache = BlockCache::new();

    for (entity, mut transform, mut projectile) in projectiles.iter_mut() {
        processed += 1;

        match step_projectile(&**world, &mut cache, &config, &mut transform, &mut projectile) {
            TickOutcome::Flying => {}
            TickOutcome::Expired => {
                commands.entity(entity).despawn();
            }
            TickOutcome::Impact(point) => {
                impacts.write(ImpactEvent {
                    projectile: entity,
                    dimension: projectile.dimension,
                    point,
                    location: transform.translation,
                });
                commands.entity(entity).despawn();
            }
            TickOutcome::Faulted(err) => {
                // Out-of-bounds and unloaded-region faults are expected for
                // projectiles leaving the playable space; retire silently.
                if !err.is_recoverable() {
                    error!("projectile {entity:?} retired by fault: {err}");
                }
                commands.entity(entity).despawn();
            }
        }
    }

    let took = started.elapsed();
    if took > config.tick_budget {
        warn!("projectile tick took {took:?} for {processed} projectiles");
    }
}

/// Advance one projectile by one tick and report how its processing ended.
///
/// Order of operations:
/// 1. age the projectile; expiry wins over everything else this tick,
/// 2. lookahead scan: sample from the current location toward where this
///    tick's sub-steps will end, rendering a trail particle at every sample
///    and recording the first sample the blocking policy rejects,
/// 3. sub-step advance: move `move_count` times by one sub-step, retiring
///    the projectile at the first sub-step that crosses the recorded
///    blocking point (per-axis sign test, all three axes at once), rendering
///    a flight particle at every sub-step it survives.
///
/// The final location is written back to the transform exactly once, even
/// when the sub-step loop stopped early, so a still-live projectile resumes
/// next tick from where it stopped. The caller owns despawning.
pub fn step_projectile(
    world: &dyn VoxelWorld,
    cache: &mut BlockCache,
    config: &ProjectileConfig,
    transform: &mut Transform,
    projectile: &mut Projectile,
) -> TickOutcome {
    projectile.age += 1;
    if projectile.age >= config.expiry_ticks {
        return TickOutcome::Expired;
    }

    match fly(world, cache, config, transform.translation, projectile) {
        Ok((location, Some(point))) => {
            transform.translation = location;
            TickOutcome::Impact(point)
        }
        Ok((location, None)) => {
            transform.translation = location;
            TickOutcome::Flying
        }
        Err(err) => TickOutcome::Faulted(err),
    }
}

/// Scan ahead and sub-step; returns the final location and the blocking
/// point when a sub-step crossed it.
fn fly(
    world: &dyn VoxelWorld,
    cache: &mut BlockCache,
    config: &ProjectileConfig,
    start: Vec3,
    projectile: &Projectile,
) -> Result<(Vec3, Option<Vec3>), SpatialError> {
    let dimension = projectile.dimension;
    let direction = *projectile.direction;
    let substep = direction * config.substep_length;

    // Look ahead as far as this tick's sub-steps will carry the projectile.
    let reach = start + substep * projectile.move_count as f32;

    let mut obstruction = None;
    for point in sample_line(start, reach, config.substep_length) {
        world.spawn_particle(dimension, ParticleKind::TrailScan, point)?;

        let Some(block) = cache.block_at(world, dimension, point)? else {
            error!("no block information at {point} in {dimension:?}");
            break;
        };
        if config.blocking_policy.is_blocking(block) {
            obstruction = Some(point);
            break;
        }
    }

    // Travel sign per axis, fixed for the whole sub-step phase. The
    // crossing test assumes the projectile keeps moving in these signs.
    let heading = direction.cmpge(Vec3::ZERO);

    let mut location = start;
    for _ in 0..projectile.move_count {
        location += substep;

        if let Some(point) = obstruction {
            if location.cmpge(point) == heading {
                return Ok((location, Some(point)));
            }
        }

        world.spawn_particle(dimension, ParticleKind::Flight, location)?;
    }

    Ok((location, None))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ActorId, BlockState, DimensionId};

    /// All-air world with an optional solid voxel or blanket fault.
    #[derive(Default)]
    struct TestWorld {
        solid: Option<IVec3>,
        fault: Option<SpatialError>,
    }

    impl VoxelWorld for TestWorld {
        fn block_at(
            &self,
            _dimension: DimensionId,
            point: Vec3,
        ) -> Result<Option<BlockState>, SpatialError> {
            if let Some(err) = &self.fault {
                return Err(err.clone());
            }
            if self.solid == Some(BlockCache::voxel_of(point)) {
                return Ok(Some(BlockState::SOLID));
            }
            Ok(Some(BlockState::AIR))
        }

        fn spawn_particle(
            &self,
            _dimension: DimensionId,
            _kind: ParticleKind,
            _point: Vec3,
        ) -> Result<(), SpatialError> {
            Ok(())
        }

        fn view_direction(&self, _actor: ActorId) -> Result<Vec3, SpatialError> {
            Err(SpatialError::Adapter("no actors here".into()))
        }

        fn head_location(&self, _actor: ActorId) -> Result<Vec3, SpatialError> {
            Err(SpatialError::Adapter("no actors here".into()))
        }

        fn actor_dimension(&self, _actor: ActorId) -> Result<DimensionId, SpatialError> {
            Err(SpatialError::Adapter("no actors here".into()))
        }
    }

    const DIM: DimensionId = DimensionId(0);

    #[test]
    fn expiry_wins_over_movement() {
        let world = TestWorld::default();
        let config = ProjectileConfig::default();
        let mut cache = BlockCache::new();
        let mut transform = Transform::from_xyz(0.5, 64.5, 0.5);
        let mut projectile = Projectile::new(DIM, Dir3::Z);
        projectile.age = config.expiry_ticks - 1;

        let outcome =
            step_projectile(&world, &mut cache, &config, &mut transform, &mut projectile);

        assert_eq!(outcome, TickOutcome::Expired);
        assert_eq!(projectile.age, config.expiry_ticks);
        // No movement on the expiry tick.
        assert_eq!(transform.translation, Vec3::new(0.5, 64.5, 0.5));
    }

    #[test]
    fn crossing_respects_negative_travel_sign() {
        let world = TestWorld {
            solid: Some(IVec3::new(0, 64, -3)),
            ..Default::default()
        };
        let config = ProjectileConfig::default();
        let mut cache = BlockCache::new();
        let mut transform = Transform::from_xyz(0.5, 64.5, 0.45);
        let mut projectile = Projectile::new(DIM, Dir3::NEG_Z);

        let outcome =
            step_projectile(&world, &mut cache, &config, &mut transform, &mut projectile);

        let TickOutcome::Impact(point) = outcome else {
            panic!("expected an impact, got {outcome:?}");
        };
        assert_eq!(BlockCache::voxel_of(point), IVec3::new(0, 64, -3));
        // Stopped within one sub-step past the blocking point, on the
        // negative side of it.
        assert!(transform.translation.z < point.z);
        assert!(transform.translation.z > point.z - config.substep_length - 1e-3);
    }

    #[test]
    fn spatial_fault_surfaces_as_outcome() {
        let world = TestWorld {
            fault: Some(SpatialError::OutOfBounds(Vec3::ZERO)),
            ..Default::default()
        };
        let config = ProjectileConfig::default();
        let mut cache = BlockCache::new();
        let mut transform = Transform::from_xyz(0.5, 64.5, 0.5);
        let mut projectile = Projectile::new(DIM, Dir3::Z);

        let outcome =
            step_projectile(&world, &mut cache, &config, &mut transform, &mut projectile);

        assert_eq!(
            outcome,
            TickOutcome::Faulted(SpatialError::OutOfBounds(Vec3::ZERO))
        );
        // Aged, but still where it started.
        assert_eq!(projectile.age, 1);
        assert_eq!(transform.translation, Vec3::new(0.5, 64.5, 0.5));
    }
}
