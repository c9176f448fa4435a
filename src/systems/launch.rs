//! Spawn trigger handling - turns actor launch triggers into projectile
//! entities.

use bevy::ecs::message::MessageReader;
use bevy::log::error;
use bevy::prelude::*;

use crate::components::Projectile;
use crate::events::LaunchEvent;
use crate::resources::ProjectileConfig;
use crate::types::{ActorId, DimensionId, SpatialError};
use crate::world::{VoxelWorld, VoxelWorldHandle};

/// Spawn a projectile for every pending launch trigger.
///
/// Resolves the actor's dimension, head location and view direction through
/// the world adapter, normalizes the view direction, and spawns the entity
/// at the actor's head heading the way it looks. Performs no collision or
/// physics work.
///
/// A zero-length (or otherwise degenerate) view direction is a precondition
/// violation: the launch is dropped with an error log rather than letting a
/// NaN direction into the simulation. Actor-query faults drop the launch the
/// same way.
pub fn launch_projectiles(
    mut commands: Commands,
    mut launches: MessageReader<LaunchEvent>,
    world: Res<VoxelWorldHandle>,
    config: Res<ProjectileConfig>,
) {
    for launch in launches.read() {
        let actor = launch.actor;

        let (dimension, origin, view) = match actor_state(&**world, actor) {
            Ok(state) => state,
            Err(err) => {
                error!("dropping launch for {actor:?}: {err}");
                continue;
            }
        };

        let direction = match Dir3::new(view) {
            Ok(direction) => direction,
            Err(_) => {
                error!("dropping launch for {actor:?}: degenerate view direction {view}");
                continue;
            }
        };

        commands.spawn((
            Transform::from_translation(origin),
            Projectile::new(dimension, direction).with_move_count(config.default_move_count),
        ));
    }
}

/// Resolve the spawn inputs for an actor through the world adapter.
fn actor_state(
    world: &dyn VoxelWorld,
    actor: ActorId,
) -> Result<(DimensionId, Vec3, Vec3), SpatialError> {
    let dimension = world.actor_dimension(actor)?;
    let head = world.head_location(actor)?;
    let view = world.view_direction(actor)?;
    Ok((dimension, head, view))
}
