//! # Bevy Voxel Projectiles
//!
//! Tick-driven voxel projectile simulation plugin for Bevy 0.18.
//!
//! ## Features
//! - Fixed-tick flight: lookahead block scanning plus sub-step advancement
//! - Pluggable voxel world adapter (block queries, particles, actor queries)
//! - Tick-scoped block lookup cache bounding per-tick world-query cost
//! - Particle feedback along scan and flight paths
//! - Per-projectile spatial fault isolation
//!
//! ## Quick Start
//! ```rust,no_run
//! use bevy::prelude::*;
//! use bevy_voxel_projectiles::prelude::*;
//!
//! fn main() {
//!     App::new()
//!         .add_plugins(DefaultPlugins)
//!         .add_plugins(VoxelProjectilePluginGroup)
//!         // .insert_resource(VoxelWorldHandle::new(MyWorld)) — the host's
//!         // world adapter; the simulation idles until one exists.
//!         .run();
//! }
//! ```

pub mod cache;
pub mod components;
pub mod events;
pub mod math;
pub mod resources;
pub mod systems;
pub mod types;
pub mod world;


pub mod prelude {
    pub use crate::components::*;
    pub use crate::events::*;
    pub use crate::resources::*;
    pub use crate::types::*;
    pub use crate::world::{VoxelWorld, VoxelWorldHandle};
    pub use crate::VoxelProjectilePluginGroup;
    pub use crate::{ProjectileDebugPlugin, ProjectileSimulationPlugin};
}

use bevy::prelude::*;

/// Main plugin group for the voxel projectile simulation.
///
/// Bundles the simulation core with the debug visualization layer.
///
/// # Example
/// ```
/// use bevy::prelude::*;
/// use bevy_voxel_projectiles::prelude::*;
///
/// let mut app = App::new();
/// app.add_plugins(VoxelProjectilePluginGroup);
/// ```
#[derive(Default)]
pub struct VoxelProjectilePluginGroup;

impl PluginGroup for VoxelProjectilePluginGroup {
    fn build(self) -> bevy::app::PluginGroupBuilder {
        bevy::app::PluginGroupBuilder::start::<Self>()
            .add(ProjectileSimulationPlugin)
            .add(ProjectileDebugPlugin)
    }
}

/// Core simulation plugin: launch handling and the per-tick flight engine.
///
/// Both systems run in `FixedUpdate`, chained so projectiles spawned by a
/// tick's launches are advanced by the same tick's engine run. They are
/// gated on a [`world::VoxelWorldHandle`] being present — without a host
/// world adapter there is nothing to simulate against.
///
/// # Systems
/// - `launch_projectiles` - turns launch triggers into projectile entities
/// - `advance_projectiles` - scans, sub-steps, and retires live projectiles
pub struct ProjectileSimulationPlugin;

impl Plugin for ProjectileSimulationPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<components::Projectile>()
            .register_type::<resources::ProjectileConfig>()
            .init_resource::<resources::ProjectileConfig>()
            .add_message::<events::LaunchEvent>()
            .add_message::<events::ImpactEvent>()
            .add_systems(
                FixedUpdate,
                (
                    systems::launch::launch_projectiles,
                    systems::flight::advance_projectiles,
                )
                    .chain()
                    .run_if(resource_exists::<world::VoxelWorldHandle>),
            );
    }
}

/// Debug plugin for projectile visualization.
pub struct ProjectileDebugPlugin;

impl Plugin for ProjectileDebugPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, systems::debug::draw_projectile_debug);
    }
}
