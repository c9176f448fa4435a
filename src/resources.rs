//! Global resources for the voxel projectile simulation.

use std::time::Duration;

use bevy::prelude::*;

use crate::types::BlockingPolicy;

/// Global configuration for the projectile simulation.
///
/// # Example
/// ```
/// use bevy_voxel_projectiles::resources::ProjectileConfig;
///
/// let config = ProjectileConfig {
///     expiry_ticks: 40,
///     ..Default::default()
/// };
/// assert_eq!(config.default_move_count, 60);
/// ```
#[derive(Resource, Reflect, Clone)]
#[reflect(Resource)]
pub struct ProjectileConfig {
    /// Age (in ticks) at which a projectile expires and is removed.
    pub expiry_ticks: u32,
    /// Distance advanced per sub-step, and the sample spacing of the
    /// lookahead scan.
    pub substep_length: f32,
    /// Sub-step count given to projectiles spawned by the launch handler.
    pub default_move_count: u32,
    /// Wall-clock budget for one full tick; exceeding it emits a warning.
    /// Observability only, never alters scheduling.
    pub tick_budget: Duration,
    /// Predicate deciding whether a sampled block stops a projectile.
    pub blocking_policy: BlockingPolicy,
    /// Debug gizmo visualization of live projectiles.
    pub debug_draw: bool,
}

impl Default for ProjectileConfig {
    /// Defaults: 20-tick lifespan, 0.1-unit sub-steps, 60 sub-steps per
    /// tick, 1 ms tick budget.
    fn default() -> Self {
        Self {
            expiry_ticks: 20,
            substep_length: 0.1,
            default_move_count: 60,
            tick_budget: Duration::from_millis(1),
            blocking_policy: BlockingPolicy::default(),
            debug_draw: false,
        }
    }
}
