//! Core components for the voxel projectile simulation.

use bevy::prelude::*;

use crate::types::DimensionId;

/// A live directional projectile.
///
/// The entity's `Transform::translation` is the projectile's location; the
/// flight engine is its only writer and updates it exactly once per tick.
/// `direction` is a [`Dir3`], so the unit-length invariant is carried by the
/// type: it is normalized once at spawn and never re-normalized.
///
/// `move_count` is fixed at spawn and does double duty: it is the number of
/// sub-steps advanced per tick and the multiplier for the lookahead scan
/// distance, which couples lifespan pacing to travel granularity.
///
/// # Example
/// ```
/// use bevy::prelude::*;
/// use bevy_voxel_projectiles::components::Projectile;
/// use bevy_voxel_projectiles::types::DimensionId;
///
/// let projectile = Projectile::new(DimensionId(0), Dir3::Z).with_move_count(40);
/// assert_eq!(projectile.age, 0);
/// ```
#[derive(Component, Reflect, Clone, Debug)]
#[reflect(Component)]
pub struct Projectile {
    /// Spatial context the projectile travels through; passed back to the
    /// world adapter on every query.
    pub dimension: DimensionId,
    /// Unit-length travel direction, immutable for the projectile's lifetime.
    pub direction: Dir3,
    /// Sub-steps advanced per tick; also scales the lookahead distance.
    pub move_count: u32,
    /// Ticks elapsed since spawn. Incremented once per tick by the flight
    /// engine only.
    pub age: u32,
}

impl Default for Projectile {
    fn default() -> Self {
        Self {
            dimension: DimensionId::default(),
            direction: Dir3::NEG_Z,
            move_count: 60,
            age: 0,
        }
    }
}

impl Projectile {
    /// Creates a projectile heading in `direction` with the default sub-step
    /// count (60) and zero age.
    pub fn new(dimension: DimensionId, direction: Dir3) -> Self {
        Self {
            dimension,
            direction,
            ..Default::default()
        }
    }

    /// Builder pattern: set the per-tick sub-step count.
    pub fn with_move_count(mut self, move_count: u32) -> Self {
        self.move_count = move_count;
        self
    }
}
