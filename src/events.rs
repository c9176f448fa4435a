//! Messages for the voxel projectile simulation.
//!
//! Note: In Bevy 0.18, buffered events use the `Message` trait.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::types::{ActorId, DimensionId};

/// Message fired when an actor's triggering action should launch a
/// projectile.
///
/// The host writes one of these per actor block-interaction action; the
/// launch handler resolves the actor's head location, view direction and
/// dimension through the world adapter and spawns the projectile entity.
///
/// # Example
/// ```
/// use bevy_voxel_projectiles::events::LaunchEvent;
/// use bevy_voxel_projectiles::types::ActorId;
///
/// let launch = LaunchEvent::new(ActorId(7));
/// assert_eq!(launch.actor, ActorId(7));
/// ```
#[derive(Message, Clone, Debug)]
pub struct LaunchEvent {
    /// The acting entity, resolved through the world adapter's actor
    /// queries.
    pub actor: ActorId,
}

impl LaunchEvent {
    /// Creates a launch trigger for `actor`.
    pub fn new(actor: ActorId) -> Self {
        Self { actor }
    }
}

/// Message written when a projectile crosses a blocking point and is
/// retired.
///
/// Downstream consumers (impact effects, audio, gameplay) read this; the
/// simulation itself only produces it.
#[derive(Message, Clone, Debug)]
pub struct ImpactEvent {
    /// The projectile entity that hit. Despawned by the end of the same
    /// tick; treat as an identifier, not a live entity.
    pub projectile: Entity,
    /// Dimension the impact happened in.
    pub dimension: DimensionId,
    /// The blocking sample recorded by the lookahead scan.
    pub point: Vec3,
    /// Where the projectile came to rest when the crossing test fired.
    pub location: Vec3,
}
