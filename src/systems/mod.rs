//! Systems module - all ECS systems for the projectile simulation.

pub mod debug;
pub mod flight;
pub mod launch;
