use bevy::prelude::*;

use crate::components::Projectile;

/// Draw debug gizmos for projectiles.
///
/// Draws positions and this tick's travel span for live projectiles.
pub fn draw_projectile_debug(
    mut gizmos: Gizmos,
    query: Query<(&Transform, &Projectile)>,
    config: Res<crate::resources::ProjectileConfig>,
) {
    if !config.debug_draw {
        return;
    }

    for (transform, projectile) in query.iter() {
        // Draw projectile point
        gizmos.sphere(transform.translation, 0.05, Color::srgb(1.0, 0.0, 0.0));

        // Draw the distance covered per tick along the heading
        let end = transform.translation
            + *projectile.direction * (projectile.move_count as f32 * config.substep_length);
        gizmos.line(transform.translation, end, Color::srgb(0.0, 1.0, 0.0));
    }
}
