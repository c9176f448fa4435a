//! Benchmark for the per-tick projectile stepping cost.

use bevy::prelude::*;
use bevy_voxel_projectiles::cache::BlockCache;
use bevy_voxel_projectiles::components::Projectile;
use bevy_voxel_projectiles::resources::ProjectileConfig;
use bevy_voxel_projectiles::systems::flight::step_projectile;
use bevy_voxel_projectiles::types::{ActorId, BlockState, DimensionId, ParticleKind, SpatialError};
use bevy_voxel_projectiles::world::VoxelWorld;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

/// Unbounded all-air world with no-op particle rendering.
struct OpenAir;

impl VoxelWorld for OpenAir {
    fn block_at(
        &self,
        _dimension: DimensionId,
        _point: Vec3,
    ) -> Result<Option<BlockState>, SpatialError> {
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

fn benchmark_tick_step(c: &mut Criterion) {
    let world = OpenAir;
    let config = ProjectileConfig::default();

    let mut group = c.benchmark_group("Projectile Tick");

    for projectile_count in [100, 1000, 10000].iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(projectile_count),
            projectile_count,
            |b, &count| {
                b.iter(|| {
                    // One tick: fresh cache, every projectile stepped once.
                    let mut cache = BlockCache::new();
                    for i in 0..count {
                        let mut transform = Transform::from_xyz(i as f32 * 2.0, 64.0, 0.0);
                        let mut projectile = Projectile::new(DimensionId(0), Dir3::Z);
                        let _ = step_projectile(
                            &world,
                            &mut cache,
                            &config,
                            &mut transform,
                            &mut projectile,
                        );
                    }
                });
            },
        );
    }

    group.finish();
}

fn benchmark_block_cache(c: &mut Criterion) {
    let world = OpenAir;
    let dimension = DimensionId(0);

    c.bench_function("Cache Hit Lookup", |b| {
        let mut cache = BlockCache::new();
        cache
            .block_at(&world, dimension, Vec3::new(0.5, 64.5, 0.5))
            .expect("open air never faults");

        b.iter(|| cache.block_at(&world, dimension, Vec3::new(0.7, 64.2, 0.9)));
    });
}

criterion_group!(benches, benchmark_tick_step, benchmark_block_cache);
criterion_main!(benches);
