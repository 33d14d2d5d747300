//! Benchmarks for particle emission and simulation ticks.
//!
//! Run with: cargo bench -p proton-fx --bench particle_bench

use std::hint::black_box;
use std::time::Duration;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use proton_core::{MotionPreference, Vec2};
use proton_fx::{EmissionPreset, EmitOptions, ParticleSystem, ParticleSystemOptions};

const FRAME: Duration = Duration::from_millis(16);

fn full_system(count: usize) -> ParticleSystem {
    let mut system = ParticleSystem::with_motion_preference(
        ParticleSystemOptions::new()
            .with_max_particles(count)
            .with_seed(42),
        MotionPreference::Full,
    );
    system
        .emit(
            &EmitOptions::new(Vec2::new(100.0, 100.0))
                .with_count(count)
                .with_preset(EmissionPreset::Explosion),
        )
        .expect("bench emission");
    system
}

fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("particle_tick");
    for count in [256usize, 4096] {
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            let mut system = full_system(count);
            b.iter(|| {
                system.tick(black_box(FRAME));
                // Keep the pool full so every iteration pays for `count`
                // particles even as some expire.
                if system.len() < count {
                    let _ = system.emit(
                        &EmitOptions::new(Vec2::new(100.0, 100.0))
                            .with_count(count - system.len())
                            .with_preset(EmissionPreset::Explosion),
                    );
                }
            });
        });
    }
    group.finish();
}

fn bench_emit(c: &mut Criterion) {
    let mut group = c.benchmark_group("particle_emit");
    for count in [64usize, 1024] {
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            let mut system = ParticleSystem::with_motion_preference(
                ParticleSystemOptions::new()
                    .with_max_particles(count)
                    .with_seed(42),
                MotionPreference::Full,
            );
            b.iter(|| {
                system.clear();
                let spawned = system
                    .emit(&EmitOptions::new(Vec2::ZERO).with_count(black_box(count)))
                    .expect("bench emission");
                black_box(spawned)
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_tick, bench_emit);
criterion_main!(benches);
