//! Criterion benchmarks for the particle field.
//!
//! Benchmarks:
//!   - one frame step of the full 2000-particle field (spring, winter)
//!   - initial scatter of the full field
//!   - season frame computation
//!
//! Budget: a full-field step well under 1ms so it never shows up in a 60 Hz frame.
//!
//! Run with: cargo bench -p simulation --bench particle_bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use simulation::particles::{ParticleField, ParticleMotion, SpawnVolume};
use simulation::season::{Season, SeasonFrame, SeasonTable};

// ---------------------------------------------------------------------------
// Benchmark: field step
// ---------------------------------------------------------------------------

fn bench_field_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("particle_step");
    let motion = ParticleMotion::default();

    for season in [Season::Spring, Season::Winter] {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut field = ParticleField::scatter(&SpawnVolume::default(), &mut rng);
        let mut time = 0.0_f64;
        group.bench_function(season.name(), |b| {
            b.iter(|| {
                time += 1.0 / 60.0;
                black_box(field.step(black_box(time), season, &motion, &mut rng))
            });
        });
    }

    group.finish();
}

// ---------------------------------------------------------------------------
// Benchmark: scatter
// ---------------------------------------------------------------------------

fn bench_scatter(c: &mut Criterion) {
    let volume = SpawnVolume::default();
    c.bench_function("particle_scatter_2000", |b| {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        b.iter(|| black_box(ParticleField::scatter(&volume, &mut rng)));
    });
}

// ---------------------------------------------------------------------------
// Benchmark: season frame
// ---------------------------------------------------------------------------

fn bench_season_frame(c: &mut Criterion) {
    let table = SeasonTable::default();
    c.bench_function("season_frame_at", |b| {
        b.iter(|| black_box(SeasonFrame::at(&table, black_box(27.3))));
    });
}

criterion_group!(benches, bench_field_step, bench_scatter, bench_season_frame);
criterion_main!(benches);
