// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Affine, Vec2};
use understory_polar_affine::{AffineInterpolation, PolarAffine, Preset, interpolate};

fn sample_transforms(n: usize) -> Vec<Affine> {
    (0..n)
        .map(|i| {
            let f = i as f64;
            let flip = if i % 3 == 0 { -1.0 } else { 1.0 };
            Affine::scale_non_uniform(1.0 + f * 0.01, flip * (2.0 - f * 0.005))
                .then_rotate(f * 0.37)
                .then_translate(Vec2::new(f, -f))
        })
        .collect()
}

fn bench_decompose_recompose(c: &mut Criterion) {
    let mut group = c.benchmark_group("polar_affine/roundtrip");

    for len in [64usize, 1_024, 16_384] {
        let transforms = sample_transforms(len);
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(
            BenchmarkId::new("decompose", len),
            &transforms,
            |b, transforms| {
                b.iter(|| {
                    for m in transforms {
                        black_box(PolarAffine::decompose(*m));
                    }
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("decompose_recompose", len),
            &transforms,
            |b, transforms| {
                b.iter(|| {
                    for m in transforms {
                        black_box(PolarAffine::decompose(*m).recompose());
                    }
                });
            },
        );
    }

    group.finish();
}

fn bench_interpolate(c: &mut Criterion) {
    let mut group = c.benchmark_group("polar_affine/interpolate");

    // One animation of `frames` steps between two fixed poses. The cached
    // variant decomposes the endpoints once, the way a driver should.
    let from = Affine::rotate(0.2).then_translate(Vec2::new(10.0, 0.0));
    let to = Affine::FLIP_Y * Affine::scale(3.0).then_rotate(2.5);
    for frames in [60usize, 600] {
        group.throughput(Throughput::Elements(frames as u64));

        group.bench_with_input(BenchmarkId::new("interpolate", frames), &frames, |b, &n| {
            b.iter(|| {
                for i in 0..=n {
                    black_box(interpolate(from, to, i as f64 / n as f64));
                }
            });
        });

        group.bench_with_input(
            BenchmarkId::new("cached_lerp", frames),
            &frames,
            |b, &n| {
                let p0 = PolarAffine::decompose(from);
                let p1 = PolarAffine::decompose(to);
                b.iter(|| {
                    for i in 0..=n {
                        black_box(p0.lerp(p1, i as f64 / n as f64).recompose());
                    }
                });
            },
        );

        group.bench_with_input(BenchmarkId::new("model", frames), &frames, |b, &n| {
            let mut model = AffineInterpolation::new();
            model.set_preset(Preset::First, from);
            model.set_preset(Preset::Second, to);
            b.iter(|| {
                for i in 0..=n {
                    model.set_abscissa(i as f64 / n as f64);
                    black_box(model.interpolated_transform());
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_decompose_recompose, bench_interpolate);
criterion_main!(benches);
