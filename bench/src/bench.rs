use voxel_mesher::ilattice::glam::DVec3;
use voxel_mesher::{
    box_quads, pack_atlas, visible_quads, AtlasBuffer, AtlasRect, Quad, VisibleQuadsBuffer,
    VoxelBox, DEFAULT_CONTAINMENT_EPSILON, DEFAULT_MAX_ATLAS_SIZE,
};

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

const GRID_SIDE: u32 = 8;

fn bench_grid_visible(c: &mut Criterion) {
    let mut group = c.benchmark_group("bench_grid_visible");
    let quads = box_quads(&grid_boxes(GRID_SIDE));

    // Do a single run first to allocate the buffer to the right size.
    let mut buffer = VisibleQuadsBuffer::new();
    visible_quads(&quads, DEFAULT_CONTAINMENT_EPSILON, &mut buffer);

    group.bench_with_input(
        BenchmarkId::from_parameter(format!("quads={}", quads.len())),
        &(),
        |b, _| {
            b.iter(|| visible_quads(&quads, DEFAULT_CONTAINMENT_EPSILON, &mut buffer));
        },
    );
    group.finish();
}

fn bench_grid_pack(c: &mut Criterion) {
    let mut group = c.benchmark_group("bench_grid_pack");
    let quads = box_quads(&grid_boxes(GRID_SIDE));
    let rects = visible_rects(&quads);

    let mut buffer = AtlasBuffer::new();
    let layout = pack_atlas(&rects, DEFAULT_MAX_ATLAS_SIZE, &mut buffer).unwrap();

    group.bench_with_input(
        BenchmarkId::from_parameter(format!("rects={} size={}", rects.len(), layout.size)),
        &(),
        |b, _| {
            b.iter(|| pack_atlas(&rects, DEFAULT_MAX_ATLAS_SIZE, &mut buffer).unwrap());
        },
    );
    group.finish();
}

fn bench_mixed_sizes_pack(c: &mut Criterion) {
    let mut group = c.benchmark_group("bench_mixed_sizes_pack");
    let quads = box_quads(&mixed_boxes(64));
    let rects = visible_rects(&quads);

    let mut buffer = AtlasBuffer::new();
    let layout = pack_atlas(&rects, DEFAULT_MAX_ATLAS_SIZE, &mut buffer).unwrap();

    group.bench_with_input(
        BenchmarkId::from_parameter(format!("rects={} size={}", rects.len(), layout.size)),
        &(),
        |b, _| {
            b.iter(|| pack_atlas(&rects, DEFAULT_MAX_ATLAS_SIZE, &mut buffer).unwrap());
        },
    );
    group.finish();
}

criterion_group!(
    benches,
    bench_grid_visible,
    bench_grid_pack,
    bench_mixed_sizes_pack
);
criterion_main!(benches);

/// A solid `side^3` block of unit cubes.
fn grid_boxes(side: u32) -> Vec<VoxelBox> {
    let mut boxes = Vec::new();
    for z in 0..side {
        for y in 0..side {
            for x in 0..side {
                let p = DVec3::new(x as f64, y as f64, z as f64);
                boxes.push(VoxelBox::new(p, DVec3::ONE));
            }
        }
    }
    boxes
}

/// A row of boxes whose sizes cycle through 1..=7 on each axis.
fn mixed_boxes(count: u32) -> Vec<VoxelBox> {
    let mut x = 0.0;
    (0..count)
        .map(|i| {
            let size = DVec3::new(
                (1 + i % 7) as f64,
                (1 + (i / 7) % 7) as f64,
                (1 + (i * 3) % 7) as f64,
            );
            let b = VoxelBox::new(DVec3::new(x, 0.0, 0.0), size);
            x += size.x + 1.0;
            b
        })
        .collect()
}

fn visible_rects(quads: &[Quad]) -> Vec<AtlasRect> {
    let mut buffer = VisibleQuadsBuffer::new();
    visible_quads(quads, DEFAULT_CONTAINMENT_EPSILON, &mut buffer);
    buffer
        .visible
        .iter()
        .map(|&i| AtlasRect::from(&quads[i]))
        .collect()
}
