use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use glpack::ser::{deserialize, deserialize_tagged, serialize, serialize_tagged, Element};
use glpack::{Vec3, Vec4};
use std::hint::black_box;

fn make_vec3s(count: usize) -> Vec<Vec3> {
    (0..count)
        .map(|i| {
            let v = i as f32;
            Vec3::new(v, v * 0.5, -v)
        })
        .collect()
}

fn make_vec4s(count: usize) -> Vec<Vec4> {
    (0..count)
        .map(|i| Vec4::new(i as f32, 1.0, 0.0, 0.25))
        .collect()
}

fn bench_serialize(c: &mut Criterion) {
    let sizes = [1024usize, 16_384, 262_144];
    let mut group = c.benchmark_group("serialize_vec3");
    for &size in &sizes {
        let values = make_vec3s(size);
        group.throughput(Throughput::Bytes((size * Vec3::WIDTH) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &values, |b, values| {
            b.iter(|| serialize(black_box(values.as_slice())).unwrap());
        });
    }
    group.finish();

    let mut group = c.benchmark_group("serialize_tagged_vec4");
    for &size in &sizes {
        let values = make_vec4s(size);
        group.throughput(Throughput::Bytes((size * Vec4::WIDTH) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &values, |b, values| {
            b.iter(|| serialize_tagged(black_box(values.as_slice())).unwrap());
        });
    }
    group.finish();
}

fn bench_deserialize(c: &mut Criterion) {
    let sizes = [1024usize, 16_384, 262_144];
    let mut group = c.benchmark_group("deserialize_vec3");
    for &size in &sizes {
        let buffer = serialize(&make_vec3s(size)).unwrap();
        group.throughput(Throughput::Bytes(buffer.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &buffer, |b, buffer| {
            b.iter(|| deserialize::<Vec3>(black_box(buffer.as_slice())).unwrap());
        });
    }
    group.finish();

    let mut group = c.benchmark_group("deserialize_tagged_vec4");
    for &size in &sizes {
        let buffer = serialize_tagged(&make_vec4s(size)).unwrap();
        group.throughput(Throughput::Bytes(buffer.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &buffer, |b, buffer| {
            b.iter(|| deserialize_tagged::<Vec4>(black_box(buffer.as_slice())).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_serialize, bench_deserialize);
criterion_main!(benches);
