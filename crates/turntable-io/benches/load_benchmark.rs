//! Scene loading benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use turntable_io::{read_file, ReadOptions, SceneData};

const SHOWROOM_JSON: &[u8] = include_bytes!("../tests/fixtures/showroom.json");
const SHOWROOM_GLTF: &[u8] = include_bytes!("../tests/fixtures/showroom.gltf");

/// A wide, nested object document with a camera in every group.
fn large_document() -> String {
    let groups: Vec<String> = (0..200)
        .map(|i| {
            format!(
                r#"{{"type":"Group","name":"g{i}","position":[{i},0,0],"children":[
                    {{"type":"Mesh","name":"m{i}"}},
                    {{"type":"PerspectiveCamera","name":"c{i}","fov":45,"position":[0,1,5]}}
                ]}}"#
            )
        })
        .collect();
    format!(r#"{{"type":"Scene","children":[{}]}}"#, groups.join(","))
}

fn load_showroom(c: &mut Criterion) {
    let options = ReadOptions::default();
    c.bench_function("load_showroom_json", |b| {
        b.iter(|| read_file("showroom.json", black_box(SHOWROOM_JSON), &options))
    });
    c.bench_function("load_showroom_gltf", |b| {
        b.iter(|| read_file("showroom.gltf", black_box(SHOWROOM_GLTF), &options))
    });
}

fn load_large(c: &mut Criterion) {
    let document = large_document();
    let options = ReadOptions::default();
    c.bench_function("load_and_discover_large", |b| {
        b.iter(|| {
            read_file("large.json", black_box(document.as_bytes()), &options)
                .map(|graph| SceneData::new(graph, 1.5))
        })
    });
}

criterion_group!(benches, load_showroom, load_large);
criterion_main!(benches);
