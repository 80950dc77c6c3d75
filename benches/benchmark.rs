use std::io::Cursor;

use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use itertools::Itertools;
use messier::angles::{format_declination, format_right_ascension};
use messier::{Catalogue, Survey};
use rand::Rng;

const CATEGORIES: [&str; 4] = ["Globular Cluster", "Open cluster", "Nebula", "Galaxy"];
const CONSTELLATIONS: [&str; 4] = ["Sagittarius", "Taurus", "Virgo", "Andromeda"];

fn catalogue_text(n_objects: usize) -> String {
    let mut rng = rand::rng();

    (0..n_objects)
        .map(|i| {
            let designation = if i == 0 { "M45".to_string() } else { format!("M{}", i + 1000) };
            let near: f64 = rng.random_range(0.1..50.0);
            format!(
                "{designation}, NGC {i}, , {}, {near:.2}-{:.2}, {}, {:.1}, {}, {}",
                CATEGORIES[i % CATEGORIES.len()],
                near + rng.random_range(0.0..5.0),
                CONSTELLATIONS[i % CONSTELLATIONS.len()],
                rng.random_range(1.0..12.0),
                format_right_ascension(rng.random_range(0.0..24.0)),
                format_declination(rng.random_range(-90.0..90.0)),
            )
        })
        .join("\n")
}

fn catalogue_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalogue");
    group.sample_size(10);

    let text = catalogue_text(10_000);
    group.bench_function("load", |b| {
        b.iter_batched(
            Catalogue::new,
            |mut catalogue| catalogue.load(Cursor::new(text.as_str())),
            BatchSize::SmallInput,
        )
    });

    let mut catalogue = Catalogue::new();
    catalogue.load(Cursor::new(text.as_str())).unwrap();

    group.bench_function("nearest by angular distance", |b| {
        b.iter(|| catalogue.nearest_by_angular_distance("M45"))
    });

    let survey = Survey::new();
    group.bench_function("survey", |b| b.iter(|| survey.run(&catalogue).average_magnitude));

    group.bench_function("sort by constellation", |b| {
        b.iter_batched(
            || catalogue.clone(),
            |mut catalogue| catalogue.sort_by_constellation(),
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, catalogue_benchmark);
criterion_main!(benches);
