use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sugerir::catalog::Item;
use sugerir::recommend::ContentIndex;

fn generate_catalog(n: usize) -> Vec<Item> {
    let genres = [
        "action",
        "comedy",
        "drama",
        "thriller",
        "horror",
        "romance",
        "scifi",
        "fantasy",
        "mystery",
        "adventure",
    ];
    let adjectives = [
        "epic",
        "thrilling",
        "emotional",
        "intense",
        "hilarious",
        "dark",
        "heartwarming",
        "suspenseful",
        "mysterious",
        "explosive",
    ];
    let nouns = [
        "story",
        "journey",
        "adventure",
        "tale",
        "saga",
        "quest",
        "mission",
        "odyssey",
        "expedition",
        "voyage",
    ];

    (0..n)
        .map(|i| {
            let genre = genres[i % genres.len()];
            let adj = adjectives[(i / 10) % adjectives.len()];
            let noun = nouns[(i / 100) % nouns.len()];
            let title = format!("movie_{}", i);
            let tags = format!("{} {} {} about heroes and villains", adj, genre, noun);
            Item::new(title, tags)
        })
        .collect()
}

fn bench_build_index(c: &mut Criterion) {
    let mut group = c.benchmark_group("index_build");
    group.sample_size(10); // Pairwise build is quadratic in catalog size

    for size in [100, 1_000, 2_000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| ContentIndex::build(black_box(generate_catalog(size))));
        });
    }

    group.finish();
}

fn bench_recommend(c: &mut Criterion) {
    let mut group = c.benchmark_group("recommend_query");
    group.sample_size(50);

    for size in [100, 1_000, 2_000].iter() {
        // Pre-build index; queries are read-only
        let index = ContentIndex::build(generate_catalog(*size));

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| index.recommend(black_box("movie_0"), black_box(10)));
        });
    }

    group.finish();
}

fn bench_recommend_latency_target(c: &mut Criterion) {
    // Query on the largest catalog stays well under a millisecond
    let index = ContentIndex::build(generate_catalog(2_000));

    c.bench_function("recommend_2k_latency", |b| {
        b.iter(|| index.recommend(black_box("movie_1000"), black_box(10)));
    });
}

criterion_group!(
    benches,
    bench_build_index,
    bench_recommend,
    bench_recommend_latency_target
);
criterion_main!(benches);
