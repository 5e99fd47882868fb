use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use lineage::network::{HasseConstructor, LsaAnalyzer, ReticulateConverter};
use lineage::{ClusterNetworkBuilder, NetworkConfig};
use lineage_test::{laminar_clusters, mutation_groups, overlapping_clusters};
use std::hint::black_box;

fn bench_hasse_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("network/hasse");
    let config = NetworkConfig::default();

    for num_groups in [16, 64, 256].iter() {
        let groups = mutation_groups(*num_groups);
        let clusters = laminar_clusters(*num_groups, 42);
        let constructor = HasseConstructor::new(&config);

        group.bench_with_input(BenchmarkId::new("laminar", num_groups), num_groups, |b, _| {
            b.iter(|| {
                let hasse = constructor.construct(&groups, black_box(clusters.clone()));
                black_box(hasse)
            });
        });
    }

    group.finish();
}

fn bench_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("network/analysis");
    let config = NetworkConfig::default();

    for num_clusters in [16, 64, 128].iter() {
        let groups = mutation_groups(32);
        let clusters = overlapping_clusters(32, *num_clusters, 42);
        let Ok(hasse) = HasseConstructor::new(&config).construct(&groups, clusters) else {
            continue;
        };
        let mut converted = hasse.network.clone();
        if ReticulateConverter::new(&config).convert(&mut converted).is_err() {
            continue;
        }

        group.bench_with_input(
            BenchmarkId::new("convert", num_clusters),
            num_clusters,
            |b, _| {
                b.iter(|| {
                    let mut network = hasse.network.clone();
                    black_box(ReticulateConverter::new(&config).convert(&mut network))
                });
            },
        );

        group.bench_with_input(BenchmarkId::new("lsa", num_clusters), num_clusters, |b, _| {
            b.iter(|| black_box(LsaAnalyzer::new().analyze(black_box(&converted))));
        });
    }

    group.finish();
}

fn bench_full_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("network/full_pipeline");
    group.sample_size(20);

    for num_clusters in [16, 64, 128].iter() {
        let groups = mutation_groups(48);
        let clusters = overlapping_clusters(48, *num_clusters, 7);
        let builder = ClusterNetworkBuilder::new(NetworkConfig::default());

        group.bench_with_input(
            BenchmarkId::from_parameter(num_clusters),
            num_clusters,
            |b, _| {
                b.iter(|| black_box(builder.build(&groups, black_box(clusters.clone()))));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_hasse_construction, bench_analysis, bench_full_pipeline);
criterion_main!(benches);
