use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use grasp_cover::{local_search_ma, sampling, Graph, Strategy};
use grasp_cover::instance::InstanceInfo;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn random_instance(n: usize, p: f64) -> InstanceInfo {
    let mut rng = ChaCha8Rng::seed_from_u64(0xC0FFEE);
    let mut graph = Graph::new(n);
    for u in 0..n {
        for v in u + 1..n {
            if rng.gen_bool(p) {
                graph.add_edge(u, v).unwrap();
            }
        }
    }
    InstanceInfo::from_graph(graph)
}

fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");
    for &n in &[100, 250] {
        let instance = random_instance(n, 0.05);
        for strategy in Strategy::ALL {
            group.bench_with_input(BenchmarkId::new(strategy.name(), n), &instance, |b, instance| {
                let mut rng = sampling::stream(1, 0);
                b.iter(|| black_box(strategy.construct(instance, 0.5, &mut rng)))
            });
        }
    }
    group.finish();
}

fn bench_local_search(c: &mut Criterion) {
    let instance = random_instance(250, 0.05);
    let mut rng = sampling::stream(2, 0);
    let initial = Strategy::GraspDeg.construct(&instance, 0.0, &mut rng);
    c.bench_function("local_search_ma/250", |b| {
        b.iter(|| black_box(local_search_ma(&instance.graph, initial.clone())))
    });
}

criterion_group!(benches, bench_construction, bench_local_search);
criterion_main!(benches);
