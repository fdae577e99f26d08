use std::time::Duration;

use criterion::{Criterion, criterion_group, criterion_main};
use routegraph::{
    GraphSnapshot, Position, RouteGraph,
    bench_utils::{NetworkShape, RouteDataset, generate_network},
};

const CHAIN_SEED: u64 = 0xA1C4;
const TREE_SEED: u64 = 0xB7E2;
const RANDOM_SEED: u64 = 0xC3D9;
const SAMPLE_SIZE: usize = 20;
const WARM_UP: Duration = Duration::from_millis(300);
const MEASURE: Duration = Duration::from_millis(500);

struct PreparedNetwork {
    dataset: RouteDataset,
    graph: RouteGraph,
    snapshot: GraphSnapshot,
    label: &'static str,
}

fn bench_scale() -> usize {
    #[cfg(feature = "bench-ci")]
    {
        2_000
    }
    #[cfg(not(feature = "bench-ci"))]
    {
        10_000
    }
}

fn prepared_networks() -> Vec<PreparedNetwork> {
    let airports = bench_scale();
    vec![
        materialize(
            generate_network(NetworkShape::Chain, airports, CHAIN_SEED),
            "chain",
        ),
        materialize(
            generate_network(NetworkShape::BinaryTree, airports, TREE_SEED),
            "tree",
        ),
        materialize(
            generate_network(NetworkShape::Random { fill: 0.9 }, airports, RANDOM_SEED),
            "random",
        ),
    ]
}

fn bench_nth_node(c: &mut Criterion) {
    let networks = prepared_networks();
    let mut group = c.benchmark_group("nth_node");
    group.sample_size(SAMPLE_SIZE);
    group.warm_up_time(WARM_UP);
    group.measurement_time(MEASURE);
    for prepared in &networks {
        let start = prepared.dataset.code(0).to_string();
        group.bench_function(prepared.label, |b| {
            b.iter(|| {
                prepared
                    .graph
                    .query()
                    .nth_node(&start, Position::Left, 8)
                    .expect("nth_node")
            });
        });
    }
    group.finish();
}

fn bench_longest_node(c: &mut Criterion) {
    let networks = prepared_networks();
    let mut group = c.benchmark_group("longest_node");
    group.sample_size(SAMPLE_SIZE);
    group.warm_up_time(WARM_UP);
    group.measurement_time(MEASURE);
    for prepared in &networks {
        let start = prepared.dataset.code(0).to_string();
        group.bench_function(prepared.label, |b| {
            b.iter(|| prepared.graph.query().longest_node(&start).expect("longest"));
        });
    }
    group.finish();
}

fn bench_shortest_path(c: &mut Criterion) {
    let networks = prepared_networks();
    let mut group = c.benchmark_group("shortest_path");
    group.sample_size(SAMPLE_SIZE);
    group.warm_up_time(WARM_UP);
    group.measurement_time(MEASURE);
    for prepared in &networks {
        let from = prepared.dataset.code(0).to_string();
        let to = prepared.dataset.code(prepared.dataset.airports() - 1).to_string();
        group.bench_function(format!("{}/sqlite", prepared.label), |b| {
            b.iter(|| prepared.graph.query().shortest_path(&from, &to).expect("shortest"));
        });
        group.bench_function(format!("{}/snapshot", prepared.label), |b| {
            b.iter(|| {
                prepared
                    .snapshot
                    .query()
                    .shortest_path(&from, &to)
                    .expect("shortest")
            });
        });
    }
    group.finish();
}

fn materialize(dataset: RouteDataset, label: &'static str) -> PreparedNetwork {
    let graph = RouteGraph::open_in_memory().expect("graph");
    dataset.load_into(&graph).expect("load dataset");
    let snapshot = dataset.snapshot();
    PreparedNetwork {
        dataset,
        graph,
        snapshot,
        label,
    }
}

criterion_group!(
    name = query_benches;
    config = Criterion::default();
    targets = bench_nth_node, bench_longest_node, bench_shortest_path
);
criterion_main!(query_benches);
