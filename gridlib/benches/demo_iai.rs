use gridlib::io::NetworkFile;
use gridlib::*;
use iai_callgrind::{black_box, library_benchmark, library_benchmark_group, main};

const DEMO: &str = include_str!("../../graphs/demo.json");

fn setup_demo() -> Network {
    let file: NetworkFile = serde_json::from_str(DEMO).unwrap();
    file.prepare().unwrap().0
}

/// A ring of `n` houses around the station with a chord from every house to its opposite.
fn setup_ring(n: usize) -> Network {
    let mut edges = Vec::new();
    for i in 0..n {
        edges.push(Edge::new(i, (i + 1) % n, (i % 7 + 1) as Cost));
        edges.push(Edge::new(i, (i + n / 2) % n, (i % 11 + 3) as Cost));
    }
    Network::new(n, edges)
}

#[library_benchmark]
#[bench::demo(setup_demo())]
#[bench::ring_100(setup_ring(100))]
fn distances(network: Network) {
    black_box(compute_distances(&network, POWER_SOURCE).unwrap());
}

#[library_benchmark]
#[bench::demo(setup_demo())]
#[bench::ring_100(setup_ring(100))]
fn fail_everything(network: Network) {
    let mut simulator = Simulator::new(network, SimulationConfig::default()).unwrap();
    while let Ok(step) = simulator.simulate_failure() {
        black_box(step);
    }
}

library_benchmark_group!(
    name = network_group;
    benchmarks = distances, fail_everything
);

main!(library_benchmark_groups = network_group);
