use super::*;
use crate::graph::Edge;

fn costs(network: &Network, source: VertexIndex) -> Vec<Option<Cost>> {
    compute_distances(network, source).unwrap().costs()
}

fn demo_network() -> Network {
    Network::new(
        4,
        vec![
            Edge::new(0, 1, 10),
            Edge::new(0, 2, 6),
            Edge::new(0, 3, 5),
            Edge::new(1, 3, 15),
            Edge::new(2, 3, 4),
        ],
    )
}

#[test]
fn demo_distances() {
    let network = demo_network();
    assert_eq!(costs(&network, 0), vec![Some(0), Some(10), Some(6), Some(5)]);
}

#[test]
fn other_source() {
    let network = demo_network();
    assert_eq!(costs(&network, 3), vec![Some(5), Some(15), Some(4), Some(0)]);
}

#[test]
fn invalid_source() {
    let network = demo_network();
    assert_eq!(
        compute_distances(&network, 4),
        Err(SimulationFailure::InvalidSource {
            source: 4,
            vertices: 4
        })
    );
}

#[test]
fn does_not_mutate() {
    let mut network = demo_network();
    network.remove_one().unwrap();
    let before = network.clone();
    compute_distances(&network, 0).unwrap();
    assert_eq!(network, before);
}

#[test]
fn isolated_vertices() {
    let network = Network::new(5, vec![Edge::new(0, 1, 2), Edge::new(3, 4, 1)]);
    let report = compute_distances(&network, 0).unwrap();
    assert_eq!(report.costs(), vec![Some(0), Some(2), None, None, None]);
    assert_eq!(report.unreachable(), vec![2, 3, 4]);
}

#[test]
fn single_vertex() {
    let network = Network::new(1, vec![]);
    assert_eq!(costs(&network, 0), vec![Some(0)]);
}

#[test]
fn undirected() {
    // Edges are given in the "wrong" direction relative to the source.
    let network = Network::new(3, vec![Edge::new(2, 1, 7), Edge::new(1, 0, 3)]);
    assert_eq!(costs(&network, 0), vec![Some(0), Some(3), Some(10)]);
}

#[test]
fn parallel_edges_and_self_loops() {
    let network = Network::new(
        3,
        vec![
            Edge::new(0, 1, 9),
            Edge::new(1, 0, 4),
            Edge::new(1, 1, 1),
            Edge::new(1, 2, 0),
        ],
    );
    assert_eq!(costs(&network, 0), vec![Some(0), Some(4), Some(4)]);
}

#[test]
fn zero_weights() {
    let network = Network::new(3, vec![Edge::new(0, 1, 0), Edge::new(1, 2, 0)]);
    assert_eq!(costs(&network, 0), vec![Some(0), Some(0), Some(0)]);
}

#[test]
fn out_of_range_edges_are_skipped() {
    let network = Network::new(3, vec![Edge::new(0, 7, 1), Edge::new(0, 2, 5)]);
    assert_eq!(costs(&network, 0), vec![Some(0), None, Some(5)]);
}

#[test]
fn huge_weights_do_not_overflow() {
    let network = Network::new(
        3,
        vec![Edge::new(0, 1, Cost::MAX), Edge::new(1, 2, Cost::MAX)],
    );
    assert_eq!(costs(&network, 0), vec![Some(0), Some(Cost::MAX), None]);
}

#[test]
fn ties_finalize_lowest_index_first() {
    // Vertices 1 and 2 are both at distance 1, vertex 3 can be reached through either.
    let edges = vec![
        Edge::new(0, 2, 1),
        Edge::new(0, 1, 1),
        Edge::new(2, 3, 1),
        Edge::new(1, 3, 1),
    ];
    let network = Network::new(4, edges.clone());
    let report = compute_distances(&network, 0).unwrap();
    assert_eq!(report.costs(), vec![Some(0), Some(1), Some(1), Some(2)]);
    assert_eq!(report.entries[3].predecessor, Some(1));
    assert_eq!(report.path_to(3), Some(vec![0, 1, 3]));

    // Edge order does not matter.
    let mut reversed = edges;
    reversed.reverse();
    let report = compute_distances(&Network::new(4, reversed), 0).unwrap();
    assert_eq!(report.entries[3].predecessor, Some(1));
}

#[test]
fn predecessors() {
    let mut network = demo_network();
    network.remove_one().unwrap();
    network.remove_one().unwrap();
    // Left with (0,3,5), (1,3,15) and (2,3,4): everything is fed through vertex 3.
    let report = compute_distances(&network, 0).unwrap();
    assert_eq!(report.costs(), vec![Some(0), Some(20), Some(9), Some(5)]);
    assert_eq!(report.path_to(1), Some(vec![0, 3, 1]));
    assert_eq!(report.path_to(2), Some(vec![0, 3, 2]));
    assert_eq!(report.entries[0].predecessor, None);
}
