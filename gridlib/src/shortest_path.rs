//! Single source shortest paths over the active lines of a [`Network`].
use crate::graph::Network;
use crate::report::{Distance, DistanceReport, VertexDistance};
use crate::types::*;
use crate::SimulationFailure;

#[cfg(test)]
mod tests;


/// Build the adjacency list of the active lines. Lines are bidirectional.
///
/// Lines with an endpoint outside the network are skipped.
fn adjacency(network: &Network) -> Vec<Vec<(VertexIndex, Cost)>> {
    let vertex_count = network.vertex_count();
    let mut adj = vec![Vec::new(); vertex_count];
    for edge in network.active_edges() {
        if edge.src >= vertex_count || edge.dest >= vertex_count {
            log::warn!("Skipping line {edge}: network has {vertex_count} vertices");
            continue;
        }
        adj[edge.src].push((edge.dest, edge.weight));
        if edge.src != edge.dest {
            adj[edge.dest].push((edge.src, edge.weight));
        }
    }
    adj
}

/// Compute the least cost of reaching every vertex from `source` using only active lines.
///
/// Dijkstra's algorithm with a linear scan for the next vertex. Among unvisited vertices with
/// equal tentative distance, the one with the lowest index is finalized first.
///
/// Does not mutate the network. Fails with [`SimulationFailure::InvalidSource`] if `source` is
/// not a vertex of the network.
pub fn compute_distances(
    network: &Network,
    source: VertexIndex,
) -> Result<DistanceReport, SimulationFailure> {
    let vertex_count = network.vertex_count();
    if source >= vertex_count {
        return Err(SimulationFailure::InvalidSource {
            source,
            vertices: vertex_count,
        });
    }

    let adj = adjacency(network);
    let mut dist: Vec<Option<Cost>> = vec![None; vertex_count];
    let mut predecessor: Vec<Option<VertexIndex>> = vec![None; vertex_count];
    let mut visited = vec![false; vertex_count];
    dist[source] = Some(0);

    loop {
        let mut selected: Option<(VertexIndex, Cost)> = None;
        for (v, d) in dist.iter().enumerate() {
            if visited[v] {
                continue;
            }
            if let Some(d) = *d {
                // Strict comparison keeps the lowest index on ties.
                if selected.map_or(true, |(_, best)| d < best) {
                    selected = Some((v, d));
                }
            }
        }
        let (u, du) = match selected {
            Some(x) => x,
            None => break,
        };
        visited[u] = true;

        for &(v, weight) in adj[u].iter() {
            if visited[v] {
                continue;
            }
            let candidate = match du.checked_add(weight) {
                Some(c) => c,
                None => continue,
            };
            if dist[v].map_or(true, |dv| candidate < dv) {
                dist[v] = Some(candidate);
                predecessor[v] = Some(u);
            }
        }
    }

    let entries: Vec<VertexDistance> = dist
        .into_iter()
        .zip(predecessor)
        .enumerate()
        .map(|(vertex, (d, predecessor))| VertexDistance {
            vertex,
            distance: match d {
                Some(cost) => Distance::Reachable(cost),
                None => Distance::Unreachable,
            },
            predecessor,
        })
        .collect();

    log::debug!(
        "Computed distances from {source}: {} of {vertex_count} vertices reachable",
        entries.iter().filter(|e| e.distance.is_reachable()).count()
    );

    Ok(DistanceReport { source, entries })
}
