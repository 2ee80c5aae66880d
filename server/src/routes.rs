use crate::registry::{lock, NetworkId, Registry};
use gridlib::io::NetworkFile;
use gridlib::{compute_distances, Edge, Network, SimulationFailure, VertexIndex};
use log::warn;
use serde::{Deserialize, Serialize};
use warp::reply::{Json, WithStatus};
use warp::{filters::BoxedFilter, Filter, Reply};
use warp::{http::StatusCode, reply};


/// Maximum accepted size of a network description.
const BODY_LIMIT: u64 = 1024 * 1024;

#[derive(Deserialize, Debug)]
struct DistanceQuery {
    source: Option<VertexIndex>,
}

#[derive(Serialize, Debug)]
struct NetworkView<'a> {
    name: Option<&'a str>,
    vertices: usize,
    state: gridlib::NetworkState,
    active: &'a [Edge],
    removed: &'a [Edge],
}

#[derive(Serialize, Debug)]
struct EdgeReply {
    edge: Option<Edge>,
}

fn failure_reply(failure: &SimulationFailure) -> WithStatus<Json> {
    let status = match failure {
        SimulationFailure::NoEdgesToRemove | SimulationFailure::NothingToRestore => {
            StatusCode::CONFLICT
        }
        SimulationFailure::InvalidSource { .. } | SimulationFailure::BadInput(_) => {
            StatusCode::BAD_REQUEST
        }
    };
    let body = serde_json::json!({
        "error": failure,
        "description": failure.to_string(),
    });
    reply::with_status(reply::json(&body), status)
}

fn not_found(id: NetworkId) -> WithStatus<Json> {
    let body = serde_json::json!({
        "error": { "type": "NotFound", "content": id },
        "description": format!("No network with id {id}"),
    });
    reply::with_status(reply::json(&body), StatusCode::NOT_FOUND)
}

fn with_registry(
    registry: Registry,
) -> impl Filter<Extract = (Registry,), Error = std::convert::Infallible> + Clone {
    warp::any().map(move || registry.clone())
}

/// `POST /networks/{id}/{action}` applying `apply` to the network.
fn mutation<F>(
    registry: Registry,
    action: &'static str,
    apply: F,
) -> BoxedFilter<(WithStatus<Json>,)>
where
    F: Fn(&mut Network) -> Result<Option<Edge>, SimulationFailure> + Clone + Send + Sync + 'static,
{
    warp::path("networks")
        .and(warp::path::param::<NetworkId>())
        .and(warp::path(action))
        .and(warp::path::end())
        .and(warp::post())
        .and(with_registry(registry))
        .map(move |id: NetworkId, registry: Registry| {
            let mut registry = lock(&registry);
            let entry = match registry.get_mut(id) {
                Some(entry) => entry,
                None => return not_found(id),
            };
            match apply(&mut entry.network) {
                Ok(edge) => reply::with_status(reply::json(&EdgeReply { edge }), StatusCode::OK),
                Err(failure) => {
                    warn!("Network {id}: {action} refused: {failure}");
                    failure_reply(&failure)
                }
            }
        })
        .boxed()
}

/// Every route combined.
pub fn api(registry: Registry) -> BoxedFilter<(impl Reply,)> {
    let create = warp::path!("networks")
        .and(warp::post())
        .and(warp::body::content_length_limit(BODY_LIMIT))
        .and(warp::body::json())
        .and(with_registry(registry.clone()))
        .map(|file: NetworkFile, registry: Registry| {
            let name = file.name.clone();
            let (network, config) = match file.prepare() {
                Ok(x) => x,
                Err(e) => return failure_reply(&e),
            };
            let source = config.source;
            let id = lock(&registry).create(name, network, config);
            log::info!("Created network {id} (source {source})");
            reply::with_status(
                reply::json(&serde_json::json!({ "id": id })),
                StatusCode::CREATED,
            )
        });

    let view = warp::path!("networks" / NetworkId)
        .and(warp::get())
        .and(with_registry(registry.clone()))
        .map(|id: NetworkId, registry: Registry| {
            let registry = lock(&registry);
            match registry.get(id) {
                Some(entry) => {
                    let network = &entry.network;
                    let view = NetworkView {
                        name: entry.name.as_deref(),
                        vertices: network.vertex_count(),
                        state: network.state(),
                        active: network.active_edges(),
                        removed: network.removed_edges(),
                    };
                    reply::with_status(reply::json(&view), StatusCode::OK)
                }
                None => not_found(id),
            }
        });

    let delete = warp::path!("networks" / NetworkId)
        .and(warp::delete())
        .and(with_registry(registry.clone()))
        .map(|id: NetworkId, registry: Registry| match lock(&registry).remove(id) {
            Some(_) => {
                log::info!("Deleted network {id}");
                reply::with_status(reply::json(&serde_json::json!({ "id": id })), StatusCode::OK)
            }
            None => not_found(id),
        });

    let distances = warp::path!("networks" / NetworkId / "distances")
        .and(warp::get())
        .and(warp::query::<DistanceQuery>())
        .and(with_registry(registry.clone()))
        .map(|id: NetworkId, query: DistanceQuery, registry: Registry| {
            let registry = lock(&registry);
            let entry = match registry.get(id) {
                Some(entry) => entry,
                None => return not_found(id),
            };
            let source = query.source.unwrap_or(entry.config.source);
            match compute_distances(&entry.network, source) {
                Ok(report) => reply::with_status(reply::json(&report), StatusCode::OK),
                Err(failure) => failure_reply(&failure),
            }
        });

    let remove = mutation(registry.clone(), "remove", |network| {
        network.remove_one().map(Some)
    });
    let restore = mutation(registry.clone(), "restore", |network| {
        network.restore_one().map(Some)
    });
    let reset = mutation(registry, "reset", |network| {
        network.reset();
        Ok(None)
    });

    create
        .or(view)
        .or(delete)
        .or(distances)
        .or(remove)
        .or(restore)
        .or(reset)
        .with(warp::log("server"))
        .boxed()
}
