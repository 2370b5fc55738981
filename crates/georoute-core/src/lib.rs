pub mod error;
pub mod graph;
pub mod models;
pub mod provider;
pub mod route_engine;
pub mod spatial;

pub use error::{RouteError, RouteResult};
pub use graph::{Adjacency, GraphBuilder, GraphStore};
pub use models::{
    validate_anchors, Coordinate, Edge, GraphNode, RouteResponse, RouteSource,
};
pub use provider::{positional_labels, ProviderOutcome, RouteProvider};
pub use route_engine::{shortest_path, ShortestPathResult};
pub use spatial::{haversine_km, same_coordinate};
