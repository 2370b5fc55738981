//! Route resolution: external provider first, internal graph second.

use georoute_core::{
    same_coordinate, shortest_path, validate_anchors, Coordinate, GraphStore, ProviderOutcome,
    RouteProvider, RouteResponse, RouteResult, RouteSource,
};
use std::sync::Arc;
use std::time::Duration;

pub struct RouteResolver<P> {
    provider: P,
    graph: Arc<GraphStore>,
    provider_budget: Duration,
}

impl<P: RouteProvider> RouteResolver<P> {
    pub fn new(provider: P, graph: Arc<GraphStore>, provider_budget: Duration) -> Self {
        Self {
            provider,
            graph,
            provider_budget,
        }
    }

    /// Resolve a route through `anchors`.
    ///
    /// Invalid anchors are rejected before the provider is contacted. An empty
    /// response (no coordinates) means no route exists.
    pub async fn resolve(
        &self,
        anchors: &[Coordinate],
        allow_approximation: bool,
    ) -> RouteResult<RouteResponse> {
        validate_anchors(anchors)?;
        let origin = anchors[0];
        let destination = anchors[anchors.len() - 1];
        tracing::info!(
            %origin,
            %destination,
            points = anchors.len(),
            allow_approximation,
            "Route requested"
        );

        let outcome = match tokio::time::timeout(
            self.provider_budget,
            self.provider.route(anchors, allow_approximation),
        )
        .await
        {
            Ok(outcome) => outcome?,
            Err(_) => ProviderOutcome::Failed(format!(
                "provider exceeded {} ms budget",
                self.provider_budget.as_millis()
            )),
        };

        match outcome {
            ProviderOutcome::Found(route) => {
                tracing::info!(
                    km = route.total_cost,
                    points = route.coordinates.len(),
                    "External provider returned route"
                );
                return Ok(route);
            }
            ProviderOutcome::NotFound => {
                tracing::info!("External provider found no route, falling back to internal graph");
            }
            ProviderOutcome::Failed(reason) => {
                tracing::warn!(
                    %reason,
                    "External provider unavailable, falling back to internal graph"
                );
            }
        }

        self.resolve_internal(&origin, &destination)
    }

    /// Dijkstra between the graph nodes nearest to `origin` and `destination`.
    pub fn resolve_internal(
        &self,
        origin: &Coordinate,
        destination: &Coordinate,
    ) -> RouteResult<RouteResponse> {
        let origin_node = self.graph.nearest_node_id(origin)?;
        let destination_node = self.graph.nearest_node_id(destination)?;
        tracing::info!(from = origin_node, to = destination_node, "Running Dijkstra");

        let result = shortest_path(origin_node, destination_node, self.graph.adjacency())?;
        if !result.is_reachable() {
            tracing::info!(from = origin_node, to = destination_node, "No path in internal graph");
            return Ok(RouteResponse::not_found());
        }
        tracing::info!(
            nodes = result.path.len(),
            km = result.total_cost,
            "Dijkstra found path"
        );

        let mut coordinates = Vec::with_capacity(result.path.len() + 2);
        coordinates.push(*origin);
        coordinates.extend(
            result
                .path
                .iter()
                .filter_map(|id| self.graph.node(id))
                .map(|node| node.coordinate),
        );
        let duplicate_tail = coordinates
            .last()
            .is_some_and(|last| same_coordinate(last, destination));
        if !duplicate_tail {
            coordinates.push(*destination);
        }

        Ok(RouteResponse {
            nodes: result.path,
            coordinates,
            total_cost: result.total_cost,
            source: Some(RouteSource::InternalGraph),
        })
    }
}
