use log::debug;
use num_traits::{Float, Zero};
use serde::Serialize;
use std::fmt::Debug;

use crate::algorithm::{Dijkstra, ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::degree::{self, DegreeInformation};
use crate::graph::traits::{Graph, MutableGraph};
use crate::{Error, Result};

/// A vertex record in the graph's arena.
///
/// Neighbors are stored as arena indices (`identity - 1`), index-aligned with
/// their edge weights. `known`, `distance` and `predecessor` hold the state of
/// the most recent shortest-path run.
#[derive(Debug, Clone)]
pub struct Vertex<W>
where
    W: Float + Zero + Debug + Copy,
{
    identity: usize,
    adjacent: Vec<usize>,
    weights: Vec<W>,
    known: bool,
    distance: W,
    predecessor: Option<usize>,
}

impl<W> Vertex<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn new(identity: usize) -> Self {
        Vertex {
            identity,
            adjacent: Vec::new(),
            weights: Vec::new(),
            known: false,
            distance: W::infinity(),
            predecessor: None,
        }
    }

    /// Stable 1-based identity of the vertex
    pub fn identity(&self) -> usize {
        self.identity
    }

    /// Number of outgoing edges
    pub fn out_degree(&self) -> usize {
        self.adjacent.len()
    }

    /// Whether the last shortest-path run finalized this vertex
    pub fn is_known(&self) -> bool {
        self.known
    }

    /// Best known distance from the last origin; infinity if unreachable
    pub fn distance(&self) -> W {
        self.distance
    }

    /// Identity of the previous vertex on the best path, if any
    pub fn predecessor(&self) -> Option<usize> {
        self.predecessor.map(|index| index + 1)
    }

    fn reset(&mut self) {
        self.known = false;
        self.distance = W::infinity();
        self.predecessor = None;
    }
}

/// One row of shortest-path output: a vertex, its path from the origin and its cost
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathEntry<W> {
    /// Identity of the vertex
    pub vertex: usize,

    /// Identities from the origin to `vertex`; just `[vertex]` when unreachable
    pub path: Vec<usize>,

    /// Total cost, or `None` when unreachable
    pub distance: Option<W>,
}

impl<W> PathEntry<W> {
    /// Returns true if the vertex was reached from the origin
    pub fn is_reachable(&self) -> bool {
        self.distance.is_some()
    }
}

/// A directed graph with a fixed number of vertices, stored as an arena of
/// adjacency-list records
#[derive(Debug, Clone)]
pub struct DirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    vertices: Vec<Vertex<W>>,

    /// Number of directed edges stored across all adjacency lists
    edge_count: usize,
}

impl<W> DirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Creates a graph with vertices `1..=size` and no edges
    pub fn new(size: usize) -> Self {
        DirectedGraph {
            vertices: (1..=size).map(Vertex::new).collect(),
            edge_count: 0,
        }
    }

    /// Creates a graph from directed edge triples.
    ///
    /// Triples that `add_edge` rejects are returned alongside the graph rather
    /// than aborting construction.
    pub fn from_edges<I>(size: usize, edges: I) -> (Self, Vec<Error>)
    where
        I: IntoIterator<Item = (usize, usize, W)>,
    {
        let mut graph = Self::new(size);
        let mut rejected = Vec::new();

        for (from, to, weight) in edges {
            if let Err(err) = graph.add_edge(from, to, weight) {
                rejected.push(err);
            }
        }

        (graph, rejected)
    }

    /// Returns the vertex record for an identity
    pub fn vertex(&self, identity: usize) -> Option<&Vertex<W>> {
        identity
            .checked_sub(1)
            .and_then(|index| self.vertices.get(index))
    }

    /// Returns all vertex records in identity order
    pub fn vertices(&self) -> &[Vertex<W>] {
        &self.vertices
    }

    /// Returns the weight of the direct edge `from -> to`, or `None` if there is none.
    ///
    /// A vertex is never connected to itself by a stored edge, so `from == to`
    /// always yields `None`.
    pub fn is_connected(&self, from: usize, to: usize) -> Result<Option<W>> {
        let from_index = self.index_of(from)?;
        self.index_of(to)?;

        let vertex = &self.vertices[from_index];
        Ok(vertex
            .adjacent
            .iter()
            .position(|&index| index + 1 == to)
            .map(|position| vertex.weights[position]))
    }

    /// Computes degree statistics over all vertices, or `None` for an empty graph
    pub fn degree_information(&self) -> Option<DegreeInformation> {
        degree::degree_information(self)
    }

    /// Returns the path to `identity` recorded by the last shortest-path run
    ///
    /// The walk follows predecessors back to a vertex without one, so an
    /// unreachable vertex yields just itself.
    pub fn path_to(&self, identity: usize) -> Result<Vec<usize>> {
        let mut current = self.index_of(identity)?;
        let mut path = vec![identity];

        while let Some(previous) = self.vertices[current].predecessor {
            path.push(previous + 1);
            current = previous;
        }

        path.reverse();
        Ok(path)
    }

    fn index_of(&self, identity: usize) -> Result<usize> {
        if !self.has_vertex(identity) {
            return Err(Error::InvalidVertex {
                id: identity,
                vertex_count: self.vertices.len(),
            });
        }
        Ok(identity - 1)
    }

    /// Overwrites per-vertex run state with a computed result
    fn record(&mut self, result: &ShortestPathResult<W>) {
        for (index, vertex) in self.vertices.iter_mut().enumerate() {
            vertex.reset();
            if let Some(distance) = result.distances[index] {
                vertex.known = true;
                vertex.distance = distance;
            }
            vertex.predecessor = result.predecessors[index].map(|id| id - 1);
        }
    }
}

impl<W> DirectedGraph<W>
where
    W: Float + Zero + Debug + Copy + Ord,
{
    /// Runs Dijkstra's algorithm from `origin` and reports every vertex in
    /// identity order.
    ///
    /// The per-vertex `known`, `distance` and `predecessor` fields are
    /// re-initialised and left holding the state of this run.
    pub fn dijkstra(&mut self, origin: usize) -> Result<Vec<PathEntry<W>>> {
        self.dijkstra_with(&Dijkstra::new(), origin)
    }

    /// Same as [`DirectedGraph::dijkstra`] with a configured algorithm instance
    pub fn dijkstra_with(
        &mut self,
        algorithm: &Dijkstra,
        origin: usize,
    ) -> Result<Vec<PathEntry<W>>> {
        let result = algorithm.compute_shortest_paths(&*self, origin)?;
        self.record(&result);

        let mut entries = Vec::with_capacity(self.vertices.len());
        for vertex in &self.vertices {
            entries.push(PathEntry {
                vertex: vertex.identity,
                path: self.path_to(vertex.identity)?,
                distance: vertex.known.then_some(vertex.distance),
            });
        }

        Ok(entries)
    }
}

impl<W> Graph<W> for DirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        match self.vertex(vertex) {
            Some(record) => Box::new(
                record
                    .adjacent
                    .iter()
                    .zip(record.weights.iter())
                    .map(|(&index, &weight)| (index + 1, weight)),
            ),
            None => Box::new(std::iter::empty()),
        }
    }

    fn out_degree(&self, vertex: usize) -> usize {
        self.vertex(vertex).map_or(0, Vertex::out_degree)
    }
}

impl<W> MutableGraph<W> for DirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<bool> {
        let from_index = self.index_of(from)?;
        let to_index = self.index_of(to)?;

        // OrderedFloat sorts NaN above every number, so test it explicitly
        if !weight.is_finite() || weight < W::zero() {
            return Err(Error::InvalidWeight(weight.to_f64().unwrap_or(f64::NAN)));
        }

        if from == to || self.is_connected(from, to)?.is_some() {
            debug!("ignoring edge {} -> {}: self-loop or duplicate", from, to);
            return Ok(false);
        }

        let origin = &mut self.vertices[from_index];
        origin.adjacent.push(to_index);
        origin.weights.push(weight);
        self.edge_count += 1;

        Ok(true)
    }
}
