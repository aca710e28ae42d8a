#![allow(dead_code)]

use ai_search::{SearchSpace, Successor};

/// Directed weighted graph over `u32` node ids with an optional per-node heuristic table.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    pub edges: Vec<Vec<(u32, u32)>>,
    pub heuristic: Vec<u32>,
}

impl Graph {
    pub fn with_nodes(count: usize) -> Self {
        Self {
            edges: vec![Vec::new(); count],
            heuristic: Vec::new(),
        }
    }

    pub fn edge(mut self, from: u32, to: u32, cost: u32) -> Self {
        self.edges[from as usize].push((to, cost));
        self
    }

    pub fn line(len: u32) -> Self {
        let mut graph = Self::with_nodes(len as usize + 1);
        for i in 0..len {
            graph = graph.edge(i, i + 1, 1);
        }
        graph
    }
}

impl SearchSpace for Graph {
    type Data = u32;
    type Edge = (u32, u32);
    type Cost = u32;

    fn expand(&self, from: &u32, out: &mut Vec<Successor<u32, (u32, u32), u32>>) {
        for &(to, cost) in &self.edges[*from as usize] {
            out.push(Successor::new(to, (*from, to), cost));
        }
    }

    fn cost_to_goal(&self, data: &u32, _goal: Option<&u32>) -> u32 {
        self.heuristic.get(*data as usize).copied().unwrap_or(0)
    }
}

/// Plain O(n^2) Dijkstra used as the reference for optimality checks.
pub fn dijkstra(graph: &Graph, start: u32, goal: u32) -> Option<u32> {
    let n = graph.edges.len();
    let mut dist = vec![u32::MAX; n];
    let mut done = vec![false; n];
    dist[start as usize] = 0;

    loop {
        let next = (0..n)
            .filter(|&i| !done[i] && dist[i] != u32::MAX)
            .min_by_key(|&i| dist[i]);
        let Some(u) = next else { break };
        done[u] = true;
        for &(to, cost) in &graph.edges[u] {
            let alt = dist[u].saturating_add(cost);
            if alt < dist[to as usize] {
                dist[to as usize] = alt;
            }
        }
    }

    let d = dist[goal as usize];
    (d != u32::MAX).then_some(d)
}

/// SplitMix64, enough to build reproducible random graphs without a rand dependency.
pub struct Rng(u64);

impl Rng {
    pub fn new(seed: u64) -> Self {
        Self(seed)
    }

    pub fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    pub fn below(&mut self, n: u64) -> u64 {
        self.next_u64() % n
    }
}

pub fn random_graph(seed: u64, nodes: usize, edges_per_node: usize) -> Graph {
    let mut rng = Rng::new(seed);
    let mut graph = Graph::with_nodes(nodes);
    for from in 0..nodes as u32 {
        for _ in 0..edges_per_node {
            let to = rng.below(nodes as u64) as u32;
            let cost = 1 + rng.below(20) as u32;
            graph = graph.edge(from, to, cost);
        }
    }
    graph
}
