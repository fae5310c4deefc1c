use crate::maximum_flow::graph::Graph;
use num_traits::NumAssign;

/// Residual state owned by one solver for one solve.
///
/// Dense capacity and flow tables plus a neighbor list per node. `w` is a
/// neighbor of `v` when an edge exists in either direction, so the lists
/// cover forward and backward residual edges alike.
#[derive(Default)]
pub struct Residual<Flow> {
    pub num_nodes: usize,
    pub cap: Vec<Vec<Flow>>,
    pub flow: Vec<Vec<Flow>>,
    neighbors: Vec<Vec<usize>>,
}

impl<Flow> Residual<Flow>
where
    Flow: NumAssign + Ord + Copy,
{
    pub fn build(&mut self, graph: &Graph<Flow>) {
        self.num_nodes = graph.num_nodes();
        self.cap = graph.cap.clone();
        self.flow = vec![vec![Flow::zero(); self.num_nodes]; self.num_nodes];

        self.neighbors = (0..self.num_nodes)
            .map(|v| {
                (0..self.num_nodes)
                    .filter(|&w| w != v && (self.cap[v][w] > Flow::zero() || self.cap[w][v] > Flow::zero()))
                    .collect()
            })
            .collect();
    }

    #[inline]
    pub fn neighbors(&self, v: usize) -> &[usize] {
        &self.neighbors[v]
    }

    // remaining forward capacity plus cancelable opposing flow
    #[inline]
    pub fn residual_capacity(&self, v: usize, w: usize) -> Flow {
        self.cap[v][w] - self.flow[v][w] + self.flow[w][v]
    }

    /// Push `delta` units along the residual edge `(v, w)`.
    ///
    /// Opposing flow is canceled before forward flow is added, which keeps
    /// every entry of the flow matrix within `[0, cap]`.
    pub fn push_flow(&mut self, v: usize, w: usize, delta: Flow) {
        let cancel = delta.min(self.flow[w][v]);
        self.flow[w][v] -= cancel;
        self.flow[v][w] += delta - cancel;
    }

    pub fn set_flow(&self, graph: &mut Graph<Flow>) {
        for v in 0..self.num_nodes {
            for w in 0..self.num_nodes {
                graph.flow[v][w] = self.flow[v][w];
            }
        }
    }
}
