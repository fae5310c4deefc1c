use num_traits::NumAssign;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuditError {
    #[error("flow on edge ({from}, {to}) exceeds its capacity")]
    CapacityExceeded { from: usize, to: usize },
    #[error("node {node} violates conservation")]
    Unbalanced { node: usize },
    #[error("source net outflow does not match sink net inflow")]
    ValueMismatch,
}

/// A directed graph with one capacity entry per ordered node pair.
///
/// Capacities are dense: `cap[u][v]` is zero when the edge does not exist.
/// The flow matrix is written by the solvers and read back through
/// [`Graph::flow`] and [`Graph::flow_value`].
#[derive(Default, Clone, Debug)]
pub struct Graph<Flow> {
    num_nodes: usize,
    num_edges: usize,
    pub(crate) cap: Vec<Vec<Flow>>,
    pub(crate) flow: Vec<Vec<Flow>>,
}

impl<Flow> Graph<Flow>
where
    Flow: NumAssign + Ord + Copy,
{
    #[inline]
    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    #[inline]
    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    pub fn add_node(&mut self) -> usize {
        for row in self.cap.iter_mut() {
            row.push(Flow::zero());
        }
        for row in self.flow.iter_mut() {
            row.push(Flow::zero());
        }
        self.num_nodes += 1;
        self.cap.push(vec![Flow::zero(); self.num_nodes]);
        self.flow.push(vec![Flow::zero(); self.num_nodes]);
        self.num_nodes - 1
    }

    pub fn add_nodes(&mut self, num_nodes: usize) -> Vec<usize> {
        (0..num_nodes).map(|_| self.add_node()).collect()
    }

    // one edge entry per ordered pair; a second entry is rejected
    pub fn add_directed_edge(&mut self, from: usize, to: usize, upper: Flow) -> bool {
        if from >= self.num_nodes || to >= self.num_nodes || upper < Flow::zero() {
            return false;
        }
        if self.cap[from][to] > Flow::zero() {
            return false;
        }

        self.cap[from][to] = upper;
        self.num_edges += 1;
        true
    }

    #[inline]
    pub fn capacity(&self, from: usize, to: usize) -> Flow {
        self.cap[from][to]
    }

    #[inline]
    pub fn flow(&self, from: usize, to: usize) -> Flow {
        self.flow[from][to]
    }

    /// Overwrite one entry of the flow matrix.
    ///
    /// Intended for injecting externally computed flows ahead of an
    /// [`audit`](Graph::audit); no capacity check is applied here.
    pub fn set_flow(&mut self, from: usize, to: usize, flow: Flow) -> bool {
        if from >= self.num_nodes || to >= self.num_nodes {
            return false;
        }
        self.flow[from][to] = flow;
        true
    }

    /// Net outflow of `source` under the current flow matrix.
    pub fn flow_value(&self, source: usize) -> Flow {
        let out = self.flow[source].iter().fold(Flow::zero(), |acc, &f| acc + f);
        let inflow = (0..self.num_nodes).fold(Flow::zero(), |acc, u| acc + self.flow[u][source]);
        out - inflow
    }

    /// Check the flow matrix for capacity and conservation violations.
    ///
    /// Returns the flow value when every edge satisfies `0 <= flow <= cap`,
    /// every node other than `source` and `sink` balances, and the source's
    /// net outflow equals the sink's net inflow. A failure after a solver
    /// reported `Optimal` is a defect in that solver, not a runtime
    /// condition to recover from.
    pub fn audit(&self, source: usize, sink: usize) -> Result<Flow, AuditError> {
        let n = self.num_nodes;

        for from in 0..n {
            for to in 0..n {
                if self.flow[from][to] < Flow::zero() || self.flow[from][to] > self.cap[from][to] {
                    return Err(AuditError::CapacityExceeded { from, to });
                }
            }
        }

        let mut inflow = vec![Flow::zero(); n];
        let mut outflow = vec![Flow::zero(); n];
        for from in 0..n {
            for to in 0..n {
                outflow[from] += self.flow[from][to];
                inflow[to] += self.flow[from][to];
            }
        }

        for node in 0..n {
            if node != source && node != sink && inflow[node] != outflow[node] {
                return Err(AuditError::Unbalanced { node });
            }
        }

        // compare without subtraction so unsigned flows cannot wrap
        if outflow[source] < inflow[source] || inflow[sink] < outflow[sink] {
            return Err(AuditError::ValueMismatch);
        }
        if outflow[source] + outflow[sink] != inflow[source] + inflow[sink] {
            return Err(AuditError::ValueMismatch);
        }

        Ok(outflow[source] - inflow[source])
    }
}
