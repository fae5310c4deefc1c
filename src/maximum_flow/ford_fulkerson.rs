use crate::maximum_flow::graph::Graph;
use crate::maximum_flow::residual::Residual;
use crate::maximum_flow::status::Status;
use num_traits::NumAssign;

/// Plain augmenting-path maximum-flow solver.
///
/// Repeatedly finds a path of positive residual capacity by depth-first
/// search and pushes the bottleneck along it. Used as a reference to
/// cross-check the preflow-push solver.
#[derive(Default)]
pub struct FordFulkerson<Flow> {
    residual: Residual<Flow>,
}

impl<Flow> FordFulkerson<Flow>
where
    Flow: NumAssign + Ord + Copy,
{
    pub fn solve(&mut self, source: usize, sink: usize, graph: &mut Graph<Flow>) -> Status {
        if source >= graph.num_nodes() || sink >= graph.num_nodes() || source == sink {
            return Status::BadInput;
        }
        self.residual.build(graph);

        let n = self.residual.num_nodes;
        let mut visited = vec![false; n];
        let mut next_neighbor = vec![0; n];

        loop {
            visited.fill(false);
            next_neighbor.fill(0);
            match self.find_augmenting_path(source, sink, &mut visited, &mut next_neighbor) {
                Some(path) => self.augment(&path),
                None => break,
            }
        }

        self.residual.set_flow(graph);
        Status::Optimal
    }

    // depth-first search with an explicit stack; the path vector doubles as
    // the stack, next_neighbor[u] is the next candidate to try from u
    fn find_augmenting_path(&self, source: usize, sink: usize, visited: &mut [bool], next_neighbor: &mut [usize]) -> Option<Vec<usize>> {
        let mut path = vec![source];
        visited[source] = true;

        while let Some(&v) = path.last() {
            if v == sink {
                return Some(path);
            }

            let mut advanced = false;
            while next_neighbor[v] < self.residual.neighbors(v).len() {
                let w = self.residual.neighbors(v)[next_neighbor[v]];
                next_neighbor[v] += 1;
                if !visited[w] && self.residual.residual_capacity(v, w) > Flow::zero() {
                    visited[w] = true;
                    path.push(w);
                    advanced = true;
                    break;
                }
            }

            if !advanced {
                path.pop();
            }
        }
        None
    }

    fn augment(&mut self, path: &[usize]) {
        let delta = path.windows(2).map(|e| self.residual.residual_capacity(e[0], e[1])).min().unwrap_or(Flow::zero());
        for e in path.windows(2) {
            self.residual.push_flow(e[0], e[1], delta);
        }
    }
}
