use crate::maximum_flow::graph::Graph;
use crate::maximum_flow::residual::Residual;
use crate::maximum_flow::status::Status;
use num_traits::NumAssign;

/// Capacity-scaling augmenting-path maximum-flow solver.
///
/// Augments only along residual edges of capacity at least `delta`, where
/// `delta` starts at the largest power of two not exceeding the source's
/// largest outgoing capacity and halves between phases. Used as a second
/// reference to cross-check the preflow-push solver.
#[derive(Default)]
pub struct CapacityScaling<Flow> {
    residual: Residual<Flow>,
}

impl<Flow> CapacityScaling<Flow>
where
    Flow: NumAssign + Ord + Copy,
{
    pub fn solve(&mut self, source: usize, sink: usize, graph: &mut Graph<Flow>) -> Status {
        if source >= graph.num_nodes() || sink >= graph.num_nodes() || source == sink {
            return Status::BadInput;
        }
        self.residual.build(graph);
        let two = Flow::one() + Flow::one();

        let n = self.residual.num_nodes;
        let mut visited = vec![false; n];
        let mut next_neighbor = vec![0; n];

        let s_max = (0..n).map(|w| self.residual.cap[source][w]).max().unwrap_or(Flow::zero());
        let mut delta = Flow::one();
        while delta * two <= s_max {
            delta *= two;
        }

        // integer halving ends the loop once delta reaches zero
        while delta >= Flow::one() {
            loop {
                visited.fill(false);
                next_neighbor.fill(0);
                match self.find_augmenting_path(source, sink, delta, &mut visited, &mut next_neighbor) {
                    Some(path) => self.augment(&path),
                    None => break,
                }
            }
            delta /= two;
        }

        self.residual.set_flow(graph);
        Status::Optimal
    }

    // same explicit-stack search as the plain solver, restricted to residual
    // edges of capacity at least delta
    fn find_augmenting_path(&self, source: usize, sink: usize, delta: Flow, visited: &mut [bool], next_neighbor: &mut [usize]) -> Option<Vec<usize>> {
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
                if !visited[w] && self.residual.residual_capacity(v, w) >= delta {
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
