use crate::maximum_flow::graph::Graph;
use crate::maximum_flow::residual::Residual;
use crate::maximum_flow::status::Status;
use log::{debug, trace};
use num_traits::NumAssign;
use std::collections::VecDeque;

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum PushDirection {
    Forward,
    Backward,
}

/// Highest-label preflow-push maximum-flow solver.
///
/// Maintains a preflow and a height function bounded by `2n`. Active nodes
/// are kept in one bucket per height with a movable high-water index, and a
/// per-node current-arc cursor avoids rescanning neighbors already proven
/// ineligible at the node's present height. Total work is `O(n^2 m)`.
#[derive(Default)]
pub struct PreflowPush<Flow> {
    residual: Residual<Flow>,
    excesses: Vec<Flow>,
    heights: Vec<usize>,
    // bucket h holds the active nodes of height h; 2n buckets suffice
    buckets: Vec<VecDeque<usize>>,
    current_neighbor: Vec<usize>,
    current_max_height: usize,
    pub relabel_count: usize,
}

impl<Flow> PreflowPush<Flow>
where
    Flow: NumAssign + Ord + Copy,
{
    pub fn solve(&mut self, source: usize, sink: usize, graph: &mut Graph<Flow>) -> Status {
        if source >= graph.num_nodes() || sink >= graph.num_nodes() || source == sink {
            return Status::BadInput;
        }
        self.residual.build(graph);
        self.relabel_count = 0;

        self.pre_process(source, sink);

        while let Some(v) = self.find_pushable_node() {
            match self.find_neighbor_for_push(v) {
                Some((direction, w)) => self.push(v, w, direction, source, sink),
                None => self.relabel(v),
            }
        }
        debug!("preflow-push finished after {} relabels", self.relabel_count);

        self.residual.set_flow(graph);
        Status::Optimal
    }

    /// Saturate every edge leaving the source and enqueue the nodes that
    /// received excess. The source starts at height `n`, so height validity
    /// holds immediately: its outgoing edges carry no residual capacity.
    fn pre_process(&mut self, source: usize, sink: usize) {
        let n = self.residual.num_nodes;
        self.excesses = vec![Flow::zero(); n];
        self.heights = vec![0; n];
        self.heights[source] = n;
        self.current_neighbor = vec![0; n];
        self.buckets = vec![VecDeque::new(); 2 * n];
        self.current_max_height = 0;

        for w in 0..n {
            let upper = self.residual.cap[source][w];
            if upper > Flow::zero() && w != source {
                self.residual.flow[source][w] = upper;
                self.excesses[w] += upper;
            }
        }

        for v in 0..n {
            if v != source && v != sink && self.excesses[v] > Flow::zero() {
                self.buckets[0].push_back(v);
            }
        }
    }

    /// Front of the highest non-empty bucket.
    ///
    /// Scans downward from the tracked maximum height. Relabels raise the
    /// tracked maximum by exactly one, so the total scan length is charged
    /// against the total height increase and the call is amortized O(1).
    fn find_pushable_node(&mut self) -> Option<usize> {
        loop {
            if let Some(&v) = self.buckets[self.current_max_height].front() {
                return Some(v);
            }
            if self.current_max_height == 0 {
                return None;
            }
            self.current_max_height -= 1;
        }
    }

    /// First eligible push target of `v` at or after the current-arc cursor.
    ///
    /// The cursor is left on the returned neighbor; it advances past it only
    /// once a push exhausts both directions of the residual arc. Exhausting
    /// the list signals a relabel.
    fn find_neighbor_for_push(&mut self, v: usize) -> Option<(PushDirection, usize)> {
        // no neighbor can sit below height 0
        if self.heights[v] == 0 {
            return None;
        }
        let below = self.heights[v] - 1;

        for i in self.current_neighbor[v]..self.residual.neighbors(v).len() {
            let w = self.residual.neighbors(v)[i];
            if self.heights[w] == below {
                if self.residual.cap[v][w] - self.residual.flow[v][w] > Flow::zero() {
                    self.current_neighbor[v] = i;
                    return Some((PushDirection::Forward, w));
                }
                if self.residual.flow[w][v] > Flow::zero() {
                    self.current_neighbor[v] = i;
                    return Some((PushDirection::Backward, w));
                }
            }
        }

        self.current_neighbor[v] = self.residual.neighbors(v).len();
        None
    }

    // push excess from v to w; v is the front of the bucket at the tracked
    // maximum height, as selected by find_pushable_node
    fn push(&mut self, v: usize, w: usize, direction: PushDirection, source: usize, sink: usize) {
        // the neighbor list holds one entry per node pair, covering both
        // directions of the residual arc, so the cursor may only move past w
        // once neither direction can carry flow anymore
        let (delta, arc_exhausted) = match direction {
            PushDirection::Forward => {
                let remaining = self.residual.cap[v][w] - self.residual.flow[v][w];
                let delta = self.excesses[v].min(remaining);
                self.residual.flow[v][w] += delta;
                (delta, delta == remaining && self.residual.flow[w][v] == Flow::zero())
            }
            PushDirection::Backward => {
                // the forward direction was already spent when the backward
                // direction was selected
                let cancelable = self.residual.flow[w][v];
                let delta = self.excesses[v].min(cancelable);
                self.residual.flow[w][v] -= delta;
                (delta, delta == cancelable)
            }
        };
        trace!("pushing from {} to {} ({:?})", v, w, direction);

        self.excesses[v] -= delta;

        // the source absorbs returned excess and never becomes active, so
        // its excess stays untracked; see also pre_process
        if w != source {
            let was_inactive = self.excesses[w] == Flow::zero();
            self.excesses[w] += delta;
            if was_inactive && w != sink {
                self.buckets[self.heights[w]].push_back(w);
            }
        }

        if self.excesses[v] == Flow::zero() {
            self.buckets[self.current_max_height].pop_front();
        }
        if arc_exhausted {
            self.current_neighbor[v] += 1;
        }
    }

    // raise v by one level; v has positive excess and no eligible neighbor
    fn relabel(&mut self, v: usize) {
        trace!("relabeling {} to height {}", v, self.heights[v] + 1);
        self.relabel_count += 1;

        self.buckets[self.current_max_height].pop_front();
        self.heights[v] += 1;
        self.current_max_height += 1;
        self.buckets[self.current_max_height].push_back(v);
        self.current_neighbor[v] = 0;
    }
}
