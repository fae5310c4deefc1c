use crate::maximum_flow::capacity_scaling::CapacityScaling;
use crate::maximum_flow::ford_fulkerson::FordFulkerson;
use crate::maximum_flow::graph::{AuditError, Graph};
use crate::maximum_flow::preflow_push::PreflowPush;
use crate::maximum_flow::status::Status;
use num_traits::NumAssign;
use std::fmt::{Debug, Display};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CrossCheckError<Flow>
where
    Flow: Display + Debug,
{
    #[error("source or sink index is out of range, or source equals sink")]
    BadInput,
    #[error("maximum-flow values disagree: preflow-push {preflow_push}, ford-fulkerson {ford_fulkerson}, capacity-scaling {capacity_scaling}")]
    Disagreement {
        preflow_push: Flow,
        ford_fulkerson: Flow,
        capacity_scaling: Flow,
    },
    #[error("preflow-push produced an invalid flow matrix: {0}")]
    AuditFailed(#[from] AuditError),
}

/// Solve the same instance with all three algorithms and return the agreed
/// maximum-flow value.
///
/// Each solver runs on its own clone of the graph. A disagreement or an
/// audit failure indicates a defect in one of the solvers and is surfaced
/// as a hard error, never resolved by majority vote.
pub fn cross_check<Flow>(graph: &Graph<Flow>, source: usize, sink: usize) -> Result<Flow, CrossCheckError<Flow>>
where
    Flow: NumAssign + Ord + Copy + Default + Display + Debug,
{
    let mut preflow_push_graph = graph.clone();
    if PreflowPush::default().solve(source, sink, &mut preflow_push_graph) != Status::Optimal {
        return Err(CrossCheckError::BadInput);
    }
    let preflow_push = preflow_push_graph.audit(source, sink)?;

    let mut ford_fulkerson_graph = graph.clone();
    FordFulkerson::default().solve(source, sink, &mut ford_fulkerson_graph);
    let ford_fulkerson = ford_fulkerson_graph.flow_value(source);

    let mut capacity_scaling_graph = graph.clone();
    CapacityScaling::default().solve(source, sink, &mut capacity_scaling_graph);
    let capacity_scaling = capacity_scaling_graph.flow_value(source);

    if preflow_push != ford_fulkerson || preflow_push != capacity_scaling {
        return Err(CrossCheckError::Disagreement { preflow_push, ford_fulkerson, capacity_scaling });
    }

    Ok(preflow_push)
}
