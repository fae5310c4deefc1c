pub mod capacity_scaling;
pub mod cross_check;
pub mod edge_list;
pub mod ford_fulkerson;
pub mod graph;
pub mod preflow_push;
mod residual;
pub mod status;
