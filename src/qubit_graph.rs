pub mod erasure_forest;
pub mod operator_graph;
