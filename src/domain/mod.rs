// Domain layer: pure graph model + solver port
pub mod graph;
pub mod traits;
