// Infrastructure layer: file parsing, async IO, solver implementation, eventing
pub mod edge_list_loader;
pub mod event_ndjson;
pub mod scc_tarjan;
