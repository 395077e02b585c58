//! Loads directed graphs from whitespace-delimited edge-list files and
//! reports their strongly connected components via Tarjan's algorithm.

pub mod domain;
pub mod infrastructure;
pub mod interface;
pub mod usecase;
