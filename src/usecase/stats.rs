use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct AnalyzeStats {
    pub graphs_processed: usize,
    pub vertices_seen: usize,
    pub edges_seen: usize,
    pub components_found: usize,
    pub multi_vertex_components: usize,
}
