use crate::usecase::stats::AnalyzeStats;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum AppEvent {
    PhaseStarted {
        name: String,
    },
    PhaseFinished {
        name: String,
    },

    GraphLoaded {
        path: String,
        vertices: usize,
        edges: usize,
    },

    SccComputed {
        path: String,
        vertices: usize,
        edges: usize,
        components: usize,
        multi_vertex_components: usize,
    },

    ComponentFound {
        path: String,
        component: usize,
        members: Vec<usize>,
    },

    Finished {
        stats: AnalyzeStats,
    },
}
