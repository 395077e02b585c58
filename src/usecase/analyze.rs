use crate::domain::traits::SccSolver;
use crate::infrastructure::edge_list_loader::read_graph_file;
use crate::usecase::event::AppEvent;
use crate::usecase::stats::AnalyzeStats;
use anyhow::{Context, Result};
use tokio::sync::mpsc;

#[derive(Debug, Clone)]
pub struct GraphReport {
    pub path: String,
    pub vertex_count: usize,
    pub edge_count: usize,
    pub component_count: usize,
    pub components: Vec<Vec<usize>>,
    pub component_of: Vec<usize>,
}

/// Loads each input file in order, computes its strongly connected
/// components through the solver port, and accumulates stats. The first
/// failing file aborts the run; callers that want to skip bad inputs can
/// invoke this per file.
pub async fn analyze_graph_files(
    paths: &[String],
    solver: &dyn SccSolver,
    sink: Option<mpsc::Sender<AppEvent>>,
) -> Result<(Vec<GraphReport>, AnalyzeStats)> {
    let mut stats = AnalyzeStats::default();
    let mut reports = Vec::with_capacity(paths.len());

    for path in paths {
        emit(
            &sink,
            AppEvent::PhaseStarted {
                name: format!("load:{path}"),
            },
        )
        .await;
        let graph = read_graph_file(path)
            .await
            .with_context(|| format!("loading graph: {path}"))?;
        let vertices = graph.vertex_count();
        let edges = graph.edge_count();
        emit(
            &sink,
            AppEvent::GraphLoaded {
                path: path.clone(),
                vertices,
                edges,
            },
        )
        .await;
        emit(
            &sink,
            AppEvent::PhaseFinished {
                name: format!("load:{path}"),
            },
        )
        .await;

        emit(
            &sink,
            AppEvent::PhaseStarted {
                name: format!("scc:{path}"),
            },
        )
        .await;
        let scc = solver.compute_scc(&graph);
        let multi_vertex = scc.components.iter().filter(|c| c.len() > 1).count();
        emit(
            &sink,
            AppEvent::SccComputed {
                path: path.clone(),
                vertices,
                edges,
                components: scc.components.len(),
                multi_vertex_components: multi_vertex,
            },
        )
        .await;
        for (component, members) in scc.components.iter().enumerate() {
            if members.len() > 1 {
                emit(
                    &sink,
                    AppEvent::ComponentFound {
                        path: path.clone(),
                        component,
                        members: members.clone(),
                    },
                )
                .await;
            }
        }
        emit(
            &sink,
            AppEvent::PhaseFinished {
                name: format!("scc:{path}"),
            },
        )
        .await;

        stats.graphs_processed += 1;
        stats.vertices_seen += vertices;
        stats.edges_seen += edges;
        stats.components_found += scc.components.len();
        stats.multi_vertex_components += multi_vertex;

        reports.push(GraphReport {
            path: path.clone(),
            vertex_count: vertices,
            edge_count: edges,
            component_count: scc.components.len(),
            components: scc.components,
            component_of: scc.component_of,
        });
    }

    emit(
        &sink,
        AppEvent::Finished {
            stats: stats.clone(),
        },
    )
    .await;
    Ok((reports, stats))
}

async fn emit(sink: &Option<mpsc::Sender<AppEvent>>, ev: AppEvent) {
    if let Some(tx) = sink {
        let _ = tx.send(ev).await;
    }
}
