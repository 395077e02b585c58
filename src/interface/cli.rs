use crate::infrastructure::event_ndjson::spawn_ndjson_printer;
use crate::infrastructure::scc_tarjan::TarjanSccSolver;
use crate::usecase::analyze::{analyze_graph_files, GraphReport};
use crate::usecase::event::AppEvent;
use anyhow::{anyhow, Result};
use std::env;
use tokio::sync::mpsc;

pub async fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    run_with_args(&args).await
}

pub async fn run_with_args(args: &[String]) -> Result<()> {
    let cmd = Cli::parse(args)?;

    match cmd {
        Cli::GraphsAnalyze {
            inputs,
            emit_events,
            all,
        } => {
            let (tx, rx) = mpsc::channel::<AppEvent>(1024);
            let printer = if emit_events {
                Some(spawn_ndjson_printer(rx))
            } else {
                drop(rx);
                None
            };

            let solver = TarjanSccSolver;

            let (reports, stats) = analyze_graph_files(&inputs, &solver, Some(tx)).await?;

            if let Some(handle) = printer {
                handle.await.ok();
            }

            for report in &reports {
                print_report(report, all);
            }

            eprintln!(
                "summary: graphs_processed={} vertices_seen={} edges_seen={} components_found={} multi_vertex_components={}",
                stats.graphs_processed,
                stats.vertices_seen,
                stats.edges_seen,
                stats.components_found,
                stats.multi_vertex_components
            );

            Ok(())
        }
    }
}

fn print_report(report: &GraphReport, all: bool) {
    eprintln!(
        "{}: {} vertices, {} edges, {} strongly connected components",
        report.path, report.vertex_count, report.edge_count, report.component_count
    );
    for (component, members) in report.components.iter().enumerate() {
        if !all && members.len() < 2 {
            continue;
        }
        let ids: Vec<String> = members.iter().map(|v| v.to_string()).collect();
        eprintln!("  component {component}: {}", ids.join(" "));
    }
}

#[derive(Debug)]
enum Cli {
    GraphsAnalyze {
        inputs: Vec<String>,
        emit_events: bool,
        all: bool,
    },
}

impl Cli {
    fn parse(args: &[String]) -> Result<Self> {
        // Expected:
        // <bin> graphs analyze --in/--input <graph.txt> [--in <graph.txt> ...] [--emit-events] [--all]
        if args.len() < 3 {
            return Err(anyhow!(usage()));
        }

        if args[1] != "graphs" {
            return Err(anyhow!(usage()));
        }

        match args[2].as_str() {
            "analyze" => Self::parse_analyze(args),
            "-h" | "--help" => Err(anyhow!(usage())),
            _ => Err(anyhow!(usage())),
        }
    }

    fn parse_analyze(args: &[String]) -> Result<Self> {
        let mut inputs: Vec<String> = Vec::new();
        let mut emit_events = false;
        let mut all = false;

        let mut i = 3;
        while i < args.len() {
            match args[i].as_str() {
                "--in" | "--input" => {
                    i += 1;
                    match args.get(i) {
                        Some(path) => inputs.push(path.clone()),
                        None => {
                            return Err(anyhow!(format!(
                                "missing path after --in/--input\n\n{}",
                                usage()
                            )))
                        }
                    }
                }
                "--emit-events" => {
                    emit_events = true;
                }
                "--all" => {
                    all = true;
                }
                "-h" | "--help" => return Err(anyhow!(usage())),
                other => return Err(anyhow!(format!("unknown arg: {other}\n\n{}", usage()))),
            }
            i += 1;
        }

        if inputs.is_empty() {
            return Err(anyhow!(format!("missing --in/--input\n\n{}", usage())));
        }

        Ok(Cli::GraphsAnalyze {
            inputs,
            emit_events,
            all,
        })
    }
}

fn usage() -> &'static str {
    "Usage:\n  graphs analyze --in/--input <graph.txt> [--in <graph.txt> ...] [--emit-events] [--all]\n\nInput:\n  Each graph file starts with a `<vertex-count> <edge-count>` header line, followed by whitespace-separated `from to` edge pairs (one or more pairs per line).\n\nOutput:\n  Per graph, the component count and the member ids of every component with more than one vertex are written to stderr; --all also lists singleton components.\n\nEvents:\n  If --emit-events is set, NDJSON events are written to stdout; reports and the summary go to stderr."
}
