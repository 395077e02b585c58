use crate::usecase::event::AppEvent;
use serde_json::json;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

fn app_event_to_json(ev: &AppEvent) -> serde_json::Value {
    match ev {
        AppEvent::PhaseStarted { name } => json!({"type":"phase_started","name":name}),
        AppEvent::PhaseFinished { name } => json!({"type":"phase_finished","name":name}),
        AppEvent::GraphLoaded {
            path,
            vertices,
            edges,
        } => {
            json!({"type":"graph_loaded","path":path,"vertices":vertices,"edges":edges})
        }
        AppEvent::SccComputed {
            path,
            vertices,
            edges,
            components,
            multi_vertex_components,
        } => {
            json!({"type":"scc_computed","path":path,"vertices":vertices,"edges":edges,"components":components,"multi_vertex_components":multi_vertex_components})
        }
        AppEvent::ComponentFound {
            path,
            component,
            members,
        } => {
            json!({"type":"component_found","path":path,"component":component,"members":members})
        }
        AppEvent::Finished { stats } => json!({"type":"finished","stats":stats}),
    }
}

pub fn spawn_ndjson_printer(mut rx: mpsc::Receiver<AppEvent>) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(ev) = rx.recv().await {
            let line = app_event_to_json(&ev);

            // NDJSON to stdout.
            println!("{line}");
        }
    })
}
