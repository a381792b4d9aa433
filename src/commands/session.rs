use crate::domain::models::Region;
use crate::services::dashboard::Dashboard;
use crate::services::render::status_line;
use std::rc::Rc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::task::{spawn_local, JoinHandle};
use tracing::{debug, warn};

const HELP: &str = "\
commands:
  init <path>    record a baseline for <path>
  check [path]   check <path>, or the last baselined folder
  status         show both status lines
  wait           wait for requests still in flight
  help           this text
  quit           wait for in-flight requests and exit";

#[derive(Debug, PartialEq, Eq)]
pub enum SessionCommand {
    /// Raw argument; blank is rejected by the workflow, not here.
    Init(String),
    Check(Option<String>),
    Status,
    Wait,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

pub fn parse_session_command(line: &str) -> SessionCommand {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((w, r)) => (w, r.trim()),
        None => (line, ""),
    };
    match word {
        "" => SessionCommand::Empty,
        "init" => SessionCommand::Init(rest.to_string()),
        "check" if rest.is_empty() => SessionCommand::Check(None),
        "check" => SessionCommand::Check(Some(rest.to_string())),
        "status" => SessionCommand::Status,
        "wait" => SessionCommand::Wait,
        "help" | "?" => SessionCommand::Help,
        "quit" | "exit" => SessionCommand::Quit,
        other => SessionCommand::Unknown(other.to_string()),
    }
}

/// Reads commands until `quit` or end of input. Each request is its own local
/// task, so a slow check does not block typing the next command.
pub async fn run_session(dashboard: Rc<Dashboard>) -> anyhow::Result<()> {
    let probe = spawn_local({
        let d = Rc::clone(&dashboard);
        async move {
            d.probe_health().await;
        }
    });

    let mut in_flight: Vec<JoinHandle<()>> = Vec::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        in_flight.retain(|h| !h.is_finished());
        match parse_session_command(&line) {
            SessionCommand::Init(path) => {
                let d = Rc::clone(&dashboard);
                in_flight.push(spawn_local(async move {
                    let _ = d.baseline.initialize_baseline(&path).await;
                }));
            }
            SessionCommand::Check(path) => {
                if let Some(path) = path {
                    dashboard.integrity.target().set(&path);
                }
                let d = Rc::clone(&dashboard);
                in_flight.push(spawn_local(async move {
                    let _ = d.integrity.check_current_target().await;
                }));
            }
            SessionCommand::Status => print_status(&dashboard),
            SessionCommand::Wait => drain(&mut in_flight).await,
            SessionCommand::Help => println!("{}", HELP),
            SessionCommand::Quit => break,
            SessionCommand::Empty => {}
            SessionCommand::Unknown(word) => {
                println!("unknown command: {} (try 'help')", word)
            }
        }
    }

    drain(&mut in_flight).await;
    probe.abort();
    Ok(())
}

async fn drain(in_flight: &mut Vec<JoinHandle<()>>) {
    debug!(pending = in_flight.len(), "waiting for in-flight requests");
    for handle in in_flight.drain(..) {
        if let Err(err) = handle.await {
            warn!(error = %err, "request task failed");
        }
    }
}

fn print_status(dashboard: &Dashboard) {
    let regions = [
        (Region::Baseline, dashboard.baseline.status().current()),
        (Region::Check, dashboard.integrity.status().current()),
    ];
    for (region, status) in regions {
        let line = status_line(region, &status)
            .unwrap_or_else(|| format!("[{}] idle", region.label()));
        println!("{}", line);
    }
    let target = dashboard.integrity.target().get();
    if !target.is_empty() {
        println!("[check] target: {}", target);
    }
}
