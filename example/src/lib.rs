//! Three-screen demo of a declarative navigation stack: pick a number from a
//! list, look at it, then go back one step or all the way home.

pub mod coordinator;
pub mod screen;
pub mod screens;
pub mod terminal;
pub mod view;

use std::io::{self, BufRead};

use clap::Parser;
use console::Term;
use tracing::{info, warn};

use crate::{
    coordinator::AppCoordinator,
    terminal::{Action, Flow, TerminalHost},
};

const DEFAULT_LOG_FILTER: &str = "error,tessera_navigation=info,app_coordinator=info";

#[derive(Debug, Parser)]
#[command(name = "app-coordinator")]
#[command(version, about = "Declarative navigation stack demo", long_about = None)]
struct Cli {
    /// Comma-separated actions to replay instead of reading stdin (e.g. "1,7,b")
    #[arg(short, long)]
    script: Option<String>,
    /// Tracing filter used when RUST_LOG is not set
    #[arg(long, default_value = DEFAULT_LOG_FILTER)]
    log_filter: String,
}

pub fn desktop_main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_filter);

    let mut coordinator = AppCoordinator::new();
    let mut host = TerminalHost::new(Term::stdout());
    match cli.script {
        Some(script) => {
            let actions = script
                .split(',')
                .map(|action| Ok::<_, io::Error>(action.to_owned()))
                .collect::<Vec<_>>();
            run_session(&mut coordinator, &mut host, actions)
        }
        None => run_session(&mut coordinator, &mut host, io::stdin().lock().lines()),
    }
}

/// Render, read one action, apply the resulting events; repeat until the
/// input ends or the user quits.
pub fn run_session<I>(
    coordinator: &mut AppCoordinator,
    host: &mut TerminalHost,
    actions: I,
) -> anyhow::Result<()>
where
    I: IntoIterator<Item = io::Result<String>>,
{
    let mut actions = actions.into_iter();
    loop {
        if coordinator.needs_render() {
            coordinator.render(host);
            host.draw()?;
        }
        let Some(line) = actions.next() else {
            break;
        };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match line.parse::<Action>().and_then(|action| host.perform(action)) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => break,
            Err(err) => {
                warn!(%err, "rejected input");
                host.notice(&err.to_string())?;
            }
        }
        coordinator.process_events();
    }
    info!(depth = coordinator.stack().len(), "session finished");
    Ok(())
}

fn init_tracing(default_filter: &str) {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match tracing_subscriber::EnvFilter::try_new(default_filter) {
            Ok(filter) => filter,
            Err(_) => tracing_subscriber::EnvFilter::new("error"),
        },
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}
