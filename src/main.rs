//! Dashboard shell (headless)
//!
//! Starts the navigation shell against an in-memory history and host
//! document, applies the requested navigations and prints what is mounted
//! after each one.
//!
//! ```text
//! dashboard-shell --navigate /logs --navigate /unknown
//! dashboard-shell --config shell.toml --json --watch
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;

use dashboard_shell::config::{load_config, ShellConfig};
use dashboard_shell::history::MemoryHistory;
use dashboard_shell::host::MemoryHost;
use dashboard_shell::lifecycle::{signals, startup, Shutdown};
use dashboard_shell::observability::logging::init_logging;

#[derive(Parser)]
#[command(name = "dashboard-shell")]
#[command(about = "Headless runner for the dashboard navigation shell", long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Initial location.
    #[arg(short, long, default_value = "/")]
    initial: String,

    /// Location to navigate to after startup (repeatable).
    #[arg(short, long)]
    navigate: Vec<String>,

    /// Print the mounted view as JSON instead of HTML.
    #[arg(long)]
    json: bool,

    /// Keep the navigation loop running until Ctrl+C.
    #[arg(long)]
    watch: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ShellConfig::default(),
    };
    init_logging(&config.observability);

    tracing::info!("dashboard-shell v{} starting", env!("CARGO_PKG_VERSION"));

    let element_id = config.mount.element_id.clone();
    let history = Arc::new(MemoryHistory::new(cli.initial.clone()));
    let host = Arc::new(MemoryHost::with_elements([element_id.clone()]));

    let mut app = startup::start(&config, history, host.clone())?;
    print_mounted(&host, &element_id, cli.json)?;

    for href in &cli.navigate {
        let state = app.navigate(href)?;
        tracing::info!(path = %state.path, "Navigated");
        print_mounted(&host, &element_id, cli.json)?;
    }

    if cli.watch {
        let shutdown = Shutdown::new();
        tokio::spawn(signals::shutdown_on_ctrl_c(shutdown.clone()));
        app.run(shutdown.subscribe()).await?;
    } else {
        app.stop()?;
    }

    tracing::info!("Shutdown complete");
    Ok(())
}

fn print_mounted(host: &MemoryHost, element_id: &str, json: bool) -> Result<(), serde_json::Error> {
    let Some(view) = host.content(element_id) else {
        println!("(nothing mounted)");
        return Ok(());
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        println!("{}", view.to_html());
    }
    Ok(())
}
