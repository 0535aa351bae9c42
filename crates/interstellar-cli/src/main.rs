use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use interstellar_lib::{
    collect_stats, load_celestials, load_connections, FlightPath, IngestReport, Starmap,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Interstellar travel planning utilities")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every loaded system and the celestial bodies it owns.
    Details {
        /// Celestial data file.
        #[arg(long)]
        data: PathBuf,
        /// Optional connections file.
        #[arg(long)]
        connections: Option<PathBuf>,
    },
    /// Print each system's directed connection set.
    Connections {
        /// Celestial data file.
        #[arg(long)]
        data: PathBuf,
        /// Connections file.
        #[arg(long)]
        connections: PathBuf,
    },
    /// Print descriptive statistics for the loaded data.
    Stats {
        /// Celestial data file.
        #[arg(long)]
        data: PathBuf,
        /// Optional connections file.
        #[arg(long)]
        connections: Option<PathBuf>,
        /// Emit JSON instead of the text block.
        #[arg(long)]
        json: bool,
    },
    /// Plan a flight path through the named systems and validate it.
    Route {
        /// Celestial data file.
        #[arg(long)]
        data: PathBuf,
        /// Connections file.
        #[arg(long)]
        connections: PathBuf,
        /// System names in visit order. Unknown names are reported and
        /// skipped, never added to the path.
        #[arg(required = true)]
        systems: Vec<String>,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Details { data, connections } => handle_details(&data, connections.as_deref()),
        Command::Connections { data, connections } => handle_connections(&data, &connections),
        Command::Stats {
            data,
            connections,
            json,
        } => handle_stats(&data, connections.as_deref(), json),
        Command::Route {
            data,
            connections,
            systems,
        } => handle_route(&data, &connections, &systems),
    }
}

fn handle_details(data: &Path, connections: Option<&Path>) -> Result<()> {
    let map = load_map(data, connections)?;
    if map.is_empty() {
        println!("No data loaded.");
        return Ok(());
    }
    for system in map.iter() {
        println!("{}", system.describe());
    }
    Ok(())
}

fn handle_connections(data: &Path, connections: &Path) -> Result<()> {
    let map = load_map(data, Some(connections))?;
    if map.is_empty() {
        println!("No connections loaded.");
        return Ok(());
    }
    for (id, system) in map.iter().enumerate() {
        println!("{} -> {}", system.name(), map.connections_string(id));
    }
    Ok(())
}

fn handle_stats(data: &Path, connections: Option<&Path>, json: bool) -> Result<()> {
    let map = load_map(data, connections)?;
    let stats = collect_stats(&map);
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&stats).context("failed to serialize stats")?
        );
    } else {
        println!("{stats}");
    }
    Ok(())
}

fn handle_route(data: &Path, connections: &Path, systems: &[String]) -> Result<()> {
    let map = load_map(data, Some(connections))?;

    let mut path = FlightPath::new();
    for name in systems {
        match path.append(&map, name) {
            Ok(_) => println!("{name} added to path."),
            Err(error) => {
                eprintln!("{error}");
                println!("Invalid system: Nothing added to path.");
            }
        }
    }

    println!();
    println!("Planned Path:");
    if path.is_empty() {
        println!("(empty path)");
    } else {
        println!("{}", path.route_string(&map));
        println!();
        println!("Path Connections:");
        println!("{}", path.connections_string(&map));
    }

    println!();
    if path.is_valid(&map) {
        println!("Path is valid, ready to explore!");
    } else {
        println!("Invalid path, route not connected.");
    }
    Ok(())
}

/// Load the celestial file and, when given, the connections file.
fn load_map(data: &Path, connections: Option<&Path>) -> Result<Starmap> {
    let mut map = Starmap::new();

    let file = File::open(data)
        .with_context(|| format!("failed to open celestial data file {}", data.display()))?;
    let report = load_celestials(BufReader::new(file), &mut map)
        .with_context(|| format!("failed to read celestial data from {}", data.display()))?;
    report_skipped_lines(&report);

    if let Some(path) = connections {
        let file = File::open(path)
            .with_context(|| format!("failed to open connections file {}", path.display()))?;
        load_connections(BufReader::new(file), &mut map)
            .with_context(|| format!("failed to read connections from {}", path.display()))?;
    }

    Ok(map)
}

fn report_skipped_lines(report: &IngestReport) {
    for error in &report.errors {
        eprintln!("{error}");
    }
    if !report.is_clean() {
        eprintln!("Skipped {} bad data line(s).", report.errors.len());
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
