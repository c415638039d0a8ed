//! smallcity — end-to-end demo of the citygraph workspace.
//!
//! Builds a small downtown grid, runs a scripted list of query commands
//! against it and prints the paths and render artifacts they produced.
//!
//! ```text
//! cargo run -p smallcity -- [config.json] [index.dot]
//! RUST_LOG=debug cargo run -p smallcity
//! ```

mod network;

use std::time::Instant;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use cg_core::{BoundingBox, CityConfig};
use cg_query::{Artifact, Command, Face, QueryProcessor};

use network::{COLS, ROWS, build_city, corner};

// ── Script ────────────────────────────────────────────────────────────────────

fn resolve(register: &str, block: &str, face: Face, number: f64) -> Command {
    Command::ResolveAddress { register: register.into(), block: block.into(), face, number }
}

fn build(name: &str, origin: &str, destination: &str) -> Command {
    Command::BuildPath { name: name.into(), origin: origin.into(), destination: destination.into() }
}

fn show(name: &str, shortest: &str, fastest: &str) -> Command {
    Command::ShowPath { name: name.into(), shortest_color: shortest.into(), fastest_color: fastest.into() }
}

fn script() -> Result<Vec<Command>> {
    Ok(vec![
        resolve("home", "B00", Face::East, 0.0),
        resolve("work", "B21", Face::West, 160.0),
        resolve("shop", "B99", Face::North, 0.0), // unknown block: logged and skipped
        build("commute", "home", "work"),
        show("commute", "red", "blue"),
        Command::CloseRegion { region: 1, area: BoundingBox::new(180.0, 180.0, 40.0, 40.0)? },
        build("detour", "home", "work"),
        show("detour", "orange", "green"),
        resolve("mid", "B11", Face::South, 0.0),
        build("errand", "work", "mid"),
        Command::JoinPaths { name: "back".into(), first: "errand".into(), second: "commute".into() },
        Command::ReopenRegion { region: 1 },
        Command::ReopenRegion { region: 1 }, // already reopened
    ])
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => {
            let text = std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
            let config = serde_json::from_str::<CityConfig>(&text).with_context(|| format!("parsing {path}"))?;
            tracing::info!(%path, "configuration loaded");
            config
        }
        None => CityConfig::default(),
    };
    config.validate()?;
    let dot_path = args.next();

    println!("=== smallcity — citygraph demo ===");
    println!("Grid: {COLS} × {ROWS} corners  |  Treap seed: {}", config.treap.seed);
    println!();

    // 1. City.
    let mut city = build_city(config.treap.clone())?;
    let ring: Vec<String> = (0..COLS).map(|c| corner(c, 0)).chain((1..ROWS).map(|r| corner(COLS - 1, r))).collect();
    city.graph_mut().create_subgraph("ring", &ring, true)?;
    println!(
        "Street graph: {} corners, {} street records ({} on the ring road)",
        city.graph().vertex_count(),
        city.graph().edge_count(),
        city.graph().subgraph_edges("ring")?.len(),
    );
    println!("Spatial index: {} entries, height {}", city.index().len(), city.index().height());
    println!();

    // 2. Queries.
    let mut q = QueryProcessor::new(city, config.query.clone())?;
    let t0 = Instant::now();
    let summary = q.run(script()?);
    let elapsed = t0.elapsed();
    println!(
        "Ran {} commands in {:.3} ms ({} failed)",
        summary.succeeded + summary.failed,
        elapsed.as_secs_f64() * 1e3,
        summary.failed,
    );
    println!();

    // 3. Paths.
    println!("{:<16} {:<14} {:>8} {:>10}", "Path", "Mode", "Corners", "Cost");
    println!("{}", "-".repeat(51));
    let suffix = &config.query.fast_suffix;
    for base in ["commute", "detour", "errand", "back"] {
        for name in [base.to_owned(), format!("{base}{suffix}")] {
            let Some(path) = q.path(&name) else { continue };
            let cost = path.cost.map_or_else(|| "-".to_owned(), |c| format!("{c:.1}"));
            println!("{:<16} {:<14} {:>8} {:>10}", name, format!("{:?}", path.mode), path.points.len(), cost);
        }
    }
    println!();

    // 4. Artifacts.
    let artifacts = q.take_artifacts();
    println!("Render artifacts: {}", artifacts.len());
    for artifact in &artifacts {
        match artifact {
            Artifact::Path(p) => {
                println!("  path   {:<14} colour {}", p.name, p.color.as_deref().unwrap_or("default"))
            }
            Artifact::NoPathLine { from, to } => println!("  nopath {from} -> {to}"),
            Artifact::RegisterTag { at, label } => println!("  tag    {label:<14} at {at}"),
            Artifact::ClosedRegion(area) => println!("  closed {area}"),
        }
    }

    // 5. Optional index dump.
    if let Some(path) = dot_path {
        q.city().index().save_dot(&path).with_context(|| format!("writing {path}"))?;
        println!();
        println!("Spatial index written to {path}");
    }

    Ok(())
}
