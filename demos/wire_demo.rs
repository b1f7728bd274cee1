//! Snap a few cursor positions and print the wires between them.
//!
//! Run with: cargo run --example wire_demo --features tracing -- 10 2

use glam::dvec2;
use gridroute::{CentreSnap, PlacementConfig, RoutingMode};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let grid_size = args.next().and_then(|s| s.parse().ok()).unwrap_or(10.0);
    let termination = args.next().and_then(|s| s.parse().ok()).unwrap_or(2.0);

    let config = match PlacementConfig::try_new(grid_size, termination) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {:?}", miette::Report::new(e));
            std::process::exit(1);
        }
    };
    let snapper = config.snapper();
    let router = config.router();

    let cursor = [dvec2(3.0, 2.0), dvec2(47.0, 18.0), dvec2(52.0, 81.0), dvec2(-14.0, 66.0)];
    let points: Vec<_> = cursor
        .iter()
        .map(|&p| snapper.snap_point(p, CentreSnap::NONE))
        .collect();

    for pair in points.windows(2) {
        let (prev, curr) = (pair[0], pair[1]);
        for mode in [RoutingMode::StraightDiagonalHybrid, RoutingMode::Orthogonal] {
            println!("{prev} -> {curr} [{mode}]");
            println!("  simple:     {}", router.route(prev, curr, mode));
            println!("  terminated: {}", router.route_terminated(prev, curr, mode));
        }
    }
}
