//! Demo: Greedy Route Search Over the Nine-Node Reference Map
//!
//! Builds the nine-node road map, runs a full search from node 1 to node 9
//! and streams every step snapshot, discovered path, and diagnostic to
//! stdout plus an append-only log file.
//!
//! What You'll See:
//! 1. Graph construction with duplicate-safe insertion
//! 2. Per-step `best`/`open` snapshots as the walk advances
//! 3. Three discovered paths, cheapest-first greedy order
//! 4. The run ending once every road from the start is exhausted
//!
//! Running This Demo:
//! ```bash
//! cargo run --example shortest_route
//! ```

use miette::{IntoDiagnostic, Result};
use tracing::info;
use tracing_error::ErrorLayer;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use wayfinder::event_bus::{EventBus, FileSink};
use wayfinder::graph::RouteMap;
use wayfinder::search::{SearchConfig, SearchRunner};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer().with_span_events(FmtSpan::CLOSE))
        .with(ErrorLayer::default())
        .init();

    let config = SearchConfig::new(1, 9);
    info!(run_id = %config.run_id, "building the reference road map");

    let map = RouteMap::from_rows(
        config.edge_bias,
        [
            //  source dest weight label
            (1u64, 2u64, 4u64, "Start"),
            (1, 5, 7, "Start"),
            (1, 3, 3, "Start"),
            (2, 4, 1, "A"),
            (3, 1, 3, "B"),
            (3, 5, 4, "B"),
            (4, 6, 1, "C"),
            (4, 5, 3, "C"),
            (5, 7, 5, "D"),
            (5, 9, 3, "D"),
            (5, 6, 1, "D"),
            (6, 8, 2, "E"),
            (6, 9, 4, "E"),
            (8, 6, 2, "G"),
            (8, 9, 3, "G"),
            (9, 9, 0, "Finish"),
        ],
    )
    .into_diagnostic()?;

    let bus = EventBus::default();
    bus.add_sink(FileSink::from_env().into_diagnostic()?);

    let report = SearchRunner::new(&map, config, bus.sender())
        .run()
        .into_diagnostic()?;
    bus.drain();

    for path in &report.paths {
        info!(
            attempt = path.attempt,
            cost = path.total_cost,
            reached_finish = path.reached_finish,
            "discovered path"
        );
    }
    info!(
        attempts = report.attempts,
        steps = report.steps,
        "run finished; no more attempts"
    );
    Ok(())
}
