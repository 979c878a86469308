//! Qualitative tank model driver
//!
//! Runs the enumerate-filter-label pipeline, reports per-stage counts
//! and renders the resulting state-transition graph as DOT and/or
//! JSON artifacts.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use qr_tank_core::{Pipeline, PipelineConfig, State};

mod dot;

#[derive(Parser)]
#[command(name = "qr-tank")]
#[command(about = "Qualitative reasoning over the hydraulic tank model")]
struct Args {
    /// Write the state-transition graph in DOT format; a *_pruned
    /// variant with unreached nodes removed is written next to it
    #[arg(long)]
    dot: Option<PathBuf>,

    /// Write the full pipeline result as JSON
    #[arg(long)]
    json: Option<PathBuf>,

    /// State to watch on the debug channel, as six comma-separated
    /// symbols (mag,der,mag,der,mag,der); repeatable
    #[arg(long = "watch", value_name = "STATE")]
    watch: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let mut config = PipelineConfig::default();
    for raw in &args.watch {
        let symbols: Vec<&str> = raw.split(',').map(str::trim).collect();
        let state = State::parse(&symbols)
            .with_context(|| format!("invalid watch state '{raw}'"))?;
        config.watch_states.push(state);
    }

    let pipeline = Pipeline::new(config);
    let result = pipeline.run();

    println!(
        "Step 1: generated {} candidate states",
        result.candidate_states
    );
    println!(
        "Step 2: removed {} invalid states, {} valid states remain",
        result.candidate_states - result.states.len(),
        result.states.len()
    );
    println!(
        "Step 3: generated {} candidate transitions",
        result.candidate_transitions
    );
    println!(
        "Step 4: removed {} invalid transitions, {} valid transitions remain",
        result.candidate_transitions - result.transitions.len(),
        result.transitions.len()
    );

    let graph = result.graph();
    let pruned = graph.prune_unreached();
    println!(
        "Step 5: graph has {} nodes and {} edges; {} nodes remain after pruning",
        graph.nodes.len(),
        graph.edges.len(),
        pruned.nodes.len()
    );

    if let Some(path) = &args.dot {
        fs::write(path, dot::to_dot(&graph))
            .with_context(|| format!("writing {}", path.display()))?;

        let pruned_path = dot::pruned_path(path);
        fs::write(&pruned_path, dot::to_dot(&pruned))
            .with_context(|| format!("writing {}", pruned_path.display()))?;

        println!("Wrote {} and {}", path.display(), pruned_path.display());
    }

    if let Some(path) = &args.json {
        let json = serde_json::to_string_pretty(&result)?;
        fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
        println!("Wrote {}", path.display());
    }

    Ok(())
}
