//! arena: a milling swarm in a walled square.
//!
//! Each robot carries a single binary sensor: a ray-like cone straight ahead.
//! With nothing in view it circles one way; with a neighbor in view it turns
//! the other.  That rule alone is enough for the swarm to settle into a
//! rotating ring, which the `group_rotation` and `radial_variance` columns of
//! `behaviors.csv` make visible.
//!
//! ```text
//! cargo run -p arena -- [config.json] [output-dir]
//! RUST_LOG=swarm_sim=debug cargo run -p arena
//! ```
//!
//! `config.json` holds any subset of `WorldConfig` fields.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use swarm_agent::{AgentEnvironment, AgentState, Controller, DiffDriveAgent, DiffDriveConfig, PopulationBuilder, place_uniform};
use swarm_behavior::{
    AgentsAtGoal, AngularMomentum, AverageSpeed, DistanceToGoal, GroupRotation, RadialVariance, Scatter, TotalCollisions,
};
use swarm_core::{Aabb, SimRng, Vec2, WorldConfig};
use swarm_output::{CsvWriter, SimOutputObserver};
use swarm_sim::WorldBuilder;
use swarm_spatial::Goal;

// ── Constants ─────────────────────────────────────────────────────────────────

const AGENT_COUNT:  usize = 24;
const AGENT_RADIUS: f64   = 5.0;
const SENSE_RANGE:  f64   = 120.0;
/// Half-angle of the sensing cone, radians.
const SENSE_HALF_ANGLE: f64 = 0.08;

// ── Controller ────────────────────────────────────────────────────────────────

/// Two-state reactive controller driven by one forward-facing binary sensor.
struct BinarySensor {
    idle:     (f64, f64),
    detected: (f64, f64),
}

impl BinarySensor {
    fn sees(&self, state: &AgentState, env: &dyn AgentEnvironment) -> bool {
        let facing = state.frontal_point();
        env.neighbors_within(state.position, SENSE_RANGE)
            .into_iter()
            .filter_map(|id| env.agent(id))
            .any(|other| {
                let to = other.position - state.position;
                let along = to.dot(facing);
                // Cone widened by the neighbor's body.
                along > 0.0 && facing.cross(to).abs() <= along * SENSE_HALF_ANGLE.tan() + other.radius
            })
    }
}

impl Controller for BinarySensor {
    fn control(&mut self, state: &AgentState, env: &mut dyn AgentEnvironment) -> (f64, f64) {
        if self.sees(state, env) { self.detected } else { self.idle }
    }
}

fn milling_agent() -> DiffDriveAgent {
    let config = DiffDriveConfig {
        radius:    AGENT_RADIUS,
        max_speed: 12.0,
        ..DiffDriveConfig::default()
    };
    let controller = BinarySensor { idle: (8.0, 0.6), detected: (8.0, -0.6) };
    DiffDriveAgent::new(Vec2::ZERO, 0.0, config, controller)
}

// ── Configuration ─────────────────────────────────────────────────────────────

fn load_config(path: Option<&Path>) -> Result<WorldConfig> {
    let Some(path) = path else {
        return Ok(WorldConfig {
            width:                 500.0,
            height:                500.0,
            padding:               10.0,
            seed:                  42,
            total_ticks:           2_000,
            tick_duration_secs:    0.1,
            detectable_walls:      true,
            output_interval_ticks: 50,
            ..WorldConfig::default()
        });
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = std::env::args().skip(1);
    let config_path = args.next().map(PathBuf::from);
    let out_dir = args.next().map(PathBuf::from).unwrap_or_else(|| PathBuf::from("output/arena"));

    let config = load_config(config_path.as_deref())?;
    info!(?config, "configuration loaded");

    // 1. Population, scattered uniformly with the world's own stream.
    let mut rng = SimRng::new(config.seed);
    let mut population = PopulationBuilder::new()
        .spawn(AGENT_COUNT, |_| milling_agent())
        .build();
    let p = config.padding;
    let bounds = Aabb::new(Vec2::new(p, p), Vec2::new(config.width - p, config.height - p));
    place_uniform(&mut population, bounds, &mut rng);

    // 2. World.
    let center = Vec2::new(config.width / 2.0, config.height / 2.0);
    let mut world = WorldBuilder::new(config.clone())
        .agents(population)
        .goals(vec![Goal::cylinder(center, 15.0)])
        .behavior(AverageSpeed::default())
        .behavior(AngularMomentum::default())
        .behavior(RadialVariance::default())
        .behavior(Scatter::default())
        .behavior(GroupRotation::default())
        .behavior(TotalCollisions::default())
        .behavior(AgentsAtGoal::default())
        .behavior(DistanceToGoal::default())
        .rng(rng)
        .build()?;

    // 3. Output.
    std::fs::create_dir_all(&out_dir).with_context(|| format!("creating {}", out_dir.display()))?;
    let writer = CsvWriter::new(&out_dir)?;
    let mut obs = SimOutputObserver::new(writer, &config);

    // 4. Run.
    let t0 = Instant::now();
    world.run(&mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.take_error() {
        warn!(error = %e, "output incomplete");
    }

    // 5. Summary.
    println!("Simulation complete in {:.3} s ({})", elapsed.as_secs_f64(), world.clock);
    println!("{:<20} {:>12}", "Behavior", "Average");
    println!("{}", "-".repeat(33));
    for (behavior, value) in world.behaviors().iter().zip(world.behavior_vector()) {
        println!("{:<20} {:>12.4}", behavior.name(), value);
    }
    println!("Output written to {}", out_dir.display());

    Ok(())
}
