//! Fluent builder for constructing a [`World`].

use swarm_agent::Population;
use swarm_behavior::{Behavior, WorldContext};
use swarm_core::{SimRng, WorldConfig};
use swarm_spatial::{Goal, Wall, border_walls};
use tracing::info;

use crate::{SimError, SimResult, World};

/// Fluent builder for [`World`].
///
/// # Required inputs
///
/// - [`WorldConfig`]: arena size, padding, seed, run length
///
/// # Optional inputs (have defaults)
///
/// | Method           | Default                          |
/// |------------------|----------------------------------|
/// | `.agents(p)`     | Empty population                 |
/// | `.walls(v)`      | No walls                         |
/// | `.goals(v)`      | No goals                         |
/// | `.behavior(b)`   | No observers                     |
/// | `.rng(r)`        | `SimRng::new(config.seed)`       |
///
/// # Example
///
/// ```rust,ignore
/// let mut world = WorldBuilder::new(config)
///     .agents(population)
///     .goals(vec![Goal::cylinder(Vec2::new(250.0, 250.0), 20.0)])
///     .behavior(AverageSpeed::default())
///     .build()?;
/// world.run(&mut NoopObserver)?;
/// ```
pub struct WorldBuilder {
    config:     WorldConfig,
    population: Population,
    walls:      Vec<Wall>,
    goals:      Vec<Goal>,
    behaviors:  Vec<Box<dyn Behavior>>,
    rng:        Option<SimRng>,
}

impl WorldBuilder {
    pub fn new(config: WorldConfig) -> Self {
        Self {
            config,
            population: Population::new(),
            walls:      Vec::new(),
            goals:      Vec::new(),
            behaviors:  Vec::new(),
            rng:        None,
        }
    }

    pub fn agents(mut self, population: Population) -> Self {
        self.population = population;
        self
    }

    pub fn walls(mut self, walls: Vec<Wall>) -> Self {
        self.walls = walls;
        self
    }

    pub fn goals(mut self, goals: Vec<Goal>) -> Self {
        self.goals = goals;
        self
    }

    /// Attach one observer.  The behavior vector lists observers in the
    /// order they were attached.
    pub fn behavior(mut self, behavior: impl Behavior) -> Self {
        self.behaviors.push(Box::new(behavior));
        self
    }

    pub fn behaviors(mut self, behaviors: Vec<Box<dyn Behavior>>) -> Self {
        self.behaviors.extend(behaviors);
        self
    }

    /// Continue an existing stream instead of seeding a fresh one, so draws
    /// made while placing agents stay part of the same sequence.
    pub fn rng(mut self, rng: SimRng) -> Self {
        self.rng = Some(rng);
        self
    }

    /// Validate inputs, add border walls if requested, attach observers, and
    /// return a world at tick 0.
    pub fn build(self) -> SimResult<World> {
        self.config
            .validate()
            .map_err(|e| SimError::Config(e.to_string()))?;

        // Every agent must be physically well formed before the first step;
        // the step loop never re-checks.
        for state in self.population.states() {
            if !state.is_well_formed() {
                return Err(SimError::ContractViolation(format!(
                    "{} has radius {} at {}",
                    state.id, state.radius, state.position
                )));
            }
        }

        let mut walls = self.walls;
        if self.config.detectable_walls {
            walls.extend(border_walls(&self.config)?);
        }

        let mut behaviors = self.behaviors;
        let clock = self.config.make_clock();
        {
            let ctx = WorldContext::new(clock.current_tick, &self.config, &self.population, &self.goals);
            for behavior in &mut behaviors {
                behavior.reset();
                behavior.attach(&ctx);
            }
        }

        let rng = self.rng.unwrap_or_else(|| SimRng::new(self.config.seed));

        info!(
            width     = self.config.width,
            height    = self.config.height,
            agents    = self.population.len(),
            walls     = walls.len(),
            goals     = self.goals.len(),
            behaviors = behaviors.len(),
            seed      = self.config.seed,
            "world built"
        );

        Ok(World {
            config:     self.config,
            clock,
            population: self.population,
            walls,
            goals:      self.goals,
            behaviors,
            rng,
        })
    }
}
