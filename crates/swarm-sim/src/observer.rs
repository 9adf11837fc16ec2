//! Simulation observer trait for progress reporting and data collection.

use swarm_agent::Population;
use swarm_behavior::Behavior;
use swarm_core::Tick;

/// Callbacks invoked by [`World::run`][crate::World::run] at key points in
/// the tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, tick: Tick, live: usize) {
///         if tick.0 % self.interval == 0 {
///             println!("tick {tick}: {live} agents");
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called before the world steps into `tick`.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after every agent has stepped and every behavior has been
    /// recalculated for `tick`.  `live` is the population size.
    fn on_tick_end(&mut self, _tick: Tick, _live: usize) {}

    /// Called at snapshot intervals (every `config.output_interval_ticks`
    /// ticks) with read-only access to the agents and the behavior observers.
    fn on_snapshot(
        &mut self,
        _tick:       Tick,
        _population: &Population,
        _behaviors:  &[Box<dyn Behavior>],
    ) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
