//! The `Behavior` trait: the observer extension point.

use crate::{History, WorldContext};

/// A per-tick metric accumulator attached to a world.
///
/// Implementors keep their values in a [`History`]; the provided methods turn
/// that into the current value and the windowed average used for the
/// world's behavior vector.
///
/// Observers are `Send` so the world can recalculate them in parallel when
/// built with the `parallel` feature.
///
/// # Example
///
/// ```rust
/// use swarm_behavior::{Behavior, History, WorldContext};
///
/// struct Population(History);
///
/// impl Behavior for Population {
///     fn name(&self) -> &str { "population" }
///     fn reset(&mut self) { self.0.clear(); }
///     fn calculate(&mut self, ctx: &WorldContext<'_>) {
///         self.0.push(ctx.population.len() as f64);
///     }
///     fn history(&self) -> &History { &self.0 }
/// }
/// ```
pub trait Behavior: Send + 'static {
    /// Column name for output files and the behavior vector.
    fn name(&self) -> &str;

    /// Forget everything recorded so far.
    fn reset(&mut self);

    /// Called once when the world is built, after `reset`.  Observers that
    /// need fixed facts about the world (population size, goal layout)
    /// capture them here.
    fn attach(&mut self, _ctx: &WorldContext<'_>) {}

    /// Record one value for the tick that just completed.
    fn calculate(&mut self, ctx: &WorldContext<'_>);

    fn history(&self) -> &History;

    /// The value recorded by the most recent `calculate`.
    fn current(&self) -> Option<f64> {
        self.history().latest()
    }

    /// `(name, mean over the history window)`.
    fn out_average(&self) -> (&str, f64) {
        (self.name(), self.history().average())
    }
}
