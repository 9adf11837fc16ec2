//! Whole-swarm kinematic metrics.
//!
//! With `N` agents at positions `rᵢ` moving with velocities `vᵢ`, centroid
//! `μ`, and mean body radius `R`:
//!
//! | Metric             | Value                                                  |
//! |--------------------|--------------------------------------------------------|
//! | `AverageSpeed`     | `(1/N) Σ |vᵢ|`                                         |
//! | `AngularMomentum`  | `(1/(N·R)) Σ vᵢ × (rᵢ − μ)`                            |
//! | `RadialVariance`   | `(1/(N·R²)) Σ (|rᵢ − μ| − d̄)²`, `d̄` the mean of `|rᵢ − μ|` |
//! | `Scatter`          | `(1/(N·R²)) Σ |rᵢ − μ|²`                               |
//! | `GroupRotation`    | `(1/N) Σ (vᵢ × (rᵢ − μ)) / (|vᵢ|·|rᵢ − μ|)`            |
//!
//! An empty population records 0.

use swarm_core::Vec2;

use crate::{Behavior, History, WorldContext};

/// Default history window for the metrics in this module.
pub const DEFAULT_WINDOW: usize = 5;

/// Shared skeleton of every metric here: a name, a window, and a function
/// from the world snapshot to one number.
macro_rules! kinematic_behavior {
    ($(#[$attr:meta])* $name:ident, $label:literal, $eval:path) => {
        $(#[$attr])*
        pub struct $name {
            history: History,
        }

        impl $name {
            pub fn new(window: usize) -> Self {
                Self { history: History::new(window) }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new(DEFAULT_WINDOW)
            }
        }

        impl Behavior for $name {
            fn name(&self) -> &str {
                $label
            }

            fn reset(&mut self) {
                self.history.clear();
            }

            fn calculate(&mut self, ctx: &WorldContext<'_>) {
                let value = $eval(ctx).unwrap_or(0.0);
                self.history.push(value);
            }

            fn history(&self) -> &History {
                &self.history
            }
        }
    };
}

kinematic_behavior! {
    /// Mean speed of the swarm.
    AverageSpeed, "average_speed", average_speed
}

kinematic_behavior! {
    /// Signed rotation of the swarm about its centroid, scaled by body size.
    AngularMomentum, "angular_momentum", angular_momentum
}

kinematic_behavior! {
    /// Spread of distances to the centroid; low for rings and tight clusters.
    RadialVariance, "radial_variance", radial_variance
}

kinematic_behavior! {
    /// Mean squared distance to the centroid, scaled by body size.
    Scatter, "scatter", scatter
}

kinematic_behavior! {
    /// Normalized angular momentum in `[-1, 1]`; ±1 for a swarm milling in a
    /// perfect circle.
    GroupRotation, "group_rotation", group_rotation
}

// ── Formulas ──────────────────────────────────────────────────────────────────

fn average_speed(ctx: &WorldContext<'_>) -> Option<f64> {
    mean(ctx.population.states().map(|s| s.velocity.norm()))
}

fn angular_momentum(ctx: &WorldContext<'_>) -> Option<f64> {
    let mu = ctx.centroid()?;
    let r = ctx.mean_radius()?;
    let m = mean(ctx.population.states().map(|s| s.velocity.cross(s.position - mu)))?;
    Some(m / r)
}

fn radial_variance(ctx: &WorldContext<'_>) -> Option<f64> {
    let mu = ctx.centroid()?;
    let r = ctx.mean_radius()?;
    let dists: Vec<f64> = ctx.population.states().map(|s| s.position.distance(mu)).collect();
    let d_bar = mean(dists.iter().copied())?;
    let var = mean(dists.iter().map(|d| (d - d_bar).powi(2)))?;
    Some(var / (r * r))
}

fn scatter(ctx: &WorldContext<'_>) -> Option<f64> {
    let mu = ctx.centroid()?;
    let r = ctx.mean_radius()?;
    let s = mean(ctx.population.states().map(|s| (s.position - mu).norm_squared()))?;
    Some(s / (r * r))
}

fn group_rotation(ctx: &WorldContext<'_>) -> Option<f64> {
    let mu = ctx.centroid()?;
    mean(ctx.population.states().map(|s| {
        let arm: Vec2 = s.position - mu;
        let denom = s.velocity.norm() * arm.norm();
        if denom > 0.0 { s.velocity.cross(arm) / denom } else { 0.0 }
    }))
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, n) = values.fold((0.0, 0usize), |(sum, n), v| (sum + v, n + 1));
    (n > 0).then(|| sum / n as f64)
}
