//! World configuration.

use crate::{SimClock, SwarmError, SwarmResult, Tick};

/// Top-level configuration of a rectangular arena.
///
/// Typically loaded from a JSON/TOML file by the application crate (enable the
/// `serde` feature) and handed to `WorldBuilder`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WorldConfig {
    /// Arena width in world units.
    pub width: f64,

    /// Arena height in world units.
    pub height: f64,

    /// Dead band between the arena edge and the usable area.  Agents are kept
    /// inside `[padding + radius, dim - padding - radius]` on each axis.
    pub padding: f64,

    /// Master RNG seed.  The same seed always produces identical trajectories.
    pub seed: u64,

    /// Total ticks for `World::run`.
    pub total_ticks: u64,

    /// Simulated seconds per tick, used by agent kinematics.
    pub tick_duration_secs: f64,

    /// Enforce the arena boundary and wall collisions.  When `false`, the
    /// boundary check handed to agents is a no-op.
    pub collide_walls: bool,

    /// Add four wall objects along the arena border so sensors can see them.
    pub detectable_walls: bool,

    /// Call `SimObserver::on_snapshot` every N ticks.  0 disables snapshots.
    pub output_interval_ticks: u64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width:                 500.0,
            height:                500.0,
            padding:               0.0,
            seed:                  0,
            total_ticks:           1_000,
            tick_duration_secs:    1.0,
            collide_walls:         true,
            detectable_walls:      false,
            output_interval_ticks: 0,
        }
    }
}

impl WorldConfig {
    /// The tick at which `World::run` stops (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    /// Construct a `SimClock` pre-configured for this run.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.tick_duration_secs)
    }

    /// Reject arenas with no usable interior.
    pub fn validate(&self) -> SwarmResult<()> {
        if !(self.width > 0.0 && self.height > 0.0) {
            return Err(SwarmError::Config(format!(
                "arena dimensions must be positive, got {} x {}",
                self.width, self.height
            )));
        }
        if self.padding < 0.0
            || 2.0 * self.padding >= self.width
            || 2.0 * self.padding >= self.height
        {
            return Err(SwarmError::Config(format!(
                "padding {} leaves no room inside a {} x {} arena",
                self.padding, self.width, self.height
            )));
        }
        if !(self.tick_duration_secs > 0.0) {
            return Err(SwarmError::Config(format!(
                "tick_duration_secs must be positive, got {}",
                self.tick_duration_secs
            )));
        }
        Ok(())
    }
}
