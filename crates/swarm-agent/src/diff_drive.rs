//! Differential-drive robot kinematics.

use std::f64::consts::TAU;

use swarm_core::Vec2;

use crate::{Agent, AgentEnvironment, AgentState};

/// Decides the forward speed and turn rate of a [`DiffDriveAgent`] each tick.
///
/// Implementations see the agent's own state and the environment (neighbor
/// queries, the seeded RNG) but cannot move the agent directly.
pub trait Controller: Send + Sync + 'static {
    /// Return `(speed, turn_rate)` in world units per second and radians per
    /// second.
    fn control(&mut self, state: &AgentState, env: &mut dyn AgentEnvironment) -> (f64, f64);
}

/// A controller that always returns the same command.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ConstantControl {
    pub speed:     f64,
    pub turn_rate: f64,
}

impl Controller for ConstantControl {
    fn control(&mut self, _state: &AgentState, _env: &mut dyn AgentEnvironment) -> (f64, f64) {
        (self.speed, self.turn_rate)
    }
}

/// Static parameters of a differential-drive agent.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiffDriveConfig {
    pub radius: f64,

    /// Enter a forced stop after every resolved overlap.
    pub stop_on_collision: bool,

    /// Let head-on overlaps stand and halt the agent instead of shoving it.
    pub forward_freeze: bool,

    /// Commands are clamped to `[-max_speed, max_speed]`.
    pub max_speed: f64,
}

impl Default for DiffDriveConfig {
    fn default() -> Self {
        Self {
            radius:            5.0,
            stop_on_collision: false,
            forward_freeze:    false,
            max_speed:         f64::INFINITY,
        }
    }
}

/// A differential-drive robot driven by a pluggable [`Controller`].
pub struct DiffDriveAgent {
    state:      AgentState,
    config:     DiffDriveConfig,
    controller: Box<dyn Controller>,
}

impl DiffDriveAgent {
    pub fn new(
        position:   Vec2,
        heading:    f64,
        config:     DiffDriveConfig,
        controller: impl Controller,
    ) -> Self {
        let mut state = AgentState::new(position, heading, config.radius);
        state.stop_on_collision = config.stop_on_collision;
        Self {
            state,
            config,
            controller: Box::new(controller),
        }
    }

    /// An agent that never moves under its own power.  It still gets pushed
    /// out of walls and other agents.
    pub fn stationary(position: Vec2, radius: f64) -> Self {
        let config = DiffDriveConfig { radius, ..DiffDriveConfig::default() };
        Self::new(position, 0.0, config, ConstantControl::default())
    }

    pub fn config(&self) -> &DiffDriveConfig {
        &self.config
    }

    /// Swap the controller, keeping pose and collision state.
    pub fn set_controller(&mut self, controller: impl Controller) {
        self.controller = Box::new(controller);
    }
}

impl Agent for DiffDriveAgent {
    fn state(&self) -> &AgentState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut AgentState {
        &mut self.state
    }

    fn step(&mut self, env: &mut dyn AgentEnvironment) {
        self.state.collision_flag = false;

        let (speed, turn_rate) = self.controller.control(&self.state, env);
        let speed = speed.max(-self.config.max_speed).min(self.config.max_speed);

        if self.state.stopped_duration > 0 {
            self.state.stopped_duration -= 1;
            self.state.velocity = Vec2::ZERO;
        } else {
            let dt = env.tick_duration_secs();
            self.state.heading = (self.state.heading + turn_rate * dt).rem_euclid(TAU);
            self.state.velocity = self.state.frontal_point() * speed;
            self.state.position += self.state.velocity * dt;
        }

        env.within_world_boundaries(&mut self.state);
        env.prevent_agent_collisions(&mut self.state, self.config.forward_freeze);
    }

    fn kind(&self) -> &'static str {
        "diff_drive"
    }
}
