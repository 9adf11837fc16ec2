//! Collision resolvers.
//!
//! Free functions over [`AgentState`] so each one can be exercised without a
//! world.  The world lends them to agents through
//! [`StepContext`](crate::StepContext) and calls the goal resolver itself.
//!
//! | Resolver                     | Moves                | Iterates          |
//! |------------------------------|----------------------|-------------------|
//! | [`within_world_boundaries`]  | clamp, then walls    | no                |
//! | [`handle_wall_collisions`]   | per colliding segment| no                |
//! | [`handle_goal_collisions`]   | per overlapped goal  | no                |
//! | [`prevent_agent_collisions`] | the resolving agent  | up to 10 rounds   |
//!
//! Positional correction only.  Nothing here touches velocity, and overlap
//! left after the last round is resolved on later ticks.

use swarm_agent::{AgentState, CONTAGIOUS_DETECTION_ID, Population};
use swarm_core::{Aabb, SimRng, Vec2, WorldConfig};
use swarm_spatial::{Goal, Wall, neighbors_within};
use tracing::{trace, warn};

/// Slack added to the contact distance so resolved pairs end strictly apart.
pub const SEPARATION_EPSILON: f64 = 0.001;

/// Upper bound on resolution rounds per call.
pub const MAX_RESOLUTION_ROUNDS: usize = 10;

/// Per-axis threshold under which two centers count as coincident.
pub const COINCIDENT_THRESHOLD: f64 = 0.0001;

/// Magnitude of the random nudge applied to coincident centers.
pub const COINCIDENT_JITTER: f64 = 0.001;

/// Heading cone, in degrees, inside which a contact counts as frontal.
pub const FORWARD_CONE_DEGREES: f64 = 30.0;

/// Forced stop after any resolved overlap, for agents that stop on collision.
pub const COLLISION_STOP_TICKS: u32 = 3;

/// Forced stop after a frontal contact.
pub const FORWARD_STOP_TICKS: u32 = 2;

// ── Boundary and walls ────────────────────────────────────────────────────────

/// Clamp the agent into the padded arena, then resolve wall contact.
///
/// Returns `true` if the clamp or a wall push moved the agent.  A no-op
/// returning `false` when `config.collide_walls` is off.
pub fn within_world_boundaries(config: &WorldConfig, walls: &[Wall], agent: &mut AgentState) -> bool {
    if !config.collide_walls {
        return false;
    }
    let inset = agent.radius + config.padding;
    let before = agent.position;
    agent.set_x(agent.x().max(inset).min(config.width - inset));
    agent.set_y(agent.y().max(inset).min(config.height - inset));
    if agent.position != before {
        trace!(agent = %agent.id, from = %before, to = %agent.position, "boundary clamp");
    }

    handle_wall_collisions(walls, agent);
    agent.position != before
}

/// Push the agent off every wall segment closer than its radius.
///
/// The center is sampled once per wall: every segment of that wall is
/// tested against it, and the pushes of all colliding segments add up.  A
/// later wall sees the position left by the earlier ones.  On each axis the
/// push is `radius - |delta| + 1` away from the closest point, where `delta`
/// is the offset from the sampled center to the closest point on that axis;
/// an axis with zero offset is not pushed.
pub fn handle_wall_collisions(walls: &[Wall], agent: &mut AgentState) -> bool {
    let mut collided = false;
    for wall in walls {
        let center = agent.position;
        let reach = Aabb::around(center, agent.radius);
        for segment in wall.sensing_segments() {
            if !segment.aabb().intersects(&reach) {
                continue;
            }
            let closest = segment.closest_point(center);
            if closest.distance(center) >= agent.radius {
                continue;
            }
            let delta = closest - center;
            let push = Vec2::new(
                axis_push(delta.x, agent.radius),
                axis_push(delta.y, agent.radius),
            );
            agent.position -= push;
            collided = true;
            trace!(agent = %agent.id, ?push, "wall push");
        }
    }
    collided
}

fn axis_push(delta: f64, radius: f64) -> f64 {
    if delta == 0.0 {
        return 0.0;
    }
    delta.signum() * (radius - delta.abs() + 1.0)
}

// ── Goals ─────────────────────────────────────────────────────────────────────

/// Push the agent out of every solid goal it overlaps, in goal order.
///
/// Single shot per goal; corrections from several goals add up.  Returns
/// `true` if any goal moved the agent.
pub fn handle_goal_collisions(goals: &[Goal], agent: &mut AgentState) -> bool {
    let mut collided = false;
    for goal in goals {
        let Some(collider) = goal.collider() else { continue };
        if let Some(correction) = agent.collider().correction_against(&collider) {
            agent.position += correction;
            collided = true;
        }
    }
    collided
}

// ── Agent-agent ───────────────────────────────────────────────────────────────

/// Separate `agent` from every overlapping neighbor in `others`.
///
/// `agent` must not be in `others`; the step loop detaches it first.  Only
/// `agent` moves.  Each neighbor it reaches has its collision flag set and
/// may pass on [`CONTAGIOUS_DETECTION_ID`].  With `forward_freeze`, a
/// contact classified by [`collision_forward`] is left overlapping.
///
/// The neighborhood is queried afresh after every round; the call ends when
/// it comes back empty or after [`MAX_RESOLUTION_ROUNDS`].
pub fn prevent_agent_collisions(
    agent:          &mut AgentState,
    others:         &mut Population,
    rng:            &mut SimRng,
    forward_freeze: bool,
) {
    let minimum_distance = agent.radius * 2.0;
    let target_distance = minimum_distance + SEPARATION_EPSILON;

    let mut bag = neighbors_within(others, agent.position, minimum_distance, None);
    if bag.is_empty() {
        return;
    }

    for round in 0..MAX_RESOLUTION_ROUNDS {
        for &id in &bag {
            let Some(other) = others.state_mut(id) else { continue };
            if !agent.aabb().intersects(&other.aabb()) {
                continue;
            }
            let center_distance = agent.position.distance(other.position);
            if center_distance > minimum_distance {
                continue;
            }

            agent.collision_flag = true;
            other.collision_flag = true;
            if other.detection_id == CONTAGIOUS_DETECTION_ID {
                agent.detection_id = CONTAGIOUS_DETECTION_ID;
            }
            if agent.stop_on_collision {
                agent.stopped_duration = COLLISION_STOP_TICKS;
            }

            if forward_freeze && collision_forward(agent, other) {
                continue;
            }

            let mut away = agent.position - other.position;
            let mut center_distance = center_distance;
            if away.x.abs() < COINCIDENT_THRESHOLD && away.y.abs() < COINCIDENT_THRESHOLD {
                agent.position.x += rng.signed_jitter(COINCIDENT_JITTER);
                agent.position.y += rng.signed_jitter(COINCIDENT_JITTER);
                away = agent.position - other.position;
                center_distance = away.norm();
            }

            let push = away.normalized() * (target_distance - center_distance);
            if !push.is_finite() {
                warn!(agent = %agent.id, other = %id, round, "non-finite separation, round aborted");
                break;
            }
            agent.position += push;
        }

        bag = neighbors_within(others, agent.position, minimum_distance, None);
        if bag.is_empty() {
            return;
        }
    }
    trace!(agent = %agent.id, residual = bag.len(), "overlap left after bounded rounds");
}

/// Classify a contact as frontal.
///
/// `agent` is checked first: if its heading is within
/// [`FORWARD_CONE_DEGREES`] of the direction to `other`, it is given a
/// [`FORWARD_STOP_TICKS`] stop and the call returns `true` without looking
/// at `other`.  Otherwise the same test runs from `other` toward `agent`.
pub fn collision_forward(agent: &mut AgentState, other: &mut AgentState) -> bool {
    if heading_toward(agent, other.position) {
        agent.stopped_duration = FORWARD_STOP_TICKS;
        return true;
    }
    if heading_toward(other, agent.position) {
        other.stopped_duration = FORWARD_STOP_TICKS;
        return true;
    }
    false
}

/// `true` if the angle between `agent`'s heading and the ray to `target` is
/// under the forward cone.  Coincident points have no direction and never
/// count.
fn heading_toward(agent: &AgentState, target: Vec2) -> bool {
    let heading = agent.frontal_point();
    let to_target = target - agent.position;
    let denom = heading.norm() * to_target.norm();
    if !(denom > 0.0) {
        return false;
    }
    let cos = (heading.dot(to_target) / denom).clamp(-1.0, 1.0);
    cos.acos().to_degrees() < FORWARD_CONE_DEGREES
}
