//! Per-agent physical and bookkeeping state.
//!
//! The collision resolvers in `swarm-sim` only ever touch `AgentState`, never
//! the concrete agent type, so every agent kind shares one definition of
//! position, heading, radius, and the collision fields.

use swarm_core::{Aabb, AgentId, CircleCollider, Vec2};

/// Detection id that spreads on contact: an agent touching one that carries
/// it acquires it too.
pub const CONTAGIOUS_DETECTION_ID: u32 = 2;

/// State shared by every agent kind.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentState {
    /// Arena slot.  Assigned by [`Population::push`][crate::Population::push];
    /// `AgentId::INVALID` until then.
    pub id: AgentId,

    pub position: Vec2,

    /// Heading in radians, counter-clockwise from +x.
    pub heading: f64,

    /// Body radius.  Positive and finite for any agent admitted to a world.
    pub radius: f64,

    /// Commanded velocity of the last step (world units per second).  Zero
    /// while stopped.
    pub velocity: Vec2,

    /// Set by agent-agent resolution when this agent touched another.  Each
    /// agent clears its own flag at the start of its step.
    pub collision_flag: bool,

    /// Ticks remaining in a forced stop.  While non-zero the agent does not
    /// move under its own power.
    pub stopped_duration: u32,

    /// Interaction class tag.  See [`CONTAGIOUS_DETECTION_ID`].
    pub detection_id: u32,

    /// Enter a 3-tick forced stop whenever an overlap is resolved.
    pub stop_on_collision: bool,

    /// Set when the agent is removed from its population.
    pub deleted: bool,
}

impl AgentState {
    pub fn new(position: Vec2, heading: f64, radius: f64) -> Self {
        Self {
            id: AgentId::INVALID,
            position,
            heading,
            radius,
            velocity: Vec2::ZERO,
            collision_flag: false,
            stopped_duration: 0,
            detection_id: 0,
            stop_on_collision: false,
            deleted: false,
        }
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.position.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.position.y
    }

    #[inline]
    pub fn set_x(&mut self, x: f64) {
        self.position.x = x;
    }

    #[inline]
    pub fn set_y(&mut self, y: f64) {
        self.position.y = y;
    }

    /// Bounding box of the body.
    #[inline]
    pub fn aabb(&self) -> Aabb {
        Aabb::around(self.position, self.radius)
    }

    /// Circle collider of the body at its current position.
    #[inline]
    pub fn collider(&self) -> CircleCollider {
        CircleCollider::new(self.position, self.radius)
    }

    /// Unit vector along the heading.
    #[inline]
    pub fn frontal_point(&self) -> Vec2 {
        Vec2::from_angle(self.heading)
    }

    /// `true` if the state can take part in collision geometry.
    pub fn is_well_formed(&self) -> bool {
        self.position.is_finite()
            && self.heading.is_finite()
            && self.radius.is_finite()
            && self.radius > 0.0
    }
}
