//! Goal regions.
//!
//! A goal never changes an agent's state.  Solid goals push agents out of
//! their body; whether an agent has "arrived" is a behavior observer's call.

use swarm_core::{Aabb, CircleCollider, Vec2};

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Goal {
    /// A solid disc.  Agents are pushed out of it every step.
    Cylinder { center: Vec2, radius: f64 },

    /// A marked rectangle that agents may drive through.
    Area { bounds: Aabb },
}

impl Goal {
    pub fn cylinder(center: Vec2, radius: f64) -> Self {
        Goal::Cylinder { center, radius }
    }

    pub fn area(bounds: Aabb) -> Self {
        Goal::Area { bounds }
    }

    pub fn center(&self) -> Vec2 {
        match self {
            Goal::Cylinder { center, .. } => *center,
            Goal::Area { bounds } => bounds.center(),
        }
    }

    /// Collider for push-out, present only for solid goals.
    pub fn collider(&self) -> Option<CircleCollider> {
        match self {
            Goal::Cylinder { center, radius } => Some(CircleCollider::new(*center, *radius)),
            Goal::Area { .. } => None,
        }
    }

    /// `true` if `point` lies in the goal, boundary included.
    pub fn contains(&self, point: Vec2) -> bool {
        match self {
            Goal::Cylinder { center, radius } => center.distance(point) <= *radius,
            Goal::Area { bounds } => bounds.contains(point),
        }
    }

    /// `true` if a body of `radius` at `point` is touching or inside the goal.
    ///
    /// For a cylinder this is contact (bodies cannot enter a solid goal); for
    /// an area it is containment of the center.
    pub fn reached_by(&self, point: Vec2, radius: f64, tolerance: f64) -> bool {
        match self {
            Goal::Cylinder { center, radius: goal_r } => {
                center.distance(point) <= goal_r + radius + tolerance
            }
            Goal::Area { bounds } => bounds.contains(point),
        }
    }
}
