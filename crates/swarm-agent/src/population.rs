//! The population arena.
//!
//! # Why slots instead of a plain `Vec<Box<dyn Agent>>`?
//!
//! Two reasons, both about identity:
//!
//! 1. **Removal during a run.**  Removing from the middle of a `Vec` shifts
//!    every later agent, so an `AgentId` held by a behavior observer or an
//!    output row would silently start naming a different robot.  A removed
//!    agent instead leaves a `Removed` tombstone and its id is never reused.
//!
//! 2. **Stepping one agent against the rest.**  An agent's step needs `&mut`
//!    to itself and `&mut` to its neighbors (collision flags are set on both
//!    sides) at the same time.  The step loop [`take`](Population::take)s the
//!    stepping agent out of its slot, leaving `Stepping`, lends the rest of
//!    the population to the resolvers, and [`restore`](Population::restore)s
//!    it afterwards.  A detached agent is invisible to neighbor queries,
//!    which is exactly the "exclude self" rule.

use swarm_core::{AgentId, SwarmError, SwarmResult};

use crate::{Agent, AgentState};

enum Slot {
    Live(Box<dyn Agent>),
    Stepping,
    Removed,
}

/// Arena of agents indexed by [`AgentId`].
#[derive(Default)]
pub struct Population {
    slots: Vec<Slot>,
    live:  usize,
}

impl Population {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Size ──────────────────────────────────────────────────────────────

    /// Number of slots ever allocated, including tombstones.  Every valid
    /// `AgentId` is below this.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of agents currently in the population.  An agent detached for
    /// stepping still counts.
    #[inline]
    pub fn len(&self) -> usize {
        self.live
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    // ── Membership ────────────────────────────────────────────────────────

    /// Add an agent and return its id.  The id is written into the agent's
    /// state.
    pub fn push(&mut self, mut agent: Box<dyn Agent>) -> AgentId {
        let id = AgentId(self.slots.len() as u32);
        agent.state_mut().id = id;
        self.slots.push(Slot::Live(agent));
        self.live += 1;
        id
    }

    /// Remove an agent, marking it deleted.  Its id stays allocated.
    pub fn remove(&mut self, id: AgentId) -> SwarmResult<Box<dyn Agent>> {
        let slot = self.slots.get_mut(id.index()).ok_or(SwarmError::AgentNotFound(id))?;
        match std::mem::replace(slot, Slot::Removed) {
            Slot::Live(mut agent) => {
                agent.state_mut().deleted = true;
                self.live -= 1;
                Ok(agent)
            }
            other => {
                *slot = other;
                Err(SwarmError::AgentNotFound(id))
            }
        }
    }

    /// Put `agent` in the slot of `id`, carrying over the pose of the agent
    /// it replaces.  Returns the replaced agent.
    pub fn replace(&mut self, id: AgentId, mut agent: Box<dyn Agent>) -> SwarmResult<Box<dyn Agent>> {
        let Some(Slot::Live(old)) = self.slots.get_mut(id.index()) else {
            return Err(SwarmError::AgentNotFound(id));
        };
        {
            let from = old.state();
            let to = agent.state_mut();
            to.id = id;
            to.position = from.position;
            to.heading = from.heading;
        }
        Ok(std::mem::replace(old, agent))
    }

    // ── Step-loop detach/attach ───────────────────────────────────────────

    /// Detach a live agent for stepping.  Returns `None` if the slot is
    /// removed, already detached, or out of range.
    pub fn take(&mut self, id: AgentId) -> Option<Box<dyn Agent>> {
        let slot = self.slots.get_mut(id.index())?;
        match std::mem::replace(slot, Slot::Stepping) {
            Slot::Live(agent) => Some(agent),
            other => {
                *slot = other;
                None
            }
        }
    }

    /// Re-attach an agent previously detached with [`take`](Self::take).
    pub fn restore(&mut self, id: AgentId, agent: Box<dyn Agent>) -> SwarmResult<()> {
        match self.slots.get_mut(id.index()) {
            Some(slot) if matches!(slot, Slot::Stepping) => {
                *slot = Slot::Live(agent);
                Ok(())
            }
            _ => Err(SwarmError::AgentNotFound(id)),
        }
    }

    // ── Access ────────────────────────────────────────────────────────────

    pub fn get(&self, id: AgentId) -> Option<&dyn Agent> {
        match self.slots.get(id.index()) {
            Some(Slot::Live(agent)) => Some(&**agent),
            _ => None,
        }
    }

    pub fn get_mut(&mut self, id: AgentId) -> Option<&mut dyn Agent> {
        match self.slots.get_mut(id.index()) {
            Some(Slot::Live(agent)) => Some(&mut **agent),
            _ => None,
        }
    }

    #[inline]
    pub fn state(&self, id: AgentId) -> Option<&AgentState> {
        self.get(id).map(|a| a.state())
    }

    #[inline]
    pub fn state_mut(&mut self, id: AgentId) -> Option<&mut AgentState> {
        self.get_mut(id).map(|a| a.state_mut())
    }

    /// Ids of every slot that is not a tombstone, in ascending order.
    /// Detached agents are included, so the step loop can iterate this.
    pub fn ids(&self) -> Vec<AgentId> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, s)| !matches!(s, Slot::Removed))
            .map(|(i, _)| AgentId(i as u32))
            .collect()
    }

    /// Attached agents in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Agent> + '_ {
        self.slots.iter().filter_map(|s| match s {
            Slot::Live(agent) => Some(&**agent),
            _ => None,
        })
    }

    /// States of all attached agents in ascending id order.
    pub fn states(&self) -> impl Iterator<Item = &AgentState> + '_ {
        self.iter().map(|a| a.state())
    }

    /// Mutable states of all attached agents in ascending id order.
    pub fn states_mut(&mut self) -> impl Iterator<Item = &mut AgentState> + '_ {
        self.slots.iter_mut().filter_map(|s| match s {
            Slot::Live(agent) => Some(agent.state_mut()),
            _ => None,
        })
    }
}
