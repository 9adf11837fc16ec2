//! Agent identity.
//!
//! An `AgentId` is the index of an agent's slot in the population arena.
//! Slots are never reused, so an id names the same robot for the whole run,
//! including after that robot is removed.

use std::fmt;

/// Slot of an agent in the population arena.  Assigned in construction
/// order and never reused, so it doubles as the agent's stable name.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentId(pub u32);

impl AgentId {
    /// Id of an agent that has not been placed in a population yet.
    pub const INVALID: AgentId = AgentId(u32::MAX);

    /// Slot index into the population arena.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl Default for AgentId {
    #[inline(always)]
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AgentId({})", self.0)
    }
}

impl TryFrom<usize> for AgentId {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<AgentId, Self::Error> {
        u32::try_from(n).map(AgentId)
    }
}
