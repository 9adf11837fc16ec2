//! Framework error type.
//!
//! Sub-crates may define their own error enums and convert `SwarmError` into
//! them via `From` impls.  Only construction-time problems live here; the
//! per-tick collision code recovers from numerical trouble locally and never
//! returns an error.

use thiserror::Error;

use crate::{AgentId, Vec2};

/// The top-level error type for `swarm-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum SwarmError {
    #[error("agent {0} not found")]
    AgentNotFound(AgentId),

    #[error("wall segment from {0} to {1} has zero length")]
    DegenerateSegment(Vec2, Vec2),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `swarm-*` crates.
pub type SwarmResult<T> = Result<T, SwarmError>;
