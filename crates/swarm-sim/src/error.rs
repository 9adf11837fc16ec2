use swarm_core::SwarmError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("world configuration error: {0}")]
    Config(String),

    /// A population entry broke the agent contract.  Fatal: the world is in
    /// an unknown state and must not be stepped again.
    #[error("agent contract violation: {0}")]
    ContractViolation(String),

    #[error(transparent)]
    Swarm(#[from] SwarmError),
}

pub type SimResult<T> = Result<T, SimError>;
