//! Plain data row types written by output backends.

/// One agent's pose and collision state at a given tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgentSnapshotRow {
    pub tick:             u64,
    pub agent_id:         u32,
    pub x:                f64,
    pub y:                f64,
    /// Radians in `[0, 2π)`.
    pub heading:          f64,
    pub collision:        bool,
    pub stopped_duration: u32,
    pub detection_id:     u32,
}

/// Summary of one simulation tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickSummaryRow {
    pub tick:         u64,
    pub elapsed_secs: f64,
    pub live_agents:  u64,
}

/// One behavior observer's values at a snapshot tick.
#[derive(Debug, Clone, PartialEq)]
pub struct BehaviorRow {
    pub tick:    u64,
    pub name:    String,
    /// Value recorded for this tick; `NaN` if the observer has none yet.
    pub current: f64,
    /// Mean over the observer's history window.
    pub average: f64,
}
