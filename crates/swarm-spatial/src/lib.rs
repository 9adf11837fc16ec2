//! `swarm-spatial`: where things are in the arena.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                    |
//! |---------------|-------------------------------------------------------------|
//! | [`neighbors`] | `neighbors_within`: brute-force radius scan of a population |
//! | [`wall`]      | `Wall` static obstacles and `border_walls`                  |
//! | [`goal`]      | `Goal` regions (solid cylinders and non-solid areas)        |
//! | [`index`]     | `AgentIndex`: R-tree snapshot for read-only queries         |
//!
//! # Which neighbor query to use
//!
//! During a step positions change after every resolution, so the collision
//! code always calls [`neighbors_within`], which scans live state.  Once a
//! step has finished, positions are frozen until the next one and an
//! [`AgentIndex`] built from the population answers the same question in
//! logarithmic time.  The two return the same set of ids.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on walls and goals.        |

pub mod goal;
pub mod index;
pub mod neighbors;
pub mod wall;


pub use goal::Goal;
pub use index::AgentIndex;
pub use neighbors::neighbors_within;
pub use wall::{Wall, border_walls};
