//! Recursive longest-edge triangle subdivision.
//!
//! Starting from a seed triangulation of a padded rectangle, each step
//! splits every triangle along its longest edge (optionally jittering the
//! split point) and may drop triangles once past a threshold iteration.

pub mod bisect;
pub mod config;
pub mod driver;
mod error;
mod jitter;
mod point;
pub mod seed;
mod triangle;

pub use bisect::{Bisect, SplitRule, split_midpoints};
pub use config::{REFERENCE_WIDTH, SeedMode, SubdivisionConfig};
pub use driver::{
    AlwaysSplit, DropAfter, Generation, GenerationVisitor, MeshStats, SplitPolicy, Subdivision,
    step, step_with,
};
pub use error::{TrisectError, TrisectResult};
pub use jitter::{JITTER_DIVISOR, Jitter, split_point};
pub use point::{Point, distance, is_finite, midpoint, signed_area};
pub use seed::{Bounds, initial_mesh};
pub use triangle::{Edge, Triangle, Vertex};
