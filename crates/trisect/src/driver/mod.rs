//! Iteration driver: generations, split policies and stepping.
//!
//! Each step maps `(generation, iteration)` to `(generation', iteration + 1)`
//! by asking a [`SplitPolicy`] whether each triangle survives and splitting
//! the survivors. Randomness is an explicit argument, so a seeded source
//! replays identically.
//!
//! # Architecture
//!
//! - [`Generation`]: the triangles at one iteration
//! - [`SplitPolicy`]: strategy deciding which triangles are split or dropped
//! - [`Subdivision`]: driver holding the current generation up to the cap
//! - [`GenerationVisitor`]: visitor for consuming a generation

mod generation;
mod policy;
mod subdivision;
mod visitor;

pub use generation::Generation;
pub use policy::{AlwaysSplit, DropAfter, SplitPolicy};
pub use subdivision::{Subdivision, step, step_with};
pub use visitor::{GenerationVisitor, MeshStats};
