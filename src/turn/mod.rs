//! Turn structure.
//!
//! A turn walks a fixed [`Schedule`] of phases, each made of ordered steps.
//! Automatic steps are passed through by the engine; the first manual step
//! it reaches is where players act.

mod schedule;

pub use schedule::{Phase, Schedule, Step};
