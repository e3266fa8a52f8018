//! mainstage - minimal-stage festival scheduling.
//!
//! Assigns a set of time-bounded shows to the fewest stages such that no two
//! shows sharing a stage overlap in time (greedy interval partitioning,
//! optimal for interval graphs). The algorithmic core is [`assign::assign`];
//! show loading, random line-up generation, stage naming, and schedule
//! serialization live in the side modules.

pub mod assign;
pub mod generate;
pub mod interval;
pub mod io;
pub mod naming;
pub mod show;

pub use assign::{assign, AssignError, Schedule, Stage};
pub use interval::Interval;
pub use show::Show;

/// Identifier type used for shows and stage labels.
pub type Id = String;
