//! Stage display names.
//!
//! Stage naming is explicit configuration: a [`StageNames`] value is built
//! from a provided list (or generated from the default pools) and passed to
//! whichever component renders or serializes a schedule. Nothing here is
//! process-global, so schedules and their tests stay deterministic.

use rand::Rng;

use crate::Id;

/// Headliner names reserved for the first stage.
const MAIN_STAGES: [&str; 5] = [
    "The Quantum Nexus",
    "The Mechatronic Arena",
    "The Reactor of Legends",
    "The Core Stage",
    "The Dome of Infinity",
];

const PREFIXES: [&str; 20] = [
    "Heisenberg",
    "Optical",
    "Qubit",
    "Cryo",
    "Flux",
    "Kelvin",
    "Servo",
    "Photon",
    "Plasma",
    "Gripper",
    "Ampere",
    "Hydrogen",
    "Quantum",
    "DICE",
    "Nano",
    "Circuit",
    "Magnetron",
    "Molten",
    "PhaseShift",
    "Thorizon",
];

const SUFFIXES: [&str; 20] = [
    "Dome",
    "Colosseum",
    "Planetarium",
    "Lab",
    "Core",
    "Reactor",
    "Arena",
    "Theatre",
    "Chamber",
    "Nest",
    "Generator",
    "Loop",
    "Vortex",
    "Box",
    "Sanctum",
    "Station",
    "Pit",
    "Quadrant",
    "Yard",
    "Cage",
];

/// Explicit stage-name configuration.
///
/// Maps 0-based stage indices to display names, falling back to a generic
/// `"Stage N"` label (1-based, matching printed output) when the list is
/// shorter than the stage count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StageNames {
    names: Vec<Id>,
}

impl StageNames {
    pub fn new(names: Vec<Id>) -> Self {
        Self { names }
    }

    /// Generates `count` festival-flavoured names: one main-stage name
    /// followed by prefix/suffix combinations.
    pub fn generate<R: Rng>(count: usize, rng: &mut R) -> Self {
        let mut names = Vec::with_capacity(count);
        if count > 0 {
            names.push(MAIN_STAGES[rng.gen_range(0..MAIN_STAGES.len())].to_string());
        }
        for _ in 1..count {
            let prefix = PREFIXES[rng.gen_range(0..PREFIXES.len())];
            let suffix = SUFFIXES[rng.gen_range(0..SUFFIXES.len())];
            names.push(format!("{prefix} {suffix}"));
        }
        Self { names }
    }

    /// Display label for the stage at `index`.
    pub fn label(&self, index: usize) -> Id {
        self.names
            .get(index)
            .cloned()
            .unwrap_or_else(|| format!("Stage {}", index + 1))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
