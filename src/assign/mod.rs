//! Stage assignment via greedy interval partitioning.
//!
//! [`assign`] distributes shows over the minimum number of stages such that
//! no two shows on the same stage overlap in time. The stage count equals
//! the maximum number of shows simultaneously in progress (the interval
//! graph's clique number, which for interval graphs equals its chromatic
//! number), so no smaller schedule exists.

use std::collections::BTreeSet;

use qtty::{Quantity, Unit};

use crate::show::Show;

pub mod errors;
mod time_key;

pub use errors::AssignError;
use time_key::TimeKey;


/// A stage with its run of shows, ordered by start time.
#[derive(Debug, Clone, PartialEq)]
pub struct Stage<U: Unit> {
    index: usize,
    shows: Vec<Show<U>>,
}

impl<U: Unit> Stage<U> {
    /// 0-based stage index within the schedule.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Shows assigned to this stage, in start-time order.
    pub fn shows(&self) -> &[Show<U>] {
        &self.shows
    }

    pub fn len(&self) -> usize {
        self.shows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shows.is_empty()
    }
}

/// Minimal-cardinality partition of shows into non-overlapping stages.
///
/// Produced by [`assign`] in a single call and immutable afterwards; every
/// input show appears on exactly one stage.
#[derive(Debug, Clone, PartialEq)]
pub struct Schedule<U: Unit> {
    stages: Vec<Stage<U>>,
}

impl<U: Unit> Default for Schedule<U> {
    fn default() -> Self {
        Self { stages: Vec::new() }
    }
}

impl<U: Unit> Schedule<U> {
    /// Number of stages, equal to the minimum possible for the input.
    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    pub fn stages(&self) -> &[Stage<U>] {
        &self.stages
    }

    /// Iterates over stages in index order.
    pub fn iter(&self) -> impl Iterator<Item = &Stage<U>> + '_ {
        self.stages.iter()
    }

    /// Total number of assigned shows across all stages.
    pub fn show_count(&self) -> usize {
        self.stages.iter().map(Stage::len).sum()
    }

    /// Returns the 0-based stage index hosting the named show, if any.
    pub fn stage_of(&self, name: &str) -> Option<usize> {
        self.stages
            .iter()
            .find(|stage| stage.shows.iter().any(|show| show.name() == name))
            .map(|stage| stage.index)
    }

    /// Returns the earliest show start across the schedule, if any.
    pub fn earliest_start(&self) -> Option<Quantity<U>> {
        self.stages
            .iter()
            .filter_map(|stage| stage.shows.first())
            .map(|show| show.start())
            .reduce(|a, b| if b.value() < a.value() { b } else { a })
    }

    /// Returns the latest show end across the schedule, if any.
    pub fn latest_end(&self) -> Option<Quantity<U>> {
        self.stages
            .iter()
            .flat_map(|stage| stage.shows.iter())
            .map(|show| show.end())
            .reduce(|a, b| if b.value() > a.value() { b } else { a })
    }

    /// Time span from earliest start to latest end, if any shows exist.
    pub fn span(&self) -> Option<Quantity<U>> {
        match (self.earliest_start(), self.latest_end()) {
            (Some(start), Some(end)) => Some(end - start),
            _ => None,
        }
    }
}

impl<U: Unit> serde::Serialize for Schedule<U> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.stages.len()))?;
        for stage in &self.stages {
            seq.serialize_element(&stage.shows)?;
        }
        seq.end()
    }
}

/// Assigns every show to a stage so that stage-mates never overlap, using
/// the minimum number of stages.
///
/// Shows are processed in (start, end, input order) order. Open stages are
/// kept in an ordered set keyed by the end time of their last show; a show
/// reuses the stage with the *largest* end time still <= its start (the
/// tightest fit, which keeps earlier-freed stages available for shows that
/// start sooner), and opens a new stage only when every open stage is still
/// busy at its start time.
///
/// Fails with [`AssignError`] if any show has non-finite times or
/// `start >= end`; validation happens up front and no partial schedule is
/// ever returned. An empty input yields a schedule with zero stages.
pub fn assign<U: Unit>(shows: &[Show<U>]) -> Result<Schedule<U>, AssignError> {
    let mut order: Vec<usize> = Vec::with_capacity(shows.len());
    for (idx, show) in shows.iter().enumerate() {
        let (start, end) = (show.start().value(), show.end().value());
        if !start.is_finite() || !end.is_finite() {
            return Err(AssignError::NonFiniteTime {
                name: show.name().to_string(),
            });
        }
        if start >= end {
            return Err(AssignError::InvalidShow {
                name: show.name().to_string(),
                start,
                end,
            });
        }
        order.push(idx);
    }

    // Deterministic processing order: start, then end, then input position.
    order.sort_by(|&a, &b| {
        TimeKey::new(shows[a].start().value())
            .cmp(&TimeKey::new(shows[b].start().value()))
            .then(TimeKey::new(shows[a].end().value()).cmp(&TimeKey::new(shows[b].end().value())))
            .then(a.cmp(&b))
    });

    let mut stages: Vec<Stage<U>> = Vec::new();
    // Open stages keyed by (last end time, stage index). The tightest fit
    // for a show starting at `s` is the largest key <= (s, MAX).
    let mut open: BTreeSet<(TimeKey, usize)> = BTreeSet::new();

    for &idx in &order {
        let show = &shows[idx];
        let start_key = TimeKey::new(show.start().value());
        let end_key = TimeKey::new(show.end().value());

        let freed = open.range(..=(start_key, usize::MAX)).next_back().copied();
        let stage_idx = match freed {
            Some(entry) => {
                open.remove(&entry);
                entry.1
            }
            None => {
                stages.push(Stage {
                    index: stages.len(),
                    shows: Vec::new(),
                });
                stages.len() - 1
            }
        };

        stages[stage_idx].shows.push(show.clone());
        open.insert((end_key, stage_idx));
    }

    Ok(Schedule { stages })
}
