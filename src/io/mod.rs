//! Loading shows and stage names, and persisting schedules.
//!
//! Line-up files are JSON: a list of shows, each either a
//! `[name, start, end]` triple or a `{"name", "start", "end"}` object.
//! Stage-name files are JSON arrays of strings. Schedules persist as an
//! object mapping stage labels to their show lists.
//!
//! File and parse failures are [`IoError`], kept distinct from the
//! assigner's validation errors so end-to-end reports can tell a broken
//! file from a malformed show.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use qtty::{Hour, Unit};
use thiserror::Error;

use crate::assign::Schedule;
use crate::naming::StageNames;
use crate::show::Show;

#[derive(Debug, Error)]
pub enum IoError {
    #[error("Failed to read {path}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write {path}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

fn display_path(path: &Path) -> String {
    path.display().to_string()
}

/// Loads a show list from a JSON file.
pub fn load_shows(path: impl AsRef<Path>) -> Result<Vec<Show<Hour>>, IoError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| IoError::Read {
        path: display_path(path),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| IoError::Parse {
        path: display_path(path),
        source,
    })
}

/// Loads stage names from a JSON array of strings.
pub fn load_stage_names(path: impl AsRef<Path>) -> Result<StageNames, IoError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| IoError::Read {
        path: display_path(path),
        source,
    })?;
    let names: Vec<String> = serde_json::from_str(&text).map_err(|source| IoError::Parse {
        path: display_path(path),
        source,
    })?;
    Ok(StageNames::new(names))
}

/// Renders a schedule as a JSON object mapping stage labels to show lists.
pub fn schedule_to_json<U: Unit>(schedule: &Schedule<U>, names: &StageNames) -> serde_json::Value {
    let mut map = serde_json::Map::with_capacity(schedule.stage_count());
    for stage in schedule.iter() {
        let shows = serde_json::to_value(stage.shows())
            .unwrap_or_else(|_| serde_json::Value::Array(Vec::new()));
        map.insert(names.label(stage.index()), shows);
    }
    serde_json::Value::Object(map)
}

/// Writes a schedule to `path` as pretty-printed JSON.
pub fn write_schedule<U: Unit>(
    path: impl AsRef<Path>,
    schedule: &Schedule<U>,
    names: &StageNames,
) -> Result<(), IoError> {
    let path = path.as_ref();
    let value = schedule_to_json(schedule, names);
    let text = serde_json::to_string_pretty(&value).map_err(|source| IoError::Parse {
        path: display_path(path),
        source,
    })?;
    fs::write(path, text).map_err(|source| IoError::Write {
        path: display_path(path),
        source,
    })
}

/// Renders a schedule for the terminal: one block per stage, each show on
/// its own `name: start - end` line.
pub fn render_schedule<U: Unit>(schedule: &Schedule<U>, names: &StageNames) -> String {
    let mut out = String::new();
    for stage in schedule.iter() {
        let _ = writeln!(out, "{}:", names.label(stage.index()));
        for show in stage.shows() {
            let _ = writeln!(
                out,
                "  {}: {} - {}",
                show.name(),
                show.start().value(),
                show.end().value()
            );
        }
    }
    out
}
