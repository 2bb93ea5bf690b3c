use crate::model::{Plant, Schedule};
use chrono::{DateTime, Utc};

/// A user-facing index for a plant: its 1-based position in the collection.
///
/// The collection keeps insertion order and the CLI displays plants in that
/// order, so the index is stable as long as earlier plants are not deleted.
/// Indexes exist only at the presentation boundary; the store and commands
/// identify plants by their UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DisplayIndex(pub usize);

impl std::fmt::Display for DisplayIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for DisplayIndex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<usize>() {
            Ok(n) if n > 0 => Ok(DisplayIndex(n)),
            _ => Err(format!("Invalid index format: {}", s)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DisplayPlant {
    pub plant: Plant,
    pub index: DisplayIndex,
    pub schedule: Schedule,
}

/// Assigns display indexes and computes the derived schedule for a list of
/// plants, against `now`.
///
/// The input order is preserved: plants are shown in the order they were
/// added, never re-sorted by due date.
pub fn index_plants(plants: Vec<Plant>, now: DateTime<Utc>) -> Vec<DisplayPlant> {
    plants
        .into_iter()
        .enumerate()
        .map(|(i, plant)| DisplayPlant {
            index: DisplayIndex(i + 1),
            schedule: plant.schedule(now),
            plant,
        })
        .collect()
}
