use crate::error::{Result, SproutError};
use crate::index::{index_plants, DisplayIndex, DisplayPlant};
use crate::store::DataStore;
use chrono::Utc;
use uuid::Uuid;

pub fn indexed_plants<S: DataStore>(store: &S) -> Result<Vec<DisplayPlant>> {
    let plants = store.load_plants()?;
    Ok(index_plants(plants, Utc::now()))
}

/// Resolves user-facing display indexes to plant ids.
pub fn resolve_indexes<S: DataStore>(store: &S, indexes: &[DisplayIndex]) -> Result<Vec<Uuid>> {
    let indexed = indexed_plants(store)?;

    indexes
        .iter()
        .map(|idx| {
            indexed
                .iter()
                .find(|dp| dp.index == *idx)
                .map(|dp| dp.plant.id)
                .ok_or_else(|| SproutError::Api(format!("Index {} not found", idx)))
        })
        .collect()
}
