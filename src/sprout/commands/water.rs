use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;
use chrono::Utc;
use uuid::Uuid;

/// Marks plants as watered right now. An unknown id is a no-op, not an
/// error; nothing else about the record changes.
pub fn run<S: DataStore>(store: &mut S, ids: &[Uuid]) -> Result<CmdResult> {
    let mut plants = store.load_plants()?;
    let mut result = CmdResult::default();
    let mut changed = false;

    for id in ids {
        match plants.iter_mut().find(|p| p.id == *id) {
            Some(plant) => {
                plant.last_watered = Utc::now();
                changed = true;
                result.add_message(CmdMessage::success(format!("Watered {}", plant.name)));
                result.affected_plants.push(plant.clone());
            }
            None => {
                result.add_message(CmdMessage::info(format!("No plant with id {}", id)));
            }
        }
    }

    if changed {
        store.save_plants(&plants)?;
    }
    Ok(result)
}
