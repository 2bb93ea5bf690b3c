use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;
use uuid::Uuid;

/// Removes plants permanently. There is no undo and ids are never reused.
/// Deleting an unknown id is a no-op, which makes the operation idempotent.
pub fn run<S: DataStore>(store: &mut S, ids: &[Uuid]) -> Result<CmdResult> {
    let mut plants = store.load_plants()?;
    let mut result = CmdResult::default();

    for id in ids {
        match plants.iter().position(|p| p.id == *id) {
            Some(pos) => {
                let plant = plants.remove(pos);
                result.add_message(CmdMessage::success(format!("Deleted {}", plant.name)));
                result.affected_plants.push(plant);
            }
            None => {
                result.add_message(CmdMessage::info(format!("No plant with id {}", id)));
            }
        }
    }

    store.save_plants(&plants)?;
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn deletes_exactly_the_matching_plant() {
        let mut store = InMemoryStore::new();
        add::run(&mut store, "First", "3", None).unwrap();
        add::run(&mut store, "Second", "5", None).unwrap();

        let first_id = store.load_plants().unwrap()[0].id;
        let result = run(&mut store, &[first_id]).unwrap();

        let remaining = store.load_plants().unwrap();
        assert_eq!(result.affected_plants.len(), 1);
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].name, "Second");
    }

    #[test]
    fn delete_is_idempotent() {
        let mut store = InMemoryStore::new();
        add::run(&mut store, "First", "3", None).unwrap();
        add::run(&mut store, "Second", "5", None).unwrap();

        let first_id = store.load_plants().unwrap()[0].id;
        run(&mut store, &[first_id]).unwrap();
        let after_first = store.load_plants().unwrap();

        let result = run(&mut store, &[first_id]).unwrap();
        assert_eq!(store.load_plants().unwrap(), after_first);
        assert!(result.affected_plants.is_empty());
    }
}
