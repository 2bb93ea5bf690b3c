use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Plant;
use crate::store::DataStore;
use chrono::{DateTime, Utc};

/// Registers a new plant.
///
/// `water_every` is taken as the raw user input and must parse as a positive
/// integer. Invalid input (empty name, zero/negative/non-numeric interval)
/// declines without touching the collection: nothing is created, nothing is
/// persisted, and the call still succeeds. The only signal is a warning
/// message for the presentation layer.
pub fn run<S: DataStore>(
    store: &mut S,
    name: &str,
    water_every: &str,
    last_watered: Option<DateTime<Utc>>,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let name = name.trim();
    if name.is_empty() {
        result.add_message(CmdMessage::warning("Plant name cannot be empty"));
        return Ok(result);
    }

    let interval = match water_every.trim().parse::<i64>() {
        Ok(n) if n > 0 => n,
        _ => {
            result.add_message(CmdMessage::warning(format!(
                "Watering interval must be a positive number of days (got \"{}\")",
                water_every
            )));
            return Ok(result);
        }
    };

    let mut plants = store.load_plants()?;
    let plant = Plant::new(name.to_string(), interval, last_watered);
    plants.push(plant.clone());
    store.save_plants(&plants)?;

    result.add_message(CmdMessage::success(format!(
        "Added {} (water every {} days)",
        plant.name, plant.water_every
    )));
    result.affected_plants.push(plant);

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;
    use chrono::Duration;

    #[test]
    fn adds_one_plant() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, "Pothos", "7", None).unwrap();

        let plants = store.load_plants().unwrap();
        assert_eq!(plants.len(), 1);
        assert_eq!(plants[0].name, "Pothos");
        assert_eq!(plants[0].water_every, 7);
        assert_eq!(result.affected_plants.len(), 1);
    }

    #[test]
    fn fresh_plant_is_not_due() {
        let mut store = InMemoryStore::new();
        run(&mut store, "Aloe Vera", "14", None).unwrap();

        let plants = store.load_plants().unwrap();
        assert!(!plants[0].needs_water(Utc::now()));
    }

    #[test]
    fn explicit_last_watered_is_kept() {
        let mut store = InMemoryStore::new();
        let ten_days_ago = Utc::now() - Duration::days(10);
        run(&mut store, "Pothos", "7", Some(ten_days_ago)).unwrap();

        let plants = store.load_plants().unwrap();
        assert_eq!(plants[0].last_watered, ten_days_ago);
        assert!(plants[0].needs_water(Utc::now()));
    }

    #[test]
    fn empty_name_declines_silently() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, "   ", "7", None).unwrap();

        assert!(store.load_plants().unwrap().is_empty());
        assert!(result.affected_plants.is_empty());
        assert!(matches!(
            result.messages[0].level,
            crate::commands::MessageLevel::Warning
        ));
    }

    #[test]
    fn bad_intervals_decline_silently() {
        let mut store = InMemoryStore::new();
        for bad in ["0", "-3", "abc", "", "7.5"] {
            run(&mut store, "Fern", bad, None).unwrap();
        }
        assert!(store.load_plants().unwrap().is_empty());
    }

    #[test]
    fn plants_keep_insertion_order() {
        let mut store = InMemoryStore::new();
        run(&mut store, "First", "3", None).unwrap();
        run(&mut store, "Second", "5", None).unwrap();

        let plants = store.load_plants().unwrap();
        assert_eq!(plants[0].name, "First");
        assert_eq!(plants[1].name, "Second");
    }

    #[test]
    fn ids_are_unique() {
        let mut store = InMemoryStore::new();
        run(&mut store, "Twin", "3", None).unwrap();
        run(&mut store, "Twin", "3", None).unwrap();

        let plants = store.load_plants().unwrap();
        assert_ne!(plants[0].id, plants[1].id);
    }
}
