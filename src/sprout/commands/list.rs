use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::index_plants;
use crate::store::DataStore;
use chrono::Utc;

/// Lists all plants in insertion order, with the derived schedule computed
/// against the current time. Read-only; never persists.
pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    let plants = store.load_plants()?;
    let listed = index_plants(plants, Utc::now());
    Ok(CmdResult::default().with_listed_plants(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use crate::index::DisplayIndex;
    use crate::store::memory::InMemoryStore;
    use chrono::Duration;

    #[test]
    fn lists_plants_with_schedule() {
        let mut store = InMemoryStore::new();
        add::run(&mut store, "Pothos", "7", Some(Utc::now() - Duration::days(10))).unwrap();
        add::run(&mut store, "Aloe Vera", "14", None).unwrap();

        let result = run(&store).unwrap();
        assert_eq!(result.listed_plants.len(), 2);

        let pothos = &result.listed_plants[0];
        assert_eq!(pothos.index, DisplayIndex(1));
        assert!(pothos.schedule.needs_water);

        let aloe = &result.listed_plants[1];
        assert_eq!(aloe.index, DisplayIndex(2));
        assert!(!aloe.schedule.needs_water);
        let today = Utc::now().with_timezone(&chrono::Local).date_naive();
        assert_eq!(aloe.schedule.next_watering, today + chrono::Days::new(14));
    }

    #[test]
    fn listing_does_not_mutate() {
        let mut store = InMemoryStore::new();
        add::run(&mut store, "Pothos", "7", None).unwrap();
        let before = store.load_plants().unwrap();

        run(&store).unwrap();
        assert_eq!(store.load_plants().unwrap(), before);
    }
}
