use super::DataStore;
use crate::error::Result;
use crate::model::Plant;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    plants: Vec<Plant>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataStore for InMemoryStore {
    fn load_plants(&self) -> Result<Vec<Plant>> {
        Ok(self.plants.clone())
    }

    fn save_plants(&mut self, plants: &[Plant]) -> Result<()> {
        self.plants = plants.to_vec();
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use chrono::{Duration, Utc};

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_plant(mut self, name: &str, water_every: i64) -> Self {
            let mut plants = self.store.load_plants().unwrap();
            plants.push(Plant::new(name.to_string(), water_every, None));
            self.store.save_plants(&plants).unwrap();
            self
        }

        pub fn with_overdue_plant(mut self, name: &str, water_every: i64) -> Self {
            let mut plant = Plant::new(name.to_string(), water_every, None);
            plant.last_watered = Utc::now() - Duration::days(water_every + 3);
            let mut plants = self.store.load_plants().unwrap();
            plants.push(plant);
            self.store.save_plants(&plants).unwrap();
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_builds_overdue_plants() {
        let fixture = fixtures::StoreFixture::new()
            .with_plant("Fresh", 7)
            .with_overdue_plant("Thirsty", 7);

        let plants = fixture.store.load_plants().unwrap();
        assert_eq!(plants.len(), 2);
        assert!(!plants[0].needs_water(chrono::Utc::now()));
        assert!(plants[1].needs_water(chrono::Utc::now()));
    }

    #[test]
    fn preserves_insertion_order() {
        let mut store = InMemoryStore::new();
        let a = Plant::new("A".to_string(), 3, None);
        let b = Plant::new("B".to_string(), 5, None);
        store.save_plants(&[a.clone(), b.clone()]).unwrap();

        let loaded = store.load_plants().unwrap();
        assert_eq!(loaded, vec![a, b]);
    }
}
