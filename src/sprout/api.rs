//! # API Facade
//!
//! The API layer is a thin facade over the command layer and the single
//! entry point for all sprout operations, regardless of the UI driving it.
//!
//! It dispatches to the right command, normalizes user-facing inputs
//! (display indexes become plant ids), and returns structured
//! `Result<CmdResult>` values. Business logic lives in `commands/*.rs`;
//! presentation lives with the caller.
//!
//! `SproutApi<S: DataStore>` is generic over the storage backend:
//! `FileStore` in production, `InMemoryStore` in tests.

use crate::commands;
use crate::error::{Result, SproutError};
use crate::index::DisplayIndex;
use crate::store::DataStore;
use chrono::{DateTime, Utc};
use std::str::FromStr;

/// The main API facade for sprout operations.
///
/// All UI clients should interact through this API rather than calling
/// commands directly.
pub struct SproutApi<S: DataStore> {
    store: S,
    paths: commands::SproutPaths,
}

impl<S: DataStore> SproutApi<S> {
    pub fn new(store: S, paths: commands::SproutPaths) -> Self {
        Self { store, paths }
    }

    pub fn add_plant(
        &mut self,
        name: &str,
        water_every: &str,
        last_watered: Option<DateTime<Utc>>,
    ) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, name, water_every, last_watered)
    }

    pub fn list_plants(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn water_plants<I: AsRef<str>>(&mut self, indexes: &[I]) -> Result<commands::CmdResult> {
        let parsed = parse_indexes(indexes)?;
        let ids = commands::helpers::resolve_indexes(&self.store, &parsed)?;
        commands::water::run(&mut self.store, &ids)
    }

    pub fn delete_plants<I: AsRef<str>>(&mut self, indexes: &[I]) -> Result<commands::CmdResult> {
        let parsed = parse_indexes(indexes)?;
        let ids = commands::helpers::resolve_indexes(&self.store, &parsed)?;
        commands::delete::run(&mut self.store, &ids)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn init(&self) -> Result<commands::CmdResult> {
        commands::init::run(&self.paths)
    }

    pub fn paths(&self) -> &commands::SproutPaths {
        &self.paths
    }
}

fn parse_indexes<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<DisplayIndex>> {
    inputs
        .iter()
        .map(|s| DisplayIndex::from_str(s.as_ref()).map_err(SproutError::Api))
        .collect()
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel, SproutPaths};
