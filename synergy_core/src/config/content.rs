//! Content pack loading - item catalog entries and synergy registrations

use super::ConfigError;
use crate::catalog::{ItemCatalog, ItemEntry, ItemTable};
use crate::registry::{SynergyPublisher, SynergyRegistry};
use crate::synergy::SynergySpec;
use crate::types::SynergyIndex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Items and synergies shipped together by one piece of content
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentPack {
    #[serde(default)]
    pub items: Vec<ItemEntry>,
    #[serde(default)]
    pub synergies: Vec<SynergySpec>,
}

impl ContentPack {
    /// Reject item tables with ambiguous ids
    ///
    /// Synergy entries are never rejected: bad item references inside them
    /// are dropped at registration time instead.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut ids = HashSet::new();
        let mut console_ids = HashSet::new();
        for item in &self.items {
            if !ids.insert(item.id) {
                return Err(ConfigError::ValidationError(format!(
                    "duplicate item id {}",
                    item.id
                )));
            }
            if !console_ids.insert(item.console_id.as_str()) {
                return Err(ConfigError::ValidationError(format!(
                    "duplicate item console id '{}'",
                    item.console_id
                )));
            }
        }
        Ok(())
    }

    /// Build a catalog from the pack's items
    pub fn item_table(&self) -> ItemTable {
        let mut table = ItemTable::new();
        for item in &self.items {
            table.insert(item.clone());
        }
        table
    }

    /// Register every synergy in file order
    pub fn register_all(
        &self,
        registry: &mut SynergyRegistry,
        catalog: &dyn ItemCatalog,
    ) -> Vec<SynergyIndex> {
        self.synergies
            .iter()
            .map(|spec| registry.register(catalog, spec.clone()))
            .collect()
    }

    /// Register every synergy and forward each one to a host adapter
    pub fn publish_all(
        &self,
        registry: &mut SynergyRegistry,
        catalog: &dyn ItemCatalog,
        publisher: &mut dyn SynergyPublisher,
    ) -> Vec<SynergyIndex> {
        self.synergies
            .iter()
            .map(|spec| registry.register_and_publish(catalog, spec.clone(), publisher))
            .collect()
    }

    /// Build the pack's catalog and register its synergies against it
    pub fn install(&self, registry: &mut SynergyRegistry) -> (ItemTable, Vec<SynergyIndex>) {
        let table = self.item_table();
        let indices = self.register_all(registry, &table);
        log::info!(
            "Installed content pack: {} items, {} synergies",
            table.len(),
            indices.len()
        );
        (table, indices)
    }
}

/// Load and validate a content pack from a TOML file
pub fn load_content(path: &Path) -> Result<ContentPack, ConfigError> {
    let pack: ContentPack = super::load_toml(path)?;
    pack.validate()?;
    Ok(pack)
}

/// Load and validate a content pack from a TOML string
pub fn parse_content(content: &str) -> Result<ContentPack, ConfigError> {
    let pack: ContentPack = super::parse_toml(content)?;
    pack.validate()?;
    Ok(pack)
}
