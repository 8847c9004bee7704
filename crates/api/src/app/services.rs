use cellar_inventory::InventoryStore;

/// Shared state handed to every handler.
///
/// Owns the one inventory store for the process; handlers never keep domain
/// state of their own.
#[derive(Debug, Default)]
pub struct AppServices {
    inventory: InventoryStore,
}

impl AppServices {
    pub fn new() -> Self {
        Self::with_store(InventoryStore::new())
    }

    pub fn with_store(inventory: InventoryStore) -> Self {
        Self { inventory }
    }

    pub fn inventory(&self) -> &InventoryStore {
        &self.inventory
    }
}
