//! Cellar inventory domain module.
//!
//! Cellars own bottles; the [`InventoryStore`] owns cellars and hands out
//! identifiers. Pure in-memory domain logic (no IO, no HTTP).

pub mod cellar;
pub mod store;

pub use cellar::{Bottle, Cellar, CellarSummary, CreateBottle, CreateCellar, Price};
pub use store::{InventoryStore, SEED_BOTTLE_NAME, SEED_BOTTLE_PRICE, SEED_CELLAR_NAME};
