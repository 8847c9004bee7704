use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use cellar_core::{BottleId, CellarId, DomainError, DomainResult, Entity};

use crate::cellar::{Bottle, Cellar, CellarSummary, CreateBottle, CreateCellar, Price};

pub const SEED_CELLAR_NAME: &str = "Jeremy's cellar";
pub const SEED_BOTTLE_NAME: &str = "Saint Emilion";
pub const SEED_BOTTLE_PRICE: f64 = 12.89;

#[derive(Debug)]
struct Inner {
    cellars: Vec<Cellar>,
    next_cellar_id: CellarId,
    next_bottle_id: BottleId,
}

impl Inner {
    fn seeded() -> Self {
        let mut cellar = Cellar::new(CellarId::new(0), SEED_CELLAR_NAME);
        cellar.bottles.push(Bottle {
            id: BottleId::new(0),
            name: SEED_BOTTLE_NAME.to_string(),
            price: Price(SEED_BOTTLE_PRICE),
        });

        Self {
            cellars: vec![cellar],
            next_cellar_id: CellarId::new(1),
            next_bottle_id: BottleId::new(1),
        }
    }

    fn cellar_index(&self, id: CellarId) -> Option<usize> {
        self.cellars.iter().position(|c| c.id() == id)
    }

    fn cellar(&self, id: CellarId) -> Option<&Cellar> {
        self.cellars.iter().find(|c| c.id() == id)
    }

    /// Locate a bottle anywhere in the store: (cellar index, bottle index).
    fn find_bottle(&self, bottle_id: BottleId) -> Option<(usize, usize)> {
        self.cellars
            .iter()
            .enumerate()
            .find_map(|(ci, c)| c.bottle_index(bottle_id).map(|bi| (ci, bi)))
    }

    fn allocate_cellar_id(&mut self) -> DomainResult<CellarId> {
        let id = self.next_cellar_id;
        self.next_cellar_id = id
            .next()
            .ok_or_else(|| DomainError::invalid("cellar identifier space exhausted"))?;
        Ok(id)
    }

    fn allocate_bottle_id(&mut self) -> DomainResult<BottleId> {
        let id = self.next_bottle_id;
        self.next_bottle_id = id
            .next()
            .ok_or_else(|| DomainError::invalid("bottle identifier space exhausted"))?;
        Ok(id)
    }
}

/// Process-wide owner of all cellars and bottles.
///
/// Every operation takes the lock exactly once, so identifier allocation and
/// the matching sequence mutation happen as one unit. Mutations validate
/// everything before changing state: a failed call leaves the store (counters
/// included) untouched.
#[derive(Debug)]
pub struct InventoryStore {
    inner: RwLock<Inner>,
}

impl InventoryStore {
    /// A store holding the seed cellar and bottle.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner::seeded()),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Discard all state and restore the seed cellar/bottle and both counters.
    pub fn reset(&self) {
        *self.write() = Inner::seeded();
        tracing::info!("inventory reset to seed state");
    }

    pub fn list_cellars(&self) -> Vec<CellarSummary> {
        self.read().cellars.iter().map(Cellar::summary).collect()
    }

    pub fn cellar_count(&self) -> usize {
        self.read().cellars.len()
    }

    pub fn get_cellar(&self, id: CellarId) -> DomainResult<Cellar> {
        self.read().cellar(id).cloned().ok_or_else(DomainError::not_found)
    }

    pub fn create_cellar(&self, cmd: CreateCellar) -> DomainResult<Cellar> {
        let name = cmd.validate()?;

        let mut inner = self.write();
        let id = inner.allocate_cellar_id()?;
        let cellar = Cellar::new(id, name);
        inner.cellars.push(cellar.clone());

        tracing::debug!(cellar_id = %id, name = %cellar.name, "cellar created");
        Ok(cellar)
    }

    /// Remove a cellar and every bottle it owns.
    ///
    /// An unknown id is `InvalidInput`, not `NotFound`: a write that names a
    /// missing resource is a rejected request.
    pub fn delete_cellar(&self, id: CellarId) -> DomainResult<()> {
        let mut inner = self.write();
        let index = inner
            .cellar_index(id)
            .ok_or_else(|| DomainError::invalid(format!("no cellar {id}")))?;
        let removed = inner.cellars.remove(index);

        tracing::debug!(cellar_id = %id, bottles = removed.bottles.len(), "cellar deleted");
        Ok(())
    }

    pub fn list_bottles(&self, cellar_id: CellarId) -> DomainResult<Vec<Bottle>> {
        self.read()
            .cellar(cellar_id)
            .map(|c| c.bottles.clone())
            .ok_or_else(DomainError::not_found)
    }

    pub fn create_bottle(&self, cellar_id: CellarId, cmd: CreateBottle) -> DomainResult<Bottle> {
        let (name, price) = cmd.validate()?;

        let mut inner = self.write();
        let index = inner
            .cellar_index(cellar_id)
            .ok_or_else(|| DomainError::invalid(format!("no cellar {cellar_id}")))?;
        let id = inner.allocate_bottle_id()?;
        let bottle = Bottle { id, name, price };
        inner.cellars[index].bottles.push(bottle.clone());

        tracing::debug!(cellar_id = %cellar_id, bottle_id = %id, name = %bottle.name, "bottle created");
        Ok(bottle)
    }

    /// Remove a bottle from the cellar that owns it and return that cellar.
    ///
    /// The bottle is looked up across the whole store; it must be owned by
    /// `cellar_id`, otherwise the request is rejected and nothing changes.
    pub fn delete_bottle(&self, cellar_id: CellarId, bottle_id: BottleId) -> DomainResult<Cellar> {
        let mut inner = self.write();
        let (ci, bi) = inner
            .find_bottle(bottle_id)
            .ok_or_else(|| DomainError::invalid(format!("no bottle {bottle_id}")))?;

        let owner = &mut inner.cellars[ci];
        if owner.id != cellar_id {
            return Err(DomainError::invalid(format!(
                "bottle {bottle_id} belongs to cellar {}, not {cellar_id}",
                owner.id
            )));
        }
        owner.bottles.remove(bi);

        tracing::debug!(cellar_id = %cellar_id, bottle_id = %bottle_id, "bottle deleted");
        Ok(owner.clone())
    }
}

impl Default for InventoryStore {
    fn default() -> Self {
        Self::new()
    }
}
