use serde::{Deserialize, Serialize};

use cellar_core::{BottleId, CellarId, DomainError, DomainResult, Entity, ValueObject};

/// Price of a bottle: a finite, non-negative amount. Zero is a valid price.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Price(pub(crate) f64);

impl Price {
    pub fn new(amount: f64) -> DomainResult<Self> {
        if !amount.is_finite() {
            return Err(DomainError::invalid("price must be a finite number"));
        }
        if amount < 0.0 {
            return Err(DomainError::invalid("price cannot be negative"));
        }
        Ok(Self(amount))
    }

    pub fn amount(self) -> f64 {
        self.0
    }
}

impl ValueObject for Price {}

impl TryFrom<f64> for Price {
    type Error = DomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Price> for f64 {
    fn from(value: Price) -> Self {
        value.0
    }
}

/// A named, priced item owned by exactly one cellar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bottle {
    pub id: BottleId,
    pub name: String,
    pub price: Price,
}

impl Entity for Bottle {
    type Id = BottleId;

    fn id(&self) -> BottleId {
        self.id
    }
}

/// Full cellar record: identity, name, and bottles in insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cellar {
    pub id: CellarId,
    pub name: String,
    pub bottles: Vec<Bottle>,
}

impl Cellar {
    pub fn new(id: CellarId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            bottles: Vec::new(),
        }
    }

    pub fn summary(&self) -> CellarSummary {
        CellarSummary {
            id: self.id,
            name: self.name.clone(),
        }
    }

    pub fn bottle_index(&self, bottle_id: BottleId) -> Option<usize> {
        self.bottles.iter().position(|b| b.id() == bottle_id)
    }
}

impl Entity for Cellar {
    type Id = CellarId;

    fn id(&self) -> CellarId {
        self.id
    }
}

/// Lightweight listing view of a cellar (no bottles).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellarSummary {
    pub id: CellarId,
    pub name: String,
}

/// Command: CreateCellar.
///
/// Fields are optional because callers forward whatever the request carried;
/// presence is checked by [`CreateCellar::validate`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateCellar {
    pub name: Option<String>,
}

impl CreateCellar {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }

    pub(crate) fn validate(self) -> DomainResult<String> {
        required_name(self.name)
    }
}

/// Command: CreateBottle (the owning cellar is passed alongside).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateBottle {
    pub name: Option<String>,
    pub price: Option<f64>,
}

impl CreateBottle {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: Some(name.into()),
            price: Some(price),
        }
    }

    pub(crate) fn validate(self) -> DomainResult<(String, Price)> {
        let name = required_name(self.name)?;
        let price = self
            .price
            .ok_or_else(|| DomainError::invalid("price is required"))
            .and_then(Price::new)?;
        Ok((name, price))
    }
}

fn required_name(name: Option<String>) -> DomainResult<String> {
    match name {
        Some(n) if !n.trim().is_empty() => Ok(n),
        Some(_) => Err(DomainError::invalid("name cannot be empty")),
        None => Err(DomainError::invalid("name is required")),
    }
}
