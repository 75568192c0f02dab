//! Versioned, immutable reference data set the conformance suite queries
//! against. Expected-result literals in the suite are written against this
//! snapshot, so every key they name is traceable to a row here.
pub mod entity;
pub mod error;


pub use entity::{Alias, Customer, LineItem, Order, Product, Spouse};
pub use error::FixtureError;

use serde::Deserialize;
use std::{collections::BTreeSet, sync::OnceLock};
use verdict::{key::EntityKey, traits::HasKey};

///
/// CONSTANTS
///

/// Snapshot format version this crate reads.
pub const FIXTURE_VERSION: u32 = 1;

const BUNDLED_FIXTURE: &str = include_str!("../data/fixture_v1.json");

static BUNDLED: OnceLock<Result<Fixture, FixtureError>> = OnceLock::new();

///
/// Fixture
///

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Fixture {
    pub version: u32,
    pub customers: Vec<Customer>,
    pub products: Vec<Product>,
    pub orders: Vec<Order>,
    pub line_items: Vec<LineItem>,
    pub aliases: Vec<Alias>,
    pub spouses: Vec<Spouse>,
}

impl Fixture {
    /// Parse and validate a snapshot.
    pub fn from_json(json: &str) -> Result<Self, FixtureError> {
        let fixture: Self = serde_json::from_str(json)?;
        fixture.validate()?;

        Ok(fixture)
    }

    /// The snapshot shipped with this crate, parsed once per process.
    pub fn bundled() -> Result<&'static Self, FixtureError> {
        BUNDLED
            .get_or_init(|| Self::from_json(BUNDLED_FIXTURE))
            .as_ref()
            .map_err(Clone::clone)
    }

    pub fn validate(&self) -> Result<(), FixtureError> {
        if self.version != FIXTURE_VERSION {
            return Err(FixtureError::Version {
                found: self.version,
                expected: FIXTURE_VERSION,
            });
        }

        let customers = unique_keys("customer", &self.customers)?;
        let products = unique_keys("product", &self.products)?;
        let orders = unique_keys("order", &self.orders)?;
        unique_keys("line item", &self.line_items)?;
        unique_keys("alias", &self.aliases)?;
        unique_keys("spouse", &self.spouses)?;

        for order in &self.orders {
            require(&customers, "order", order, "customer", &order.customer_id)?;
        }
        for item in &self.line_items {
            require(&orders, "line item", item, "order", &item.order_id)?;
            require(&products, "line item", item, "product", &item.product_id)?;
        }
        for alias in &self.aliases {
            for customer_id in &alias.customer_ids {
                require(&customers, "alias", alias, "customer", customer_id)?;
            }
        }
        for spouse in &self.spouses {
            if let Some(customer_id) = &spouse.customer_id {
                require(&customers, "spouse", spouse, "customer", customer_id)?;
            }
        }

        Ok(())
    }

    // ------------------------------------------------------------------
    // Lookups
    // ------------------------------------------------------------------

    #[must_use]
    pub fn customer(&self, id: &str) -> Option<&Customer> {
        self.customers.iter().find(|c| c.id == id)
    }

    #[must_use]
    pub fn order(&self, id: &str) -> Option<&Order> {
        self.orders.iter().find(|o| o.id == id)
    }

    #[must_use]
    pub fn product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    #[must_use]
    pub fn alias(&self, id: &str) -> Option<&Alias> {
        self.aliases.iter().find(|a| a.id == id)
    }

    /// Orders placed by one customer, in snapshot order.
    pub fn orders_of<'a>(&'a self, customer_id: &'a str) -> impl Iterator<Item = &'a Order> {
        self.orders
            .iter()
            .filter(move |o| o.customer_id == customer_id)
    }

    /// Line items of one order, in snapshot order.
    pub fn line_items_of<'a>(&'a self, order_id: &'a str) -> impl Iterator<Item = &'a LineItem> {
        self.line_items
            .iter()
            .filter(move |item| item.order_id == order_id)
    }

    /// The spouse married to a customer, if any.
    #[must_use]
    pub fn spouse_of(&self, customer_id: &str) -> Option<&Spouse> {
        self.spouses
            .iter()
            .find(|s| s.customer_id.as_deref() == Some(customer_id))
    }
}

fn unique_keys<E: HasKey>(
    kind: &'static str,
    rows: &[E],
) -> Result<BTreeSet<EntityKey>, FixtureError> {
    let mut keys = BTreeSet::new();
    for row in rows {
        let key = row.entity_key();
        if keys.contains(&key) {
            return Err(FixtureError::DuplicateKey {
                kind,
                key: key.into_string(),
            });
        }
        keys.insert(key);
    }

    Ok(keys)
}

fn require<E: HasKey>(
    known: &BTreeSet<EntityKey>,
    kind: &'static str,
    row: &E,
    target: &'static str,
    reference: &str,
) -> Result<(), FixtureError> {
    if known.contains(reference) {
        return Ok(());
    }

    Err(FixtureError::DanglingReference {
        kind,
        key: row.entity_key().into_string(),
        target,
        reference: reference.to_string(),
    })
}
