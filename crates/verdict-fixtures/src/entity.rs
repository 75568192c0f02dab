//! Reference entities of the conformance fixture.
use serde::Deserialize;
use verdict::traits::HasKey;

///
/// Customer
///

#[derive(Clone, Debug, Deserialize, HasKey, PartialEq)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub state: Option<String>,
    pub country: String,
}

///
/// Product
///

#[derive(Clone, Debug, Deserialize, HasKey, PartialEq)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
}

///
/// Order
///

#[derive(Clone, Debug, Deserialize, HasKey, PartialEq)]
pub struct Order {
    pub id: String,
    pub customer_id: String,
    pub total_price: f64,
}

///
/// LineItem
/// Keyed by its order and position within that order.
///

#[derive(Clone, Debug, Deserialize, HasKey, PartialEq)]
pub struct LineItem {
    #[key]
    pub order_id: String,
    #[key]
    pub position: u32,
    pub product_id: String,
    pub quantity: u32,
}

///
/// Alias
///

#[derive(Clone, Debug, Deserialize, HasKey, PartialEq)]
pub struct Alias {
    pub id: String,
    pub alias: String,
    #[serde(default)]
    pub customer_ids: Vec<String>,
}

///
/// Spouse
///

#[derive(Clone, Debug, Deserialize, HasKey, PartialEq)]
pub struct Spouse {
    pub id: String,
    pub first: String,
    pub last: String,
    pub customer_id: Option<String>,
}
