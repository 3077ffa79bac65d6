//! Factory Method: restaurants decide which hamburger they make

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A product created by a [`Restaurant`]
pub trait Hamburger {
    fn name(&self) -> &'static str;

    fn prepare(&self) -> String {
        format!("Preparing {} hamburger", self.name())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ChickenHamburger;

#[derive(Debug, Clone, Copy, Default)]
pub struct BeefHamburger;

#[derive(Debug, Clone, Copy, Default)]
pub struct BeanHamburger;

impl Hamburger for ChickenHamburger {
    fn name(&self) -> &'static str {
        "chicken"
    }
}

impl Hamburger for BeefHamburger {
    fn name(&self) -> &'static str {
        "beef"
    }
}

impl Hamburger for BeanHamburger {
    fn name(&self) -> &'static str {
        "bean"
    }
}

/// Creator side of the pattern
///
/// Implementors only supply `create_hamburger`; ordering is shared.
pub trait Restaurant {
    fn create_hamburger(&self) -> Box<dyn Hamburger>;

    fn order_hamburger(&self) -> String {
        let hamburger = self.create_hamburger();
        let prepared = hamburger.prepare();
        tracing::info!(kind = hamburger.name(), "order prepared");
        prepared
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ChickenRestaurant;

#[derive(Debug, Clone, Copy, Default)]
pub struct BeefRestaurant;

#[derive(Debug, Clone, Copy, Default)]
pub struct BeanRestaurant;

impl Restaurant for ChickenRestaurant {
    fn create_hamburger(&self) -> Box<dyn Hamburger> {
        Box::new(ChickenHamburger)
    }
}

impl Restaurant for BeefRestaurant {
    fn create_hamburger(&self) -> Box<dyn Hamburger> {
        Box::new(BeefHamburger)
    }
}

impl Restaurant for BeanRestaurant {
    fn create_hamburger(&self) -> Box<dyn Hamburger> {
        Box::new(BeanHamburger)
    }
}

/// Hamburger categories a caller may ask for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HamburgerKind {
    Chicken,
    Beef,
    Bean,
}

impl fmt::Display for HamburgerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HamburgerKind::Chicken => write!(f, "chicken"),
            HamburgerKind::Beef => write!(f, "beef"),
            HamburgerKind::Bean => write!(f, "bean"),
        }
    }
}

impl FromStr for HamburgerKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "chicken" => Ok(HamburgerKind::Chicken),
            "beef" => Ok(HamburgerKind::Beef),
            "bean" => Ok(HamburgerKind::Bean),
            _ => Err(Error::unsupported_category(s.trim())),
        }
    }
}

/// Pick the restaurant that makes the given kind
pub fn restaurant_for(kind: HamburgerKind) -> Box<dyn Restaurant> {
    match kind {
        HamburgerKind::Chicken => Box::new(ChickenRestaurant),
        HamburgerKind::Beef => Box::new(BeefRestaurant),
        HamburgerKind::Bean => Box::new(BeanRestaurant),
    }
}

/// Parse a category and place an order with the matching restaurant
pub fn order_by_category(category: &str) -> Result<String> {
    let kind = category.parse::<HamburgerKind>()?;
    Ok(restaurant_for(kind).order_hamburger())
}
