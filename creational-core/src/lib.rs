//! creational-core - classic creational patterns as Rust types
//!
//! The centrepiece is a fluent, immutable SELECT statement builder. Alongside
//! it live a step-by-step `Computer` builder and a Factory Method restaurant.

pub mod builder;
pub mod computer;
pub mod config;
pub mod error;
pub mod factory;

// Re-export main types
pub use builder::{
    IntoColumns, OrderByClause, QueryBuilder, SortDirection, StatementBuilder, StatementSpec,
};
pub use computer::{Computer, ComputerBuilder};
pub use config::{BuilderConfig, KeywordCase, SelectPolicy};
pub use error::{Error, Result};
pub use factory::{
    order_by_category, restaurant_for, BeanRestaurant, BeefRestaurant, ChickenRestaurant,
    Hamburger, HamburgerKind, Restaurant,
};

/// Create a new SELECT statement builder for the given table
pub fn from(name: &str) -> StatementBuilder {
    StatementBuilder::new(name)
}
