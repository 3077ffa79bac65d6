//! Statement builder module

pub mod common;
pub mod select;

// Re-export types from submodules
pub use common::{IntoColumns, OrderByClause, QueryBuilder, SortDirection};
pub use select::{StatementBuilder, StatementSpec, WILDCARD};
