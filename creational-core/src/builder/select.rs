//! SELECT statement builder implementation

use serde::Serialize;

use super::common::{IntoColumns, OrderByClause, QueryBuilder, SortDirection};
use crate::config::{BuilderConfig, SelectPolicy};
use crate::{Error, Result};

/// Marker rendered (and, under the additive policy, stored) for "all columns"
pub const WILDCARD: &str = "*";

/// Accumulated state of a statement
///
/// Only the owning [`StatementBuilder`] can change it; everything else gets
/// read-only access through the getters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatementSpec {
    subject: String,
    projected_fields: Vec<String>,
    predicates: Vec<String>,
    sort_keys: Vec<OrderByClause>,
    row_limit: Option<i64>,
}

impl StatementSpec {
    fn new(subject: &str) -> Self {
        Self {
            subject: subject.to_string(),
            projected_fields: Vec::new(),
            predicates: Vec::new(),
            sort_keys: Vec::new(),
            row_limit: None,
        }
    }

    /// The collection being queried
    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn projected_fields(&self) -> &[String] {
        &self.projected_fields
    }

    pub fn predicates(&self) -> &[String] {
        &self.predicates
    }

    pub fn sort_keys(&self) -> &[OrderByClause] {
        &self.sort_keys
    }

    pub fn row_limit(&self) -> Option<i64> {
        self.row_limit
    }
}

/// Fluent SELECT statement builder
///
/// Every configuration method consumes the builder and hands back the
/// updated value, so a chain reads top to bottom and a partially built
/// statement can be forked with `clone()`.
///
/// # Examples
/// ```
/// use creational_core::from;
///
/// let sql = from("users")
///     .select(["id", "name", "email"])
///     .where_("age > 18")
///     .where_("country = 'Cri'")
///     .order_by_asc("name")
///     .limit(10)
///     .render();
///
/// assert_eq!(
///     sql,
///     "SELECT id, name, email FROM users WHERE age > 18 AND country = 'Cri' ORDER BY name ASC LIMIT 10"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct StatementBuilder {
    config: BuilderConfig,
    spec: StatementSpec,
}

impl StatementBuilder {
    /// Create a new builder for the given table with the default configuration
    pub fn new(subject: &str) -> Self {
        Self::with_config(subject, BuilderConfig::default())
    }

    /// Create a new builder for the given table with an explicit configuration
    pub fn with_config(subject: &str, config: BuilderConfig) -> Self {
        Self {
            config,
            spec: StatementSpec::new(subject),
        }
    }

    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    pub fn spec(&self) -> &StatementSpec {
        &self.spec
    }

    /// Select columns
    ///
    /// With [`SelectPolicy::Additive`] columns accumulate across calls and an
    /// empty list pushes the `*` marker. With [`SelectPolicy::Replacing`] the
    /// last call wins; an empty list renders as `*`.
    pub fn select<C>(mut self, columns: C) -> Self
    where
        C: IntoColumns,
    {
        let columns = columns.into_columns();

        match self.config.select_policy {
            SelectPolicy::Additive => {
                if columns.is_empty() {
                    self.spec.projected_fields.push(WILDCARD.to_string());
                } else {
                    self.spec.projected_fields.extend(columns);
                }
            }
            SelectPolicy::Replacing => {
                self.spec.projected_fields = columns;
            }
        }
        self
    }

    /// Select all columns (same as `select` with an empty list)
    pub fn select_all(self) -> Self {
        self.select(Vec::<String>::new())
    }

    /// Add a WHERE predicate, AND-ed with the ones before it
    pub fn where_(mut self, condition: &str) -> Self {
        if self.config.skip_blank_predicates && condition.trim().is_empty() {
            tracing::debug!(subject = %self.spec.subject, "skipping blank predicate");
            return self;
        }

        self.spec.predicates.push(condition.to_string());
        self
    }

    /// Add an AND WHERE predicate (same as where_)
    pub fn and_where(self, condition: &str) -> Self {
        self.where_(condition)
    }

    /// Add an ORDER BY key
    pub fn order_by(mut self, column: &str, direction: SortDirection) -> Self {
        self.spec.sort_keys.push(OrderByClause {
            column: column.to_string(),
            direction,
        });
        self
    }

    /// Add an ORDER BY key with the direction given as text (`ASC` / `DESC`)
    pub fn order_by_str(self, column: &str, direction: &str) -> Result<Self> {
        let direction = direction.parse::<SortDirection>()?;
        Ok(self.order_by(column, direction))
    }

    /// Add an ORDER BY ASC key (convenience method)
    pub fn order_by_asc(self, column: &str) -> Self {
        self.order_by(column, SortDirection::Asc)
    }

    /// Add an ORDER BY DESC key (convenience method)
    pub fn order_by_desc(self, column: &str) -> Self {
        self.order_by(column, SortDirection::Desc)
    }

    /// Set the row limit, replacing any earlier value
    ///
    /// Zero and negative counts are kept but render no LIMIT clause.
    pub fn limit(mut self, count: i64) -> Self {
        self.spec.row_limit = Some(count);
        self
    }

    /// Render the statement
    ///
    /// This never fails and never changes the builder.
    pub fn render(&self) -> String {
        let kw = self.config.keyword_case;
        let spec = &self.spec;

        let mut sql = String::new();

        // SELECT clause
        sql.push_str(kw.select());
        sql.push(' ');

        if spec.projected_fields.is_empty() {
            sql.push_str(WILDCARD);
        } else {
            sql.push_str(&spec.projected_fields.join(", "));
        }

        // FROM clause
        sql.push(' ');
        sql.push_str(kw.from_());
        sql.push(' ');
        sql.push_str(&spec.subject);

        // WHERE clause
        if !spec.predicates.is_empty() {
            sql.push(' ');
            sql.push_str(kw.where_());
            sql.push(' ');
            let separator = format!(" {} ", kw.and());
            sql.push_str(&spec.predicates.join(separator.as_str()));
        }

        // ORDER BY clause
        if !spec.sort_keys.is_empty() {
            sql.push(' ');
            sql.push_str(kw.order_by());
            sql.push(' ');
            let order_parts: Vec<String> =
                spec.sort_keys.iter().map(|clause| clause.to_string()).collect();
            sql.push_str(&order_parts.join(", "));
        }

        // LIMIT clause
        if let Some(limit) = spec.row_limit.filter(|n| *n > 0) {
            sql.push_str(&format!(" {} {}", kw.limit(), limit));
        }

        sql
    }

    fn validate(&self) -> Result<()> {
        if self.spec.subject.trim().is_empty() {
            return Err(Error::invalid_argument("subject must not be empty"));
        }

        if let Some(pos) = self.spec.predicates.iter().position(|p| p.trim().is_empty()) {
            return Err(Error::invalid_argument(format!(
                "predicate #{} is blank",
                pos + 1
            )));
        }

        if let Some(pos) = self.spec.projected_fields.iter().position(|f| f.trim().is_empty()) {
            return Err(Error::invalid_argument(format!(
                "selected column #{} is blank",
                pos + 1
            )));
        }

        if let Some(pos) = self.spec.sort_keys.iter().position(|k| k.column.trim().is_empty()) {
            return Err(Error::invalid_argument(format!(
                "sort key #{} has a blank column",
                pos + 1
            )));
        }

        if let Some(limit) = self.spec.row_limit {
            if limit <= 0 {
                return Err(Error::invalid_argument(format!(
                    "limit must be positive, got {}",
                    limit
                )));
            }
        }

        Ok(())
    }
}

impl QueryBuilder for StatementBuilder {
    fn to_sql(&self) -> Result<String> {
        if self.config.strict {
            if let Err(err) = self.validate() {
                tracing::warn!(subject = %self.spec.subject, error = %err, "statement rejected");
                return Err(err);
            }
        }

        let sql = self.render();
        tracing::debug!(target: "creational.sql", subject = %self.spec.subject, sql = %sql, "rendered statement");
        Ok(sql)
    }
}

impl std::fmt::Display for StatementBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}
