//! Rendering and accumulation policies for the statement builder

use serde::{Deserialize, Serialize};

use crate::Result;

/// How repeated `select` calls combine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectPolicy {
    /// Every call appends; a call with no columns pushes the `*` marker
    #[default]
    Additive,
    /// The last call wins and fully replaces the projected columns
    Replacing,
}

/// Casing used for SQL keywords in the rendered statement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeywordCase {
    /// `SELECT ... FROM ... WHERE ... AND ... ORDER BY ... LIMIT`
    #[default]
    Upper,
    /// `Select ... from ... where ... and ... order by ... limit`
    Lower,
}

impl KeywordCase {
    pub(crate) fn select(self) -> &'static str {
        match self {
            KeywordCase::Upper => "SELECT",
            KeywordCase::Lower => "Select",
        }
    }

    pub(crate) fn from_(self) -> &'static str {
        match self {
            KeywordCase::Upper => "FROM",
            KeywordCase::Lower => "from",
        }
    }

    pub(crate) fn where_(self) -> &'static str {
        match self {
            KeywordCase::Upper => "WHERE",
            KeywordCase::Lower => "where",
        }
    }

    pub(crate) fn and(self) -> &'static str {
        match self {
            KeywordCase::Upper => "AND",
            KeywordCase::Lower => "and",
        }
    }

    pub(crate) fn order_by(self) -> &'static str {
        match self {
            KeywordCase::Upper => "ORDER BY",
            KeywordCase::Lower => "order by",
        }
    }

    pub(crate) fn limit(self) -> &'static str {
        match self {
            KeywordCase::Upper => "LIMIT",
            KeywordCase::Lower => "limit",
        }
    }
}

/// Builder configuration
///
/// Every field has a default, so a JSON document only needs the keys it
/// wants to override.
///
/// # Examples
/// ```
/// use creational_core::{BuilderConfig, SelectPolicy};
///
/// let config = BuilderConfig::from_json(r#"{"select_policy": "replacing"}"#).unwrap();
/// assert_eq!(config.select_policy, SelectPolicy::Replacing);
/// assert!(config.skip_blank_predicates);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuilderConfig {
    pub select_policy: SelectPolicy,
    pub keyword_case: KeywordCase,
    /// Drop `where` input that is empty or only whitespace
    pub skip_blank_predicates: bool,
    /// Make `to_sql` reject blank subjects, columns, predicates or sort keys and non-positive limits
    pub strict: bool,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            select_policy: SelectPolicy::Additive,
            keyword_case: KeywordCase::Upper,
            skip_blank_predicates: true,
            strict: false,
        }
    }
}

impl BuilderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a configuration from a JSON document
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize this configuration as JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn select_policy(mut self, policy: SelectPolicy) -> Self {
        self.select_policy = policy;
        self
    }

    pub fn keyword_case(mut self, case: KeywordCase) -> Self {
        self.keyword_case = case;
        self
    }

    pub fn skip_blank_predicates(mut self, skip: bool) -> Self {
        self.skip_blank_predicates = skip;
        self
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_defaults() {
        let config = BuilderConfig::default();
        assert_eq!(config.select_policy, SelectPolicy::Additive);
        assert_eq!(config.keyword_case, KeywordCase::Upper);
        assert!(config.skip_blank_predicates);
        assert!(!config.strict);
    }

    #[test]
    fn test_setters_chain() {
        let config = BuilderConfig::new()
            .select_policy(SelectPolicy::Replacing)
            .keyword_case(KeywordCase::Lower)
            .skip_blank_predicates(false)
            .strict(true);
        assert_eq!(config.select_policy, SelectPolicy::Replacing);
        assert_eq!(config.keyword_case, KeywordCase::Lower);
        assert!(!config.skip_blank_predicates);
        assert!(config.strict);
    }

    #[test]
    fn test_from_json_full() {
        let json = r#"{
            "select_policy": "replacing",
            "keyword_case": "lower",
            "skip_blank_predicates": false,
            "strict": true
        }"#;
        let config = BuilderConfig::from_json(json).unwrap();
        assert_eq!(
            config,
            BuilderConfig::new()
                .select_policy(SelectPolicy::Replacing)
                .keyword_case(KeywordCase::Lower)
                .skip_blank_predicates(false)
                .strict(true)
        );
    }

    #[test]
    fn test_from_json_empty_object_uses_defaults() {
        let config = BuilderConfig::from_json("{}").unwrap();
        assert_eq!(config, BuilderConfig::default());
    }

    #[test]
    fn test_from_json_unknown_policy() {
        let err = BuilderConfig::from_json(r#"{"select_policy": "merge"}"#).unwrap_err();
        assert!(matches!(err, Error::Serialization(_)));
    }

    #[test]
    fn test_json_shape() {
        let json = BuilderConfig::default().to_json().unwrap();
        assert_eq!(
            json,
            r#"{"select_policy":"additive","keyword_case":"upper","skip_blank_predicates":true,"strict":false}"#
        );
    }

    #[test]
    fn test_keyword_tables() {
        assert_eq!(KeywordCase::Upper.select(), "SELECT");
        assert_eq!(KeywordCase::Lower.select(), "Select");
        assert_eq!(KeywordCase::Upper.order_by(), "ORDER BY");
        assert_eq!(KeywordCase::Lower.order_by(), "order by");
    }
}
