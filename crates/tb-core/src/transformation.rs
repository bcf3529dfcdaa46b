//! Transformations and the column mappings they carry

use crate::error::CoreError;
use crate::names::TransformationName;
use crate::serde_helpers::{now_timestamp, timestamp};
use crate::table::ColumnRef;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of logic a transformation runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TransformationType {
    #[default]
    #[serde(rename = "SQL")]
    Sql,
    Python,
    #[serde(rename = "ETL")]
    Etl,
    Custom,
}

impl TransformationType {
    pub const ALL: [TransformationType; 4] = [
        TransformationType::Sql,
        TransformationType::Python,
        TransformationType::Etl,
        TransformationType::Custom,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TransformationType::Sql => "SQL",
            TransformationType::Python => "Python",
            TransformationType::Etl => "ETL",
            TransformationType::Custom => "Custom",
        }
    }
}

impl fmt::Display for TransformationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TransformationType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        TransformationType::ALL
            .into_iter()
            .find(|t| t.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CoreError::UnknownVariant {
                kind: "transformation type",
                value: s.to_string(),
                expected: "SQL, Python, ETL, Custom".to_string(),
            })
    }
}

/// A process reading input tables and writing output tables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transformation {
    /// Transformation name, unique within the catalog
    pub name: TransformationName,

    pub transformation_type: TransformationType,

    /// Names of tables read; may dangle
    pub input_tables: Vec<String>,

    /// Names of tables written; may dangle
    pub output_tables: Vec<String>,

    /// Free-text code or query
    #[serde(default)]
    pub logic: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub column_mappings: Vec<ColumnMapping>,

    /// Scheduler job names, kept in insertion order
    #[serde(rename = "autosys_jobs", default)]
    pub jobs: Vec<String>,

    #[serde(with = "timestamp", default = "now_timestamp")]
    pub created_date: NaiveDateTime,
}

impl Transformation {
    pub fn new<I, O, S, T>(
        name: TransformationName,
        transformation_type: TransformationType,
        input_tables: I,
        output_tables: O,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        O: IntoIterator<Item = T>,
        S: Into<String>,
        T: Into<String>,
    {
        Self {
            name,
            transformation_type,
            input_tables: input_tables.into_iter().map(Into::into).collect(),
            output_tables: output_tables.into_iter().map(Into::into).collect(),
            logic: String::new(),
            description: String::new(),
            column_mappings: Vec::new(),
            jobs: Vec::new(),
            created_date: now_timestamp(),
        }
    }

    pub fn with_logic(mut self, logic: impl Into<String>) -> Self {
        self.logic = logic.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_jobs<I, S>(mut self, jobs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.jobs = jobs.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_mappings(mut self, mappings: Vec<ColumnMapping>) -> Self {
        self.column_mappings = mappings;
        self
    }

    /// Index of the first mapping between `source` and `target`
    pub fn find_mapping(&self, source: &ColumnRef, target: &ColumnRef) -> Option<usize> {
        self.column_mappings
            .iter()
            .position(|m| m.source() == *source && m.target() == *target)
    }
}

/// One source column feeding one target column within a transformation.
///
/// Endpoints are plain strings, not live references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMapping {
    pub source_table: String,
    pub source_column: String,
    pub target_table: String,
    pub target_column: String,

    /// How the target value is derived
    #[serde(default)]
    pub transformation_rule: String,
}

impl ColumnMapping {
    pub fn new(source: ColumnRef, target: ColumnRef, rule: impl Into<String>) -> Self {
        Self {
            source_table: source.table,
            source_column: source.column,
            target_table: target.table,
            target_column: target.column,
            transformation_rule: rule.into(),
        }
    }

    pub fn source(&self) -> ColumnRef {
        ColumnRef::new(&self.source_table, &self.source_column)
    }

    pub fn target(&self) -> ColumnRef {
        ColumnRef::new(&self.target_table, &self.target_column)
    }

    /// `source_table.source_column`
    pub fn source_id(&self) -> String {
        format!("{}.{}", self.source_table, self.source_column)
    }

    /// `target_table.target_column`
    pub fn target_id(&self) -> String {
        format!("{}.{}", self.target_table, self.target_column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_serde_labels() {
        assert_eq!(serde_json::to_string(&TransformationType::Sql).unwrap(), r#""SQL""#);
        assert_eq!(serde_json::to_string(&TransformationType::Etl).unwrap(), r#""ETL""#);
        assert_eq!(
            serde_json::to_string(&TransformationType::Python).unwrap(),
            r#""Python""#
        );
        let t: TransformationType = serde_json::from_str(r#""Custom""#).unwrap();
        assert_eq!(t, TransformationType::Custom);
    }

    #[test]
    fn test_type_parse_case_insensitive() {
        assert_eq!("etl".parse::<TransformationType>().unwrap(), TransformationType::Etl);
        assert!("spark".parse::<TransformationType>().is_err());
    }

    #[test]
    fn test_mapping_ids() {
        let m = ColumnMapping::new(
            ColumnRef::new("orders", "amount"),
            ColumnRef::new("sales_summary", "total_sales"),
            "Sum aggregation",
        );
        assert_eq!(m.source_id(), "orders.amount");
        assert_eq!(m.target_id(), "sales_summary.total_sales");
    }

    #[test]
    fn test_find_mapping() {
        let t = Transformation::new(
            TransformationName::new("t"),
            TransformationType::Sql,
            ["a"],
            ["b"],
        )
        .with_mappings(vec![
            ColumnMapping::new(ColumnRef::new("a", "x"), ColumnRef::new("b", "y"), ""),
            ColumnMapping::new(ColumnRef::new("a", "z"), ColumnRef::new("b", "y"), ""),
        ]);
        let idx = t.find_mapping(&ColumnRef::new("a", "z"), &ColumnRef::new("b", "y"));
        assert_eq!(idx, Some(1));
        assert_eq!(
            t.find_mapping(&ColumnRef::new("a", "q"), &ColumnRef::new("b", "y")),
            None
        );
    }

    #[test]
    fn test_deserialize_legacy_transformation() {
        let json = r#"{
            "name": "load",
            "transformation_type": "ETL",
            "input_tables": ["raw"],
            "output_tables": ["clean"],
            "logic": "copy",
            "description": "Nightly load"
        }"#;
        let t: Transformation = serde_json::from_str(json).unwrap();
        assert!(t.jobs.is_empty());
        assert!(t.column_mappings.is_empty());
        assert_eq!(t.transformation_type, TransformationType::Etl);
    }
}
