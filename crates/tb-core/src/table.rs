//! Tables, their columns, and `table.column` references

use crate::error::{CoreError, CoreResult};
use crate::names::{ColumnName, TableName};
use crate::serde_helpers::{now_timestamp, timestamp};
use crate::table_type::TableType;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A cataloged table. Owns its columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    /// Table name, unique within the catalog
    pub name: TableName,

    /// Namespace the table lives in
    pub schema: String,

    #[serde(default)]
    pub description: String,

    /// Source system type
    #[serde(default)]
    pub table_type: TableType,

    /// Scheduler job names, kept in insertion order
    #[serde(rename = "autosys_jobs", default)]
    pub jobs: Vec<String>,

    /// Columns in display order
    #[serde(default)]
    pub columns: Vec<Column>,

    /// Derived completeness score (0-100)
    #[serde(default)]
    pub quality_score: u8,

    /// Set on creation and on every edit
    #[serde(with = "timestamp", default = "now_timestamp")]
    pub last_updated: NaiveDateTime,
}

impl Table {
    /// Create an empty table of type `Other`
    pub fn new(name: TableName, schema: impl Into<String>) -> Self {
        Self {
            name,
            schema: schema.into(),
            description: String::new(),
            table_type: TableType::Other,
            jobs: Vec::new(),
            columns: Vec::new(),
            quality_score: 0,
            last_updated: now_timestamp(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_type(mut self, table_type: TableType) -> Self {
        self.table_type = table_type;
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

    pub fn with_columns(mut self, columns: Vec<Column>) -> Self {
        self.columns = columns;
        self
    }

    /// Find a column by name
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn column_mut(&mut self, name: &str) -> Option<&mut Column> {
        self.columns.iter_mut().find(|c| c.name == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column(name).is_some()
    }

    /// Qualified id (`table.column`) of one of this table's columns
    pub fn column_id(&self, column: &Column) -> String {
        format!("{}.{}", self.name, column.name)
    }

    /// Qualified ids of every column, in column order
    pub fn column_ids(&self) -> impl Iterator<Item = String> + '_ {
        self.columns.iter().map(move |c| self.column_id(c))
    }

    /// Refresh `last_updated`
    pub fn touch(&mut self) {
        self.last_updated = now_timestamp();
    }
}

/// A column owned by a table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    /// Column name, unique within its table
    pub name: ColumnName,

    /// Free-text data type (e.g. `VARCHAR`, `DECIMAL(10,2)`)
    pub data_type: String,

    #[serde(default)]
    pub description: String,

    /// Upstream columns feeding this one, as `table.column` strings
    #[serde(default)]
    pub source_columns: Vec<String>,

    /// Derived completeness score (never above 30, see `quality`)
    #[serde(default)]
    pub quality_score: u8,
}

impl Column {
    pub fn new(name: ColumnName, data_type: impl Into<String>) -> Self {
        Self {
            name,
            data_type: data_type.into(),
            description: String::new(),
            source_columns: Vec::new(),
            quality_score: 0,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_sources<I, S>(mut self, sources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.source_columns = sources.into_iter().map(Into::into).collect();
        self
    }

    /// Append a source reference unless it is already listed.
    /// Returns whether the list changed.
    pub fn add_source(&mut self, source: &str) -> bool {
        if self.source_columns.iter().any(|s| s == source) {
            return false;
        }
        self.source_columns.push(source.to_string());
        true
    }

    /// Remove the first occurrence of a source reference.
    /// Returns whether the list changed.
    pub fn remove_source(&mut self, source: &str) -> bool {
        match self.source_columns.iter().position(|s| s == source) {
            Some(pos) => {
                self.source_columns.remove(pos);
                true
            }
            None => false,
        }
    }
}

/// A `table.column` reference. Neither half is required to exist.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColumnRef {
    pub table: String,
    pub column: String,
}

impl ColumnRef {
    pub fn new(table: impl Into<String>, column: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            column: column.into(),
        }
    }

    /// Parse `table.column`, splitting at the first `.`
    pub fn parse(reference: &str) -> CoreResult<Self> {
        let invalid = || CoreError::InvalidColumnRef {
            reference: reference.to_string(),
        };
        let (table, column) = reference.trim().split_once('.').ok_or_else(invalid)?;
        let (table, column) = (table.trim(), column.trim());
        if table.is_empty() || column.is_empty() {
            return Err(invalid());
        }
        Ok(Self::new(table, column))
    }
}

impl fmt::Display for ColumnRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.table, self.column)
    }
}

#[cfg(test)]
#[path = "table_test.rs"]
mod tests;
