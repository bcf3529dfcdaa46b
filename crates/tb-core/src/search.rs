//! Case-insensitive substring search over the catalog
//!
//! Results follow catalog order; there is no ranking. Column hits are
//! reported whether or not their table matched.

use crate::table::Table;
use crate::table_type::TableType;
use crate::transformation::{Transformation, TransformationType};
use serde::Serialize;

/// Field that produced a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchReason {
    Name,
    Description,
    Schema,
    TableType,
    Job,
    DataType,
    Logic,
}

/// A matching table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableHit {
    pub name: String,
    pub schema: String,
    pub description: String,
    pub table_type: TableType,
    pub reasons: Vec<MatchReason>,
}

impl TableHit {
    pub fn focus_target(&self) -> Option<String> {
        Some(self.name.clone())
    }
}

/// A matching column
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnHit {
    /// Qualified `table.column` id
    pub id: String,
    pub table: String,
    pub data_type: String,
    pub description: String,
    pub reasons: Vec<MatchReason>,
}

impl ColumnHit {
    pub fn focus_target(&self) -> Option<String> {
        Some(self.id.clone())
    }
}

/// A matching transformation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransformationHit {
    pub name: String,
    pub transformation_type: TransformationType,
    pub description: String,
    pub input_tables: Vec<String>,
    pub output_tables: Vec<String>,
    pub reasons: Vec<MatchReason>,
}

impl TransformationHit {
    /// Transformations are shown against the whole graph, so no focus.
    pub fn focus_target(&self) -> Option<String> {
        None
    }
}

/// All hits for one query
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchResults {
    pub tables: Vec<TableHit>,
    pub columns: Vec<ColumnHit>,
    pub transformations: Vec<TransformationHit>,
}

impl SearchResults {
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty() && self.columns.is_empty() && self.transformations.is_empty()
    }

    pub fn total(&self) -> usize {
        self.tables.len() + self.columns.len() + self.transformations.len()
    }
}

/// Collects the reasons a record matched a lowercased needle.
struct Matcher<'q> {
    needle: &'q str,
    reasons: Vec<MatchReason>,
}

impl<'q> Matcher<'q> {
    fn new(needle: &'q str) -> Self {
        Self {
            needle,
            reasons: Vec::new(),
        }
    }

    fn field(&mut self, reason: MatchReason, value: &str) -> &mut Self {
        if value.to_lowercase().contains(self.needle) {
            self.reasons.push(reason);
        }
        self
    }

    fn any(&mut self, reason: MatchReason, values: &[String]) -> &mut Self {
        if values.iter().any(|v| v.to_lowercase().contains(self.needle)) {
            self.reasons.push(reason);
        }
        self
    }

    fn finish(&mut self) -> Option<Vec<MatchReason>> {
        if self.reasons.is_empty() {
            None
        } else {
            Some(std::mem::take(&mut self.reasons))
        }
    }
}

/// Search tables, columns and transformations for `query`.
///
/// Callers are expected not to pass an empty query; an empty query matches
/// everything.
pub fn search(query: &str, tables: &[Table], transformations: &[Transformation]) -> SearchResults {
    let needle = query.to_lowercase();
    let mut results = SearchResults::default();

    for table in tables {
        let reasons = Matcher::new(&needle)
            .field(MatchReason::Name, &table.name)
            .field(MatchReason::Description, &table.description)
            .field(MatchReason::Schema, &table.schema)
            .field(MatchReason::TableType, table.table_type.label())
            .any(MatchReason::Job, &table.jobs)
            .finish();
        if let Some(reasons) = reasons {
            results.tables.push(TableHit {
                name: table.name.to_string(),
                schema: table.schema.clone(),
                description: table.description.clone(),
                table_type: table.table_type,
                reasons,
            });
        }

        for column in &table.columns {
            let reasons = Matcher::new(&needle)
                .field(MatchReason::Name, &column.name)
                .field(MatchReason::Description, &column.description)
                .field(MatchReason::DataType, &column.data_type)
                .finish();
            if let Some(reasons) = reasons {
                results.columns.push(ColumnHit {
                    id: table.column_id(column),
                    table: table.name.to_string(),
                    data_type: column.data_type.clone(),
                    description: column.description.clone(),
                    reasons,
                });
            }
        }
    }

    for transformation in transformations {
        let reasons = Matcher::new(&needle)
            .field(MatchReason::Name, &transformation.name)
            .field(MatchReason::Description, &transformation.description)
            .field(MatchReason::Logic, &transformation.logic)
            .any(MatchReason::Job, &transformation.jobs)
            .finish();
        if let Some(reasons) = reasons {
            results.transformations.push(TransformationHit {
                name: transformation.name.to_string(),
                transformation_type: transformation.transformation_type,
                description: transformation.description.clone(),
                input_tables: transformation.input_tables.clone(),
                output_tables: transformation.output_tables.clone(),
                reasons,
            });
        }
    }

    log::debug!(
        "Search '{}' matched {} table(s), {} column(s), {} transformation(s)",
        query,
        results.tables.len(),
        results.columns.len(),
        results.transformations.len()
    );

    results
}

#[cfg(test)]
#[path = "search_test.rs"]
mod tests;
