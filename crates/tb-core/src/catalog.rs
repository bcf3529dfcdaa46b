//! The catalog: the single owner of all tables and transformations
//!
//! Every mutation validates its input completely before touching state, and
//! ends by refreshing quality scores. Lookup misses are reported as
//! `CoreError::*NotFound` and leave the catalog unchanged.

use crate::error::{CoreError, CoreResult};
use crate::names::{ColumnName, TableName, TransformationName};
use crate::quality::refresh_quality;
use crate::table::{Column, ColumnRef, Table};
use crate::table_type::TableType;
use crate::transformation::{ColumnMapping, Transformation, TransformationType};
use serde::Serialize;

/// Field values for creating or editing a table
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableDraft {
    pub name: String,
    pub schema: String,
    pub description: String,
    pub table_type: TableType,
    pub jobs: Vec<String>,
}

impl From<&Table> for TableDraft {
    fn from(table: &Table) -> Self {
        Self {
            name: table.name.to_string(),
            schema: table.schema.clone(),
            description: table.description.clone(),
            table_type: table.table_type,
            jobs: table.jobs.clone(),
        }
    }
}

/// Field values for creating or editing a column
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnDraft {
    pub name: String,
    pub data_type: String,
    pub description: String,
    pub source_columns: Vec<String>,
}

impl From<&Column> for ColumnDraft {
    fn from(column: &Column) -> Self {
        Self {
            name: column.name.to_string(),
            data_type: column.data_type.clone(),
            description: column.description.clone(),
            source_columns: column.source_columns.clone(),
        }
    }
}

/// Field values for creating or editing a transformation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransformationDraft {
    pub name: String,
    pub transformation_type: TransformationType,
    pub input_tables: Vec<String>,
    pub output_tables: Vec<String>,
    pub logic: String,
    pub description: String,
    pub jobs: Vec<String>,
}

impl From<&Transformation> for TransformationDraft {
    fn from(t: &Transformation) -> Self {
        Self {
            name: t.name.to_string(),
            transformation_type: t.transformation_type,
            input_tables: t.input_tables.clone(),
            output_tables: t.output_tables.clone(),
            logic: t.logic.clone(),
            description: t.description.clone(),
            jobs: t.jobs.clone(),
        }
    }
}

/// Summary counts for the catalog
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogStats {
    pub tables: usize,
    pub columns: usize,
    pub transformations: usize,
    pub mappings: usize,
    /// Mean table quality score, 0.0 for an empty catalog
    pub average_quality: f64,
}

/// In-memory catalog of tables and transformations
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    tables: Vec<Table>,
    transformations: Vec<Transformation>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from existing records, recomputing quality scores
    pub fn from_parts(tables: Vec<Table>, transformations: Vec<Transformation>) -> Self {
        let mut catalog = Self {
            tables,
            transformations,
        };
        catalog.refresh_quality();
        catalog
    }

    /// Consume the catalog, returning its records
    pub fn into_parts(self) -> (Vec<Table>, Vec<Transformation>) {
        (self.tables, self.transformations)
    }

    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    pub fn transformations(&self) -> &[Transformation] {
        &self.transformations
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty() && self.transformations.is_empty()
    }

    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables.iter().find(|t| t.name == name)
    }

    pub fn transformation(&self, name: &str) -> Option<&Transformation> {
        self.transformations.iter().find(|t| t.name == name)
    }

    /// Look up a column by `table.column` id
    pub fn column(&self, reference: &ColumnRef) -> Option<&Column> {
        self.table(&reference.table)?.column(&reference.column)
    }

    /// Every `table.column` id, in catalog order
    pub fn column_ids(&self) -> Vec<String> {
        self.tables.iter().flat_map(|t| t.column_ids()).collect()
    }

    /// True when `id` names a table or a `table.column`
    pub fn has_entity(&self, id: &str) -> bool {
        if self.table(id).is_some() {
            return true;
        }
        ColumnRef::parse(id)
            .map(|r| self.column(&r).is_some())
            .unwrap_or(false)
    }

    /// Recompute every derived quality score
    pub fn refresh_quality(&mut self) {
        refresh_quality(&mut self.tables);
    }

    pub fn stats(&self) -> CatalogStats {
        let columns = self.tables.iter().map(|t| t.columns.len()).sum();
        let mappings = self
            .transformations
            .iter()
            .map(|t| t.column_mappings.len())
            .sum();
        let average_quality = if self.tables.is_empty() {
            0.0
        } else {
            let total: u32 = self.tables.iter().map(|t| t.quality_score as u32).sum();
            total as f64 / self.tables.len() as f64
        };
        CatalogStats {
            tables: self.tables.len(),
            columns,
            transformations: self.transformations.len(),
            mappings,
            average_quality,
        }
    }

    // ----- tables -----

    /// Add a new table. Name and schema are required; the name must be unused.
    pub fn add_table(&mut self, draft: TableDraft) -> CoreResult<&Table> {
        let name = require_name(TableName::try_new(draft.name.as_str()), "Table", "name")?;
        require_text(&draft.schema, "Table", "schema")?;
        if self.table(&name).is_some() {
            return Err(CoreError::DuplicateTable {
                name: name.into_inner(),
            });
        }

        let table = Table::new(name, draft.schema.trim())
            .with_description(draft.description)
            .with_type(draft.table_type)
            .with_jobs(normalize_list(draft.jobs));
        log::debug!("Adding table '{}'", table.name);
        self.tables.push(table);
        self.refresh_quality();
        Ok(&self.tables[self.tables.len() - 1])
    }

    /// Replace a table's own fields; its columns are kept.
    ///
    /// Renaming does not rewrite references held by transformations or
    /// source lists.
    pub fn update_table(&mut self, name: &str, draft: TableDraft) -> CoreResult<&Table> {
        let idx = self.table_index(name)?;
        let new_name = require_name(TableName::try_new(draft.name.as_str()), "Table", "name")?;
        require_text(&draft.schema, "Table", "schema")?;
        if new_name != name && self.table(&new_name).is_some() {
            return Err(CoreError::DuplicateTable {
                name: new_name.into_inner(),
            });
        }

        let table = &mut self.tables[idx];
        table.name = new_name;
        table.schema = draft.schema.trim().to_string();
        table.description = draft.description;
        table.table_type = draft.table_type;
        table.jobs = normalize_list(draft.jobs);
        table.touch();
        self.refresh_quality();
        Ok(&self.tables[idx])
    }

    /// Remove a table. Dangling references elsewhere are left in place.
    pub fn remove_table(&mut self, name: &str) -> CoreResult<Table> {
        let idx = self.table_index(name)?;
        let removed = self.tables.remove(idx);
        log::debug!("Removed table '{}'", removed.name);
        self.refresh_quality();
        Ok(removed)
    }

    // ----- columns -----

    /// Add a column to a table. Name and data type are required.
    pub fn add_column(&mut self, table: &str, draft: ColumnDraft) -> CoreResult<&Column> {
        let idx = self.table_index(table)?;
        let column = build_column(draft)?;
        if self.tables[idx].has_column(&column.name) {
            return Err(CoreError::DuplicateColumn {
                table: table.to_string(),
                column: column.name.into_inner(),
            });
        }

        let owner = &mut self.tables[idx];
        owner.columns.push(column);
        owner.touch();
        self.refresh_quality();
        let owner = &self.tables[idx];
        Ok(&owner.columns[owner.columns.len() - 1])
    }

    /// Replace a column's fields
    pub fn update_column(
        &mut self,
        table: &str,
        column: &str,
        draft: ColumnDraft,
    ) -> CoreResult<&Column> {
        let (t_idx, c_idx) = self.column_index(table, column)?;
        let updated = build_column(draft)?;
        if updated.name != column && self.tables[t_idx].has_column(&updated.name) {
            return Err(CoreError::DuplicateColumn {
                table: table.to_string(),
                column: updated.name.into_inner(),
            });
        }

        let owner = &mut self.tables[t_idx];
        owner.columns[c_idx] = updated;
        owner.touch();
        self.refresh_quality();
        Ok(&self.tables[t_idx].columns[c_idx])
    }

    pub fn remove_column(&mut self, table: &str, column: &str) -> CoreResult<Column> {
        let (t_idx, c_idx) = self.column_index(table, column)?;
        let owner = &mut self.tables[t_idx];
        let removed = owner.columns.remove(c_idx);
        owner.touch();
        self.refresh_quality();
        Ok(removed)
    }

    // ----- transformations -----

    /// Add a transformation. Name, inputs and outputs are required.
    pub fn add_transformation(
        &mut self,
        draft: TransformationDraft,
    ) -> CoreResult<&Transformation> {
        let (name, inputs, outputs) = validate_transformation(&draft)?;
        if self.transformation(&name).is_some() {
            return Err(CoreError::DuplicateTransformation {
                name: name.into_inner(),
            });
        }

        let transformation = Transformation::new(name, draft.transformation_type, inputs, outputs)
            .with_logic(draft.logic)
            .with_description(draft.description)
            .with_jobs(normalize_list(draft.jobs));
        log::debug!("Adding transformation '{}'", transformation.name);
        self.transformations.push(transformation);
        self.refresh_quality();
        Ok(&self.transformations[self.transformations.len() - 1])
    }

    /// Replace a transformation's fields; mappings and created date are kept.
    pub fn update_transformation(
        &mut self,
        name: &str,
        draft: TransformationDraft,
    ) -> CoreResult<&Transformation> {
        let idx = self.transformation_index(name)?;
        let (new_name, inputs, outputs) = validate_transformation(&draft)?;
        if new_name != name && self.transformation(&new_name).is_some() {
            return Err(CoreError::DuplicateTransformation {
                name: new_name.into_inner(),
            });
        }

        let t = &mut self.transformations[idx];
        t.name = new_name;
        t.transformation_type = draft.transformation_type;
        t.input_tables = inputs;
        t.output_tables = outputs;
        t.logic = draft.logic;
        t.description = draft.description;
        t.jobs = normalize_list(draft.jobs);
        self.refresh_quality();
        Ok(&self.transformations[idx])
    }

    /// Remove a transformation. Source references its mappings added to
    /// target columns are left in place.
    pub fn remove_transformation(&mut self, name: &str) -> CoreResult<Transformation> {
        let idx = self.transformation_index(name)?;
        let removed = self.transformations.remove(idx);
        self.refresh_quality();
        Ok(removed)
    }

    // ----- column mappings -----

    /// Add a column mapping to a transformation and record the source on the
    /// target column.
    ///
    /// The source must be a column of one of the transformation's input
    /// tables and the target a column of one of its output tables. Both
    /// endpoint columns must exist.
    pub fn add_mapping(
        &mut self,
        transformation: &str,
        source: &str,
        target: &str,
        rule: &str,
    ) -> CoreResult<&ColumnMapping> {
        let t_idx = self.transformation_index(transformation)?;
        let source = ColumnRef::parse(source)?;
        let target = ColumnRef::parse(target)?;

        let t = &self.transformations[t_idx];
        if !t.input_tables.iter().any(|name| *name == source.table) {
            return Err(CoreError::MappingOutsideTransformation {
                transformation: t.name.to_string(),
                side: "Source",
                role: "input",
                table: source.table,
            });
        }
        if !t.output_tables.iter().any(|name| *name == target.table) {
            return Err(CoreError::MappingOutsideTransformation {
                transformation: t.name.to_string(),
                side: "Target",
                role: "output",
                table: target.table,
            });
        }

        self.column_index(&source.table, &source.column)?;
        let (tt_idx, tc_idx) = self.column_index(&target.table, &target.column)?;

        let source_id = source.to_string();
        let mapping = ColumnMapping::new(source, target, rule.trim());
        let mappings = &mut self.transformations[t_idx].column_mappings;
        mappings.push(mapping);

        let target_table = &mut self.tables[tt_idx];
        if target_table.columns[tc_idx].add_source(&source_id) {
            target_table.touch();
        }
        self.refresh_quality();

        let mappings = &self.transformations[t_idx].column_mappings;
        Ok(&mappings[mappings.len() - 1])
    }

    /// Remove the first mapping between `source` and `target`, and drop the
    /// source from the target column's source list.
    ///
    /// Returns `Ok(false)` when no such mapping exists, so repeating a delete
    /// is harmless.
    pub fn remove_mapping(
        &mut self,
        transformation: &str,
        source: &str,
        target: &str,
    ) -> CoreResult<bool> {
        let t_idx = self.transformation_index(transformation)?;
        let source = ColumnRef::parse(source)?;
        let target = ColumnRef::parse(target)?;

        let Some(m_idx) = self.transformations[t_idx].find_mapping(&source, &target) else {
            log::debug!(
                "No mapping {} -> {} in '{}', nothing to remove",
                source,
                target,
                transformation
            );
            return Ok(false);
        };
        self.transformations[t_idx].column_mappings.remove(m_idx);

        let source_id = source.to_string();
        if let Ok((tt_idx, tc_idx)) = self.column_index(&target.table, &target.column) {
            let target_table = &mut self.tables[tt_idx];
            if target_table.columns[tc_idx].remove_source(&source_id) {
                target_table.touch();
            }
        }
        self.refresh_quality();
        Ok(true)
    }

    // ----- index helpers -----

    fn table_index(&self, name: &str) -> CoreResult<usize> {
        self.tables
            .iter()
            .position(|t| t.name == name)
            .ok_or_else(|| CoreError::TableNotFound {
                name: name.to_string(),
            })
    }

    fn column_index(&self, table: &str, column: &str) -> CoreResult<(usize, usize)> {
        let t_idx = self.table_index(table)?;
        let c_idx = self.tables[t_idx]
            .columns
            .iter()
            .position(|c| c.name == column)
            .ok_or_else(|| CoreError::ColumnNotFound {
                table: table.to_string(),
                column: column.to_string(),
            })?;
        Ok((t_idx, c_idx))
    }

    fn transformation_index(&self, name: &str) -> CoreResult<usize> {
        self.transformations
            .iter()
            .position(|t| t.name == name)
            .ok_or_else(|| CoreError::TransformationNotFound {
                name: name.to_string(),
            })
    }
}

fn require_name<N>(name: Option<N>, entity: &'static str, field: &'static str) -> CoreResult<N> {
    name.ok_or(CoreError::MissingField { entity, field })
}

fn require_text(value: &str, entity: &'static str, field: &'static str) -> CoreResult<()> {
    if value.trim().is_empty() {
        Err(CoreError::MissingField { entity, field })
    } else {
        Ok(())
    }
}

/// Trim entries and drop blanks, keeping order
fn normalize_list(values: Vec<String>) -> Vec<String> {
    values
        .into_iter()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .collect()
}

fn build_column(draft: ColumnDraft) -> CoreResult<Column> {
    let name = require_name(ColumnName::try_new(draft.name.as_str()), "Column", "name")?;
    require_text(&draft.data_type, "Column", "data type")?;
    Ok(Column::new(name, draft.data_type.trim())
        .with_description(draft.description)
        .with_sources(normalize_list(draft.source_columns)))
}

fn validate_transformation(
    draft: &TransformationDraft,
) -> CoreResult<(TransformationName, Vec<String>, Vec<String>)> {
    let name = require_name(
        TransformationName::try_new(draft.name.as_str()),
        "Transformation",
        "name",
    )?;
    let inputs = normalize_list(draft.input_tables.clone());
    if inputs.is_empty() {
        return Err(CoreError::MissingField {
            entity: "Transformation",
            field: "input tables",
        });
    }
    let outputs = normalize_list(draft.output_tables.clone());
    if outputs.is_empty() {
        return Err(CoreError::MissingField {
            entity: "Transformation",
            field: "output tables",
        });
    }
    Ok((name, inputs, outputs))
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
