//! Metadata-completeness scoring for columns and tables
//!
//! A column earns three independent 10-point bonuses (description, data
//! type, at least one source reference). The result is capped at 100, which
//! in practice means a column never scores above 30.
//!
//! A table with columns scores `round(avg(column scores) * 0.8)` plus 20 for a
//! description, capped at 100. A table without columns scores 20 or 0
//! depending only on its description.

use crate::table::{Column, Table};

/// Bonus for each piece of column metadata present
const COLUMN_BONUS: u32 = 10;

/// Bonus for a described table
const TABLE_DESCRIPTION_BONUS: f64 = 20.0;

/// Weight of the column average in the table score
const COLUMN_AVERAGE_WEIGHT: f64 = 0.8;

const MAX_SCORE: u32 = 100;

/// Score a single column from its metadata.
pub fn score_column(column: &Column) -> u8 {
    let bonuses = [
        !column.description.is_empty(),
        !column.data_type.is_empty(),
        !column.source_columns.is_empty(),
    ];
    let score = bonuses.iter().filter(|b| **b).count() as u32 * COLUMN_BONUS;
    score.min(MAX_SCORE) as u8
}

/// Score a table from its description and its columns' current metadata.
///
/// Column scores are recomputed here, not read from `Column::quality_score`.
pub fn score_table(table: &Table) -> u8 {
    let description_bonus = if table.description.is_empty() {
        0.0
    } else {
        TABLE_DESCRIPTION_BONUS
    };

    if table.columns.is_empty() {
        return description_bonus as u8;
    }

    let sum: u32 = table.columns.iter().map(|c| score_column(c) as u32).sum();
    let average = sum as f64 / table.columns.len() as f64;
    let score = (average * COLUMN_AVERAGE_WEIGHT + description_bonus).round();
    score.min(MAX_SCORE as f64) as u8
}

/// Recompute and store every column and table score. Idempotent.
pub fn refresh_quality(tables: &mut [Table]) {
    for table in tables.iter_mut() {
        for column in table.columns.iter_mut() {
            column.quality_score = score_column(column);
        }
        table.quality_score = score_table(table);
    }
}

#[cfg(test)]
#[path = "quality_test.rs"]
mod tests;
